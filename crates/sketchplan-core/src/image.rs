#[derive(Clone, Copy, Debug)]
pub struct RgbImageView<'a> {
    pub width: usize,
    pub height: usize,
    pub data: &'a [u8], // row-major packed RGB, len = w*h*3
}

#[derive(Clone, Debug)]
pub struct RgbImage {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl RgbImage {
    pub fn view(&self) -> RgbImageView<'_> {
        RgbImageView {
            width: self.width,
            height: self.height,
            data: &self.data,
        }
    }
}

impl<'a> RgbImageView<'a> {
    /// Channel triple at `(row, col)`. Out-of-bounds reads return black.
    #[inline]
    pub fn pixel(&self, row: usize, col: usize) -> [u8; 3] {
        if row >= self.height || col >= self.width {
            return [0, 0, 0];
        }
        let i = (row * self.width + col) * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_reads_row_major_triples() {
        let img = RgbImage {
            width: 2,
            height: 2,
            data: vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12],
        };
        let view = img.view();
        assert_eq!(view.pixel(0, 0), [1, 2, 3]);
        assert_eq!(view.pixel(0, 1), [4, 5, 6]);
        assert_eq!(view.pixel(1, 0), [7, 8, 9]);
        assert_eq!(view.pixel(1, 1), [10, 11, 12]);
    }

    #[test]
    fn pixel_out_of_bounds_is_black() {
        let img = RgbImage {
            width: 1,
            height: 1,
            data: vec![9, 9, 9],
        };
        assert_eq!(img.view().pixel(1, 0), [0, 0, 0]);
        assert_eq!(img.view().pixel(0, 1), [0, 0, 0]);
    }
}
