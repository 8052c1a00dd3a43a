use serde::{Deserialize, Serialize};

/// Inclusive pixel-index bounding box of a color region.
///
/// Invariant: `row_min <= row_max` and `col_min <= col_max`; a box always
/// covers at least one pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelBox {
    pub row_min: u32,
    pub row_max: u32,
    pub col_min: u32,
    pub col_max: u32,
}

impl PixelBox {
    /// A single-pixel box.
    pub fn at(row: u32, col: u32) -> Self {
        Self {
            row_min: row,
            row_max: row,
            col_min: col,
            col_max: col,
        }
    }

    /// Grow the box to cover `(row, col)`.
    #[inline]
    pub fn include(&mut self, row: u32, col: u32) {
        self.row_min = self.row_min.min(row);
        self.row_max = self.row_max.max(row);
        self.col_min = self.col_min.min(col);
        self.col_max = self.col_max.max(col);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn include_expands_to_coordinate_wise_min_max() {
        let mut b = PixelBox::at(5, 7);
        b.include(2, 9);
        b.include(8, 1);
        assert_eq!(
            b,
            PixelBox {
                row_min: 2,
                row_max: 8,
                col_min: 1,
                col_max: 9,
            }
        );
    }
}
