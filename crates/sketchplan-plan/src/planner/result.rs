use serde::{Deserialize, Serialize};

use sketchplan_core::ColorKey;

use super::PlanError;
use crate::extract::ExtractedRegions;

/// One panel footprint in fractional coordinates.
///
/// `row` holds the bounding box row endpoints divided by the sketch height,
/// `col` the column endpoints divided by the sketch width. All values lie in
/// `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanRegion {
    pub color: ColorKey,
    pub row: [f64; 2],
    pub col: [f64; 2],
}

/// Resolution-independent layout plan extracted from a sketch.
///
/// This is the canonical intermediate representation: regions keep the
/// ascending-color-key ordering of the dominant color set, and every grid
/// assignment is derived freshly from it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SketchPlan {
    pub regions: Vec<PlanRegion>,
    /// Height over width of the source raster.
    pub aspect_ratio: f64,
}

impl SketchPlan {
    /// Normalize pixel bounding boxes by the sketch dimensions.
    pub fn from_regions(
        regions: &ExtractedRegions,
        width: usize,
        height: usize,
    ) -> Result<Self, PlanError> {
        if width == 0 || height == 0 {
            return Err(PlanError::InvalidDimensions { width, height });
        }
        let h = height as f64;
        let w = width as f64;
        let regions = regions
            .iter()
            .map(|(color, b)| PlanRegion {
                color,
                row: [f64::from(b.row_min) / h, f64::from(b.row_max) / h],
                col: [f64::from(b.col_min) / w, f64::from(b.col_max) / w],
            })
            .collect();
        Ok(Self {
            regions,
            aspect_ratio: h / w,
        })
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use sketchplan_core::PixelBox;

    fn regions_of(boxes: &[PixelBox]) -> ExtractedRegions {
        ExtractedRegions {
            colors: (0..boxes.len() as u32).map(ColorKey).collect(),
            boxes: boxes.to_vec(),
        }
    }

    #[test]
    fn normalizes_rows_by_height_and_cols_by_width() {
        let regions = regions_of(&[PixelBox {
            row_min: 0,
            row_max: 99,
            col_min: 25,
            col_max: 49,
        }]);
        let plan = SketchPlan::from_regions(&regions, 100, 200).unwrap();
        assert_relative_eq!(plan.aspect_ratio, 2.0);
        let r = &plan.regions[0];
        assert_relative_eq!(r.row[0], 0.0);
        assert_relative_eq!(r.row[1], 0.495);
        assert_relative_eq!(r.col[0], 0.25);
        assert_relative_eq!(r.col[1], 0.49);
    }

    #[test]
    fn coordinates_stay_in_unit_interval() {
        let regions = regions_of(&[
            PixelBox {
                row_min: 0,
                row_max: 49,
                col_min: 0,
                col_max: 49,
            },
            PixelBox {
                row_min: 49,
                row_max: 49,
                col_min: 49,
                col_max: 49,
            },
        ]);
        let plan = SketchPlan::from_regions(&regions, 50, 50).unwrap();
        assert_eq!(plan.len(), 2);
        for r in &plan.regions {
            for v in r.row.iter().chain(r.col.iter()) {
                assert!((0.0..=1.0).contains(v), "coordinate {v} out of [0,1]");
            }
        }
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        let regions = regions_of(&[]);
        assert_eq!(
            SketchPlan::from_regions(&regions, 0, 10),
            Err(PlanError::InvalidDimensions {
                width: 0,
                height: 10
            })
        );
        assert_eq!(
            SketchPlan::from_regions(&regions, 10, 0),
            Err(PlanError::InvalidDimensions {
                width: 10,
                height: 0
            })
        );
    }
}
