//! Grid quantization of a fractional plan.

use serde::{Deserialize, Serialize};

use sketchplan_core::ColorKey;

use crate::planner::SketchPlan;

/// Integer cell range of one region, inclusive start / exclusive end in
/// grid-spec style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    pub color: ColorKey,
    pub row: [u32; 2],
    pub col: [u32; 2],
}

/// A fractional plan snapped onto an integer grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLayout {
    /// Row resolution, derived from the base height resolution and the
    /// sketch aspect ratio.
    pub rows: u32,
    /// Column resolution, the chosen base height resolution itself.
    pub cols: u32,
    /// Per-region cell ranges, index-aligned with the dominant color set.
    pub cells: Vec<GridCell>,
}

/// Row resolution derived from a base height resolution: the aspect-scaled
/// height, truncated toward zero as an integer cast.
#[inline]
pub fn grid_row_resolution(ngrid_h: u32, aspect_ratio: f64) -> u32 {
    (f64::from(ngrid_h) * aspect_ratio) as u32
}

/// Snap every region of `plan` onto a `rows x cols` integer grid, where
/// `cols = ngrid_h` and `rows = grid_row_resolution(ngrid_h, aspect)`.
///
/// Endpoints round half away from zero (`f64::round`), which pins the
/// tie-breaking convention and keeps generated layouts reproducible. The
/// result is a pure function of the plan and `ngrid_h`: quantizing twice
/// yields identical layouts.
pub fn quantize(plan: &SketchPlan, ngrid_h: u32) -> GridLayout {
    let rows = grid_row_resolution(ngrid_h, plan.aspect_ratio);
    let cells = plan
        .regions
        .iter()
        .map(|r| GridCell {
            color: r.color,
            row: r.row.map(|f| (f64::from(rows) * f).round() as u32),
            col: r.col.map(|f| (f64::from(ngrid_h) * f).round() as u32),
        })
        .collect();
    GridLayout {
        rows,
        cols: ngrid_h,
        cells,
    }
}
