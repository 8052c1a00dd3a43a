//! Adaptive grid resolution search.
//!
//! Quantization error is not monotonic in the grid resolution: rounding
//! helps some regions and hurts others as the resolution changes. The search
//! therefore scans the whole bounded candidate range instead of assuming any
//! structure, which keeps the answer deterministic and reproducible.

use log::debug;

use crate::grid::grid_row_resolution;
use crate::planner::{PlanError, SketchPlan};

/// Cumulative quantization error of snapping `plan` onto the grid with base
/// height resolution `ngrid_h`.
///
/// Sum over every region endpoint of the absolute difference between the
/// fractional coordinate and its de-quantized grid cell, in both axes.
pub fn quantization_error(plan: &SketchPlan, ngrid_h: u32) -> f64 {
    let rows = f64::from(grid_row_resolution(ngrid_h, plan.aspect_ratio));
    let cols = f64::from(ngrid_h);
    plan.regions
        .iter()
        .map(|r| {
            let row_err: f64 = r.row.iter().map(|f| ((rows * f).round() / rows - f).abs()).sum();
            let col_err: f64 = r.col.iter().map(|f| ((cols * f).round() / cols - f).abs()).sum();
            row_err + col_err
        })
        .sum()
}

/// Scan base height resolutions in `nh_min..nh_max` (upper bound exclusive)
/// and return the one with minimal [`quantization_error`].
///
/// Only strict improvements replace the incumbent, so the smallest height
/// wins on exact ties. The scan is exhaustive on purpose; see the module
/// docs.
pub fn search_best_height(
    plan: &SketchPlan,
    nh_min: u32,
    nh_max: u32,
) -> Result<u32, PlanError> {
    if nh_min >= nh_max {
        return Err(PlanError::InvalidSearchRange {
            min: nh_min,
            max: nh_max,
        });
    }

    let mut best_h = nh_min;
    let mut best_err = f64::INFINITY;
    for ngrid_h in nh_min..nh_max {
        let err = quantization_error(plan, ngrid_h);
        if err < best_err {
            best_h = ngrid_h;
            best_err = err;
        }
    }

    debug!("adaptive grid: ngrid_h={best_h} (error {best_err:.6}) over {nh_min}..{nh_max}");
    Ok(best_h)
}
