//! High-level facade crate for the `sketchplan-*` workspace.
//!
//! This crate provides:
//! - stable re-exports of the planner and core type crates
//! - (feature-gated) end-to-end helpers that decode a raster sketch with the
//!   `image` crate and run the planner on it
//! - layout emitters that render a plan as matplotlib script text
//!
//! ## Quickstart
//!
//! ```no_run
//! use sketchplan::{emit, sketch, PlannerParams};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let params = PlannerParams::default();
//! let (plan, grid) = sketch::grid_sketch_path("sketch.png".as_ref(), &params)?;
//! println!("{} panels on a {}x{} grid", plan.len(), grid.rows, grid.cols);
//! println!("{}", emit::grid_script(&plan, &grid, params.h_in));
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - [`core`]: shared vocabulary types (images, color keys, pixel boxes).
//! - [`plan`]: the planning pipeline (extraction, normalization,
//!   quantization, adaptive resolution search).
//! - [`sketch`] (feature `image`): end-to-end helpers from files and
//!   `image::RgbImage` buffers.
//! - [`emit`]: script and JSON rendering of plans and grid layouts.

pub use sketchplan_core as core;
pub use sketchplan_plan as plan;

pub use sketchplan_core::{ColorKey, PixelBox, RgbImage, RgbImageView};
pub use sketchplan_plan::{
    BackgroundRule, ExtractParams, GridCell, GridLayout, PlanError, PlanRegion, PlannerParams,
    SketchPlan, SketchPlanner,
};

pub mod emit;

#[cfg(feature = "image")]
pub mod sketch;
