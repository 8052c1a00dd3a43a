//! Sketch-to-layout planning.
//!
//! The planner turns a raster sketch, where each colored blob marks the
//! rectangular footprint of a panel, into a resolution-independent
//! fractional plan and, optionally, an integer grid assignment:
//!
//! 1. [`extract_regions`] finds the dominant colors and their pixel
//!    bounding boxes.
//! 2. [`SketchPlan`] normalizes the boxes into fractional coordinates plus
//!    the sketch's aspect ratio.
//! 3. [`quantize`] maps the plan onto an integer grid of a chosen
//!    resolution; [`search_best_height`] picks the resolution with the
//!    smallest cumulative quantization error.
//!
//! [`SketchPlanner`] wires the stages together behind [`PlannerParams`].

mod adaptive;
mod extract;
mod grid;
mod planner;

pub use adaptive::{quantization_error, search_best_height};
pub use extract::{extract_regions, ExtractedRegions};
pub use grid::{grid_row_resolution, quantize, GridCell, GridLayout};
pub use planner::{
    BackgroundRule, ExtractParams, PlanError, PlanRegion, PlannerParams, SketchPlan, SketchPlanner,
};
