//! Sketch planning pipeline.
//!
//! This module wires together color region extraction, plan normalization,
//! and grid quantization with adaptive resolution selection.

mod error;
mod params;
mod pipeline;
mod result;

pub use error::PlanError;
pub use params::{BackgroundRule, ExtractParams, PlannerParams};
pub use pipeline::SketchPlanner;
pub use result::{PlanRegion, SketchPlan};
