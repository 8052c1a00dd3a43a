use log::info;

use sketchplan_core::RgbImageView;

use super::{PlanError, PlannerParams, SketchPlan};
use crate::adaptive::search_best_height;
use crate::extract::extract_regions;
use crate::grid::{quantize, GridLayout};

/// End-to-end sketch planner: extraction, normalization, quantization.
pub struct SketchPlanner {
    params: PlannerParams,
}

impl SketchPlanner {
    pub fn new(params: PlannerParams) -> Self {
        Self { params }
    }

    /// Planner parameters.
    #[inline]
    pub fn params(&self) -> &PlannerParams {
        &self.params
    }

    /// Extract the fractional plan from a sketch.
    ///
    /// When `params.wh_ratio` is set it overrides the aspect ratio detected
    /// from the raster dimensions.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "info", skip(self, view), fields(width = view.width, height = view.height))
    )]
    pub fn plan(&self, view: &RgbImageView<'_>) -> Result<SketchPlan, PlanError> {
        let regions = extract_regions(view, &self.params.extract)?;
        let mut plan = SketchPlan::from_regions(&regions, view.width, view.height)?;
        if let Some(ratio) = self.params.wh_ratio {
            plan.aspect_ratio = ratio;
        }
        info!(
            "planned {} region(s), aspect ratio {:.4}",
            plan.len(),
            plan.aspect_ratio
        );
        Ok(plan)
    }

    /// Snap a plan onto an integer grid.
    ///
    /// Runs the adaptive resolution search over `nh_min..nh_max` unless
    /// `params.adaptive` is off, in which case the fixed `ngrid_h` is used.
    pub fn grid(&self, plan: &SketchPlan) -> Result<GridLayout, PlanError> {
        let ngrid_h = if self.params.adaptive {
            search_best_height(plan, self.params.nh_min, self.params.nh_max)?
        } else {
            self.params.ngrid_h
        };
        Ok(quantize(plan, ngrid_h))
    }
}
