/// Errors returned by the sketch planner.
///
/// All conditions are terminal: the planner either produces a full,
/// consistent plan or fails atomically with one of these.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("no color survives the occupancy threshold")]
    EmptyRegionSet,
    #[error("only {found} dominant color(s) detected, need at least 2 to separate a background")]
    InsufficientColors { found: usize },
    #[error("invalid grid height search range (min={min}, max={max})")]
    InvalidSearchRange { min: u32, max: u32 },
    #[error("invalid sketch dimensions (width={width}, height={height})")]
    InvalidDimensions { width: usize, height: usize },
}
