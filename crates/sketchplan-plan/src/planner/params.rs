use serde::{Deserialize, Serialize};

/// How the extractor decides which dominant color is the sketch background.
///
/// The historical rule is [`BackgroundRule::HighestKey`]: after sorting the
/// threshold-surviving keys ascending, the last entry is assumed to be the
/// background (white sketches sort `#ffffff` last) and dropped. This is an
/// ordering-based convention, not a count-based decision, and misfires when
/// the true background does not sort last. [`BackgroundRule::LargestArea`]
/// drops the most numerous retained color instead; [`BackgroundRule::Keep`]
/// drops nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackgroundRule {
    #[default]
    HighestKey,
    LargestArea,
    Keep,
}

/// Configuration for color region extraction.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ExtractParams {
    /// Minimum fraction of total pixels a color must occupy to count as a
    /// region. A coarse noise filter: stray anti-aliased pixels along blob
    /// edges fall well below it.
    pub occupancy_frac: f64,
    /// Background removal convention.
    pub background: BackgroundRule,
}

impl Default for ExtractParams {
    fn default() -> Self {
        Self {
            occupancy_frac: 0.01,
            background: BackgroundRule::HighestKey,
        }
    }
}

/// Configuration for the sketch planner.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PlannerParams {
    /// Region extraction settings.
    #[serde(default)]
    pub extract: ExtractParams,
    /// Grid height resolution used when `adaptive` is off.
    pub ngrid_h: u32,
    /// Whether to search for the grid height resolution with minimal
    /// quantization error instead of using `ngrid_h` directly.
    pub adaptive: bool,
    /// Adaptive search bounds: candidate heights in `nh_min..nh_max`.
    pub nh_min: u32,
    pub nh_max: u32,
    /// Optional override of the detected height/width aspect ratio.
    #[serde(default)]
    pub wh_ratio: Option<f64>,
    /// Target output height in display units (inches for matplotlib
    /// figures). Consumed by layout emitters only.
    pub h_in: f64,
}

impl Default for PlannerParams {
    fn default() -> Self {
        Self {
            extract: ExtractParams::default(),
            ngrid_h: 10,
            adaptive: true,
            nh_min: 10,
            nh_max: 50,
            wh_ratio: None,
            h_in: 10.0,
        }
    }
}
