//! End-to-end helpers: decode a raster sketch and run the planner.

use std::path::Path;

use log::info;

use sketchplan_core::RgbImageView;
use sketchplan_plan::{GridLayout, PlanError, PlannerParams, SketchPlan, SketchPlanner};

/// Errors produced by the high-level facade helpers.
#[derive(thiserror::Error, Debug)]
pub enum SketchError {
    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error("failed to read sketch {path}")]
    Read {
        path: String,
        #[source]
        source: ::image::ImageError,
    },

    #[error("invalid RGB buffer length (expected {expected} bytes, got {got})")]
    InvalidRgbBuffer { expected: usize, got: usize },
}

/// Convert an `image::RgbImage` into the lightweight `sketchplan-core` view type.
pub fn rgb_view(img: &::image::RgbImage) -> RgbImageView<'_> {
    RgbImageView {
        width: img.width() as usize,
        height: img.height() as usize,
        data: img.as_raw(),
    }
}

/// Decode a raster file into packed 8-bit RGB.
pub fn load_rgb(path: &Path) -> Result<::image::RgbImage, SketchError> {
    let read = |source| SketchError::Read {
        path: path.display().to_string(),
        source,
    };
    let img = ::image::ImageReader::open(path)
        .map_err(|e| read(::image::ImageError::IoError(e)))?
        .decode()
        .map_err(read)?
        .to_rgb8();
    info!(
        "loaded sketch {} ({}x{})",
        path.display(),
        img.width(),
        img.height()
    );
    Ok(img)
}

/// Run the planner on an in-memory image.
pub fn plan_sketch(
    img: &::image::RgbImage,
    params: &PlannerParams,
) -> Result<SketchPlan, PlanError> {
    SketchPlanner::new(*params).plan(&rgb_view(img))
}

/// Decode a raster file and extract its fractional plan.
pub fn plan_sketch_path(path: &Path, params: &PlannerParams) -> Result<SketchPlan, SketchError> {
    let img = load_rgb(path)?;
    Ok(plan_sketch(&img, params)?)
}

/// Decode a raster file, extract its plan, and snap it onto a grid.
pub fn grid_sketch_path(
    path: &Path,
    params: &PlannerParams,
) -> Result<(SketchPlan, GridLayout), SketchError> {
    let img = load_rgb(path)?;
    let planner = SketchPlanner::new(*params);
    let plan = planner.plan(&rgb_view(&img))?;
    let grid = planner.grid(&plan)?;
    Ok((plan, grid))
}

/// Build an `image::RgbImage` from a raw packed-RGB buffer.
pub fn rgb_image_from_slice(
    width: u32,
    height: u32,
    pixels: &[u8],
) -> Result<::image::RgbImage, SketchError> {
    let expected = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(3))
        .unwrap_or(usize::MAX);
    if pixels.len() != expected {
        return Err(SketchError::InvalidRgbBuffer {
            expected,
            got: pixels.len(),
        });
    }
    ::image::RgbImage::from_raw(width, height, pixels.to_vec()).ok_or(
        SketchError::InvalidRgbBuffer {
            expected,
            got: pixels.len(),
        },
    )
}
