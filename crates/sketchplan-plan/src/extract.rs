//! Color region extraction.
//!
//! Every pixel is reduced to a [`ColorKey`]; colors occupying more than the
//! configured fraction of the sketch survive, everything else is treated as
//! noise from sketch edges. One axis-aligned bounding box is computed per
//! surviving color, as the coordinate-wise min/max over all matching pixels,
//! so disconnected blobs of the same color span a single box.

use std::collections::HashMap;

use log::debug;

use sketchplan_core::{ColorKey, PixelBox, RgbImageView};

use crate::planner::{BackgroundRule, ExtractParams, PlanError};

/// Dominant colors and their bounding boxes, index-aligned and ordered by
/// ascending color key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractedRegions {
    pub colors: Vec<ColorKey>,
    pub boxes: Vec<PixelBox>,
}

impl ExtractedRegions {
    pub fn iter(&self) -> impl Iterator<Item = (ColorKey, PixelBox)> + '_ {
        self.colors.iter().copied().zip(self.boxes.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Extract per-color bounding boxes from a sketch.
///
/// Pure function of the pixel data. Fails with
/// [`PlanError::EmptyRegionSet`] when no color passes the occupancy filter
/// and with [`PlanError::InsufficientColors`] when fewer than two do, since
/// a lone color gives nothing to separate a background from.
pub fn extract_regions(
    view: &RgbImageView<'_>,
    params: &ExtractParams,
) -> Result<ExtractedRegions, PlanError> {
    if view.width == 0 || view.height == 0 {
        return Err(PlanError::InvalidDimensions {
            width: view.width,
            height: view.height,
        });
    }

    let mut counts: HashMap<ColorKey, usize> = HashMap::new();
    for px in view.data.chunks_exact(3) {
        *counts
            .entry(ColorKey::from_rgb([px[0], px[1], px[2]]))
            .or_insert(0) += 1;
    }

    let min_pixels = params.occupancy_frac * (view.width * view.height) as f64;
    let mut retained: Vec<(ColorKey, usize)> = counts
        .into_iter()
        .filter(|&(_, n)| n as f64 > min_pixels)
        .collect();
    retained.sort_unstable_by_key(|&(key, _)| key);

    if retained.is_empty() {
        return Err(PlanError::EmptyRegionSet);
    }
    if retained.len() < 2 {
        return Err(PlanError::InsufficientColors {
            found: retained.len(),
        });
    }

    match params.background {
        // Historical convention: the last sorted key is assumed to be the
        // background (white sorts last). See `BackgroundRule`.
        BackgroundRule::HighestKey => {
            retained.pop();
        }
        // Ties broken toward the higher key, matching the sort order.
        BackgroundRule::LargestArea => {
            if let Some(idx) = retained
                .iter()
                .enumerate()
                .max_by_key(|&(_, &(key, n))| (n, key))
                .map(|(idx, _)| idx)
            {
                retained.remove(idx);
            }
        }
        BackgroundRule::Keep => {}
    }

    let colors: Vec<ColorKey> = retained.iter().map(|&(key, _)| key).collect();
    let index: HashMap<ColorKey, usize> = colors
        .iter()
        .enumerate()
        .map(|(idx, &key)| (key, idx))
        .collect();

    let mut boxes: Vec<Option<PixelBox>> = vec![None; colors.len()];
    for (i, px) in view.data.chunks_exact(3).enumerate() {
        let key = ColorKey::from_rgb([px[0], px[1], px[2]]);
        if let Some(&idx) = index.get(&key) {
            let row = (i / view.width) as u32;
            let col = (i % view.width) as u32;
            match &mut boxes[idx] {
                Some(b) => b.include(row, col),
                slot @ None => *slot = Some(PixelBox::at(row, col)),
            }
        }
    }
    // Every retained key was counted from this very pixel array, so every
    // slot has been filled.
    let boxes: Vec<PixelBox> = boxes.into_iter().flatten().collect();

    debug!(
        "extracted {} region(s) from {}x{} sketch",
        colors.len(),
        view.width,
        view.height
    );

    Ok(ExtractedRegions { colors, boxes })
}
