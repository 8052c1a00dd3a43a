//! Core types for sketch-to-layout planning.
//!
//! This crate is intentionally small and purely descriptive. It does *not*
//! depend on any concrete image decoder or output format.

mod color;
mod image;
mod logger;
mod region;

pub use color::ColorKey;
pub use image::{RgbImage, RgbImageView};
pub use region::PixelBox;

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
