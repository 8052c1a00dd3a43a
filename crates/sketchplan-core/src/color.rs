use std::fmt;

use serde::{Deserialize, Serialize};

/// A pixel color packed into a single integer, `R << 16 | G << 8 | B`.
///
/// The packing is collision-free for 8-bit channels, so the key doubles as a
/// hashable region identifier. Keys order numerically, which makes the
/// dominant-color ordering reproducible across runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorKey(pub u32);

impl ColorKey {
    pub const WHITE: ColorKey = ColorKey(0x00ff_ffff);
    pub const BLACK: ColorKey = ColorKey(0);

    #[inline]
    pub fn from_rgb(rgb: [u8; 3]) -> Self {
        Self(u32::from(rgb[0]) << 16 | u32::from(rgb[1]) << 8 | u32::from(rgb[2]))
    }

    #[inline]
    pub fn to_rgb(self) -> [u8; 3] {
        [
            ((self.0 >> 16) & 0xff) as u8,
            ((self.0 >> 8) & 0xff) as u8,
            (self.0 & 0xff) as u8,
        ]
    }
}

impl fmt::Display for ColorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}
