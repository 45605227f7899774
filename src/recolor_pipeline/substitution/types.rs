//! Pixel types

use crate::recolor_pipeline::color::ColorRgb;

/// Bytes per interleaved RGBA pixel
pub const CHANNELS_PER_PIXEL: usize = 4;

/// One RGBA pixel. Substitution never touches alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Reads the first four bytes of an interleaved RGBA slice. Callers
    /// hand in `chunks_exact(CHANNELS_PER_PIXEL)` chunks.
    pub(crate) fn from_rgba_slice(bytes: &[u8]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    pub fn to_rgba(self) -> [u8; CHANNELS_PER_PIXEL] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn rgb(self) -> ColorRgb {
        ColorRgb::new(self.r, self.g, self.b)
    }

    pub fn with_rgb(self, rgb: ColorRgb) -> Self {
        Self::new(rgb.r, rgb.g, rgb.b, self.a)
    }
}
