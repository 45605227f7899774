//! Image and batch data types

use crate::recolor_pipeline::common::error::{RecolorError, Result};
use crate::recolor_pipeline::substitution::Pixel;
use crate::recolor_pipeline::substitution::types::CHANNELS_PER_PIXEL;

/// Suffix appended to a batch item's file stem for its output name
const OUTPUT_SUFFIX: &str = "_processed.png";

/// Decoded image in row-major, interleaved RGBA order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Pixel data [R, G, B, A, R, G, B, A, ...], `width * height * 4` bytes
    pub data: Vec<u8>,
}

impl ImageBuffer {
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        let expected = Self::expected_len(width, height)
            .ok_or(RecolorError::InvalidDimensions(width, height))?;
        if data.len() != expected {
            return Err(RecolorError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { width, height, data })
    }

    /// An image with every pixel set to `pixel`.
    pub fn filled(width: usize, height: usize, pixel: Pixel) -> Result<Self> {
        let len = Self::expected_len(width, height)
            .ok_or(RecolorError::InvalidDimensions(width, height))?;
        let data = pixel.to_rgba().repeat(len / CHANNELS_PER_PIXEL);
        Ok(Self { width, height, data })
    }

    /// Byte length required for the given dimensions, `None` on overflow.
    pub fn expected_len(width: usize, height: usize) -> Option<usize> {
        width
            .checked_mul(height)
            .and_then(|pixels| pixels.checked_mul(CHANNELS_PER_PIXEL))
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y * self.width + x) * CHANNELS_PER_PIXEL;
        self.data
            .get(offset..offset + CHANNELS_PER_PIXEL)
            .map(Pixel::from_rgba_slice)
    }

    pub fn pixels(&self) -> impl Iterator<Item = Pixel> + '_ {
        self.data.chunks_exact(CHANNELS_PER_PIXEL).map(Pixel::from_rgba_slice)
    }
}

/// A named image in a batch.
///
/// `output` is filled in once the item has been processed.
#[derive(Debug, Clone)]
pub struct BatchItem {
    pub name: String,
    pub input: ImageBuffer,
    pub output: Option<ImageBuffer>,
}

impl BatchItem {
    pub fn new(name: impl Into<String>, input: ImageBuffer) -> Self {
        Self {
            name: name.into(),
            input,
            output: None,
        }
    }

    /// File name for the processed image: the extension is replaced
    /// by `_processed.png`.
    pub fn output_name(&self) -> String {
        let stem = match self.name.rfind('.') {
            Some(dot) if dot + 1 < self.name.len() && !self.name[dot + 1..].contains('/') => {
                &self.name[..dot]
            }
            _ => self.name.as_str(),
        };
        format!("{}{}", stem, OUTPUT_SUFFIX)
    }
}

/// Batch progress, reported after each finished item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        self.completed as f64 / self.total as f64 * 100.0
    }

    pub fn is_finished(&self) -> bool {
        self.completed == self.total
    }
}
