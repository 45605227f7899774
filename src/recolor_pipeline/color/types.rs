//! Color value types

use std::fmt;

use crate::recolor_pipeline::common::error::{RecolorError, Result};

/// Largest hue value, exclusive, in degrees.
pub const HUE_LIMIT: u16 = 360;

/// Largest saturation/value percentage, inclusive.
pub const PERCENT_MAX: u8 = 100;

/// An 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorRgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorRgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for ColorRgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// An HSV triple with integer components.
///
/// Hue is in degrees `[0, 360)`, saturation and value are percentages
/// `[0, 100]`. Construction through [`ColorHsv::new`] rejects anything
/// outside those ranges, so every value in circulation is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorHsv {
    h: u16,
    s: u8,
    v: u8,
}

impl ColorHsv {
    pub fn new(h: u16, s: u8, v: u8) -> Result<Self> {
        if h >= HUE_LIMIT || s > PERCENT_MAX || v > PERCENT_MAX {
            return Err(RecolorError::InvalidFormat(format!(
                "hsv({}, {}%, {}%) is out of range",
                h, s, v
            )));
        }
        Ok(Self { h, s, v })
    }

    /// Callers guarantee the components are already in range.
    pub(crate) const fn from_parts(h: u16, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }

    pub fn h(&self) -> u16 {
        self.h
    }

    pub fn s(&self) -> u8 {
        self.s
    }

    pub fn v(&self) -> u8 {
        self.v
    }
}

impl fmt::Display for ColorHsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsv({}, {}%, {}%)", self.h, self.s, self.v)
    }
}
