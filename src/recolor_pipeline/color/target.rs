use std::fmt;
use std::str::FromStr;

use crate::recolor_pipeline::color::convert::{hsv_to_rgb, rgb_to_hsv};
use crate::recolor_pipeline::color::types::{ColorHsv, ColorRgb};
use crate::recolor_pipeline::common::error::{RecolorError, Result};

/// The color substituted into selected channels.
///
/// Holds both representations. Every constructor derives one from the
/// other, so the pair always describes the same color; there is no way
/// to patch a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetColor {
    rgb: ColorRgb,
    hsv: ColorHsv,
}

impl Default for TargetColor {
    fn default() -> Self {
        Self::from_rgb(ColorRgb::new(255, 0, 0))
    }
}

impl TargetColor {
    pub fn from_rgb(rgb: ColorRgb) -> Self {
        Self {
            rgb,
            hsv: rgb_to_hsv(rgb),
        }
    }

    pub fn from_hsv(hsv: ColorHsv) -> Self {
        Self {
            rgb: hsv_to_rgb(hsv),
            hsv,
        }
    }

    /// Parses `#RRGGBB`, case-insensitive.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let invalid = || RecolorError::InvalidFormat(format!("expected #RRGGBB, got {:?}", hex));

        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };
        Ok(Self::from_rgb(ColorRgb::new(
            channel(0..2)?,
            channel(2..4)?,
            channel(4..6)?,
        )))
    }

    /// Parses `rgb(R, G, B)` with each channel in `0..=255`.
    pub fn parse_rgb(input: &str) -> Result<Self> {
        let [r, g, b] = parse_triplet(input, "rgb", [false; 3])?;
        let channel = |value: u32| {
            u8::try_from(value).map_err(|_| {
                RecolorError::InvalidFormat(format!("{} is out of range in {:?}", value, input))
            })
        };
        Ok(Self::from_rgb(ColorRgb::new(channel(r)?, channel(g)?, channel(b)?)))
    }

    /// Parses `hsv(H, S%, V%)` with hue in `0..360` and percents in `0..=100`.
    pub fn parse_hsv(input: &str) -> Result<Self> {
        let [h, s, v] = parse_triplet(input, "hsv", [false, true, true])?;
        let out_of_range = || RecolorError::InvalidFormat(format!("{:?} is out of range", input));
        let h = u16::try_from(h).map_err(|_| out_of_range())?;
        let s = u8::try_from(s).map_err(|_| out_of_range())?;
        let v = u8::try_from(v).map_err(|_| out_of_range())?;
        Ok(Self::from_hsv(ColorHsv::new(h, s, v)?))
    }

    pub fn rgb(&self) -> ColorRgb {
        self.rgb
    }

    pub fn hsv(&self) -> ColorHsv {
        self.hsv
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.rgb.r, self.rgb.g, self.rgb.b)
    }
}

impl fmt::Display for TargetColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Accepts any of the hex, `rgb(...)` or `hsv(...)` forms.
impl FromStr for TargetColor {
    type Err = RecolorError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.starts_with('#') {
            Self::from_hex(trimmed)
        } else if trimmed.starts_with("rgb") {
            Self::parse_rgb(trimmed)
        } else if trimmed.starts_with("hsv") {
            Self::parse_hsv(trimmed)
        } else {
            Err(RecolorError::InvalidFormat(format!("unrecognized color {:?}", s)))
        }
    }
}

fn parse_triplet(input: &str, name: &str, percent: [bool; 3]) -> Result<[u32; 3]> {
    let invalid = || RecolorError::InvalidFormat(format!("expected {}(...), got {:?}", name, input));

    let body = input
        .trim()
        .strip_prefix(name)
        .and_then(|rest| rest.strip_prefix('('))
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(invalid)?;

    let mut parts = body.split(',');
    let mut values = [0u32; 3];
    for (slot, is_percent) in values.iter_mut().zip(percent) {
        let part = parts.next().ok_or_else(invalid)?.trim();
        let digits = if is_percent {
            part.strip_suffix('%').ok_or_else(invalid)?
        } else {
            part
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        *slot = digits.parse().map_err(|_| invalid())?;
    }
    if parts.next().is_some() {
        return Err(invalid());
    }

    Ok(values)
}
