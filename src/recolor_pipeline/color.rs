//! Color representation module
//!
//! This module provides RGB/HSV value types, the conversions between them,
//! and the target color that gets substituted into selected channels.

pub mod convert;
pub mod types;
mod target;
mod model;

pub use convert::{hsv_to_rgb, rgb_to_hsv};
pub use types::{ColorHsv, ColorRgb};
pub use target::TargetColor;
pub use model::ColorModel;
