//! Per-pixel channel substitution module
//!
//! This module defines the pixel type and the substitution seam used by
//! the image processor, along with the default channel substitution engine.

pub mod types;
mod engine;

pub use types::Pixel;
pub use engine::{ChannelSubstitutionEngine, PixelSubstitution};
