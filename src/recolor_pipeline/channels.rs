//! Channel selection module
//!
//! This module names the channels of each color space and keeps the
//! capped, mode-consistent set of channels chosen for substitution.

pub mod types;
mod selection;

pub use types::{Channel, ChannelMode};
pub use selection::{ChannelSelection, MAX_SELECTED_CHANNELS};
