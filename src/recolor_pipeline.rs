//! Recolor pipeline module
//!
//! This module substitutes one or two color channels of every pixel with a
//! fixed target value, in RGB or HSV space, for single images and batches.

pub mod color;
pub mod channels;
pub mod substitution;
pub mod processing;
pub mod common;

pub use common::{
    RecolorError,
    Result,
};

pub use color::{
    ColorHsv,
    ColorModel,
    ColorRgb,
    TargetColor,
    hsv_to_rgb,
    rgb_to_hsv,
};

pub use channels::{
    Channel,
    ChannelMode,
    ChannelSelection,
};

pub use substitution::{
    ChannelSubstitutionEngine,
    Pixel,
    PixelSubstitution,
};

pub use processing::{
    BatchItem,
    CancelToken,
    ImageBuffer,
    ImageProcessor,
    ProcessingConfig,
    ProcessingConfigBuilder,
    Progress,
};
