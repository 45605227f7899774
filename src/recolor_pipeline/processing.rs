//! Image processing module
//!
//! This module applies a pixel substitution across whole images and
//! orchestrates batches, with progress reporting and cancellation.

mod types;
mod config;
mod cancel;
mod processor;


pub use types::{BatchItem, ImageBuffer, Progress};
pub use config::{ProcessingConfig, ProcessingConfigBuilder};
pub use cancel::CancelToken;
pub use processor::ImageProcessor;
