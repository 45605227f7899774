//! Common utilities module
//!
//! This module contains shared utilities used across the recolor pipeline.

pub mod error;

pub use error::{RecolorError, Result};
