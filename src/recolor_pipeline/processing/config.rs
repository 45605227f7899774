//! Processing configuration types

/// Configuration for image and batch processing
#[derive(Debug, Clone)]
pub struct ProcessingConfig {
    /// Whether to reject zero-sized or oversized images before processing
    pub validate_dimensions: bool,
    /// Largest accepted width or height, checked when validation is on
    pub max_dimension: Option<usize>,
    /// Number of batch items processed concurrently (1 = strictly sequential)
    pub workers: usize,
    /// Whether to split the pixel loop of each image across threads
    pub parallel_pixels: bool,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            validate_dimensions: true,
            max_dimension: Some(65_535),
            workers: 1,
            parallel_pixels: false,
        }
    }
}

impl ProcessingConfig {
    pub fn builder() -> ProcessingConfigBuilder {
        ProcessingConfigBuilder::default()
    }

    pub fn is_parallel_batch(&self) -> bool {
        self.workers > 1
    }
}

/// Builder for ProcessingConfig
#[derive(Default)]
pub struct ProcessingConfigBuilder {
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<usize>>,
    workers: Option<usize>,
    parallel_pixels: Option<bool>,
}

impl ProcessingConfigBuilder {
    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<usize>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    /// Values below 1 are treated as 1.
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers.max(1));
        self
    }

    pub fn parallel_pixels(mut self, enable: bool) -> Self {
        self.parallel_pixels = Some(enable);
        self
    }

    pub fn build(self) -> ProcessingConfig {
        let default = ProcessingConfig::default();
        ProcessingConfig {
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
            workers: self.workers.unwrap_or(default.workers),
            parallel_pixels: self.parallel_pixels.unwrap_or(default.parallel_pixels),
        }
    }
}
