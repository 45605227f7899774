use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecolorError {
    #[error("Invalid color format: {0}")]
    InvalidFormat(String),

    #[error("No channel selected")]
    EmptySelection,

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Pixel buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("Failed to process batch item {index} ({name}): {source}")]
    ItemProcessingFault {
        index: usize,
        name: String,
        #[source]
        source: Box<RecolorError>,
    },

    #[error("Batch cancelled after {completed} of {total} items")]
    Cancelled { completed: usize, total: usize },

    #[error("Worker pool error: {0}")]
    WorkerPool(String),
}

pub type Result<T> = std::result::Result<T, RecolorError>;
