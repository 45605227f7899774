pub mod logger;
pub mod recolor_pipeline;
