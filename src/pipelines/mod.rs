pub mod input;
pub mod sentiment_analysis_pipeline;

pub use input::{collect, InputBatch, InputMode, UploadedDocument, DEFAULT_MANUAL_TEXT};
pub use sentiment_analysis_pipeline::*;
