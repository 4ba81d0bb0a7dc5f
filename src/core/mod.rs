pub mod config;
pub mod error;
pub mod labels;

pub use config::AnalyzerConfig;
pub use error::{DecodeError, InferenceError, LoadError};
pub use labels::{EmotionLabel, LabelEntry, LabelTable, Sentiment, Severity};
