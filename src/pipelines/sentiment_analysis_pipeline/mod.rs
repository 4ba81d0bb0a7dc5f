//! Sentiment analysis pipeline for short comments.
//!
//! Each comment goes through the vectorizer and then the classifier, and the
//! resulting code is mapped to a label through the configured
//! [`LabelTable`](crate::core::LabelTable). Failures stay with the comment
//! that caused them; the rest of the batch is still analyzed.
//!
//! ## Main Types
//!
//! - [`SentimentAnalysisPipeline`] - Runs collected comments through the collaborators
//! - [`SentimentAnalysisPipelineBuilder`] - Loads the artifacts and builds the pipeline
//! - [`AnalysisSession`] - Per-user wrapper that shows load problems once
//! - [`AnalysisOutcome`] / [`AnalysisResult`] - Request and per-comment results
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use sentiment_analyzer::pipelines::sentiment_analysis_pipeline::*;
//! use sentiment_analyzer::pipelines::input::InputMode;
//!
//! let pipeline = SentimentAnalysisPipelineBuilder::new()
//!     .model_path("final_rf_model.json")
//!     .vectorizer_path("vectorizer.json")
//!     .build();
//!
//! let outcome = pipeline.run(InputMode::Manual, "I love this product!", None)?;
//! println!("{}", render_outcome(&outcome));
//! # Ok::<(), sentiment_analyzer::core::DecodeError>(())
//! ```

pub mod builder;
pub mod pipeline;
pub mod render;
pub mod session;

pub use builder::SentimentAnalysisPipelineBuilder;
pub use pipeline::{analyze, AnalysisOutcome, AnalysisResult, SentimentAnalysisPipeline};
pub use render::{render_decode_error, render_load_notice, render_outcome, render_result};
pub use session::AnalysisSession;
