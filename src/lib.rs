pub mod core;
pub mod loaders;
pub mod models;
pub mod pipelines;

pub use core::{AnalyzerConfig, EmotionLabel, LabelTable, Sentiment, Severity};
pub use models::{BaggingClassifier, Classifier, FeatureExtractor, TfidfVectorizer};
pub use pipelines::{
    AnalysisOutcome, AnalysisResult, AnalysisSession, InputMode, SentimentAnalysisPipeline,
    SentimentAnalysisPipelineBuilder, UploadedDocument,
};
