use super::pipeline::{AnalysisOutcome, SentimentAnalysisPipeline};
use crate::core::{DecodeError, LoadError};
use crate::models::{BaggingClassifier, Classifier, FeatureExtractor, TfidfVectorizer};
use crate::pipelines::input::{InputMode, UploadedDocument};

/// Per-user state around a shared pipeline.
///
/// Load problems are shown once per session, the first time
/// [`take_load_notices`](Self::take_load_notices) is called.
pub struct AnalysisSession<C = BaggingClassifier, V = TfidfVectorizer> {
    pipeline: SentimentAnalysisPipeline<C, V>,
    load_warning_shown: bool,
}

impl<C: Classifier, V: FeatureExtractor> AnalysisSession<C, V> {
    pub fn new(pipeline: SentimentAnalysisPipeline<C, V>) -> Self {
        Self {
            pipeline,
            load_warning_shown: false,
        }
    }

    /// Load errors followed by advisory warnings, or nothing if already shown.
    pub fn take_load_notices(&mut self) -> Vec<&LoadError> {
        if self.load_warning_shown {
            return Vec::new();
        }
        self.load_warning_shown = true;
        self.pipeline
            .load_errors()
            .iter()
            .chain(self.pipeline.load_warnings())
            .collect()
    }

    pub fn load_warning_shown(&self) -> bool {
        self.load_warning_shown
    }

    pub fn run(
        &self,
        mode: InputMode,
        manual_text: &str,
        uploaded: Option<&UploadedDocument>,
    ) -> Result<AnalysisOutcome, DecodeError> {
        self.pipeline.run(mode, manual_text, uploaded)
    }

    pub fn pipeline(&self) -> &SentimentAnalysisPipeline<C, V> {
        &self.pipeline
    }
}
