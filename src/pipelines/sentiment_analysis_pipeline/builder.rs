use std::path::PathBuf;
use std::sync::Arc;

use super::pipeline::SentimentAnalysisPipeline;
use crate::core::{AnalyzerConfig, LabelTable};
use crate::loaders::ArtifactLoader;
use crate::models::{Artifact, Classifier, FeatureExtractor};

pub struct SentimentAnalysisPipelineBuilder {
    model_path: PathBuf,
    vectorizer_path: PathBuf,
    labels: LabelTable,
}

impl SentimentAnalysisPipelineBuilder {
    pub fn new() -> Self {
        Self::from_config(&AnalyzerConfig::default())
    }

    pub fn from_config(config: &AnalyzerConfig) -> Self {
        Self {
            model_path: config.model_path.clone(),
            vectorizer_path: config.vectorizer_path.clone(),
            labels: config.labels.clone(),
        }
    }

    pub fn model_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.model_path = path.into();
        self
    }

    pub fn vectorizer_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.vectorizer_path = path.into();
        self
    }

    pub fn labels(mut self, labels: LabelTable) -> Self {
        self.labels = labels;
        self
    }

    /// Load the default JSON artifacts.
    ///
    /// Never fails: artifacts that cannot be loaded are left absent and the
    /// reasons are kept on the pipeline.
    pub fn build(self) -> SentimentAnalysisPipeline {
        self.build_with()
    }

    /// Load artifacts of any [`Artifact`] type.
    pub fn build_with<C, V>(self) -> SentimentAnalysisPipeline<C, V>
    where
        C: Classifier + Artifact,
        V: FeatureExtractor + Artifact,
    {
        let loaded = ArtifactLoader::new(self.model_path, self.vectorizer_path).load::<C, V>();
        SentimentAnalysisPipeline {
            classifier: loaded.classifier,
            vectorizer: loaded.vectorizer,
            labels: self.labels,
            load_errors: Arc::new(loaded.errors),
            load_warnings: Arc::new(loaded.warnings),
        }
    }

    /// Skip loading and use collaborators supplied by the caller.
    pub fn with_collaborators<C, V>(
        self,
        classifier: Option<Arc<C>>,
        vectorizer: Option<Arc<V>>,
    ) -> SentimentAnalysisPipeline<C, V>
    where
        C: Classifier,
        V: FeatureExtractor,
    {
        SentimentAnalysisPipeline {
            classifier,
            vectorizer,
            labels: self.labels,
            load_errors: Arc::new(Vec::new()),
            load_warnings: Arc::new(Vec::new()),
        }
    }
}

impl Default for SentimentAnalysisPipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
