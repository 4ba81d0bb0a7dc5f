use std::sync::Arc;

use crate::core::{DecodeError, EmotionLabel, InferenceError, LabelTable, LoadError};
use crate::loaders::ArtifactKind;
use crate::models::{BaggingClassifier, Classifier, FeatureExtractor, TfidfVectorizer};
use crate::pipelines::input::{collect, InputBatch, InputMode, UploadedDocument};

/// Outcome for one comment.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    /// 1-based position in the batch.
    pub index: usize,
    pub text: String,
    pub outcome: Result<EmotionLabel, InferenceError>,
}

impl AnalysisResult {
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn label(&self) -> Option<&EmotionLabel> {
        self.outcome.as_ref().ok()
    }
}

/// Outcome for a whole request.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    /// Nothing to analyze; the user should be prompted for input.
    Empty,
    /// A collaborator is absent, no per-item inference was attempted.
    Unavailable { missing: Vec<ArtifactKind> },
    /// One result per input, in input order.
    Ready(Vec<AnalysisResult>),
}

impl AnalysisOutcome {
    pub fn results(&self) -> &[AnalysisResult] {
        match self {
            AnalysisOutcome::Ready(results) => results,
            _ => &[],
        }
    }
}

/// Run every text through `vectorizer` then `classifier`, isolating failures per item.
pub fn analyze<C, V>(
    batch: &InputBatch,
    classifier: Option<&C>,
    vectorizer: Option<&V>,
    labels: &LabelTable,
) -> AnalysisOutcome
where
    C: Classifier + ?Sized,
    V: FeatureExtractor + ?Sized,
{
    if batch.is_empty() {
        return AnalysisOutcome::Empty;
    }

    let (classifier, vectorizer) = match (classifier, vectorizer) {
        (Some(c), Some(v)) => (c, v),
        (c, v) => {
            let mut missing = Vec::new();
            if c.is_none() {
                missing.push(ArtifactKind::Classifier);
            }
            if v.is_none() {
                missing.push(ArtifactKind::Vectorizer);
            }
            tracing::warn!(?missing, "analysis requested while artifacts are unavailable");
            return AnalysisOutcome::Unavailable { missing };
        }
    };

    let results = batch
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let outcome = analyze_one(text, classifier, vectorizer, labels);
            match &outcome {
                Ok(label) => tracing::debug!(index = i + 1, code = label.code, "comment classified"),
                Err(err) => tracing::warn!(index = i + 1, "{err}"),
            }
            AnalysisResult {
                index: i + 1,
                text: text.clone(),
                outcome,
            }
        })
        .collect();

    AnalysisOutcome::Ready(results)
}

fn analyze_one<C, V>(
    text: &str,
    classifier: &C,
    vectorizer: &V,
    labels: &LabelTable,
) -> Result<EmotionLabel, InferenceError>
where
    C: Classifier + ?Sized,
    V: FeatureExtractor + ?Sized,
{
    let features =
        vectorizer
            .transform(&[text])
            .map_err(|e| InferenceError::FeatureExtractionFailed {
                detail: format!("{e:#}"),
            })?;

    let code = classifier
        .predict(&features)
        .map_err(|e| InferenceError::ClassificationFailed {
            detail: format!("{e:#}"),
        })?
        .first()
        .copied()
        .ok_or_else(|| InferenceError::ClassificationFailed {
            detail: "classifier returned no prediction".into(),
        })?;

    Ok(labels.resolve(code))
}

/// Vectorize-then-classify pipeline over shared, read-only collaborators.
///
/// Construct with [`SentimentAnalysisPipelineBuilder`](super::SentimentAnalysisPipelineBuilder).
/// Cloning is cheap; clones share the loaded artifacts.
pub struct SentimentAnalysisPipeline<C = BaggingClassifier, V = TfidfVectorizer> {
    pub(crate) classifier: Option<Arc<C>>,
    pub(crate) vectorizer: Option<Arc<V>>,
    pub(crate) labels: LabelTable,
    pub(crate) load_errors: Arc<Vec<LoadError>>,
    pub(crate) load_warnings: Arc<Vec<LoadError>>,
}

impl<C, V> Clone for SentimentAnalysisPipeline<C, V> {
    fn clone(&self) -> Self {
        Self {
            classifier: self.classifier.clone(),
            vectorizer: self.vectorizer.clone(),
            labels: self.labels.clone(),
            load_errors: self.load_errors.clone(),
            load_warnings: self.load_warnings.clone(),
        }
    }
}

impl<C: Classifier, V: FeatureExtractor> SentimentAnalysisPipeline<C, V> {
    /// Analyze an already collected batch.
    pub fn analyze(&self, batch: &InputBatch) -> AnalysisOutcome {
        analyze(
            batch,
            self.classifier.as_deref(),
            self.vectorizer.as_deref(),
            &self.labels,
        )
    }

    /// Collect the input for `mode`, then analyze it.
    pub fn run(
        &self,
        mode: InputMode,
        manual_text: &str,
        uploaded: Option<&UploadedDocument>,
    ) -> Result<AnalysisOutcome, DecodeError> {
        let batch = collect(mode, manual_text, uploaded)?;
        Ok(self.analyze(&batch))
    }

    pub fn is_ready(&self) -> bool {
        self.classifier.is_some() && self.vectorizer.is_some()
    }

    pub fn labels(&self) -> &LabelTable {
        &self.labels
    }

    /// Failures that left a collaborator absent.
    pub fn load_errors(&self) -> &[LoadError] {
        &self.load_errors
    }

    /// Advisory problems found while loading.
    pub fn load_warnings(&self) -> &[LoadError] {
        &self.load_warnings
    }
}
