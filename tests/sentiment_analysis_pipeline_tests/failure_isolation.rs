use std::sync::Arc;

use candle_core::{Device, Tensor};
use sentiment_analyzer::core::{InferenceError, LabelTable};
use sentiment_analyzer::loaders::ArtifactKind;
use sentiment_analyzer::models::{Classifier, FeatureExtractor, TfidfVectorizer};
use sentiment_analyzer::pipelines::input::InputBatch;
use sentiment_analyzer::pipelines::sentiment_analysis_pipeline::*;

use crate::common;

/// Delegates to the fixture vectorizer but chokes on a marker string.
struct FragileVectorizer;

impl FeatureExtractor for FragileVectorizer {
    fn transform(&self, texts: &[&str]) -> anyhow::Result<Tensor> {
        if texts.iter().any(|t| t.contains("💥")) {
            anyhow::bail!("unsupported input");
        }
        common::vectorizer().transform(texts)
    }
}

/// Returns a matrix the ensemble cannot accept.
struct NarrowVectorizer;

impl FeatureExtractor for NarrowVectorizer {
    fn transform(&self, texts: &[&str]) -> anyhow::Result<Tensor> {
        Ok(Tensor::zeros((texts.len(), 2), candle_core::DType::F32, &Device::Cpu)?)
    }
}

struct FixedCode(i64);

impl Classifier for FixedCode {
    fn predict(&self, features: &Tensor) -> anyhow::Result<Vec<i64>> {
        Ok(vec![self.0; features.dims2()?.0])
    }
}

#[test]
fn one_failing_item_does_not_affect_neighbours() {
    let batch = InputBatch::from_texts(["I love this!", "💥 boom", "hate it"]);
    let outcome = analyze(
        &batch,
        Some(&common::classifier()),
        Some(&FragileVectorizer),
        &LabelTable::default(),
    );

    let results = outcome.results();
    assert_eq!(results.len(), 3);
    assert!(results[0].is_success());
    assert!(matches!(
        &results[1].outcome,
        Err(InferenceError::FeatureExtractionFailed { detail }) if detail.contains("unsupported input")
    ));
    assert_eq!(results[1].index, 2);
    assert_eq!(results[1].text, "💥 boom");
    assert!(results[2].is_success());
}

#[test]
fn shape_mismatch_is_a_classification_failure() {
    let batch = InputBatch::from_texts(["great"]);
    let outcome = analyze(
        &batch,
        Some(&common::classifier()),
        Some(&NarrowVectorizer),
        &LabelTable::default(),
    );
    let rendered = render_outcome(&outcome);
    assert!(matches!(
        &outcome.results()[0].outcome,
        Err(InferenceError::ClassificationFailed { .. })
    ));
    assert!(rendered.contains("Classification failed for \"great\""));
}

#[test]
fn unmapped_code_is_shown_as_unknown() {
    let pipeline = SentimentAnalysisPipelineBuilder::new().with_collaborators(
        Some(Arc::new(FixedCode(42))),
        Some(Arc::new(common::vectorizer())),
    );
    let outcome = pipeline.analyze(&InputBatch::from_texts(["anything"]));
    let label = outcome.results()[0].label().cloned().expect("label");
    assert!(label.is_unknown());
    assert_eq!(label.code, 42);
    assert!(render_outcome(&outcome).starts_with("[warning] 1."));
}

#[test]
fn missing_collaborator_blocks_the_whole_batch() {
    let batch = InputBatch::from_texts(["one", "two"]);
    let labels = LabelTable::default();

    let no_classifier = analyze::<FixedCode, _>(&batch, None, Some(&common::vectorizer()), &labels);
    assert_eq!(
        no_classifier,
        AnalysisOutcome::Unavailable {
            missing: vec![ArtifactKind::Classifier]
        }
    );

    let no_vectorizer = analyze::<_, FragileVectorizer>(&batch, Some(&FixedCode(1)), None, &labels);
    assert_eq!(
        no_vectorizer,
        AnalysisOutcome::Unavailable {
            missing: vec![ArtifactKind::Vectorizer]
        }
    );
    assert!(no_vectorizer.results().is_empty());
}

#[test]
fn unchecked_vectorizer_only_fails_the_affected_item() {
    let broken = TfidfVectorizer::new([("love".to_string(), 5)].into_iter().collect(), vec![1.0]);
    let pipeline = SentimentAnalysisPipelineBuilder::new()
        .with_collaborators(Some(Arc::new(FixedCode(0))), Some(Arc::new(broken)));

    let outcome = pipeline.analyze(&InputBatch::from_texts(["ok", "I love it", "fine"]));
    let results = outcome.results();
    assert_eq!(results.len(), 3);
    assert!(results[0].is_success());
    assert!(matches!(
        &results[1].outcome,
        Err(InferenceError::FeatureExtractionFailed { detail }) if detail.contains("column 5")
    ));
    assert!(results[2].is_success());
}

/// Delegates to the fixture ensemble but rejects rows with no known terms.
struct PickyClassifier;

impl Classifier for PickyClassifier {
    fn predict(&self, features: &Tensor) -> anyhow::Result<Vec<i64>> {
        if features.to_vec2::<f32>()?.iter().any(|row| row.iter().all(|x| *x == 0.0)) {
            anyhow::bail!("empty feature row");
        }
        common::classifier().predict(features)
    }
}

#[test]
fn classification_failure_is_isolated_to_its_item() {
    let batch = InputBatch::from_texts(["love it", "nothing known here", "hate it"]);
    let outcome = analyze(
        &batch,
        Some(&PickyClassifier),
        Some(&common::vectorizer()),
        &LabelTable::default(),
    );

    let results = outcome.results();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].label().map(|l| l.code), Some(1));
    assert!(matches!(
        &results[1].outcome,
        Err(InferenceError::ClassificationFailed { detail }) if detail.contains("empty feature row")
    ));
    assert_eq!(results[2].label().map(|l| l.code), Some(-1));
}
