use sentiment_analyzer::core::{AnalyzerConfig, LoadError};
use sentiment_analyzer::loaders::{ArtifactKind, ArtifactLoader};
use sentiment_analyzer::models::{BaggingClassifier, TfidfVectorizer};
use sentiment_analyzer::pipelines::sentiment_analysis_pipeline::SentimentAnalysisPipelineBuilder;

use crate::common::{self, write_artifacts};

#[test]
fn both_artifacts_are_attempted() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let (_, vectorizer) = write_artifacts(dir.path())?;
    let model = dir.path().join("final_rf_model.pkl");
    std::fs::write(&model, [0x80, 0x04, 0x95, 0x00])?;

    let loaded = ArtifactLoader::new(&model, &vectorizer).load::<BaggingClassifier, TfidfVectorizer>();
    assert!(loaded.vectorizer.is_some());
    assert!(loaded.classifier.is_none());
    assert_eq!(loaded.missing(), vec![ArtifactKind::Classifier]);
    assert!(matches!(&loaded.errors[..], [LoadError::Corrupt { path, .. }] if path == &model));
    Ok(())
}

#[test]
fn structurally_invalid_model_is_corrupt() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let (model, vectorizer) = write_artifacts(dir.path())?;
    let mut broken = common::classifier();
    broken.n_features = 2;
    common::write_json(&model, &broken)?;

    let err = ArtifactLoader::new(&model, &vectorizer)
        .load::<BaggingClassifier, TfidfVectorizer>()
        .into_result()
        .unwrap_err();
    match err {
        LoadError::Corrupt { detail, .. } => assert!(detail.contains("estimator 0")),
        other => panic!("unexpected error: {other}"),
    }
    Ok(())
}

#[test]
fn loading_is_repeatable() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let (model, vectorizer) = write_artifacts(dir.path())?;
    let loader = ArtifactLoader::new(model, vectorizer);

    for _ in 0..2 {
        let (classifier, vectorizer) = loader
            .load::<BaggingClassifier, TfidfVectorizer>()
            .into_result()?;
        assert_eq!(classifier.n_estimators(), 3);
        assert_eq!(vectorizer.n_features(), 4);
    }
    Ok(())
}

#[test]
fn config_file_paths_are_relative_to_the_file() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let models = dir.path().join("models");
    std::fs::create_dir(&models)?;
    write_artifacts(&models)?;
    let config_path = dir.path().join("analyzer.json");
    std::fs::write(
        &config_path,
        r#"{
            "model_path": "models/final_rf_model.json",
            "vectorizer_path": "models/vectorizer.json",
            "labels": [
                {"code": -1, "label": "Malo", "sentiment": "negative"},
                {"code": 0, "label": "Normal", "sentiment": "neutral"},
                {"code": 1, "label": "Bueno", "sentiment": "positive"}
            ]
        }"#,
    )?;

    let config = AnalyzerConfig::from_file(&config_path)?;
    let pipeline = SentimentAnalysisPipelineBuilder::from_config(&config).build();
    assert!(pipeline.is_ready());

    let outcome = pipeline.analyze(&sentiment_analyzer::pipelines::InputBatch::from_texts(["love"]));
    assert_eq!(outcome.results()[0].label().map(|l| l.text.as_str()), Some("Bueno"));
    Ok(())
}
