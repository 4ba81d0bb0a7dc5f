use sentiment_analyzer::pipelines::input::{collect, InputMode, UploadedDocument};
use sentiment_analyzer::pipelines::sentiment_analysis_pipeline::*;
use sentiment_analyzer::{Sentiment, Severity};

use crate::common::write_artifacts;

#[test]
fn basic_sentiment() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let (model, vectorizer) = write_artifacts(dir.path())?;
    let pipeline = SentimentAnalysisPipelineBuilder::new()
        .model_path(model)
        .vectorizer_path(vectorizer)
        .build();
    assert!(pipeline.is_ready());
    assert!(pipeline.load_errors().is_empty());

    let outcome = pipeline.run(InputMode::Manual, "I love Rust!", None)?;
    let results = outcome.results();
    assert_eq!(results.len(), 1);
    let label = results[0].label().expect("classified");
    assert_eq!(label.sentiment, Sentiment::Positive);
    assert_eq!(label.severity(), Severity::Success);
    Ok(())
}

#[test]
fn uploaded_comments_are_numbered_in_order() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let (model, vectorizer) = write_artifacts(dir.path())?;
    let pipeline = SentimentAnalysisPipelineBuilder::new()
        .model_path(model)
        .vectorizer_path(vectorizer)
        .build();

    let doc = UploadedDocument::new("comments.txt", "I love this!\n\nmeh\n   \nawful service\n");
    let outcome = pipeline.run(InputMode::Uploaded, "", Some(&doc))?;

    assert_eq!(
        render_outcome(&outcome),
        "[success] 1. \"I love this!\" → Positivo 😊\n\
         [info] 2. \"meh\" → Neutral 😐\n\
         [error] 3. \"awful service\" → Negativo 😠"
    );
    Ok(())
}

#[test]
fn analyzing_twice_gives_identical_results() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let (model, vectorizer) = write_artifacts(dir.path())?;
    let pipeline = SentimentAnalysisPipelineBuilder::new()
        .model_path(model)
        .vectorizer_path(vectorizer)
        .build();

    let batch = collect(
        InputMode::Uploaded,
        "",
        Some(&UploadedDocument::new("a.txt", "great\nhate it\nok")),
    )?;
    let first = pipeline.analyze(&batch);
    let second = pipeline.analyze(&batch);
    assert_eq!(first, second);
    assert_eq!(first.results().len(), 3);
    Ok(())
}

#[test]
fn empty_input_is_not_analyzed() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let (model, vectorizer) = write_artifacts(dir.path())?;
    let pipeline = SentimentAnalysisPipelineBuilder::new()
        .model_path(model)
        .vectorizer_path(vectorizer)
        .build();

    assert_eq!(
        pipeline.run(InputMode::Manual, "   ", None)?,
        AnalysisOutcome::Empty
    );
    Ok(())
}
