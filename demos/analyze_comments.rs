//! Minimal terminal host for the analyzer.
//!
//! ```text
//! cargo run --example analyze_comments -- [config.json] [comments.txt]
//! ```
//!
//! Without a comments file the default example sentence is analyzed.

use anyhow::Result;
use sentiment_analyzer::pipelines::input::{InputMode, UploadedDocument, DEFAULT_MANUAL_TEXT};
use sentiment_analyzer::pipelines::sentiment_analysis_pipeline::*;
use sentiment_analyzer::AnalyzerConfig;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => AnalyzerConfig::from_file(path)?,
        None => AnalyzerConfig::default(),
    };

    println!("Loading artifacts...");
    let pipeline = SentimentAnalysisPipelineBuilder::from_config(&config).build();
    let mut session = AnalysisSession::new(pipeline);
    for notice in session.take_load_notices() {
        println!("{}", render_load_notice(notice));
    }

    let outcome = match args.next() {
        Some(path) => {
            let bytes = std::fs::read(&path)?;
            let document = UploadedDocument::new(path, bytes);
            session.run(InputMode::Uploaded, "", Some(&document))
        }
        None => {
            println!("Text to analyze: \"{DEFAULT_MANUAL_TEXT}\"");
            session.run(InputMode::Manual, DEFAULT_MANUAL_TEXT, None)
        }
    };

    println!("\n=== Analysis Result ===");
    match outcome {
        Ok(outcome) => println!("{}", render_outcome(&outcome)),
        Err(err) => println!("{}", render_decode_error(&err)),
    }

    Ok(())
}
