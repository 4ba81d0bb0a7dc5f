//! Plain-text rendering of analysis outcomes.
//!
//! Every block starts with a `[severity]` tag so a host can pick the visual
//! treatment (error, info, success, warning) without parsing the rest.

use super::pipeline::{AnalysisOutcome, AnalysisResult};
use crate::core::{DecodeError, LoadError, Severity};
use crate::loaders::ArtifactKind;

pub const EMPTY_INPUT_PROMPT: &str = "Please enter some text to analyze.";

pub fn render_result(result: &AnalysisResult) -> String {
    match &result.outcome {
        Ok(label) => format!(
            "[{}] {}. \"{}\" → {}",
            label.severity(),
            result.index,
            result.text,
            label.text
        ),
        Err(err) => format!(
            "[{}] {}. {} failed for \"{}\": {}\n    {}",
            Severity::Error,
            result.index,
            err.stage(),
            result.text,
            err.detail(),
            err.remedy()
        ),
    }
}

pub fn render_outcome(outcome: &AnalysisOutcome) -> String {
    match outcome {
        AnalysisOutcome::Empty => format!("[{}] {EMPTY_INPUT_PROMPT}", Severity::Warning),
        AnalysisOutcome::Unavailable { missing } => {
            let names = missing
                .iter()
                .map(ArtifactKind::to_string)
                .collect::<Vec<_>>()
                .join(" and ");
            format!(
                "[{}] Analysis is unavailable: the {names} could not be loaded. \
                 Check the artifact paths and restart.",
                Severity::Error
            )
        }
        AnalysisOutcome::Ready(results) => results
            .iter()
            .map(render_result)
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

pub fn render_load_notice(err: &LoadError) -> String {
    let severity = if err.is_advisory() {
        Severity::Warning
    } else {
        Severity::Error
    };
    format!("[{severity}] {err}\n    {}", err.remedy())
}

pub fn render_decode_error(err: &DecodeError) -> String {
    format!("[{}] {err}\n    {}", Severity::Error, err.remedy())
}
