use std::path::PathBuf;

use thiserror::Error;

/// Failure to acquire one of the two artifacts at startup.
///
/// None of these stop the process: the pipeline keeps running with the
/// affected collaborator marked absent, and `VersionMismatch` is only advisory.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("artifact not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("artifact could not be read: {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("artifact is corrupt: {}: {detail}", path.display())]
    Corrupt { path: PathBuf, detail: String },

    #[error("artifact format version mismatch: {}: {detail}", path.display())]
    VersionMismatch { path: PathBuf, detail: String },
}

impl LoadError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::NotFound { path }
            | LoadError::Unreadable { path, .. }
            | LoadError::Corrupt { path, .. }
            | LoadError::VersionMismatch { path, .. } => path,
        }
    }

    /// Advisory errors do not prevent the artifact from being used.
    pub fn is_advisory(&self) -> bool {
        matches!(self, LoadError::VersionMismatch { .. })
    }

    /// Suggested action for the person running the tool.
    pub fn remedy(&self) -> &'static str {
        match self {
            LoadError::NotFound { .. } => {
                "Place the exported artifact at this path or point the configuration at it."
            }
            LoadError::Unreadable { .. } => "Check the file permissions and try again.",
            LoadError::Corrupt { .. } => {
                "Re-export the artifact from the fitted model; the file is damaged or not in the expected format."
            }
            LoadError::VersionMismatch { .. } => {
                "Predictions may be unreliable; re-export the artifact with the current exporter."
            }
        }
    }
}

/// An uploaded document whose bytes are not valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not decode \"{name}\" as UTF-8 text (invalid byte at offset {valid_up_to})")]
pub struct DecodeError {
    pub name: String,
    pub valid_up_to: usize,
}

impl DecodeError {
    pub fn remedy(&self) -> &'static str {
        "Save the file as UTF-8 text with one comment per line and upload it again."
    }
}

/// Per-item failure inside the inference pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InferenceError {
    #[error("feature extraction failed: {detail}")]
    FeatureExtractionFailed { detail: String },

    #[error("classification failed: {detail}")]
    ClassificationFailed { detail: String },
}

impl InferenceError {
    pub fn stage(&self) -> &'static str {
        match self {
            InferenceError::FeatureExtractionFailed { .. } => "Feature extraction",
            InferenceError::ClassificationFailed { .. } => "Classification",
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            InferenceError::FeatureExtractionFailed { detail }
            | InferenceError::ClassificationFailed { detail } => detail,
        }
    }

    pub fn remedy(&self) -> &'static str {
        match self {
            InferenceError::FeatureExtractionFailed { .. } => {
                "Check that the text is plain prose and that the vectorizer artifact is intact."
            }
            InferenceError::ClassificationFailed { .. } => {
                "Check that the model and vectorizer artifacts were exported together."
            }
        }
    }
}
