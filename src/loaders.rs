//! Artifact loading from the local filesystem.
//!
//! ## Main Types
//!
//! - [`ArtifactLoader`] - Reads the model and vectorizer artifacts from disk
//! - [`LoadedArtifacts`] - Whatever could be loaded, plus the errors and
//!   advisory warnings collected on the way
//!
//! Both artifacts are always attempted, even when the first one fails, so a
//! single startup reports every problem at once. Nothing here panics or aborts
//! the process: a failed artifact is simply absent afterwards.
//!
//! ```rust,no_run
//! use sentiment_analyzer::loaders::ArtifactLoader;
//! use sentiment_analyzer::models::{BaggingClassifier, TfidfVectorizer};
//!
//! let loaded = ArtifactLoader::new("final_rf_model.json", "vectorizer.json")
//!     .load::<BaggingClassifier, TfidfVectorizer>();
//! if !loaded.is_ready() {
//!     for err in &loaded.errors {
//!         eprintln!("{err}");
//!     }
//! }
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::core::LoadError;
use crate::models::{Artifact, SUPPORTED_FORMAT_VERSION};

/// Which of the two collaborators an artifact provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Classifier,
    Vectorizer,
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArtifactKind::Classifier => f.write_str("classifier model"),
            ArtifactKind::Vectorizer => f.write_str("text vectorizer"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ArtifactLoader {
    pub model_path: PathBuf,
    pub vectorizer_path: PathBuf,
}

impl ArtifactLoader {
    pub fn new(model_path: impl Into<PathBuf>, vectorizer_path: impl Into<PathBuf>) -> Self {
        Self {
            model_path: model_path.into(),
            vectorizer_path: vectorizer_path.into(),
        }
    }

    /// Load both artifacts. Safe to call repeatedly; every call re-reads the files.
    pub fn load<C: Artifact, V: Artifact>(&self) -> LoadedArtifacts<C, V> {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        let classifier = load_artifact::<C>(&self.model_path, &mut warnings)
            .map_err(|e| errors.push(e))
            .ok()
            .map(Arc::new);
        let vectorizer = load_artifact::<V>(&self.vectorizer_path, &mut warnings)
            .map_err(|e| errors.push(e))
            .ok()
            .map(Arc::new);

        LoadedArtifacts {
            classifier,
            vectorizer,
            errors,
            warnings,
        }
    }
}

/// Read and validate a single artifact, pushing advisory problems into `warnings`.
pub fn load_artifact<T: Artifact>(
    path: &Path,
    warnings: &mut Vec<LoadError>,
) -> Result<T, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| {
        let err = if source.kind() == std::io::ErrorKind::NotFound {
            LoadError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Unreadable {
                path: path.to_path_buf(),
                source,
            }
        };
        tracing::warn!(kind = T::KIND, "{err}");
        err
    })?;

    let corrupt = |detail: String| {
        let err = LoadError::Corrupt {
            path: path.to_path_buf(),
            detail,
        };
        tracing::warn!(kind = T::KIND, "{err}");
        err
    };

    let artifact: T = serde_json::from_slice(&bytes).map_err(|e| corrupt(e.to_string()))?;
    artifact.validate().map_err(corrupt)?;

    if artifact.format_version() != Some(SUPPORTED_FORMAT_VERSION) {
        let detail = match artifact.format_version() {
            Some(found) => {
                format!("found format version {found}, expected {SUPPORTED_FORMAT_VERSION}")
            }
            None => format!("no format version recorded, expected {SUPPORTED_FORMAT_VERSION}"),
        };
        let warning = LoadError::VersionMismatch {
            path: path.to_path_buf(),
            detail,
        };
        tracing::warn!(kind = T::KIND, "{warning}");
        warnings.push(warning);
    }

    tracing::info!(kind = T::KIND, path = %path.display(), "artifact loaded");
    Ok(artifact)
}

/// Outcome of a load: each collaborator is present only if it loaded.
#[derive(Debug)]
pub struct LoadedArtifacts<C, V> {
    pub classifier: Option<Arc<C>>,
    pub vectorizer: Option<Arc<V>>,
    /// Failures that left a collaborator absent.
    pub errors: Vec<LoadError>,
    /// Advisory problems; the artifact was loaded anyway.
    pub warnings: Vec<LoadError>,
}

impl<C, V> LoadedArtifacts<C, V> {
    pub fn is_ready(&self) -> bool {
        self.classifier.is_some() && self.vectorizer.is_some()
    }

    pub fn missing(&self) -> Vec<ArtifactKind> {
        let mut missing = Vec::new();
        if self.classifier.is_none() {
            missing.push(ArtifactKind::Classifier);
        }
        if self.vectorizer.is_none() {
            missing.push(ArtifactKind::Vectorizer);
        }
        missing
    }

    /// Strict view: both collaborators or the first error encountered.
    pub fn into_result(self) -> Result<(Arc<C>, Arc<V>), LoadError> {
        match (self.classifier, self.vectorizer) {
            (Some(c), Some(v)) => Ok((c, v)),
            _ => Err(self
                .errors
                .into_iter()
                .next()
                .unwrap_or_else(|| LoadError::NotFound {
                    path: PathBuf::new(),
                })),
        }
    }
}
