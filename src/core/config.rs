use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::labels::{LabelEntry, LabelTable};

pub const DEFAULT_MODEL_PATH: &str = "final_rf_model.json";
pub const DEFAULT_VECTORIZER_PATH: &str = "vectorizer.json";

/// Where the artifacts live and how codes are labelled.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerConfig {
    pub model_path: PathBuf,
    pub vectorizer_path: PathBuf,
    pub labels: LabelTable,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            vectorizer_path: PathBuf::from(DEFAULT_VECTORIZER_PATH),
            labels: LabelTable::default(),
        }
    }
}

#[derive(Deserialize)]
struct RawAnalyzerConfig {
    #[serde(alias = "model")]
    model_path: Option<PathBuf>,
    #[serde(alias = "vectorizer")]
    vectorizer_path: Option<PathBuf>,
    labels: Option<Vec<LabelEntry>>,
}

impl AnalyzerConfig {
    /// Parse a JSON configuration. Missing fields keep their defaults.
    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        let raw: RawAnalyzerConfig = serde_json::from_str(content)?;
        let defaults = Self::default();

        let labels = match raw.labels {
            Some(entries) if entries.is_empty() => {
                anyhow::bail!("label table must contain at least one entry")
            }
            Some(entries) => LabelTable::new(entries),
            None => defaults.labels,
        };

        Ok(Self {
            model_path: raw.model_path.unwrap_or(defaults.model_path),
            vectorizer_path: raw.vectorizer_path.unwrap_or(defaults.vectorizer_path),
            labels,
        })
    }

    /// Read a JSON configuration file. Relative artifact paths are resolved
    /// against the directory holding the file.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("reading config {}: {e}", path.display()))?;
        let mut config = Self::from_json(&content)?;

        if let Some(base) = path.parent() {
            if config.model_path.is_relative() {
                config.model_path = base.join(&config.model_path);
            }
            if config.vectorizer_path.is_relative() {
                config.vectorizer_path = base.join(&config.vectorizer_path);
            }
        }

        Ok(config)
    }
}
