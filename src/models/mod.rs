//! Capability traits for the two collaborators and their JSON-backed
//! implementations.

pub mod bagging;
pub mod estimators;
pub mod tfidf;

use candle_core::Tensor;
use serde::de::DeserializeOwned;

pub use bagging::BaggingClassifier;
pub use estimators::{DecisionTree, Estimator, LinearEstimator, TreeNode};
pub use tfidf::{Norm, TfidfVectorizer};

/// Artifact format version this crate reads and writes.
pub const SUPPORTED_FORMAT_VERSION: u32 = 1;

/// Turns raw texts into a feature matrix with one row per text.
pub trait FeatureExtractor: Send + Sync {
    fn transform(&self, texts: &[&str]) -> anyhow::Result<Tensor>;
}

/// Turns a feature matrix into one class code per row.
pub trait Classifier: Send + Sync {
    fn predict(&self, features: &Tensor) -> anyhow::Result<Vec<i64>>;
}

/// A collaborator that can be deserialized from an exported artifact file.
pub trait Artifact: DeserializeOwned + Sized {
    /// Short human name used in logs and notices.
    const KIND: &'static str;

    fn format_version(&self) -> Option<u32>;

    /// Structural checks that deserialization alone cannot express.
    fn validate(&self) -> Result<(), String>;
}
