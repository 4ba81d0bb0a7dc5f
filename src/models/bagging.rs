use candle_core::Tensor;
use serde::{Deserialize, Serialize};

use super::estimators::Estimator;
use super::{Artifact, Classifier};

/// Majority-vote ensemble over independently fitted base estimators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaggingClassifier {
    #[serde(default)]
    pub format_version: Option<u32>,
    /// Code emitted for each class index.
    pub classes: Vec<i64>,
    pub n_features: usize,
    pub estimators: Vec<Estimator>,
}

impl BaggingClassifier {
    pub fn new(classes: Vec<i64>, n_features: usize, estimators: Vec<Estimator>) -> Self {
        Self {
            format_version: Some(super::SUPPORTED_FORMAT_VERSION),
            classes,
            n_features,
            estimators,
        }
    }

    pub fn n_estimators(&self) -> usize {
        self.estimators.len()
    }
}

impl Classifier for BaggingClassifier {
    fn predict(&self, features: &Tensor) -> anyhow::Result<Vec<i64>> {
        let _span = tracing::span!(tracing::Level::TRACE, "bagging").entered();
        let (n_rows, n_cols) = features.dims2()?;
        if n_cols != self.n_features {
            anyhow::bail!(
                "feature matrix has {n_cols} columns but the classifier expects {}",
                self.n_features
            );
        }

        let mut votes = vec![vec![0usize; self.classes.len()]; n_rows];
        for estimator in &self.estimators {
            let picks = estimator.predict_indices(features)?;
            for (row, class) in votes.iter_mut().zip(picks) {
                let slot = row.get_mut(class).ok_or_else(|| {
                    anyhow::anyhow!("estimator voted for unknown class index {class}")
                })?;
                *slot += 1;
            }
        }

        votes
            .iter()
            .map(|row| {
                // First maximum wins so ties go to the lowest class index.
                let mut best = 0;
                for (idx, count) in row.iter().enumerate() {
                    if *count > row[best] {
                        best = idx;
                    }
                }
                self.classes
                    .get(best)
                    .copied()
                    .ok_or_else(|| anyhow::anyhow!("classifier declares no classes"))
            })
            .collect()
    }
}

impl Artifact for BaggingClassifier {
    const KIND: &'static str = "model";

    fn format_version(&self) -> Option<u32> {
        self.format_version
    }

    fn validate(&self) -> Result<(), String> {
        if self.classes.is_empty() {
            return Err("no classes declared".into());
        }
        if self.estimators.is_empty() {
            return Err("ensemble has no estimators".into());
        }
        for (idx, estimator) in self.estimators.iter().enumerate() {
            estimator
                .validate(self.n_features, self.classes.len())
                .map_err(|e| format!("estimator {idx}: {e}"))?;
        }
        Ok(())
    }
}
