//! Base estimators of the bagging ensemble.
//!
//! Each estimator maps a feature matrix to one class index per row. Class
//! indices point into the ensemble's `classes` table, not at raw codes.

use candle_core::{DType, Device, Tensor, D};
use candle_nn::{Linear, Module};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Estimator {
    Tree(DecisionTree),
    Linear(LinearEstimator),
}

impl Estimator {
    pub fn predict_indices(&self, features: &Tensor) -> anyhow::Result<Vec<usize>> {
        match self {
            Estimator::Tree(tree) => tree.predict_indices(features),
            Estimator::Linear(linear) => linear.predict_indices(features),
        }
    }

    pub(crate) fn validate(&self, n_features: usize, n_classes: usize) -> Result<(), String> {
        match self {
            Estimator::Tree(tree) => tree.root.validate(n_features, n_classes),
            Estimator::Linear(linear) => linear.validate(n_features, n_classes),
        }
    }
}

/// A binary split tree. Rows go left when `x[feature] <= threshold`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f32,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
    Leaf {
        class: usize,
    },
}

impl TreeNode {
    pub fn leaf(class: usize) -> Self {
        TreeNode::Leaf { class }
    }

    pub fn split(feature: usize, threshold: f32, left: TreeNode, right: TreeNode) -> Self {
        TreeNode::Split {
            feature,
            threshold,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    fn decide(&self, row: &[f32]) -> anyhow::Result<usize> {
        let mut node = self;
        loop {
            match node {
                TreeNode::Leaf { class } => return Ok(*class),
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let value = row.get(*feature).ok_or_else(|| {
                        anyhow::anyhow!(
                            "split on feature {feature} but the row has {} features",
                            row.len()
                        )
                    })?;
                    node = if *value <= *threshold {
                        left
                    } else {
                        right
                    };
                }
            }
        }
    }

    fn validate(&self, n_features: usize, n_classes: usize) -> Result<(), String> {
        match self {
            TreeNode::Leaf { class } if *class >= n_classes => Err(format!(
                "leaf predicts class index {class} but only {n_classes} classes exist"
            )),
            TreeNode::Leaf { .. } => Ok(()),
            TreeNode::Split { feature, .. } if *feature >= n_features => Err(format!(
                "split on feature {feature} but only {n_features} features exist"
            )),
            TreeNode::Split {
                threshold,
                left,
                right,
                ..
            } => {
                if !threshold.is_finite() {
                    return Err("split threshold is not finite".into());
                }
                left.validate(n_features, n_classes)?;
                right.validate(n_features, n_classes)
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    pub root: TreeNode,
}

impl DecisionTree {
    pub fn new(root: TreeNode) -> Self {
        Self { root }
    }

    pub fn predict_indices(&self, features: &Tensor) -> anyhow::Result<Vec<usize>> {
        let _span = tracing::span!(tracing::Level::TRACE, "tree").entered();
        let rows = features.to_dtype(DType::F32)?.to_vec2::<f32>()?;
        rows.iter().map(|row| self.root.decide(row)).collect()
    }
}

/// One-vs-rest linear scorer; the highest scoring class wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearEstimator {
    /// `n_classes` rows of `n_features` weights.
    pub coef: Vec<Vec<f32>>,
    pub intercept: Vec<f32>,
}

impl LinearEstimator {
    pub fn new(coef: Vec<Vec<f32>>, intercept: Vec<f32>) -> Self {
        Self { coef, intercept }
    }

    fn layer(&self, device: &Device) -> anyhow::Result<Linear> {
        let n_classes = self.coef.len();
        let n_features = self.coef.first().map(Vec::len).unwrap_or(0);
        let weight = Tensor::from_vec(
            self.coef.iter().flatten().copied().collect::<Vec<f32>>(),
            (n_classes, n_features),
            device,
        )?;
        let bias = Tensor::new(self.intercept.as_slice(), device)?;
        Ok(Linear::new(weight, Some(bias)))
    }

    pub fn predict_indices(&self, features: &Tensor) -> anyhow::Result<Vec<usize>> {
        let _span = tracing::span!(tracing::Level::TRACE, "linear").entered();
        let features = features.to_dtype(DType::F32)?;
        let scores = self.layer(features.device())?.forward(&features)?;
        let winners = scores.argmax(D::Minus1)?.to_vec1::<u32>()?;
        Ok(winners.into_iter().map(|i| i as usize).collect())
    }

    fn validate(&self, n_features: usize, n_classes: usize) -> Result<(), String> {
        if self.coef.len() != n_classes || self.intercept.len() != n_classes {
            return Err(format!(
                "linear estimator has {} weight rows and {} intercepts, expected {n_classes}",
                self.coef.len(),
                self.intercept.len()
            ));
        }
        if let Some(row) = self.coef.iter().find(|row| row.len() != n_features) {
            return Err(format!(
                "linear weight row has {} entries, expected {n_features}",
                row.len()
            ));
        }
        Ok(())
    }
}
