//! TF-IDF vectorizer restored from an exported vocabulary and idf table.
//!
//! Normalization and word splitting go through the `tokenizers` BERT
//! normalizer and pre-tokenizer. Tokens shorter than `min_token_chars` are
//! dropped, which mirrors the usual two-character token pattern of the
//! fitting side.

use std::collections::HashMap;

use candle_core::{Device, Tensor};
use serde::{Deserialize, Serialize};
use tokenizers::normalizers::bert::BertNormalizer;
use tokenizers::pre_tokenizers::bert::BertPreTokenizer;
use tokenizers::{
    NormalizedString, Normalizer, OffsetReferential, OffsetType, PreTokenizedString, PreTokenizer,
};

use super::{Artifact, FeatureExtractor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    #[default]
    L2,
    None,
}

fn default_true() -> bool {
    true
}

fn default_min_token_chars() -> usize {
    2
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    #[serde(default)]
    pub format_version: Option<u32>,
    pub vocabulary: HashMap<String, usize>,
    pub idf: Vec<f32>,
    #[serde(default = "default_true")]
    pub lowercase: bool,
    #[serde(default)]
    pub strip_accents: bool,
    #[serde(default)]
    pub sublinear_tf: bool,
    #[serde(default)]
    pub norm: Norm,
    #[serde(default = "default_min_token_chars")]
    pub min_token_chars: usize,
}

impl TfidfVectorizer {
    /// Build a vectorizer with default options from a vocabulary and idf table.
    pub fn new(vocabulary: HashMap<String, usize>, idf: Vec<f32>) -> Self {
        Self {
            format_version: Some(super::SUPPORTED_FORMAT_VERSION),
            vocabulary,
            idf,
            lowercase: true,
            strip_accents: false,
            sublinear_tf: false,
            norm: Norm::L2,
            min_token_chars: default_min_token_chars(),
        }
    }

    pub fn n_features(&self) -> usize {
        self.idf.len()
    }

    /// Split a text into the terms the vocabulary is keyed on.
    pub fn tokenize(&self, text: &str) -> anyhow::Result<Vec<String>> {
        let mut normalized = NormalizedString::from(text);
        BertNormalizer::new(true, true, Some(self.strip_accents), self.lowercase)
            .normalize(&mut normalized)
            .map_err(anyhow::Error::msg)?;

        let mut pretokenized = PreTokenizedString::from(normalized);
        BertPreTokenizer
            .pre_tokenize(&mut pretokenized)
            .map_err(anyhow::Error::msg)?;

        Ok(pretokenized
            .get_splits(OffsetReferential::Original, OffsetType::Byte)
            .into_iter()
            .map(|(token, _, _)| token)
            .filter(|token| token.chars().count() >= self.min_token_chars)
            .map(str::to_owned)
            .collect())
    }

    fn row(&self, text: &str) -> anyhow::Result<Vec<f32>> {
        let mut row = vec![0f32; self.n_features()];
        for term in self.tokenize(text)? {
            if let Some(&idx) = self.vocabulary.get(&term) {
                let slot = row.get_mut(idx).ok_or_else(|| {
                    anyhow::anyhow!(
                        "term {term:?} maps to column {idx} but only {} columns exist",
                        self.n_features()
                    )
                })?;
                *slot += 1.0;
            }
        }

        for (idx, value) in row.iter_mut().enumerate() {
            if *value > 0.0 {
                let tf = if self.sublinear_tf {
                    1.0 + value.ln()
                } else {
                    *value
                };
                *value = tf * self.idf[idx];
            }
        }

        if self.norm == Norm::L2 {
            let norm = row.iter().map(|x| x * x).sum::<f32>().sqrt();
            if norm > 0.0 {
                row.iter_mut().for_each(|x| *x /= norm);
            }
        }

        Ok(row)
    }
}

impl FeatureExtractor for TfidfVectorizer {
    fn transform(&self, texts: &[&str]) -> anyhow::Result<Tensor> {
        let _span = tracing::span!(tracing::Level::TRACE, "tfidf-transform").entered();
        let n_features = self.n_features();
        let mut data = Vec::with_capacity(texts.len() * n_features);
        for text in texts {
            data.extend(self.row(text)?);
        }
        Ok(Tensor::from_vec(data, (texts.len(), n_features), &Device::Cpu)?)
    }
}

impl Artifact for TfidfVectorizer {
    const KIND: &'static str = "vectorizer";

    fn format_version(&self) -> Option<u32> {
        self.format_version
    }

    fn validate(&self) -> Result<(), String> {
        if self.vocabulary.is_empty() {
            return Err("vocabulary is empty".into());
        }
        if let Some((term, idx)) = self
            .vocabulary
            .iter()
            .find(|(_, idx)| **idx >= self.idf.len())
        {
            return Err(format!(
                "term {term:?} maps to column {idx} but only {} idf weights are present",
                self.idf.len()
            ));
        }
        if self.idf.iter().any(|w| !w.is_finite()) {
            return Err("idf contains non-finite weights".into());
        }
        Ok(())
    }
}
