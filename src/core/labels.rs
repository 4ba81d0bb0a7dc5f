//! Mapping from raw classifier codes to display labels.
//!
//! The classifier only emits integers. What those integers meant at training
//! time is a property of the exported model, so the mapping lives in a
//! [`LabelTable`] that can be replaced through configuration. Resolution is
//! total: a code the table does not know becomes an "unknown" label carrying
//! the raw value.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Sentiment category of a resolved label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Negative,
    Neutral,
    Positive,
    Unknown,
}

/// Visual treatment a host should give a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Info,
    Success,
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Sentiment {
    pub fn severity(&self) -> Severity {
        match self {
            Sentiment::Negative => Severity::Error,
            Sentiment::Neutral => Severity::Info,
            Sentiment::Positive => Severity::Success,
            Sentiment::Unknown => Severity::Warning,
        }
    }
}

/// A resolved classifier code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmotionLabel {
    pub code: i64,
    pub text: String,
    pub sentiment: Sentiment,
}

impl EmotionLabel {
    pub fn severity(&self) -> Severity {
        self.sentiment.severity()
    }

    pub fn is_unknown(&self) -> bool {
        self.sentiment == Sentiment::Unknown
    }
}

/// One configured row of a [`LabelTable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelEntry {
    pub code: i64,
    pub label: String,
    pub sentiment: Sentiment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelTable {
    entries: BTreeMap<i64, (String, Sentiment)>,
}

impl LabelTable {
    pub fn new(entries: impl IntoIterator<Item = LabelEntry>) -> Self {
        let entries = entries
            .into_iter()
            .map(|e| (e.code, (e.label, e.sentiment)))
            .collect();
        Self { entries }
    }

    /// Resolve a code. Never fails.
    pub fn resolve(&self, code: i64) -> EmotionLabel {
        match self.entries.get(&code) {
            Some((text, sentiment)) => EmotionLabel {
                code,
                text: text.clone(),
                sentiment: *sentiment,
            },
            None => EmotionLabel {
                code,
                text: format!("Desconocido (código {code})"),
                sentiment: Sentiment::Unknown,
            },
        }
    }

    pub fn entries(&self) -> Vec<LabelEntry> {
        self.entries
            .iter()
            .map(|(code, (label, sentiment))| LabelEntry {
                code: *code,
                label: label.clone(),
                sentiment: *sentiment,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for LabelTable {
    fn default() -> Self {
        Self::new([
            LabelEntry {
                code: -1,
                label: "Negativo 😠".into(),
                sentiment: Sentiment::Negative,
            },
            LabelEntry {
                code: 0,
                label: "Neutral 😐".into(),
                sentiment: Sentiment::Neutral,
            },
            LabelEntry {
                code: 1,
                label: "Positivo 😊".into(),
                sentiment: Sentiment::Positive,
            },
        ])
    }
}
