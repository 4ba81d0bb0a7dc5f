//! Collecting comments from the manual text field or an uploaded document.

use crate::core::DecodeError;

/// Placeholder shown in the manual text field.
pub const DEFAULT_MANUAL_TEXT: &str =
    "Hoy es un día maravilloso y me siento muy feliz de trabajar en este proyecto.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Manual,
    Uploaded,
}

/// A `.txt` document with one comment per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedDocument {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadedDocument {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Decode as UTF-8. Invalid bytes are an error, never replaced.
    pub fn text(&self) -> Result<&str, DecodeError> {
        let text = std::str::from_utf8(&self.bytes).map_err(|e| DecodeError {
            name: self.name.clone(),
            valid_up_to: e.valid_up_to(),
        })?;
        Ok(text.strip_prefix('\u{feff}').unwrap_or(text))
    }
}

/// Trimmed, non-empty comments in the order they were supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBatch(Vec<String>);

impl InputBatch {
    /// Trim every text and drop the ones that end up empty.
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            texts
                .into_iter()
                .map(|t| t.as_ref().trim().to_owned())
                .filter(|t| !t.is_empty())
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a InputBatch {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Gather the texts to analyze for the selected mode.
///
/// An empty batch means there is nothing to analyze and is not an error.
pub fn collect(
    mode: InputMode,
    manual_text: &str,
    uploaded: Option<&UploadedDocument>,
) -> Result<InputBatch, DecodeError> {
    match mode {
        InputMode::Manual => Ok(InputBatch::from_texts([manual_text])),
        InputMode::Uploaded => match uploaded {
            Some(document) => {
                let text = document.text()?;
                Ok(InputBatch::from_texts(text.split(['\n', '\r'])))
            }
            None => Ok(InputBatch::default()),
        },
    }
}
