//! WordEntry is a stored vocabulary record <translation, transcription>, keyed by the source word.
use serde::{Deserialize, Serialize};

/// Transcription used when no pronunciation is known for a word.
pub const UNKNOWN_TRANSCRIPTION: &str = "/-/";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub translation: String,
    /// Records written without a transcription get one derived on load.
    #[serde(default)]
    pub transcription: String,
}

impl WordEntry {
    /// Builds an entry with translation and transcription trimmed and lower-cased.
    pub fn new(translation: &str, transcription: &str) -> Self {
        Self {
            translation: normalize(translation),
            transcription: normalize(transcription),
        }
    }
}

/// A value as it appears in the vocabulary file.
///
/// Old files map a word straight to its translation string; current files map it
/// to a full record. Both shapes are accepted on read.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredWord {
    Current(WordEntry),
    Legacy(String),
}

/// Trims and lower-cases user or file supplied text.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}
