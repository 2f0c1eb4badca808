//! Error types for the vocabulary core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// All errors the core reports to the shell
#[derive(Error, Debug)]
pub enum Error {
    #[error("{field} must not be empty")]
    Validation { field: &'static str },

    #[error("vocabulary is empty, add some words first")]
    EmptyVocabulary,

    #[error("vocabulary has {available} words, at least {required} are needed")]
    InsufficientVocabulary { required: usize, available: usize },

    #[error("cannot {operation} while the quiz is {state}")]
    InvalidState {
        operation: &'static str,
        state: &'static str,
    },

    #[error("Translation failed: {0}")]
    Translation(String),

    #[error("Translation service unavailable: {0}")]
    TranslationUnavailable(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("vocabulary file {} is corrupt: {source}", .path.display())]
    CorruptVocabulary {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Could not replace vocabulary file: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
