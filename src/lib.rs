pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod services;

pub use database::VocabularyStore;
pub use error::{Error, Result};
pub use models::{
    QuestionGenerator, QuizMode, QuizQuestion, QuizResults, QuizSession, StoredWord, Vocabulary,
    WordEntry,
};
