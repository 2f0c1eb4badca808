pub mod question_generator;
pub mod quiz_question;
pub mod quiz_session;
pub mod transcription;
pub mod vocabulary;
pub mod word_entry;

pub use question_generator::QuestionGenerator;
pub use quiz_question::{QuizMode, QuizQuestion};
pub use quiz_session::{AnswerOutcome, CurrentQuestion, QuizResults, QuizSession, QuizState};
pub use vocabulary::Vocabulary;
pub use word_entry::{StoredWord, UNKNOWN_TRANSCRIPTION, WordEntry};
