//! Quiz session management.
//! Walks an ordered list of questions once, grading each answer and keeping score.

use super::{QuizMode, QuizQuestion, Vocabulary};
use crate::error::{Error, Result};
use log::{debug, info};

/// Lifecycle of a quiz: built, answering question `i`, or done.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizState {
    Ready,
    Active(usize),
    Finished,
}

impl QuizState {
    fn name(&self) -> &'static str {
        match self {
            QuizState::Ready => "not started",
            QuizState::Active(_) => "in progress",
            QuizState::Finished => "finished",
        }
    }
}

/// What the shell shows for the current question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrentQuestion<'a> {
    pub question: &'a QuizQuestion,
    pub number: usize,
    pub total: usize,
    /// Only set in word mode, for words that are still in the vocabulary.
    pub transcription: Option<&'a str>,
}

/// Result of grading one answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub correct_answer: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizResults {
    pub score: usize,
    pub total: usize,
}

impl QuizResults {
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.score as f64 / self.total as f64 * 100.0
        }
    }
}

pub struct QuizSession {
    mode: QuizMode,
    questions: Vec<QuizQuestion>,
    state: QuizState,
    score: usize,
}

impl QuizSession {
    pub fn new(mode: QuizMode, questions: Vec<QuizQuestion>) -> Self {
        Self {
            mode,
            questions,
            state: QuizState::Ready,
            score: 0,
        }
    }

    pub fn mode(&self) -> QuizMode {
        self.mode
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total_count(&self) -> usize {
        self.questions.len()
    }

    pub fn is_finished(&self) -> bool {
        self.state == QuizState::Finished
    }

    fn invalid(&self, operation: &'static str) -> Error {
        Error::InvalidState {
            operation,
            state: self.state.name(),
        }
    }

    pub fn start(&mut self) -> Result<()> {
        if self.state != QuizState::Ready {
            return Err(self.invalid("start the quiz"));
        }
        if self.questions.is_empty() {
            return Err(Error::InvalidState {
                operation: "start the quiz",
                state: "without questions",
            });
        }

        info!(
            "Starting {:?} quiz with {} questions",
            self.mode,
            self.questions.len()
        );
        self.state = QuizState::Active(0);
        Ok(())
    }

    /// Returns the active question, with the prompt word's transcription in word mode.
    pub fn current_question<'a>(
        &'a self,
        vocabulary: &'a Vocabulary,
    ) -> Result<CurrentQuestion<'a>> {
        let QuizState::Active(index) = self.state else {
            return Err(self.invalid("show a question"));
        };

        let question = &self.questions[index];
        let transcription = match self.mode {
            QuizMode::Words => vocabulary
                .get(&question.prompt)
                .map(|entry| entry.transcription.as_str()),
            QuizMode::Sentences => None,
        };

        Ok(CurrentQuestion {
            question,
            number: index + 1,
            total: self.questions.len(),
            transcription,
        })
    }

    /// Grades the answer to the active question and moves on.
    pub fn submit_answer(&mut self, answer: &str) -> Result<AnswerOutcome> {
        let QuizState::Active(index) = self.state else {
            return Err(self.invalid("submit an answer"));
        };

        let question = &self.questions[index];
        let correct = question.is_correct(answer);
        if correct {
            self.score += 1;
        }
        let outcome = AnswerOutcome {
            correct,
            correct_answer: question.expected_answer.trim().to_lowercase(),
        };
        debug!("Question {} answered, correct: {}", index + 1, correct);

        self.state = if index + 1 == self.questions.len() {
            info!(
                "Quiz finished: {}/{} correct",
                self.score,
                self.questions.len()
            );
            QuizState::Finished
        } else {
            QuizState::Active(index + 1)
        };

        Ok(outcome)
    }

    pub fn results(&self) -> Result<QuizResults> {
        if self.state != QuizState::Finished {
            return Err(self.invalid("report results"));
        }
        Ok(QuizResults {
            score: self.score,
            total: self.questions.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{QuestionGenerator, WordEntry};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn create_test_vocabulary() -> Vocabulary {
        [("cat", "кот", "/[kaeˈt]/"), ("dog", "собака", "/-/")]
            .into_iter()
            .map(|(word, translation, transcription)| {
                (word.to_string(), WordEntry::new(translation, transcription))
            })
            .collect()
    }

    fn create_test_session() -> QuizSession {
        QuizSession::new(
            QuizMode::Words,
            vec![
                QuizQuestion::new("cat", "кот"),
                QuizQuestion::new("dog", "собака"),
            ],
        )
    }

    #[test]
    fn test_full_run() {
        let vocabulary = create_test_vocabulary();
        let mut session = create_test_session();
        assert_eq!(session.mode(), QuizMode::Words);
        assert_eq!(session.total_count(), 2);
        session.start().unwrap();

        let current = session.current_question(&vocabulary).unwrap();
        assert_eq!(current.question.prompt, "cat");
        assert_eq!(current.transcription, Some("/[kaeˈt]/"));
        assert_eq!((current.number, current.total), (1, 2));

        let outcome = session.submit_answer(" Кот ").unwrap();
        assert!(outcome.correct);
        assert_eq!(outcome.correct_answer, "кот");
        assert_eq!(session.state(), QuizState::Active(1));

        let outcome = session.submit_answer("кошка").unwrap();
        assert!(!outcome.correct);
        assert_eq!(outcome.correct_answer, "собака");

        assert!(session.is_finished());
        assert_eq!(session.results().unwrap(), QuizResults { score: 1, total: 2 });
        assert_eq!(session.results().unwrap().percentage(), 50.0);
    }

    #[test]
    fn test_current_question_before_start() {
        let vocabulary = Vocabulary::new();
        let session = create_test_session();
        let result = session.current_question(&vocabulary);
        assert!(matches!(result, Err(Error::InvalidState { .. })));
    }

    #[test]
    fn test_accessors_after_finish() {
        let vocabulary = create_test_vocabulary();
        let mut session = create_test_session();
        session.start().unwrap();
        session.submit_answer("кот").unwrap();
        session.submit_answer("собака").unwrap();

        assert!(matches!(
            session.current_question(&vocabulary),
            Err(Error::InvalidState { .. })
        ));
        assert!(matches!(
            session.submit_answer("кот"),
            Err(Error::InvalidState { .. })
        ));
        assert!(matches!(session.start(), Err(Error::InvalidState { .. })));
        assert_eq!(session.results().unwrap().score, 2);
    }

    #[test]
    fn test_results_before_finish() {
        let mut session = create_test_session();
        assert!(matches!(session.results(), Err(Error::InvalidState { .. })));

        session.start().unwrap();
        assert!(matches!(session.results(), Err(Error::InvalidState { .. })));
    }

    #[test]
    fn test_submit_before_start() {
        let mut session = create_test_session();
        assert!(matches!(
            session.submit_answer("кот"),
            Err(Error::InvalidState { .. })
        ));
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_start_without_questions() {
        let mut session = QuizSession::new(QuizMode::Words, Vec::new());
        assert!(matches!(session.start(), Err(Error::InvalidState { .. })));
        assert_eq!(session.state(), QuizState::Ready);
    }

    #[test]
    fn test_sentence_mode_has_no_transcription() {
        let vocabulary = create_test_vocabulary();
        let mut session = QuizSession::new(
            QuizMode::Sentences,
            vec![QuizQuestion::new("cat dog cat.", "кот собака кот.")],
        );
        session.start().unwrap();

        let current = session.current_question(&vocabulary).unwrap();
        assert_eq!(current.transcription, None);
    }

    #[test]
    fn test_score_stays_in_range() {
        let vocabulary = create_test_vocabulary();
        let questions = QuestionGenerator::new(StdRng::seed_from_u64(9))
            .word_mode(&vocabulary)
            .unwrap();
        let mut session = QuizSession::new(QuizMode::Words, questions);
        session.start().unwrap();

        while !session.is_finished() {
            let expected = session
                .current_question(&vocabulary)
                .unwrap()
                .question
                .expected_answer
                .clone();
            session.submit_answer(&expected.to_uppercase()).unwrap();
        }

        let results = session.results().unwrap();
        assert_eq!(results, QuizResults { score: 2, total: 2 });
    }

    #[test]
    fn test_single_word_end_to_end() {
        let vocabulary: Vocabulary = [("cat".to_string(), WordEntry::new("кот", "/[kæt]/"))]
            .into_iter()
            .collect();
        let questions = QuestionGenerator::new(StdRng::seed_from_u64(0))
            .word_mode(&vocabulary)
            .unwrap();
        assert_eq!(questions, vec![QuizQuestion::new("cat", "кот")]);

        let mut session = QuizSession::new(QuizMode::Words, questions);
        session.start().unwrap();
        assert!(session.submit_answer("КОТ").unwrap().correct);
        assert_eq!(session.results().unwrap(), QuizResults { score: 1, total: 1 });
    }
}
