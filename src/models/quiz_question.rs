//! A quiz question is a pair <prompt, expected answer>

/// Which kind of material a quiz is built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizMode {
    Words,
    Sentences,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizQuestion {
    pub prompt: String,
    pub expected_answer: String,
}

impl QuizQuestion {
    pub fn new(prompt: impl Into<String>, expected_answer: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            expected_answer: expected_answer.into(),
        }
    }

    /// Case- and surrounding-whitespace-insensitive comparison with the expected answer.
    pub fn is_correct(&self, answer: &str) -> bool {
        answer.trim().to_lowercase() == self.expected_answer.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grading_ignores_case_and_whitespace() {
        let question = QuizQuestion::new("cat", "кот");

        assert!(question.is_correct("кот"));
        assert!(question.is_correct("  КОТ "));
        assert!(!question.is_correct("кошка"));
        assert!(!question.is_correct(""));
    }

    #[test]
    fn test_grading_keeps_inner_text() {
        let question = QuizQuestion::new("cat dog sun.", "кот собака солнце.");

        assert!(question.is_correct("Кот Собака Солнце."));
        assert!(!question.is_correct("кот собака солнце"));
        assert!(!question.is_correct("кот  собака солнце."));
    }
}
