//! Builds quiz material from the vocabulary.
//!
//! Two modes are supported:
//! - word mode: one question per stored word, prompt = word, answer = translation
//! - sentence mode: a fixed number of naive sentences (3-5 distinct random words
//!   joined by spaces, ending with a period)
//!
//! In sentence mode the expected answer is a second, independently sampled
//! sentence translated word by word. It is not the translation of the prompt.

use super::{QuizQuestion, Vocabulary};
use crate::error::{Error, Result};
use log::debug;
use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::{SliceRandom, index};

/// Number of questions in a sentence quiz.
pub const SENTENCE_QUIZ_LENGTH: usize = 5;
pub const MIN_SENTENCE_WORDS: usize = 3;
pub const MAX_SENTENCE_WORDS: usize = 5;

pub struct QuestionGenerator<R: Rng> {
    rng: R,
}

impl QuestionGenerator<ThreadRng> {
    /// Generator backed by the thread-local RNG, so every run differs.
    pub fn with_thread_rng() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> QuestionGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// One question per stored word, in random order.
    pub fn word_mode(&mut self, vocabulary: &Vocabulary) -> Result<Vec<QuizQuestion>> {
        if vocabulary.is_empty() {
            return Err(Error::EmptyVocabulary);
        }

        let mut questions: Vec<QuizQuestion> = vocabulary
            .iter()
            .map(|(word, entry)| QuizQuestion::new(word, entry.translation.as_str()))
            .collect();
        questions.shuffle(&mut self.rng);

        debug!("Generated {} word questions", questions.len());
        Ok(questions)
    }

    /// A fixed number of sentence questions, in random order.
    pub fn sentence_mode(&mut self, vocabulary: &Vocabulary) -> Result<Vec<QuizQuestion>> {
        if vocabulary.is_empty() {
            return Err(Error::EmptyVocabulary);
        }
        if vocabulary.len() < MIN_SENTENCE_WORDS {
            return Err(Error::InsufficientVocabulary {
                required: MIN_SENTENCE_WORDS,
                available: vocabulary.len(),
            });
        }

        let mut questions = Vec::with_capacity(SENTENCE_QUIZ_LENGTH);
        for _ in 0..SENTENCE_QUIZ_LENGTH {
            let prompt = self.generate_sentence(vocabulary)?;
            let answer_source = self.generate_sentence(vocabulary)?;
            let expected_answer = translate_sentence(vocabulary, &answer_source);
            questions.push(QuizQuestion::new(prompt, expected_answer));
        }
        questions.shuffle(&mut self.rng);

        debug!("Generated {} sentence questions", questions.len());
        Ok(questions)
    }

    /// Samples 3-5 distinct words and joins them into a sentence ending in a period.
    ///
    /// The length is capped by the vocabulary size so a 3 or 4 word vocabulary
    /// still yields a sentence.
    pub fn generate_sentence(&mut self, vocabulary: &Vocabulary) -> Result<String> {
        let words: Vec<&str> = vocabulary.words().collect();
        if words.len() < MIN_SENTENCE_WORDS {
            return Err(Error::InsufficientVocabulary {
                required: MIN_SENTENCE_WORDS,
                available: words.len(),
            });
        }

        let length = self
            .rng
            .random_range(MIN_SENTENCE_WORDS..=MAX_SENTENCE_WORDS.min(words.len()));
        let picked: Vec<&str> = index::sample(&mut self.rng, words.len(), length)
            .into_iter()
            .map(|i| words[i])
            .collect();

        Ok(format!("{}.", picked.join(" ")))
    }
}

/// Replaces every known word of a sentence with its translation.
///
/// Lookup is case-insensitive; unknown tokens pass through unchanged. The
/// trailing period is dropped before lookup and added back once.
pub fn translate_sentence(vocabulary: &Vocabulary, sentence: &str) -> String {
    let body = sentence.trim().trim_end_matches('.');
    let translated: Vec<&str> = body
        .split_whitespace()
        .map(|token| {
            vocabulary
                .get(token)
                .map(|entry| entry.translation.as_str())
                .unwrap_or(token)
        })
        .collect();

    format!("{}.", translated.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WordEntry;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn vocabulary_of(pairs: &[(&str, &str)]) -> Vocabulary {
        pairs
            .iter()
            .map(|(word, translation)| (word.to_string(), WordEntry::new(translation, "/-/")))
            .collect()
    }

    fn create_test_vocabulary() -> Vocabulary {
        vocabulary_of(&[
            ("cat", "кот"),
            ("dog", "собака"),
            ("sun", "солнце"),
            ("house", "дом"),
            ("tree", "дерево"),
            ("water", "вода"),
        ])
    }

    fn seeded(seed: u64) -> QuestionGenerator<StdRng> {
        QuestionGenerator::new(StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_word_mode_is_permutation() {
        let vocabulary = create_test_vocabulary();
        let questions = seeded(7).word_mode(&vocabulary).unwrap();

        assert_eq!(questions.len(), vocabulary.len());

        let prompts: HashSet<&str> = questions.iter().map(|q| q.prompt.as_str()).collect();
        assert_eq!(prompts.len(), vocabulary.len());

        for question in &questions {
            let entry = vocabulary.get(&question.prompt).unwrap();
            assert_eq!(question.expected_answer, entry.translation);
        }
    }

    #[test]
    fn test_word_mode_same_seed_same_order() {
        let vocabulary = create_test_vocabulary();
        assert_eq!(
            seeded(42).word_mode(&vocabulary).unwrap(),
            seeded(42).word_mode(&vocabulary).unwrap()
        );
    }

    #[test]
    fn test_word_mode_empty_vocabulary() {
        let result = seeded(1).word_mode(&Vocabulary::new());
        assert!(matches!(result, Err(Error::EmptyVocabulary)));
    }

    #[test]
    fn test_sentence_mode_returns_five_questions() {
        let vocabulary = create_test_vocabulary();

        for seed in 0..20 {
            let questions = seeded(seed).sentence_mode(&vocabulary).unwrap();
            assert_eq!(questions.len(), SENTENCE_QUIZ_LENGTH);

            for question in &questions {
                assert!(question.prompt.ends_with('.'));
                assert!(question.expected_answer.ends_with('.'));
                assert!(!question.expected_answer.ends_with(".."));
            }
        }
    }

    #[test]
    fn test_sentence_mode_with_exactly_three_words() {
        let vocabulary = vocabulary_of(&[("cat", "кот"), ("dog", "собака"), ("sun", "солнце")]);
        let questions = seeded(3).sentence_mode(&vocabulary).unwrap();

        assert_eq!(questions.len(), SENTENCE_QUIZ_LENGTH);
        for question in &questions {
            assert_eq!(question.prompt.split_whitespace().count(), 3);
        }
    }

    #[test]
    fn test_sentence_mode_insufficient_vocabulary() {
        let vocabulary = vocabulary_of(&[("cat", "кот"), ("dog", "собака")]);
        let result = seeded(1).sentence_mode(&vocabulary);

        assert!(matches!(
            result,
            Err(Error::InsufficientVocabulary {
                required: 3,
                available: 2
            })
        ));
    }

    #[test]
    fn test_sentence_mode_empty_vocabulary() {
        let result = seeded(1).sentence_mode(&Vocabulary::new());
        assert!(matches!(result, Err(Error::EmptyVocabulary)));
    }

    #[test]
    fn test_generated_sentence_uses_distinct_known_words() {
        let vocabulary = create_test_vocabulary();
        let mut generator = seeded(11);

        for _ in 0..50 {
            let sentence = generator.generate_sentence(&vocabulary).unwrap();
            let words: Vec<&str> = sentence.trim_end_matches('.').split(' ').collect();

            assert!((MIN_SENTENCE_WORDS..=MAX_SENTENCE_WORDS).contains(&words.len()));
            assert_eq!(words.iter().collect::<HashSet<_>>().len(), words.len());
            assert!(words.iter().all(|w| vocabulary.contains(w)));
        }
    }

    #[test]
    fn test_sentence_answers_are_translations() {
        let vocabulary = create_test_vocabulary();
        let translations: HashSet<&str> = vocabulary
            .iter()
            .map(|(_, entry)| entry.translation.as_str())
            .collect();

        let questions = seeded(5).sentence_mode(&vocabulary).unwrap();
        for question in &questions {
            assert!(
                question
                    .expected_answer
                    .trim_end_matches('.')
                    .split(' ')
                    .all(|w| translations.contains(w))
            );
        }
    }

    #[test]
    fn test_translate_sentence() {
        let vocabulary = create_test_vocabulary();

        assert_eq!(
            translate_sentence(&vocabulary, "Cat dog sun."),
            "кот собака солнце."
        );
        assert_eq!(
            translate_sentence(&vocabulary, "cat unicorn tree."),
            "кот unicorn дерево."
        );
    }
}
