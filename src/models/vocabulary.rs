//! Container for all known words
use super::WordEntry;
use super::word_entry::normalize;
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Vocabulary {
    words: BTreeMap<String, WordEntry>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Case-insensitive lookup.
    pub fn get(&self, word: &str) -> Option<&WordEntry> {
        self.words
            .get(word)
            .or_else(|| self.words.get(&normalize(word)))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &WordEntry)> {
        self.words.iter().map(|(word, entry)| (word.as_str(), entry))
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.keys().map(String::as_str)
    }

    /// Inserts or overwrites, returning the previous entry.
    pub(crate) fn insert(&mut self, word: String, entry: WordEntry) -> Option<WordEntry> {
        self.words.insert(word, entry)
    }

    pub(crate) fn remove(&mut self, word: &str) -> Option<WordEntry> {
        self.words.remove(word)
    }

    pub(crate) fn as_map(&self) -> &BTreeMap<String, WordEntry> {
        &self.words
    }
}

impl FromIterator<(String, WordEntry)> for Vocabulary {
    fn from_iter<T: IntoIterator<Item = (String, WordEntry)>>(iter: T) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_vocabulary() -> Vocabulary {
        [
            ("cat", WordEntry::new("кот", "/[kaet]/")),
            ("dog", WordEntry::new("собака", "/[daog]/")),
        ]
        .into_iter()
        .map(|(word, entry)| (word.to_string(), entry))
        .collect()
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let vocabulary = create_test_vocabulary();

        assert_eq!(vocabulary.get("Cat").unwrap().translation, "кот");
        assert_eq!(vocabulary.get(" DOG ").unwrap().translation, "собака");
        assert!(vocabulary.get("bird").is_none());
    }

    #[test]
    fn test_insert_overwrites() {
        let mut vocabulary = create_test_vocabulary();
        let previous = vocabulary.insert("cat".to_string(), WordEntry::new("кошка", "/-/"));

        assert_eq!(previous.unwrap().translation, "кот");
        assert_eq!(vocabulary.len(), 2);
        assert_eq!(vocabulary.get("cat").unwrap().translation, "кошка");
    }

    #[test]
    fn test_words_are_sorted() {
        let vocabulary = create_test_vocabulary();
        let words: Vec<&str> = vocabulary.words().collect();
        assert_eq!(words, vec!["cat", "dog"]);
    }
}
