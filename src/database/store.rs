//! Vocabulary store backed by a JSON file
//!
//! Owns the word mapping, keeps it normalized, and writes it back to disk after
//! every change. Files from older versions (word -> bare translation) are
//! upgraded on load.

use super::file::{read_vocabulary_file, write_vocabulary_file};
use crate::error::{Error, Result};
use crate::models::transcription::transcribe;
use crate::models::word_entry::normalize;
use crate::models::{StoredWord, Vocabulary, WordEntry};
use crate::services::PhoneticLookup;
use log::{info, warn};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub struct VocabularyStore {
    path: PathBuf,
    vocabulary: Vocabulary,
    phonetics: Box<dyn PhoneticLookup>,
}

impl VocabularyStore {
    /// Opens the store at `path` without reading it.
    pub fn new(path: impl Into<PathBuf>, phonetics: Box<dyn PhoneticLookup>) -> Self {
        Self {
            path: path.into(),
            vocabulary: Vocabulary::new(),
            phonetics,
        }
    }

    /// Opens the store and reads the file, starting empty if it doesn't exist.
    pub fn open(path: impl Into<PathBuf>, phonetics: Box<dyn PhoneticLookup>) -> Result<Self> {
        let mut store = Self::new(path, phonetics);
        store.load()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the backing file, upgrading old entries and saving if anything changed.
    pub fn load(&mut self) -> Result<()> {
        let Some(stored) = read_vocabulary_file(&self.path)? else {
            info!(
                "No vocabulary file at '{}', starting empty",
                self.path.display()
            );
            self.vocabulary = Vocabulary::new();
            return Ok(());
        };

        let (vocabulary, changed) = self.decode(stored);
        self.vocabulary = vocabulary;
        info!(
            "Loaded {} words from '{}'",
            self.vocabulary.len(),
            self.path.display()
        );

        if changed {
            info!("Rewriting '{}' in the current format", self.path.display());
            self.save()?;
        }
        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        write_vocabulary_file(self.vocabulary.as_map(), &self.path)
    }

    /// Validates and stores a word, overwriting any previous entry.
    ///
    /// An empty `transcription` is derived from the pronunciation dictionary.
    pub fn upsert(
        &mut self,
        word: &str,
        translation: &str,
        transcription: &str,
    ) -> Result<WordEntry> {
        let word = normalize(word);
        if word.is_empty() {
            return Err(Error::Validation { field: "word" });
        }
        let translation = normalize(translation);
        if translation.is_empty() {
            return Err(Error::Validation {
                field: "translation",
            });
        }

        let transcription = match transcription.trim() {
            "" => self.transcribe(&word),
            given => given.to_string(),
        };
        let entry = WordEntry::new(&translation, &transcription);

        let previous = self.vocabulary.insert(word.clone(), entry.clone());
        if let Err(e) = self.save() {
            match previous {
                Some(previous) => self.vocabulary.insert(word, previous),
                None => self.vocabulary.remove(&word),
            };
            return Err(e);
        }

        info!("Saved '{}' -> '{}'", word, entry.translation);
        Ok(entry)
    }

    /// Deletes a word, returning its entry if it was present.
    pub fn remove(&mut self, word: &str) -> Result<Option<WordEntry>> {
        let word = normalize(word);
        let Some(removed) = self.vocabulary.remove(&word) else {
            return Ok(None);
        };

        if let Err(e) = self.save() {
            self.vocabulary.insert(word, removed);
            return Err(e);
        }

        info!("Removed '{}'", word);
        Ok(Some(removed))
    }

    pub fn get(&self, word: &str) -> Option<&WordEntry> {
        self.vocabulary.get(word)
    }

    /// Read-only view of every entry.
    pub fn all(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Formatted transcription for a word, `/-/` if unknown.
    pub fn transcribe(&self, word: &str) -> String {
        transcribe(self.phonetics.as_ref(), word)
    }

    /// Writes the current vocabulary to another file.
    pub fn export_to(&self, path: &Path) -> Result<()> {
        write_vocabulary_file(self.vocabulary.as_map(), path)?;
        info!(
            "Exported {} words to '{}'",
            self.vocabulary.len(),
            path.display()
        );
        Ok(())
    }

    /// Merges another vocabulary file into this one, overwriting on conflict.
    ///
    /// Returns the number of words imported.
    pub fn import_from(&mut self, path: &Path) -> Result<usize> {
        let stored = read_vocabulary_file(path)?.ok_or_else(|| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("'{}' does not exist", path.display()),
            ))
        })?;

        let (imported, _) = self.decode(stored);
        let snapshot = self.vocabulary.clone();
        for (word, entry) in imported.iter() {
            self.vocabulary.insert(word.to_string(), entry.clone());
        }

        if let Err(e) = self.save() {
            self.vocabulary = snapshot;
            return Err(e);
        }

        info!("Imported {} words from '{}'", imported.len(), path.display());
        Ok(imported.len())
    }

    /// Normalizes stored records, transcribing legacy ones and those without a
    /// transcription.
    ///
    /// Entries with a blank word or translation are skipped. When two words
    /// normalize to the same key, the one already in normalized form wins.
    /// Returns the vocabulary and whether it differs from what was stored.
    fn decode(&self, stored: BTreeMap<String, StoredWord>) -> (Vocabulary, bool) {
        let mut changed = false;
        let mut vocabulary = Vocabulary::new();

        for (word, value) in stored {
            let key = normalize(&word);
            if key.is_empty() {
                warn!("Skipping entry with an empty word");
                changed = true;
                continue;
            }

            let (translation, transcription) = match value {
                StoredWord::Current(entry) => (entry.translation, entry.transcription),
                StoredWord::Legacy(translation) => (translation, String::new()),
            };
            if translation.trim().is_empty() {
                warn!("Skipping '{}': it has no translation", word);
                changed = true;
                continue;
            }
            let transcription = match transcription.trim() {
                "" => {
                    changed = true;
                    self.transcribe(&key)
                }
                given => given.to_string(),
            };
            let entry = WordEntry::new(&translation, &transcription);

            if key != word {
                changed = true;
            }
            if let Some(existing) = vocabulary.get(&key) {
                warn!(
                    "'{}' duplicates '{}', dropping translation '{}'",
                    word,
                    key,
                    if key == word {
                        existing.translation.clone()
                    } else {
                        entry.translation.clone()
                    }
                );
                if key != word {
                    continue;
                }
            }
            vocabulary.insert(key, entry);
        }

        (vocabulary, changed)
    }
}
