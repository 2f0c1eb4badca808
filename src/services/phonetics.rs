//! Pronunciation lookup.
//!
//! `CmuDict` reads the CMU pronouncing dictionary text format:
//!
//! ```text
//! ;;; comment
//! HELLO  HH AH0 L OW1
//! HELLO(2)  HH EH0 L OW1
//! ```
//!
//! The lower-case `cmudict.dict` variant (`hello hh ah0 l ow1 # note`) is accepted too.

use log::{info, warn};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Outcome of a pronunciation lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PhoneticMatch {
    /// Raw phoneme codes, most common pronunciation first.
    Found(Vec<String>),
    NotFound,
}

/// Source of raw phoneme codes for lower-cased words.
///
/// Implementations never fail: anything that goes wrong is a `NotFound`.
pub trait PhoneticLookup {
    fn phones_for_word(&self, word: &str) -> PhoneticMatch;
}

#[derive(Clone, Debug, Default)]
pub struct CmuDict {
    entries: HashMap<String, Vec<String>>,
}

impl CmuDict {
    /// A dictionary with no entries; every lookup is `NotFound`.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn parse(contents: &str) -> Self {
        let mut entries: HashMap<String, Vec<String>> = HashMap::new();

        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(";;;") {
                continue;
            }
            let line = line.split('#').next().unwrap_or_default().trim();

            let Some((head, phones)) = line.split_once(char::is_whitespace) else {
                continue;
            };
            let phones = phones.split_whitespace().collect::<Vec<_>>().join(" ");
            if phones.is_empty() {
                continue;
            }

            // HELLO(2) is the second pronunciation of HELLO
            let word = match head.find('(') {
                Some(i) if head.ends_with(')') => &head[..i],
                _ => head,
            };
            entries
                .entry(word.to_lowercase())
                .or_default()
                .push(phones.to_uppercase());
        }

        Self { entries }
    }

    pub fn load(path: &Path) -> std::io::Result<Self> {
        let contents = fs::read_to_string(path)?;
        let dict = Self::parse(&contents);
        info!(
            "Loaded {} pronunciations from '{}'",
            dict.len(),
            path.display()
        );
        Ok(dict)
    }

    /// Loads the dictionary, or returns an empty one if the file can't be read.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load(path) {
            Ok(dict) => dict,
            Err(e) => {
                warn!(
                    "Pronunciation dictionary '{}' unavailable ({}), transcriptions will be unknown",
                    path.display(),
                    e
                );
                Self::empty()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PhoneticLookup for CmuDict {
    fn phones_for_word(&self, word: &str) -> PhoneticMatch {
        match self.entries.get(word) {
            Some(pronunciations) if !pronunciations.is_empty() => {
                PhoneticMatch::Found(pronunciations.clone())
            }
            _ => PhoneticMatch::NotFound,
        }
    }
}
