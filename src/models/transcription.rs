//! Phonetic transcription formatting.
//!
//! Turns raw phoneme codes (as found in the CMU pronouncing dictionary) into a
//! compact stress-marked notation:
//! - a `1` directly after a non-digit becomes the primary stress mark `ˈ`
//! - a `2` directly after a non-digit becomes the secondary stress mark `ˌ`
//! - spaces between phonemes are removed
//! - any digit left over (`0`, or a stress digit with nothing before it) is dropped
//! - the result is lower-cased and wrapped as `/[...]/`

use super::word_entry::UNKNOWN_TRANSCRIPTION;
use crate::services::phonetics::{PhoneticLookup, PhoneticMatch};
use regex::Regex;
use std::sync::LazyLock;

pub const PRIMARY_STRESS: char = 'ˈ';
pub const SECONDARY_STRESS: char = 'ˌ';

static PRIMARY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\D)1").unwrap());
static SECONDARY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\D)2").unwrap());
static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d").unwrap());

/// Formats one raw phoneme-code string, e.g. `"K AE1 T"` -> `"/[kaeˈt]/"`.
pub fn format_phones(raw: &str) -> String {
    let marked = PRIMARY.replace_all(raw, format!("${{1}}{PRIMARY_STRESS}"));
    let marked = SECONDARY.replace_all(&marked, format!("${{1}}{SECONDARY_STRESS}"));
    let joined = marked.replace(' ', "");
    let stripped = DIGITS.replace_all(&joined, "");

    format!("/[{}]/", stripped.to_lowercase())
}

/// Looks a word up and formats its first pronunciation, falling back to `/-/`.
pub fn transcribe(lookup: &dyn PhoneticLookup, word: &str) -> String {
    match lookup.phones_for_word(&word.trim().to_lowercase()) {
        PhoneticMatch::Found(pronunciations) => match pronunciations.first() {
            Some(phones) => format_phones(phones),
            None => UNKNOWN_TRANSCRIPTION.to_string(),
        },
        PhoneticMatch::NotFound => UNKNOWN_TRANSCRIPTION.to_string(),
    }
}
