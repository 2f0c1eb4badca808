//! Application settings, read from `WORDFORGE_*` environment variables.

use log::warn;
use std::path::PathBuf;
use std::time::Duration;

pub const VOCABULARY_VAR: &str = "WORDFORGE_VOCABULARY";
pub const CMUDICT_VAR: &str = "WORDFORGE_CMUDICT";
pub const SOURCE_LANG_VAR: &str = "WORDFORGE_SOURCE_LANG";
pub const TARGET_LANG_VAR: &str = "WORDFORGE_TARGET_LANG";
pub const ANSWER_PAUSE_VAR: &str = "WORDFORGE_ANSWER_PAUSE_MS";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub vocabulary_path: PathBuf,
    pub cmudict_path: PathBuf,
    pub source_lang: String,
    pub target_lang: String,
    /// How long the shell shows answer feedback before the next question.
    pub answer_pause: Duration,
    pub translation_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            vocabulary_path: PathBuf::from("words.json"),
            cmudict_path: PathBuf::from("cmudict.dict"),
            source_lang: "en".to_string(),
            target_lang: "ru".to_string(),
            answer_pause: Duration::from_millis(3000),
            translation_timeout: Duration::from_secs(10),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset or blank keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let mut config = Self::default();

        if let Some(path) = get(VOCABULARY_VAR) {
            config.vocabulary_path = PathBuf::from(path);
        }
        if let Some(path) = get(CMUDICT_VAR) {
            config.cmudict_path = PathBuf::from(path);
        }
        if let Some(lang) = get(SOURCE_LANG_VAR) {
            config.source_lang = lang.to_lowercase();
        }
        if let Some(lang) = get(TARGET_LANG_VAR) {
            config.target_lang = lang.to_lowercase();
        }
        if let Some(pause) = get(ANSWER_PAUSE_VAR) {
            match pause.parse::<u64>() {
                Ok(ms) => config.answer_pause = Duration::from_millis(ms),
                Err(_) => warn!(
                    "Ignoring {}={:?}, expected milliseconds",
                    ANSWER_PAUSE_VAR, pause
                ),
            }
        }

        config
    }
}
