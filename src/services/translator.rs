//! Word translation through an external service.

use crate::error::{Error, Result};
use log::{debug, warn};
use serde::Deserialize;
use std::time::Duration;

const MYMEMORY_URL: &str = "https://api.mymemory.translated.net/get";

/// Markers the service puts into the translated text instead of a translation.
const UNAVAILABLE_MARKERS: [&str; 2] = ["INVALID CREDENTIALS", "MYMEMORY WARNING"];

pub trait Translator {
    /// Translates a lower-cased word into `target_lang`, returning lower-cased text.
    fn translate(&self, word: &str, target_lang: &str) -> Result<String>;
}

/// Client for the free MyMemory translation API.
pub struct MyMemoryTranslator {
    client: reqwest::blocking::Client,
    source_lang: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MyMemoryResponse {
    response_data: MyMemoryData,
    // The service reports this both as a number and as a string.
    response_status: serde_json::Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MyMemoryData {
    translated_text: String,
}

impl MyMemoryTranslator {
    pub fn new(source_lang: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            source_lang: source_lang.into(),
        })
    }
}

impl Translator for MyMemoryTranslator {
    fn translate(&self, word: &str, target_lang: &str) -> Result<String> {
        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return Err(Error::Validation { field: "word" });
        }

        let langpair = format!("{}|{}", self.source_lang, target_lang);
        debug!("Translating '{}' ({})", word, langpair);

        let body = self
            .client
            .get(MYMEMORY_URL)
            .query(&[("q", word.as_str()), ("langpair", langpair.as_str())])
            .send()?
            .text()?;

        interpret_response(&body)
    }
}

/// Turns a raw service payload into a translation or a typed failure.
fn interpret_response(body: &str) -> Result<String> {
    let response: MyMemoryResponse = serde_json::from_str(body)
        .map_err(|e| Error::Translation(format!("unexpected response: {e}")))?;

    let text = response.response_data.translated_text;
    let upper = text.to_uppercase();
    if let Some(marker) = UNAVAILABLE_MARKERS.iter().find(|m| upper.contains(*m)) {
        warn!("Translation service refused the request: {}", text);
        return Err(Error::TranslationUnavailable(marker.to_string()));
    }

    let status = match &response.response_status {
        serde_json::Value::Number(n) => n.as_u64(),
        serde_json::Value::String(s) => s.parse().ok(),
        _ => None,
    };
    if status != Some(200) {
        return Err(Error::Translation(format!(
            "service returned status {}: {}",
            response.response_status, text
        )));
    }

    let translation = text.trim().to_lowercase();
    if translation.is_empty() {
        return Err(Error::Translation("empty translation".to_string()));
    }
    Ok(translation)
}
