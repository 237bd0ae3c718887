//! Layered JSON extraction from free-form model output.
//!
//! Models are asked for strict JSON but frequently wrap it in a code fence or
//! surround it with prose. Extraction tries, in order: the whole text, the
//! first fenced block, the span between the first `{` and the last `}`. If all
//! three fail the result is `None`; nothing here returns an error.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde_json::Value;

static FENCED_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)```(?:json)?\s*(.*?)```").expect("valid regex"));

/// Extracts the first JSON value found in `raw`, or `None`.
pub fn extract_json(raw: &str) -> Option<Value> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(value) = serde_json::from_str(text) {
        return Some(value);
    }

    let candidate = fenced_block(text).unwrap_or(text);
    if let Ok(value) = serde_json::from_str(candidate) {
        return Some(value);
    }

    brace_span(candidate).and_then(|span| serde_json::from_str(span).ok())
}

/// Like [`extract_json`], then deserializes into `T`. A shape mismatch is `None`.
pub fn extract_json_as<T: DeserializeOwned>(raw: &str) -> Option<T> {
    extract_json(raw).and_then(|value| serde_json::from_value(value).ok())
}

/// Contents of the first ```` ``` ```` or ```` ```json ```` block, trimmed.
fn fenced_block(text: &str) -> Option<&str> {
    FENCED_BLOCK
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
}

fn brace_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}
