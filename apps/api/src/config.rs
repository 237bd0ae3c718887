use std::path::Path;

use anyhow::{Context, Result};

/// Environment variables consulted, in order, for the Gemini API key.
const API_KEY_VARS: [&str; 3] = ["GEMINI_API_KEY", "VITE_GEMINI_KEY", "REACT_APP_GEMINI_KEY"];
const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_MAX_PREVIEW_BYTES: usize = 64 * 1024 * 1024;

/// Application configuration, resolved once at startup and passed explicitly
/// to everything that needs it.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// `None` when no key source is set; AI endpoints then report the missing key.
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    /// Upper bound on an uploaded preview bitmap.
    pub max_preview_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let key_file = std::env::var("GEMINI_KEY_FILE").ok();

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            gemini_api_key: resolve_api_key(
                |key| std::env::var(key).ok(),
                key_file.as_deref().map(Path::new),
            )?,
            gemini_model: std::env::var("GEMINI_MODEL")
                .ok()
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            max_preview_bytes: match std::env::var("MAX_PREVIEW_BYTES") {
                Ok(raw) => raw
                    .parse::<usize>()
                    .context("MAX_PREVIEW_BYTES must be a byte count")?,
                Err(_) => DEFAULT_MAX_PREVIEW_BYTES,
            },
        })
    }
}

/// Returns the first non-empty key among [`API_KEY_VARS`], then the trimmed
/// contents of `key_file`. A named key file that cannot be read is an error.
fn resolve_api_key(
    lookup: impl Fn(&str) -> Option<String>,
    key_file: Option<&Path>,
) -> Result<Option<String>> {
    if let Some(key) = API_KEY_VARS
        .iter()
        .filter_map(|&var| lookup(var))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
    {
        return Ok(Some(key));
    }

    let Some(path) = key_file else {
        return Ok(None);
    };
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read GEMINI_KEY_FILE '{}'", path.display()))?;
    let key = contents.trim();
    Ok((!key.is_empty()).then(|| key.to_string()))
}
