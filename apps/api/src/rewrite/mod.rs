// AI-assisted rewriting of document sections.
// One generic flow for every target: build a prompt from the current snapshot,
// make a single generator call, apply whatever the reply yields, then backfill
// identifiers. A reply that yields nothing leaves the document unchanged.

pub mod cover_letter;
pub mod handlers;
pub mod resume;
pub mod tone;

use std::fmt::Debug;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

pub use tone::Tone;

use crate::document::Document;
use crate::llm_client::{LlmError, TextGenerator};

static BLANK_LINE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").expect("valid regex"));

/// A document whose sections can be rewritten by a text generator.
pub trait Improvable: Document {
    type Target: Debug + DeserializeOwned + Send + Sync;

    /// `None` when the target names an entry that does not exist.
    fn rewrite_prompt(&self, target: &Self::Target, tone: Tone) -> Option<String>;

    /// `None` when the reply yields nothing usable for the target.
    fn apply_rewrite(&self, target: &Self::Target, raw: &str) -> Option<Self>;
}

#[derive(Debug, Clone, Serialize)]
pub struct Improved<D> {
    pub document: D,
    /// False when the document was returned unchanged.
    pub applied: bool,
}

/// Splits a reply on blank lines into trimmed, non-empty blocks.
pub fn split_blocks(raw: &str) -> Vec<String> {
    BLANK_LINE_RUN
        .split(raw)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Rewrites `target` in `document`.
///
/// Only a failed remote call is an error; an unknown target or an unusable
/// reply returns the input with `applied: false`.
pub async fn improve<D: Improvable>(
    generator: &dyn TextGenerator,
    document: &D,
    target: &D::Target,
    tone: Tone,
) -> Result<Improved<D>, LlmError> {
    let unchanged = || Improved {
        document: document.clone(),
        applied: false,
    };

    let Some(prompt) = document.rewrite_prompt(target, tone) else {
        warn!("Rewrite target {target:?} does not exist; skipping");
        return Ok(unchanged());
    };

    let raw = match generator.generate(&prompt).await {
        Ok(raw) => raw,
        Err(LlmError::EmptyContent) => {
            warn!("Empty AI reply for {target:?}; document unchanged");
            return Ok(unchanged());
        }
        Err(e) => return Err(e),
    };

    match document.apply_rewrite(target, &raw) {
        Some(next) => {
            debug!("Applied AI rewrite for {target:?}");
            Ok(Improved {
                document: next.backfill_identifiers(),
                applied: true,
            })
        }
        None => {
            warn!("AI reply for {target:?} could not be applied; document unchanged");
            Ok(unchanged())
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::llm_client::{LlmError, TextGenerator};

    /// Replies with a canned string and records every prompt it receives.
    pub struct StubGenerator {
        reply: Result<String, u16>,
        pub prompts: Mutex<Vec<String>>,
    }

    impl StubGenerator {
        pub fn replying(reply: &str) -> Self {
            Self {
                reply: Ok(reply.to_string()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn failing(status: u16) -> Self {
            Self {
                reply: Err(status),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for StubGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            match &self.reply {
                Ok(text) if text.trim().is_empty() => Err(LlmError::EmptyContent),
                Ok(text) => Ok(text.clone()),
                Err(status) => Err(LlmError::Api {
                    status: *status,
                    message: "stub failure".to_string(),
                }),
            }
        }
    }
}
