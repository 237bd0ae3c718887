//! Tone calibration: the single hint line every rewrite prompt carries.

use serde::{Deserialize, Serialize};

/// Writing tone selected in the editor toolbar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Concise,
    Technical,
    Leadership,
    Impact,
}

/// Returns the tone instruction inserted into rewrite prompts.
pub fn tone_hint(tone: Tone) -> &'static str {
    match tone {
        Tone::Technical => {
            "Prefer technical specificity (APIs, protocols, tools, perf metrics). Keep acronyms expanded once."
        }
        Tone::Leadership => {
            "Highlight ownership, cross-team influence, roadmap impact, mentoring, and stakeholder outcomes."
        }
        Tone::Impact => {
            "Emphasize measurable user/business impact (KPIs, revenue, adoption, latency). Keep lines punchy."
        }
        Tone::Concise => "Keep lines concise, ATS-friendly, and easy to scan.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tone_is_concise() {
        assert_eq!(Tone::default(), Tone::Concise);
        assert!(tone_hint(Tone::default()).contains("ATS-friendly"));
    }

    #[test]
    fn test_hints_are_distinct() {
        let hints = [Tone::Concise, Tone::Technical, Tone::Leadership, Tone::Impact].map(tone_hint);
        for (i, a) in hints.iter().enumerate() {
            for b in &hints[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_technical_mentions_protocols() {
        assert!(tone_hint(Tone::Technical).contains("protocols"));
    }

    #[test]
    fn test_tone_deserializes_lowercase() {
        let tone: Tone = serde_json::from_str("\"leadership\"").unwrap();
        assert_eq!(tone, Tone::Leadership);
        assert!(serde_json::from_str::<Tone>("\"Leadership\"").is_err());
    }
}
