// Cover-letter rewrite targets. Every reply is plain text; no JSON involved.

use serde::Deserialize;

use super::{split_blocks, tone::tone_hint, Improvable, Tone};
use crate::llm_client::prompts::{join_lines, with_content};
use crate::models::CoverLetter;

/// What part of the letter to rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "target", rename_all = "snake_case")]
pub enum CoverTarget {
    Intro,
    Paragraph { index: usize },
    AllParagraphs,
    Closing,
}

fn intro_prompt(letter: &CoverLetter, tone: Tone) -> String {
    let instructions = join_lines([
        "Rewrite this cover letter opening in 2-3 crisp sentences.",
        "Tie my experience directly to the target role/company, avoid fluff.",
        tone_hint(tone),
        "Return the paragraph only (no greetings/sign-offs).",
    ]);
    let content = join_lines([
        &*format!("Target Company: {}", letter.job.company),
        &*format!("Target Role: {}", letter.job.role),
        &*format!("Applicant Title: {}", letter.applicant.title),
        "",
        letter.intro.as_str(),
    ]);
    with_content(&instructions, &content)
}

fn paragraph_prompt(letter: &CoverLetter, index: usize, tone: Tone) -> Option<String> {
    let paragraph = letter.paragraphs.get(index)?;
    let instructions = join_lines([
        &*format!(
            "You are optimizing body paragraph #{} of a cover letter.",
            index + 1
        ),
        tone_hint(tone),
        "Keep 2-4 sentences; be specific, add reasonable measurable impact; avoid repetition; keep it truthful.",
        "Return paragraph only.",
        "",
        &*format!("Company: {}", letter.job.company),
        &*format!("Role: {}", letter.job.role),
        &*format!("Applicant Title: {}", letter.applicant.title),
    ]);
    Some(with_content(&instructions, &paragraph.text))
}

fn all_paragraphs_prompt(letter: &CoverLetter, tone: Tone) -> String {
    let instructions = join_lines([
        "Rewrite each paragraph for clarity, impact, and specificity (2-4 sentences each).",
        tone_hint(tone),
        "Return paragraphs separated by a single blank line. Do NOT add greetings or sign-offs.",
    ]);
    let raw = letter
        .paragraphs
        .iter()
        .enumerate()
        .map(|(i, p)| format!("Para {}:\n{}", i + 1, p.text))
        .collect::<Vec<_>>()
        .join("\n\n");
    with_content(&instructions, &raw)
}

fn closing_prompt(letter: &CoverLetter, tone: Tone) -> String {
    let instructions = join_lines([
        "Rewrite the closing for a confident, warm tone in 1-2 sentences.",
        "Include a subtle call to action for an interview; avoid clichés; no repetition.",
        tone_hint(tone),
        "Return closing only (no sign-off).",
    ]);
    with_content(&instructions, &letter.closing)
}

fn trimmed(raw: &str) -> Option<String> {
    let text = raw.trim();
    (!text.is_empty()).then(|| text.to_string())
}

impl Improvable for CoverLetter {
    type Target = CoverTarget;

    fn rewrite_prompt(&self, target: &CoverTarget, tone: Tone) -> Option<String> {
        match *target {
            CoverTarget::Intro => Some(intro_prompt(self, tone)),
            CoverTarget::Paragraph { index } => paragraph_prompt(self, index, tone),
            CoverTarget::AllParagraphs => Some(all_paragraphs_prompt(self, tone)),
            CoverTarget::Closing => Some(closing_prompt(self, tone)),
        }
    }

    fn apply_rewrite(&self, target: &CoverTarget, raw: &str) -> Option<CoverLetter> {
        let mut next = self.clone();
        match *target {
            CoverTarget::Intro => next.intro = trimmed(raw)?,
            CoverTarget::Paragraph { index } => {
                let text = trimmed(raw)?;
                next.paragraphs.get_mut(index)?.text = text;
            }
            CoverTarget::AllParagraphs => {
                let parts = split_blocks(raw);
                if parts.is_empty() {
                    return None;
                }
                for (paragraph, part) in next.paragraphs.iter_mut().zip(parts) {
                    paragraph.text = part;
                }
            }
            CoverTarget::Closing => next.closing = trimmed(raw)?,
        }
        Some(next)
    }
}
