//! Preview templates and the export file names derived from them.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::{CoverLetter, Resume};

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResumeTemplate {
    Classic,
    Modern,
    Minimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverTemplate {
    T1,
    T2,
}

impl ResumeTemplate {
    pub const ALL: [ResumeTemplate; 3] = [
        ResumeTemplate::Classic,
        ResumeTemplate::Modern,
        ResumeTemplate::Minimal,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ResumeTemplate::Classic => "classic",
            ResumeTemplate::Modern => "modern",
            ResumeTemplate::Minimal => "minimal",
        }
    }

    /// DOM id of the rendered preview, used as the raster capture address.
    pub fn element_id(self) -> String {
        format!("preview-{}", self.key())
    }

    /// `"<name> - <Template>"`, falling back to `Resume` when the name is blank.
    pub fn file_base(self, resume: &Resume) -> String {
        let key = self.key();
        let label = format!("{}{}", key[..1].to_uppercase(), &key[1..]);
        file_base(&resume.name, "Resume", &label)
    }
}

impl CoverTemplate {
    pub const ALL: [CoverTemplate; 2] = [CoverTemplate::T1, CoverTemplate::T2];

    pub fn key(self) -> &'static str {
        match self {
            CoverTemplate::T1 => "t1",
            CoverTemplate::T2 => "t2",
        }
    }

    pub fn element_id(self) -> String {
        format!("preview-{}", self.key())
    }

    /// `"<applicant> - T1"`, falling back to `Cover` when the name is blank.
    pub fn file_base(self, letter: &CoverLetter) -> String {
        file_base(&letter.applicant.name, "Cover", &self.key().to_uppercase())
    }
}

/// True when `element_id` addresses one of the rendered previews.
pub fn is_preview_element(element_id: &str) -> bool {
    ResumeTemplate::ALL
        .into_iter()
        .map(ResumeTemplate::element_id)
        .chain(CoverTemplate::ALL.into_iter().map(CoverTemplate::element_id))
        .any(|id| id == element_id)
}

fn file_base(name: &str, fallback: &str, label: &str) -> String {
    let name = if name.trim().is_empty() { fallback } else { name };
    collapse_whitespace(&format!("{name} - {label}"))
}

/// Collapses every whitespace run to one space and trims the ends.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}
