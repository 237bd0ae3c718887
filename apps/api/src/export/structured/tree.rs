// Word-processor document trees built straight from the document model.
// Block order here is the order of the exported file.

use crate::models::{CoverLetter, Resume};

pub const CONTACT_SEPARATOR: &str = "  |  ";
const NAME_PLACEHOLDER: &str = "Your Name";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    Title,
    Heading2,
}

impl HeadingLevel {
    pub fn style_id(self) -> &'static str {
        match self {
            HeadingLevel::Title => "Title",
            HeadingLevel::Heading2 => "Heading2",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
}

impl TextRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            bold: true,
            ..Self::plain(text)
        }
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            italic: true,
            ..Self::plain(text)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: HeadingLevel, text: String },
    Paragraph { runs: Vec<TextRun> },
}

impl Block {
    pub fn title(text: impl Into<String>) -> Self {
        Block::Heading {
            level: HeadingLevel::Title,
            text: text.into(),
        }
    }

    pub fn heading(text: impl Into<String>) -> Self {
        Block::Heading {
            level: HeadingLevel::Heading2,
            text: text.into(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Block::Paragraph {
            runs: vec![TextRun::plain(text)],
        }
    }

    pub fn runs(runs: Vec<TextRun>) -> Self {
        Block::Paragraph { runs }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocTree {
    pub blocks: Vec<Block>,
}

impl DocTree {
    fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }
}

fn join_present<'a>(values: impl IntoIterator<Item = &'a str>, separator: &str) -> String {
    values
        .into_iter()
        .filter(|v| !v.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

/// Résumé layout: identity, contact, summary, skills, experience, optional
/// projects, education. Achievements are not part of the Word export.
pub fn resume_tree(resume: &Resume) -> DocTree {
    let mut tree = DocTree::default();

    tree.push(Block::title(or_placeholder(&resume.name, NAME_PLACEHOLDER)));
    tree.push(Block::heading(resume.title.as_str()));
    tree.push(Block::text(join_present(
        resume.contact.ordered(),
        CONTACT_SEPARATOR,
    )));

    tree.push(Block::heading("Summary"));
    tree.push(Block::text(resume.summary.as_str()));

    tree.push(Block::heading("Skills"));
    tree.push(Block::text(resume.skills.join(", ")));

    tree.push(Block::heading("Experience"));
    for exp in &resume.experience {
        tree.push(Block::runs(vec![
            TextRun::bold(exp.role.as_str()),
            TextRun::plain(format!(" · {}", exp.company)),
            TextRun::italic(format!(" ({})", exp.period)),
        ]));
        for bullet in &exp.bullets {
            tree.push(Block::text(format!("• {bullet}")));
        }
    }

    if !resume.projects.is_empty() {
        tree.push(Block::heading("Projects"));
    }
    for project in &resume.projects {
        let mut runs = vec![TextRun::bold(project.name.as_str())];
        if !project.link.is_empty() {
            runs.push(TextRun::italic(format!("  –  {}", project.link)));
        }
        tree.push(Block::runs(runs));
        tree.push(Block::text(project.details.as_str()));
    }

    tree.push(Block::heading("Education"));
    for ed in &resume.education {
        tree.push(Block::runs(vec![
            TextRun::bold(ed.school.as_str()),
            TextRun::plain(format!(" · {}", ed.degree)),
            TextRun::italic(format!(" ({})", ed.period)),
        ]));
    }

    tree
}

/// Letter layout: letterhead, date, recipient block, salutation, body, sign-off.
pub fn cover_letter_tree(letter: &CoverLetter) -> DocTree {
    let applicant = &letter.applicant;
    let job = &letter.job;
    let mut tree = DocTree::default();

    tree.push(Block::title(or_placeholder(&applicant.name, NAME_PLACEHOLDER)));
    tree.push(Block::heading(applicant.title.as_str()));
    tree.push(Block::text(join_present(
        [
            applicant.email.as_str(),
            applicant.phone.as_str(),
            applicant.location.as_str(),
            applicant.linkedin.as_str(),
            applicant.website.as_str(),
        ],
        CONTACT_SEPARATOR,
    )));

    if !job.today.is_empty() {
        tree.push(Block::text(job.today.as_str()));
    }

    let recipient = match (job.recipient_name.is_empty(), job.recipient_title.is_empty()) {
        (false, false) => format!("{}, {}", job.recipient_name, job.recipient_title),
        (false, true) => job.recipient_name.clone(),
        (true, false) => job.recipient_title.clone(),
        (true, true) => String::new(),
    };
    for line in [
        recipient.as_str(),
        job.company_location.as_str(),
        job.company.as_str(),
        job.recipient_email.as_str(),
    ] {
        if !line.is_empty() {
            tree.push(Block::text(line));
        }
    }

    tree.push(Block::text(format!(
        "Dear {},",
        or_placeholder(&job.recipient_name, "Hiring Manager")
    )));

    if !letter.intro.is_empty() {
        tree.push(Block::text(letter.intro.as_str()));
    }
    for paragraph in &letter.paragraphs {
        tree.push(Block::text(paragraph.text.as_str()));
    }
    if !letter.closing.is_empty() {
        tree.push(Block::text(letter.closing.as_str()));
    }

    tree.push(Block::text(format!(
        "{},",
        or_placeholder(&letter.sign_off, "Sincerely")
    )));
    tree.push(Block::text(or_placeholder(&applicant.name, NAME_PLACEHOLDER)));

    tree
}
