//! Typed field paths and single-field updates.
//!
//! Paths arrive from the editor as dotted strings (`experience.1.role`,
//! `contact.email`, `paragraphs.0`) and are parsed once into an enum, so an
//! update can only ever name a field that exists in the model.

use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::models::{
    Applicant, Contact, CoverLetter, EducationEntry, ExperienceEntry, JobTarget, ProjectEntry,
    Resume,
};

#[derive(Debug, Error, PartialEq)]
pub enum FieldPathError {
    #[error("Unknown field path '{0}'")]
    Unknown(String),

    #[error("Invalid list index '{index}' in field path '{path}'")]
    BadIndex { path: String, index: String },
}

// ────────────────────────────────────────────────────────────────────────────
// Résumé paths
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Email,
    Phone,
    Location,
    Website,
    Linkedin,
    Github,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceField {
    Company,
    Role,
    Period,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectField {
    Name,
    Link,
    Details,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationField {
    School,
    Degree,
    Period,
}

/// One addressable field of a [`Resume`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum ResumeField {
    Name,
    Title,
    Summary,
    /// Comma-separated on input; stored as a trimmed list.
    Skills,
    Contact(ContactField),
    Experience { index: usize, field: ExperienceField },
    ExperienceBullet { index: usize, bullet: usize },
    Project { index: usize, field: ProjectField },
    Education { index: usize, field: EducationField },
    Achievement(usize),
}

impl ContactField {
    fn slot(self, contact: &mut Contact) -> &mut String {
        match self {
            ContactField::Email => &mut contact.email,
            ContactField::Phone => &mut contact.phone,
            ContactField::Location => &mut contact.location,
            ContactField::Website => &mut contact.website,
            ContactField::Linkedin => &mut contact.linkedin,
            ContactField::Github => &mut contact.github,
        }
    }
}

impl ExperienceField {
    fn slot(self, entry: &mut ExperienceEntry) -> &mut String {
        match self {
            ExperienceField::Company => &mut entry.company,
            ExperienceField::Role => &mut entry.role,
            ExperienceField::Period => &mut entry.period,
        }
    }
}

impl ProjectField {
    fn slot(self, entry: &mut ProjectEntry) -> &mut String {
        match self {
            ProjectField::Name => &mut entry.name,
            ProjectField::Link => &mut entry.link,
            ProjectField::Details => &mut entry.details,
        }
    }
}

impl EducationField {
    fn slot(self, entry: &mut EducationEntry) -> &mut String {
        match self {
            EducationField::School => &mut entry.school,
            EducationField::Degree => &mut entry.degree,
            EducationField::Period => &mut entry.period,
        }
    }
}

impl FromStr for ResumeField {
    type Err = FieldPathError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let unknown = || FieldPathError::Unknown(path.to_string());
        let segments: Vec<&str> = path.split('.').collect();

        let field = match segments.as_slice() {
            ["name"] => ResumeField::Name,
            ["title"] => ResumeField::Title,
            ["summary"] => ResumeField::Summary,
            ["skills"] => ResumeField::Skills,
            ["contact", key] => ResumeField::Contact(match *key {
                "email" => ContactField::Email,
                "phone" => ContactField::Phone,
                "location" => ContactField::Location,
                "website" => ContactField::Website,
                "linkedin" => ContactField::Linkedin,
                "github" => ContactField::Github,
                _ => return Err(unknown()),
            }),
            ["experience", index, "bullets", bullet] => ResumeField::ExperienceBullet {
                index: parse_index(path, index)?,
                bullet: parse_index(path, bullet)?,
            },
            ["experience", index, key] => ResumeField::Experience {
                index: parse_index(path, index)?,
                field: match *key {
                    "company" => ExperienceField::Company,
                    "role" => ExperienceField::Role,
                    "period" => ExperienceField::Period,
                    _ => return Err(unknown()),
                },
            },
            ["projects", index, key] => ResumeField::Project {
                index: parse_index(path, index)?,
                field: match *key {
                    "name" => ProjectField::Name,
                    "link" => ProjectField::Link,
                    "details" => ProjectField::Details,
                    _ => return Err(unknown()),
                },
            },
            ["education", index, key] => ResumeField::Education {
                index: parse_index(path, index)?,
                field: match *key {
                    "school" => EducationField::School,
                    "degree" => EducationField::Degree,
                    "period" => EducationField::Period,
                    _ => return Err(unknown()),
                },
            },
            ["achievements", index] => ResumeField::Achievement(parse_index(path, index)?),
            _ => return Err(unknown()),
        };

        Ok(field)
    }
}

impl TryFrom<String> for ResumeField {
    type Error = FieldPathError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Returns a new résumé with exactly one field replaced.
pub fn update_resume(resume: &Resume, field: &ResumeField, value: &str) -> Resume {
    let mut next = resume.clone();
    let value = value.to_string();

    match *field {
        ResumeField::Name => next.name = value,
        ResumeField::Title => next.title = value,
        ResumeField::Summary => next.summary = value,
        ResumeField::Skills => next.skills = split_skills(&value),
        ResumeField::Contact(key) => *key.slot(&mut next.contact) = value,
        ResumeField::Experience { index, field } => {
            if let Some(entry) = next.experience.get_mut(index) {
                *field.slot(entry) = value;
            }
        }
        ResumeField::ExperienceBullet { index, bullet } => {
            if let Some(line) = next
                .experience
                .get_mut(index)
                .and_then(|entry| entry.bullets.get_mut(bullet))
            {
                *line = value;
            }
        }
        ResumeField::Project { index, field } => {
            if let Some(entry) = next.projects.get_mut(index) {
                *field.slot(entry) = value;
            }
        }
        ResumeField::Education { index, field } => {
            if let Some(entry) = next.education.get_mut(index) {
                *field.slot(entry) = value;
            }
        }
        ResumeField::Achievement(index) => {
            if let Some(line) = next.achievements.get_mut(index) {
                *line = value;
            }
        }
    }

    next
}

/// Splits the free-text skills input on commas, trimming and dropping blanks.
pub fn split_skills(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Cover-letter paths
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicantField {
    Name,
    Title,
    Email,
    Phone,
    Location,
    Linkedin,
    Website,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobField {
    Company,
    Role,
    JobLink,
    JobId,
    CompanyLocation,
    RecipientName,
    RecipientTitle,
    RecipientEmail,
    Today,
}

/// One addressable field of a [`CoverLetter`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum CoverLetterField {
    Applicant(ApplicantField),
    Job(JobField),
    Intro,
    Paragraph(usize),
    Closing,
    SignOff,
}

impl ApplicantField {
    fn slot(self, applicant: &mut Applicant) -> &mut String {
        match self {
            ApplicantField::Name => &mut applicant.name,
            ApplicantField::Title => &mut applicant.title,
            ApplicantField::Email => &mut applicant.email,
            ApplicantField::Phone => &mut applicant.phone,
            ApplicantField::Location => &mut applicant.location,
            ApplicantField::Linkedin => &mut applicant.linkedin,
            ApplicantField::Website => &mut applicant.website,
        }
    }
}

impl JobField {
    fn slot(self, job: &mut JobTarget) -> &mut String {
        match self {
            JobField::Company => &mut job.company,
            JobField::Role => &mut job.role,
            JobField::JobLink => &mut job.job_link,
            JobField::JobId => &mut job.job_id,
            JobField::CompanyLocation => &mut job.company_location,
            JobField::RecipientName => &mut job.recipient_name,
            JobField::RecipientTitle => &mut job.recipient_title,
            JobField::RecipientEmail => &mut job.recipient_email,
            JobField::Today => &mut job.today,
        }
    }
}

impl FromStr for CoverLetterField {
    type Err = FieldPathError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let unknown = || FieldPathError::Unknown(path.to_string());
        let segments: Vec<&str> = path.split('.').collect();

        let field = match segments.as_slice() {
            ["intro"] => CoverLetterField::Intro,
            ["closing"] => CoverLetterField::Closing,
            ["sign_off"] => CoverLetterField::SignOff,
            ["paragraphs", index] => CoverLetterField::Paragraph(parse_index(path, index)?),
            ["applicant", key] => CoverLetterField::Applicant(match *key {
                "name" => ApplicantField::Name,
                "title" => ApplicantField::Title,
                "email" => ApplicantField::Email,
                "phone" => ApplicantField::Phone,
                "location" => ApplicantField::Location,
                "linkedin" => ApplicantField::Linkedin,
                "website" => ApplicantField::Website,
                _ => return Err(unknown()),
            }),
            ["job", key] => CoverLetterField::Job(match *key {
                "company" => JobField::Company,
                "role" => JobField::Role,
                "job_link" => JobField::JobLink,
                "job_id" => JobField::JobId,
                "company_location" => JobField::CompanyLocation,
                "recipient_name" => JobField::RecipientName,
                "recipient_title" => JobField::RecipientTitle,
                "recipient_email" => JobField::RecipientEmail,
                "today" => JobField::Today,
                _ => return Err(unknown()),
            }),
            _ => return Err(unknown()),
        };

        Ok(field)
    }
}

impl TryFrom<String> for CoverLetterField {
    type Error = FieldPathError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Returns a new cover letter with exactly one field replaced.
pub fn update_cover_letter(
    letter: &CoverLetter,
    field: &CoverLetterField,
    value: &str,
) -> CoverLetter {
    let mut next = letter.clone();
    let value = value.to_string();

    match *field {
        CoverLetterField::Applicant(key) => *key.slot(&mut next.applicant) = value,
        CoverLetterField::Job(key) => *key.slot(&mut next.job) = value,
        CoverLetterField::Intro => next.intro = value,
        CoverLetterField::Closing => next.closing = value,
        CoverLetterField::SignOff => next.sign_off = value,
        CoverLetterField::Paragraph(index) => {
            if let Some(paragraph) = next.paragraphs.get_mut(index) {
                paragraph.text = value;
            }
        }
    }

    next
}

fn parse_index(path: &str, raw: &str) -> Result<usize, FieldPathError> {
    raw.parse().map_err(|_| FieldPathError::BadIndex {
        path: path.to_string(),
        index: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;

    #[test]
    fn test_parse_simple_paths() {
        assert_eq!("name".parse::<ResumeField>().unwrap(), ResumeField::Name);
        assert_eq!(
            "contact.github".parse::<ResumeField>().unwrap(),
            ResumeField::Contact(ContactField::Github)
        );
        assert_eq!(
            "achievements.3".parse::<ResumeField>().unwrap(),
            ResumeField::Achievement(3)
        );
    }

    #[test]
    fn test_parse_nested_paths() {
        assert_eq!(
            "experience.1.role".parse::<ResumeField>().unwrap(),
            ResumeField::Experience {
                index: 1,
                field: ExperienceField::Role
            }
        );
        assert_eq!(
            "experience.0.bullets.2".parse::<ResumeField>().unwrap(),
            ResumeField::ExperienceBullet {
                index: 0,
                bullet: 2
            }
        );
        assert_eq!(
            "projects.0.link".parse::<ResumeField>().unwrap(),
            ResumeField::Project {
                index: 0,
                field: ProjectField::Link
            }
        );
    }

    #[test]
    fn test_parse_rejects_unknown_paths() {
        assert!(matches!(
            "contact.fax".parse::<ResumeField>(),
            Err(FieldPathError::Unknown(_))
        ));
        assert!(matches!(
            "experience.x.role".parse::<ResumeField>(),
            Err(FieldPathError::BadIndex { .. })
        ));
        assert!("".parse::<ResumeField>().is_err());
        assert!("job.salary".parse::<CoverLetterField>().is_err());
    }

    #[test]
    fn test_field_path_deserializes_from_string() {
        let field: ResumeField = serde_json::from_str("\"education.0.degree\"").unwrap();
        assert_eq!(
            field,
            ResumeField::Education {
                index: 0,
                field: EducationField::Degree
            }
        );
        assert!(serde_json::from_str::<ResumeField>("\"nope\"").is_err());
    }

    #[test]
    fn test_update_replaces_exactly_one_field() {
        let resume = <Resume as Document>::sample();
        let field = "experience.1.role".parse().unwrap();
        let next = update_resume(&resume, &field, "Staff Engineer");

        assert_eq!(next.experience[1].role, "Staff Engineer");
        assert_eq!(next.experience[1].id, resume.experience[1].id);
        assert_eq!(next.experience[0], resume.experience[0]);
        assert_eq!(next.projects, resume.projects);
        assert_eq!(resume.experience[1].role, "Frontend Engineer", "input untouched");
    }

    #[test]
    fn test_update_bullet() {
        let resume = <Resume as Document>::sample();
        let field = "experience.0.bullets.1".parse().unwrap();
        let next = update_resume(&resume, &field, "New bullet");
        assert_eq!(next.experience[0].bullets[1], "New bullet");
        assert_eq!(next.experience[0].bullets.len(), 3);
    }

    #[test]
    fn test_out_of_range_update_is_noop() {
        let resume = <Resume as Document>::sample();
        for path in [
            "experience.9.role",
            "experience.0.bullets.9",
            "projects.5.name",
            "education.2.school",
            "achievements.7",
        ] {
            let field = path.parse().unwrap();
            let next = update_resume(&resume, &field, "x");
            assert_eq!(next, resume, "{path} must not change the document");
        }
    }

    #[test]
    fn test_skills_are_split_and_trimmed() {
        let resume = Resume::default();
        let next = update_resume(&resume, &ResumeField::Skills, " Rust, ,Go ,  SQL,");
        assert_eq!(next.skills, ["Rust", "Go", "SQL"]);
    }

    #[test]
    fn test_cover_letter_updates() {
        let letter = <CoverLetter as Document>::sample();
        let next = update_cover_letter(
            &letter,
            &"job.recipient_name".parse().unwrap(),
            "Dr. Rivera",
        );
        assert_eq!(next.job.recipient_name, "Dr. Rivera");

        let next = update_cover_letter(&next, &"paragraphs.1".parse().unwrap(), "Second");
        assert_eq!(next.paragraphs[1].text, "Second");
        assert_eq!(next.paragraphs[1].id, letter.paragraphs[1].id);

        let unchanged = update_cover_letter(&letter, &"paragraphs.4".parse().unwrap(), "x");
        assert_eq!(unchanged, letter);
    }
}
