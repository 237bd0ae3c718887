use serde::{Deserialize, Serialize};

use crate::models::{EntryId, Identified};

/// Editable cover letter: applicant letterhead, target job, and an ordered
/// list of body paragraphs between the intro and the closing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverLetter {
    pub applicant: Applicant,
    pub job: JobTarget,
    pub intro: String,
    pub paragraphs: Vec<CoverParagraph>,
    pub closing: String,
    pub sign_off: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Applicant {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub website: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobTarget {
    pub company: String,
    pub role: String,
    pub job_link: String,
    pub job_id: String,
    pub company_location: String,
    pub recipient_name: String,
    pub recipient_title: String,
    pub recipient_email: String,
    /// Letter date as typed by the user (ISO date by default).
    pub today: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverParagraph {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntryId>,
    pub text: String,
}

impl Identified for CoverParagraph {
    const ID_PREFIX: &'static str = "p";

    fn id_slot(&mut self) -> &mut Option<EntryId> {
        &mut self.id
    }

    fn entry_id(&self) -> Option<&EntryId> {
        self.id.as_ref()
    }
}

impl CoverLetter {
    /// Placeholder letter shown when the editor first opens, dated today.
    pub fn sample() -> Self {
        CoverLetter {
            applicant: Applicant {
                name: "Aarav Sharma".to_string(),
                title: "Frontend Engineer".to_string(),
                email: "aarav.sharma@example.com".to_string(),
                phone: "+91 98765 43210".to_string(),
                location: "Bengaluru, India".to_string(),
                linkedin: "linkedin.com/in/aarav".to_string(),
                website: "aarav.dev".to_string(),
            },
            job: JobTarget {
                company: "Esri".to_string(),
                role: "Software Development Engineer – Frontend (JavaScript)".to_string(),
                job_link: "https://careers.example.com/esri/frontend".to_string(),
                job_id: "SDE-FE-2025-11".to_string(),
                company_location: "Noida, India".to_string(),
                recipient_name: "Hiring Manager".to_string(),
                recipient_title: String::new(),
                recipient_email: String::new(),
                today: chrono::Local::now().date_naive().format("%Y-%m-%d").to_string(),
            },
            intro: "I’m excited to apply for the Frontend Engineer role at Esri. With 4+ years \
                    building performant React apps and design systems, I’m confident I can help \
                    deliver intuitive mapping experiences at scale."
                .to_string(),
            paragraphs: vec![
                CoverParagraph {
                    id: Some(EntryId::from("p-1")),
                    text: "At TeleLink, I led a React 18 migration and introduced RTK Query, \
                           reducing API load times by 32% while improving cache hit rates. I also \
                           drove LCP from 3.8s → 1.9s on low-end devices by optimizing critical \
                           rendering paths and image delivery."
                        .to_string(),
                },
                CoverParagraph {
                    id: Some(EntryId::from("p-2")),
                    text: "I shipped a multi-tenant design system used by six applications, \
                           adding accessible components and strong theming primitives. I paired \
                           this with visual regression tests in Playwright, cutting UI \
                           regressions in CI by 40%."
                        .to_string(),
                },
            ],
            closing: "I’d love to discuss how I can contribute to Esri’s mission. Thank you for \
                      your time—looking forward to connecting."
                .to_string(),
            sign_off: "Sincerely".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sample_is_dated() {
        let letter = CoverLetter::sample();
        assert_eq!(letter.job.today.len(), 10);
        assert_eq!(letter.paragraphs.len(), 2);
    }

    #[test]
    fn test_partial_letter_deserializes() {
        let letter: CoverLetter = serde_json::from_value(json!({
            "applicant": { "name": "Ada" },
            "paragraphs": [{ "text": "Hello" }]
        }))
        .unwrap();
        assert_eq!(letter.applicant.name, "Ada");
        assert!(letter.paragraphs[0].id.is_none());
        assert_eq!(letter.sign_off, "");
    }
}
