use serde::{Deserialize, Serialize};

use crate::models::{EntryId, Identified};

/// Editable résumé. Every field is plain text or an ordered list; list order
/// is the only ordering signal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resume {
    pub name: String,
    pub title: String,
    pub summary: String,
    pub contact: Contact,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub education: Vec<EducationEntry>,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
    pub linkedin: String,
    pub github: String,
}

impl Contact {
    /// Contact values in display order.
    pub fn ordered(&self) -> [&str; 6] {
        [
            &self.email,
            &self.phone,
            &self.location,
            &self.website,
            &self.linkedin,
            &self.github,
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntryId>,
    pub company: String,
    pub role: String,
    pub period: String,
    pub bullets: Vec<String>,
}

impl Identified for ExperienceEntry {
    const ID_PREFIX: &'static str = "exp";

    fn id_slot(&mut self) -> &mut Option<EntryId> {
        &mut self.id
    }

    fn entry_id(&self) -> Option<&EntryId> {
        self.id.as_ref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntryId>,
    pub name: String,
    pub link: String,
    pub details: String,
}

impl Identified for ProjectEntry {
    const ID_PREFIX: &'static str = "proj";

    fn id_slot(&mut self) -> &mut Option<EntryId> {
        &mut self.id
    }

    fn entry_id(&self) -> Option<&EntryId> {
        self.id.as_ref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub school: String,
    pub degree: String,
    pub period: String,
}

impl Resume {
    /// Placeholder résumé shown when the editor first opens.
    pub fn sample() -> Self {
        Resume {
            name: "Aarav Sharma".to_string(),
            title: "Frontend Engineer".to_string(),
            summary: "Frontend engineer with 4+ years in React, performance tuning, and design \
                      systems. Passionate about DX and accessibility."
                .to_string(),
            contact: Contact {
                email: "aarav.sharma@example.com".to_string(),
                phone: "+91 98765 43210".to_string(),
                location: "Bengaluru, India".to_string(),
                website: "aarav.dev".to_string(),
                linkedin: "linkedin.com/in/aarav".to_string(),
                github: "github.com/aarav".to_string(),
            },
            skills: ["React", "TypeScript", "Redux", "Jest/RTL", "Node.js", "Webpack", "Vite"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            experience: vec![
                ExperienceEntry {
                    id: Some(EntryId::from("exp-1")),
                    company: "TeleLink".to_string(),
                    role: "Senior Frontend Engineer".to_string(),
                    period: "Jan 2023 – Present".to_string(),
                    bullets: vec![
                        "Led migration to React 18 and RTK Query, reducing API load times by 32%."
                            .to_string(),
                        "Built reusable form kit with Formik + Yup; cut form bugs by 45%."
                            .to_string(),
                        "Drove performance: LCP from 3.8s → 1.9s on 3G.".to_string(),
                    ],
                },
                ExperienceEntry {
                    id: Some(EntryId::from("exp-2")),
                    company: "PixelCraft".to_string(),
                    role: "Frontend Engineer".to_string(),
                    period: "Aug 2020 – Dec 2022".to_string(),
                    bullets: vec![
                        "Shipped multi-tenant design system consumed by 6+ apps.".to_string(),
                        "Introduced visual regression tests with Playwright.".to_string(),
                    ],
                },
            ],
            projects: vec![ProjectEntry {
                id: Some(EntryId::from("proj-1")),
                name: "Service Desk & Fault Monitor".to_string(),
                link: "https://example.com/sdfm".to_string(),
                details: "Real-time incident dashboard for telecom alarms with SLA timers, \
                          escalations, and map overlays."
                    .to_string(),
            }],
            education: vec![EducationEntry {
                school: "IIIT Hyderabad".to_string(),
                degree: "B.Tech, Computer Science".to_string(),
                period: "2016 – 2020".to_string(),
            }],
            achievements: vec![
                "Won ‘Best Frontend’ at JSConf India Hackathon 2023.".to_string(),
                "Top 3% on HackerRank Frontend Skill Certification.".to_string(),
            ],
        }
    }
}
