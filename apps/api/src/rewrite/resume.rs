// Résumé rewrite targets: prompt construction and response application.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{split_blocks, tone::tone_hint, Improvable, Tone};
use crate::llm_client::{
    extract_json, extract_json_as,
    prompts::{join_lines, with_content, NO_EXTRA_TEXT},
};
use crate::models::Resume;

const MAX_BULLETS: usize = 8;
const MAX_ACHIEVEMENTS: usize = 12;

/// What part of the résumé to rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "target", rename_all = "snake_case")]
pub enum ResumeTarget {
    Summary,
    Experience { index: usize },
    AllExperience,
    Project { index: usize },
    AllProjects,
    Achievements,
}

#[derive(Deserialize)]
struct BulletsReply {
    bullets: Vec<String>,
}

#[derive(Deserialize)]
struct ExperiencesReply {
    experiences: Vec<Value>,
}

#[derive(Deserialize)]
struct IndexedBullets {
    index: usize,
    bullets: Vec<String>,
}

#[derive(Deserialize)]
struct AchievementsReply {
    achievements: Vec<String>,
}

#[derive(Serialize)]
struct ExperiencePayload<'a> {
    index: usize,
    company: &'a str,
    role: &'a str,
    period: &'a str,
    bullets: Vec<&'a str>,
}

fn dash_if_empty(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

fn summary_prompt(resume: &Resume, tone: Tone) -> String {
    let instructions = join_lines([
        "Rewrite the following resume summary in 3-4 crisp sentences for a senior frontend engineer role.",
        tone_hint(tone),
        "Quantify impact where reasonable. Avoid first person.",
    ]);
    with_content(&instructions, &resume.summary)
}

fn experience_prompt(resume: &Resume, index: usize, tone: Tone) -> Option<String> {
    let exp = resume.experience.get(index)?;
    let instructions = join_lines([
        "Rewrite these bullets to be impact-driven, one line each, strong action verbs, add reasonable metrics.",
        tone_hint(tone),
        r#"Return STRICT JSON: { "bullets": ["...", "..."] }"#,
        NO_EXTRA_TEXT,
        "",
        &*format!("Company: {}", exp.company),
        &*format!("Role: {}", exp.role),
        &*format!("Period: {}", exp.period),
        &*format!("Bullets:\n- {}", exp.bullets.join("\n- ")),
    ]);
    Some(with_content(&instructions, ""))
}

fn all_experience_prompt(resume: &Resume, tone: Tone) -> String {
    let instructions = join_lines([
        "You are optimizing resume experience bullets.",
        tone_hint(tone),
        "For each item, rewrite bullets to be impact-driven, one line each, with strong action verbs and reasonable metrics.",
        "Preserve order by `index`. Return STRICT JSON with this shape:",
        "",
        r#"{ "experiences": [ { "index": <number>, "bullets": ["...", "..."] } ] }"#,
        "",
        NO_EXTRA_TEXT,
    ]);
    let payload: Vec<ExperiencePayload> = resume
        .experience
        .iter()
        .enumerate()
        .map(|(index, e)| ExperiencePayload {
            index,
            company: &e.company,
            role: &e.role,
            period: &e.period,
            bullets: e
                .bullets
                .iter()
                .map(String::as_str)
                .filter(|b| !b.is_empty())
                .collect(),
        })
        .collect();
    // Serializing borrowed strings and integers cannot fail.
    let payload = serde_json::to_string_pretty(&payload).unwrap_or_default();
    with_content(&instructions, &payload)
}

fn project_prompt(resume: &Resume, index: usize, tone: Tone) -> Option<String> {
    let project = resume.projects.get(index)?;
    let instructions = join_lines([
        "Rewrite this project's 'Details' into 1-2 short, impact-focused lines.",
        tone_hint(tone),
        r#"Return STRICT JSON: { "details": "<one or two lines>" }"#,
        NO_EXTRA_TEXT,
        "",
        &*format!("Name: {}", dash_if_empty(&project.name)),
        &*format!("Link: {}", dash_if_empty(&project.link)),
        &*format!("Details: {}", dash_if_empty(&project.details)),
    ]);
    Some(with_content(&instructions, ""))
}

fn all_projects_prompt(resume: &Resume, tone: Tone) -> String {
    let instructions = join_lines([
        "Rewrite each project's 'Details' into 1-2 short, impact-focused lines.",
        tone_hint(tone),
        "Return each project's details in order, separated by a blank line. JSON not required.",
    ]);
    let flat = resume
        .projects
        .iter()
        .enumerate()
        .map(|(i, p)| {
            format!(
                "Project {}:\nName: {}\nLink: {}\nDetails: {}",
                i + 1,
                dash_if_empty(&p.name),
                dash_if_empty(&p.link),
                dash_if_empty(&p.details)
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");
    with_content(&instructions, &flat)
}

fn achievements_prompt(resume: &Resume, tone: Tone) -> String {
    let instructions = join_lines([
        "Rewrite each achievement into a single concise, impact-focused bullet.",
        tone_hint(tone),
        r#"Return STRICT JSON: { "achievements": ["...", "..."] }"#,
        NO_EXTRA_TEXT,
    ]);
    let flat = join_lines(
        resume
            .achievements
            .iter()
            .enumerate()
            .map(|(i, a)| format!("Achievement {}: {}", i + 1, dash_if_empty(a))),
    );
    with_content(&instructions, &flat)
}

/// Bullet lines from a plain-text reply: leading `-`/`•` markers stripped,
/// blank lines dropped, at most eight kept.
pub fn bullet_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(|line| {
            line.trim_start()
                .strip_prefix(['-', '•'])
                .unwrap_or(line.trim_start())
                .trim()
                .to_string()
        })
        .filter(|line| !line.is_empty())
        .take(MAX_BULLETS)
        .collect()
}

fn parse_bullets(raw: &str) -> Vec<String> {
    match extract_json_as::<BulletsReply>(raw) {
        Some(reply) if !reply.bullets.is_empty() => {
            reply.bullets.into_iter().take(MAX_BULLETS).collect()
        }
        _ => bullet_lines(raw),
    }
}

fn parse_details(raw: &str) -> Option<String> {
    let from_json = extract_json(raw).and_then(|v| match v.get("details")? {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Null | Value::Bool(false) => None,
        other => Some(other.to_string()),
    });
    if let Some(details) = from_json.filter(|d| !d.is_empty()) {
        return Some(details);
    }

    let lines = raw
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .take(2)
        .collect::<Vec<_>>()
        .join(" ");
    (!lines.is_empty()).then_some(lines)
}

fn apply_all_experience(resume: &Resume, raw: &str) -> Option<Resume> {
    let reply = extract_json_as::<ExperiencesReply>(raw)?;
    let mut next = resume.clone();
    let mut applied = false;

    for item in reply.experiences {
        let Ok(update) = serde_json::from_value::<IndexedBullets>(item) else {
            continue;
        };
        if update.bullets.is_empty() {
            continue;
        }
        if let Some(entry) = next.experience.get_mut(update.index) {
            entry.bullets = update.bullets.into_iter().take(MAX_BULLETS).collect();
            applied = true;
        }
    }

    applied.then_some(next)
}

impl Improvable for Resume {
    type Target = ResumeTarget;

    fn rewrite_prompt(&self, target: &ResumeTarget, tone: Tone) -> Option<String> {
        match *target {
            ResumeTarget::Summary => Some(summary_prompt(self, tone)),
            ResumeTarget::Experience { index } => experience_prompt(self, index, tone),
            ResumeTarget::AllExperience => Some(all_experience_prompt(self, tone)),
            ResumeTarget::Project { index } => project_prompt(self, index, tone),
            ResumeTarget::AllProjects => Some(all_projects_prompt(self, tone)),
            ResumeTarget::Achievements => Some(achievements_prompt(self, tone)),
        }
    }

    fn apply_rewrite(&self, target: &ResumeTarget, raw: &str) -> Option<Resume> {
        let mut next = self.clone();
        match *target {
            ResumeTarget::Summary => {
                let text = raw.trim();
                if text.is_empty() {
                    return None;
                }
                next.summary = text.to_string();
            }
            ResumeTarget::Experience { index } => {
                let bullets = parse_bullets(raw);
                let entry = next.experience.get_mut(index)?;
                if bullets.is_empty() {
                    return None;
                }
                entry.bullets = bullets;
            }
            ResumeTarget::AllExperience => return apply_all_experience(self, raw),
            ResumeTarget::Project { index } => {
                let details = parse_details(raw)?;
                next.projects.get_mut(index)?.details = details;
            }
            ResumeTarget::AllProjects => {
                let parts = split_blocks(raw);
                if parts.is_empty() {
                    return None;
                }
                for (project, part) in next.projects.iter_mut().zip(parts) {
                    project.details = part;
                }
            }
            ResumeTarget::Achievements => {
                let reply = extract_json_as::<AchievementsReply>(raw)?;
                if reply.achievements.is_empty() {
                    return None;
                }
                next.achievements = reply
                    .achievements
                    .into_iter()
                    .take(MAX_ACHIEVEMENTS)
                    .collect();
            }
        }
        Some(next)
    }
}
