//! Entry-list CRUD and identifier-keyed reordering.

use serde::Deserialize;

use crate::models::{
    new_entry, CoverLetter, CoverParagraph, EducationEntry, EntryId, ExperienceEntry, Identified,
    ProjectEntry, Resume,
};

/// List-level edits on a [`Resume`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ResumeEdit {
    AddExperience,
    RemoveExperience { index: usize },
    AddExperienceBullet { index: usize },
    RemoveExperienceBullet { index: usize, bullet: usize },
    AddProject,
    RemoveProject { index: usize },
    AddEducation,
    RemoveEducation { index: usize },
    AddAchievement,
    RemoveAchievement { index: usize },
}

/// List-level edits on a [`CoverLetter`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum CoverEdit {
    AddParagraph,
    RemoveParagraph { index: usize },
}

/// Reorderable résumé lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResumeList {
    Experience,
    Projects,
}

/// Reorderable cover-letter lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverList {
    Paragraphs,
}

pub fn edit_resume(resume: &Resume, edit: &ResumeEdit) -> Resume {
    let mut next = resume.clone();

    match *edit {
        ResumeEdit::AddExperience => {
            // New roles start with one empty bullet line to type into.
            let mut entry: ExperienceEntry = new_entry();
            entry.bullets.push(String::new());
            next.experience.push(entry);
        }
        ResumeEdit::RemoveExperience { index } => remove_at(&mut next.experience, index),
        ResumeEdit::AddExperienceBullet { index } => {
            if let Some(entry) = next.experience.get_mut(index) {
                entry.bullets.push(String::new());
            }
        }
        ResumeEdit::RemoveExperienceBullet { index, bullet } => {
            if let Some(entry) = next.experience.get_mut(index) {
                remove_at(&mut entry.bullets, bullet);
            }
        }
        ResumeEdit::AddProject => next.projects.push(new_entry::<ProjectEntry>()),
        ResumeEdit::RemoveProject { index } => remove_at(&mut next.projects, index),
        ResumeEdit::AddEducation => next.education.push(EducationEntry::default()),
        ResumeEdit::RemoveEducation { index } => remove_at(&mut next.education, index),
        ResumeEdit::AddAchievement => next.achievements.push(String::new()),
        ResumeEdit::RemoveAchievement { index } => remove_at(&mut next.achievements, index),
    }

    next
}

pub fn edit_cover_letter(letter: &CoverLetter, edit: &CoverEdit) -> CoverLetter {
    let mut next = letter.clone();

    match *edit {
        CoverEdit::AddParagraph => next.paragraphs.push(new_entry::<CoverParagraph>()),
        CoverEdit::RemoveParagraph { index } => remove_at(&mut next.paragraphs, index),
    }

    next
}

fn remove_at<T>(list: &mut Vec<T>, index: usize) {
    if index < list.len() {
        list.remove(index);
    }
}

/// Moves the entry identified by `active` into the slot currently held by
/// `over`, shifting the entries in between (drag-and-drop "array move").
///
/// Identifiers travel with their entries; only positions change. If the two
/// identifiers are equal or either is not present, the list is returned as is.
pub fn move_entry<T: Identified + Clone>(entries: &[T], active: &EntryId, over: &EntryId) -> Vec<T> {
    let mut next = entries.to_vec();
    if active == over {
        return next;
    }

    let position = |id: &EntryId| entries.iter().position(|e| e.entry_id() == Some(id));
    let (Some(from), Some(to)) = (position(active), position(over)) else {
        return next;
    };

    let moved = next.remove(from);
    next.insert(to, moved);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use std::collections::HashSet;

    fn ids<T: Identified>(entries: &[T]) -> Vec<String> {
        entries
            .iter()
            .map(|e| e.entry_id().map(|id| id.to_string()).unwrap_or_default())
            .collect()
    }

    fn paragraphs(ids: &[&str]) -> Vec<CoverParagraph> {
        ids.iter()
            .map(|id| CoverParagraph {
                id: Some(EntryId::from(*id)),
                text: format!("text of {id}"),
            })
            .collect()
    }

    #[test]
    fn test_move_forward() {
        let list = paragraphs(&["a", "b", "c", "d"]);
        let moved = move_entry(&list, &EntryId::from("a"), &EntryId::from("c"));
        assert_eq!(ids(&moved), ["b", "c", "a", "d"]);
    }

    #[test]
    fn test_move_backward() {
        let list = paragraphs(&["a", "b", "c", "d"]);
        let moved = move_entry(&list, &EntryId::from("d"), &EntryId::from("b"));
        assert_eq!(ids(&moved), ["a", "d", "b", "c"]);
    }

    #[test]
    fn test_move_preserves_ids_and_content() {
        let list = paragraphs(&["a", "b", "c"]);
        let moved = move_entry(&list, &EntryId::from("c"), &EntryId::from("a"));

        let before: HashSet<_> = list.iter().map(|p| (p.id.clone(), p.text.clone())).collect();
        let after: HashSet<_> = moved.iter().map(|p| (p.id.clone(), p.text.clone())).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_move_with_unknown_id_is_noop() {
        let list = paragraphs(&["a", "b"]);
        assert_eq!(move_entry(&list, &EntryId::from("zz"), &EntryId::from("a")), list);
        assert_eq!(move_entry(&list, &EntryId::from("a"), &EntryId::from("a")), list);
    }

    #[test]
    fn test_add_experience_gets_id_and_blank_bullet() {
        let resume = Resume::default();
        let next = edit_resume(&resume, &ResumeEdit::AddExperience);
        assert_eq!(next.experience.len(), 1);
        assert!(next.experience[0].has_id());
        assert_eq!(next.experience[0].bullets, [""]);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let resume = <Resume as Document>::sample();
        let next = edit_resume(&resume, &ResumeEdit::RemoveExperience { index: 9 });
        assert_eq!(next, resume);
        let next = edit_resume(
            &resume,
            &ResumeEdit::RemoveExperienceBullet {
                index: 0,
                bullet: 99,
            },
        );
        assert_eq!(next, resume);
    }

    #[test]
    fn test_remove_experience_bullet() {
        let resume = <Resume as Document>::sample();
        let next = edit_resume(
            &resume,
            &ResumeEdit::RemoveExperienceBullet {
                index: 0,
                bullet: 0,
            },
        );
        assert_eq!(next.experience[0].bullets.len(), 2);
        assert_eq!(next.experience[0].bullets[0], resume.experience[0].bullets[1]);
    }

    #[test]
    fn test_edit_ops_deserialize() {
        let op: ResumeEdit =
            serde_json::from_str(r#"{"op": "remove_project", "index": 2}"#).unwrap();
        assert_eq!(op, ResumeEdit::RemoveProject { index: 2 });
        let op: CoverEdit = serde_json::from_str(r#"{"op": "add_paragraph"}"#).unwrap();
        assert_eq!(op, CoverEdit::AddParagraph);
    }

    #[test]
    fn test_cover_paragraph_add_remove() {
        let letter = <CoverLetter as Document>::sample();
        let added = edit_cover_letter(&letter, &CoverEdit::AddParagraph);
        assert_eq!(added.paragraphs.len(), 3);
        assert!(added.paragraphs[2].has_id());
        let removed = edit_cover_letter(&added, &CoverEdit::RemoveParagraph { index: 0 });
        assert_eq!(removed.paragraphs[0], letter.paragraphs[1]);
    }
}
