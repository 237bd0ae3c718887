// Document model normalizer.
// Gives every consumer (previews, exporters, AI rewrites) one uniform shape and
// guarantees list entries carry identifiers before reordering or export.

pub mod backfill;
pub mod edit;
pub mod fields;
pub mod handlers;
pub mod templates;

use std::str::FromStr;

use serde::{de::DeserializeOwned, Serialize};

use crate::models::{CoverLetter, EntryId, Resume};

pub use backfill::backfill_list;
pub use edit::{move_entry, CoverEdit, CoverList, ResumeEdit, ResumeList};
pub use fields::{CoverLetterField, FieldPathError, ResumeField};
pub use templates::{collapse_whitespace, is_preview_element, CoverTemplate, ResumeTemplate};

/// Operations every editable document supports.
///
/// All operations are pure: they take `&self` and return a new document,
/// leaving the input untouched.
pub trait Document: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    type Field: FromStr<Err = FieldPathError> + DeserializeOwned + Send;
    type Edit: DeserializeOwned + Send;
    type List: DeserializeOwned + Send;

    /// Placeholder content shown when an editor first opens.
    fn sample() -> Self;

    /// Assigns a fresh identifier to every list entry that lacks one. Idempotent.
    fn backfill_identifiers(&self) -> Self;

    /// Replaces exactly one field. Out-of-range list indices are a no-op.
    fn apply_field_update(&self, field: &Self::Field, value: &str) -> Self;

    /// Adds or removes list entries. Out-of-range list indices are a no-op.
    fn apply_edit(&self, edit: &Self::Edit) -> Self;

    /// Moves the entry identified by `active` to the position of `over`.
    fn reorder(&self, list: &Self::List, active: &EntryId, over: &EntryId) -> Self;
}

impl Document for Resume {
    type Field = ResumeField;
    type Edit = ResumeEdit;
    type List = ResumeList;

    fn sample() -> Self {
        Resume::sample().backfill_identifiers()
    }

    fn backfill_identifiers(&self) -> Self {
        Resume {
            experience: backfill_list(&self.experience),
            projects: backfill_list(&self.projects),
            ..self.clone()
        }
    }

    fn apply_field_update(&self, field: &ResumeField, value: &str) -> Self {
        fields::update_resume(self, field, value)
    }

    fn apply_edit(&self, edit: &ResumeEdit) -> Self {
        edit::edit_resume(self, edit)
    }

    fn reorder(&self, list: &ResumeList, active: &EntryId, over: &EntryId) -> Self {
        let mut next = self.clone();
        match list {
            ResumeList::Experience => next.experience = move_entry(&self.experience, active, over),
            ResumeList::Projects => next.projects = move_entry(&self.projects, active, over),
        }
        next
    }
}

impl Document for CoverLetter {
    type Field = CoverLetterField;
    type Edit = CoverEdit;
    type List = CoverList;

    fn sample() -> Self {
        CoverLetter::sample().backfill_identifiers()
    }

    fn backfill_identifiers(&self) -> Self {
        CoverLetter {
            paragraphs: backfill_list(&self.paragraphs),
            ..self.clone()
        }
    }

    fn apply_field_update(&self, field: &CoverLetterField, value: &str) -> Self {
        fields::update_cover_letter(self, field, value)
    }

    fn apply_edit(&self, edit: &CoverEdit) -> Self {
        edit::edit_cover_letter(self, edit)
    }

    fn reorder(&self, list: &CoverList, active: &EntryId, over: &EntryId) -> Self {
        let mut next = self.clone();
        match list {
            CoverList::Paragraphs => next.paragraphs = move_entry(&self.paragraphs, active, over),
        }
        next
    }
}
