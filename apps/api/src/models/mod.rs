//! Document model shared by the editors, the previews and both exporters.

pub mod cover_letter;
pub mod resume;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use cover_letter::{Applicant, CoverLetter, CoverParagraph, JobTarget};
pub use resume::{Contact, EducationEntry, ExperienceEntry, ProjectEntry, Resume};

/// Opaque, stable identifier of a list entry.
///
/// Carries no meaning beyond identity: it is assigned once, survives every
/// reorder, and is never derived from the entry's position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Generates a fresh identifier, e.g. `exp-3f2a…`.
    pub fn generate(prefix: &str) -> Self {
        EntryId(format!("{prefix}-{}", Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        EntryId(value.to_string())
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An entry that lives in an identifier-keyed list.
pub trait Identified {
    /// Prefix used when generating identifiers for this kind of entry.
    const ID_PREFIX: &'static str;

    fn id_slot(&mut self) -> &mut Option<EntryId>;

    fn entry_id(&self) -> Option<&EntryId>;

    /// True when the entry carries a usable identifier. Empty strings do not count.
    fn has_id(&self) -> bool {
        self.entry_id().is_some_and(|id| !id.as_str().is_empty())
    }
}

/// Creates a new entry with a freshly generated identifier.
pub fn new_entry<T: Identified + Default>() -> T {
    let mut entry = T::default();
    *entry.id_slot() = Some(EntryId::generate(T::ID_PREFIX));
    entry
}
