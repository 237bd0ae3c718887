use tracing::debug;

use crate::models::{EntryId, Identified};

/// Returns a copy of `entries` where every entry lacking an identifier has been
/// given a fresh one. Entries that already carry an identifier are untouched,
/// so a second pass over the result changes nothing.
pub fn backfill_list<T: Identified + Clone>(entries: &[T]) -> Vec<T> {
    let mut assigned = 0usize;
    let filled = entries
        .iter()
        .map(|entry| {
            let mut entry = entry.clone();
            if !entry.has_id() {
                *entry.id_slot() = Some(EntryId::generate(T::ID_PREFIX));
                assigned += 1;
            }
            entry
        })
        .collect();

    if assigned > 0 {
        debug!(prefix = T::ID_PREFIX, assigned, "Backfilled entry identifiers");
    }
    filled
}
