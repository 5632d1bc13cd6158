//! Persistence for registry entries
//!
//! The store owns entries; the lifecycle guard only borrows them while
//! checking a candidate. Writes are guarded by revision: an update whose
//! revision is not the persisted one is refused with `Conflict`.

mod filter;
mod json_store;
mod memory;

pub use filter::EntryFilter;
pub use json_store::JsonEntryStore;
pub use memory::MemoryEntryStore;

use chrono::Utc;

use crate::errors::{RegistryError, Result};
use crate::schemas::{Entry, EntryId};

/// Storage port for entries
pub trait EntryStore {
    /// Persist a new entry and return its freshly allocated id.
    fn create(&mut self, entry: Entry) -> Result<EntryId>;

    /// Replace a stored entry.
    ///
    /// # Errors
    /// * `NotFound` - no entry with that id
    /// * `Conflict` - `entry.revision` is not the persisted revision
    fn update(&mut self, entry: &Entry) -> Result<()>;

    /// Fetch a single entry.
    ///
    /// # Errors
    /// * `NotFound` - no entry with that id
    fn get(&self, id: EntryId) -> Result<Entry>;

    /// Entries matching `filter`, newest first.
    fn list(&self, filter: &EntryFilter) -> Result<Vec<Entry>>;
}

/// Checks shared by every store before an update is written.
///
/// Returns the entry as it should be persisted (revision bumped, updated_at stamped).
pub(crate) fn prepare_update(persisted: &Entry, candidate: &Entry) -> Result<Entry> {
    if candidate.revision != persisted.revision {
        return Err(RegistryError::Conflict(format!(
            "entry {} was changed by someone else (revision {} is now {})",
            candidate.id, candidate.revision, persisted.revision
        )));
    }
    if candidate.created_by != persisted.created_by || candidate.created_at != persisted.created_at
    {
        return Err(RegistryError::FieldValidation(format!(
            "creation audit of entry {} cannot change",
            candidate.id
        )));
    }
    let mut next = candidate.clone();
    next.revision = persisted.revision + 1;
    next.updated_at = Utc::now();
    Ok(next)
}

/// Newest first; id breaks ties between entries created in the same instant.
pub(crate) fn sort_newest_first(entries: &mut [Entry]) {
    entries.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
}
