//! Request-level operations on the registry
//!
//! Each operation is one unit of work: authorize the actor, build the
//! candidate entry, run the full pre-commit check, then write. A rejected
//! candidate is dropped and the stored entry stays as it was.

mod approve;
mod edit;
mod listing;

pub use approve::{approve_entry, approve_entry_named};
pub use edit::{create_entry, edit_entry};
pub use listing::{export_entries, list_entries, show_entry, Listing};

use tracing::warn;

use crate::domain::full_clean;
use crate::errors::Result;
use crate::schemas::Entry;
use crate::store::EntryStore;

/// Check a candidate and write it; returns the entry as now stored.
fn commit<S: EntryStore + ?Sized>(store: &mut S, candidate: Entry) -> Result<Entry> {
    if let Err(e) = full_clean(&candidate) {
        warn!(entry = %candidate.id, code = e.code(), "Rejected write: {}", e);
        return Err(e);
    }
    if let Err(e) = store.update(&candidate) {
        warn!(entry = %candidate.id, code = e.code(), "Store refused write: {}", e);
        return Err(e);
    }
    store.get(candidate.id)
}
