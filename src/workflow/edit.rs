//! Creating entries and editing their fields

use tracing::{info, warn};

use crate::auth::{authenticate, require_editor, AuthorizationProvider};
use crate::domain::{apply_changes, full_clean};
use crate::errors::{RegistryError, Result};
use crate::schemas::{Entry, EntryChanges, EntryDraft, EntryId};
use crate::store::EntryStore;

use super::commit;

/// Create an entry owned by `actor`.
///
/// # Errors
/// * `Unauthenticated` - unknown actor
/// * `FieldValidation` / `InvalidTransition` - the draft breaks a constraint
pub fn create_entry<S, A>(store: &mut S, auth: &A, actor: &str, draft: EntryDraft) -> Result<Entry>
where
    S: EntryStore + ?Sized,
    A: AuthorizationProvider + ?Sized,
{
    authenticate(auth, actor)?;

    let candidate = Entry::new(draft, actor);
    if let Err(e) = full_clean(&candidate) {
        warn!(actor = %actor, code = e.code(), "Rejected new entry: {}", e);
        return Err(e);
    }

    let id = store.create(candidate)?;
    info!(entry = %id, actor = %actor, "Entry created");
    store.get(id)
}

/// Apply a field edit to a stored entry.
///
/// # Errors
/// * `NotFound` - no such entry
/// * `Forbidden` - actor is neither creator nor admin, or the entry is settled
/// * `FieldValidation` / `InvalidTransition` - the edited entry breaks a constraint
/// * `Conflict` - the entry changed while the edit was being applied
pub fn edit_entry<S, A>(
    store: &mut S,
    auth: &A,
    actor: &str,
    id: EntryId,
    changes: EntryChanges,
) -> Result<Entry>
where
    S: EntryStore + ?Sized,
    A: AuthorizationProvider + ?Sized,
{
    let current = store.get(id)?;
    require_editor(auth, actor, &current)?;

    if changes.is_empty() {
        return Err(RegistryError::FieldValidation("nothing to change".to_string()));
    }

    let candidate = match apply_changes(&current, changes) {
        Ok(candidate) => candidate,
        Err(e) => {
            warn!(entry = %id, actor = %actor, code = e.code(), "Rejected edit: {}", e);
            return Err(e);
        }
    };
    let committed = commit(store, candidate)?;
    info!(entry = %id, actor = %actor, revision = committed.revision, "Entry edited");
    Ok(committed)
}
