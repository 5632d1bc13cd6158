//! AN and GIP approval actions

use tracing::info;

use crate::auth::{require_approver, AuthorizationProvider};
use crate::domain::{apply_approval, next_stage, ApprovalStage};
use crate::errors::Result;
use crate::schemas::{ApprovalKind, Entry, EntryId};
use crate::store::EntryStore;

use super::commit;

/// Record `actor`'s approval of `kind` on an entry.
///
/// Re-approving overwrites the approver and timestamp.
///
/// # Errors
/// * `Forbidden` / `Unauthenticated` - actor lacks the matching role
/// * `NotFound` - no such entry
/// * `Conflict` - the entry changed while the approval was being applied
pub fn approve_entry<S, A>(
    store: &mut S,
    auth: &A,
    actor: &str,
    id: EntryId,
    kind: ApprovalKind,
) -> Result<Entry>
where
    S: EntryStore + ?Sized,
    A: AuthorizationProvider + ?Sized,
{
    require_approver(auth, actor, kind)?;
    let current = store.get(id)?;

    let stage = next_stage(ApprovalStage::of(&current), kind);
    let committed = commit(store, apply_approval(&current, kind, actor))?;
    info!(entry = %id, actor = %actor, kind = %kind, stage = %stage, "Entry approved");
    Ok(committed)
}

/// [`approve_entry`] for a kind given as text.
///
/// # Errors
/// * `UnknownApprovalKind` - neither "an" nor "gip"; nothing is read or written
pub fn approve_entry_named<S, A>(
    store: &mut S,
    auth: &A,
    actor: &str,
    id: EntryId,
    kind: &str,
) -> Result<Entry>
where
    S: EntryStore + ?Sized,
    A: AuthorizationProvider + ?Sized,
{
    let kind: ApprovalKind = kind.parse()?;
    approve_entry(store, auth, actor, id, kind)
}
