//! Who may do what

use serde::Serialize;

use crate::errors::{RegistryError, Result};
use crate::schemas::{ApprovalKind, Entry, Role};

use super::AuthorizationProvider;

fn approver_role(kind: ApprovalKind) -> Role {
    match kind {
        ApprovalKind::An => Role::An,
        ApprovalKind::Gip => Role::Gip,
    }
}

/// Fail unless `actor` is a registered user.
pub fn authenticate<P: AuthorizationProvider + ?Sized>(provider: &P, actor: &str) -> Result<()> {
    if !provider.is_known(actor) {
        return Err(RegistryError::Unauthenticated(actor.to_string()));
    }
    Ok(())
}

/// Fail with `Forbidden(reason)` unless `actor` holds `role`.
pub fn require_role<P: AuthorizationProvider + ?Sized>(
    provider: &P,
    actor: &str,
    role: Role,
    reason: &str,
) -> Result<()> {
    authenticate(provider, actor)?;
    if !provider.has_role(actor, role) {
        return Err(RegistryError::Forbidden(reason.to_string()));
    }
    Ok(())
}

pub fn can_approve<P: AuthorizationProvider + ?Sized>(
    provider: &P,
    actor: &str,
    kind: ApprovalKind,
) -> bool {
    provider.has_role(actor, approver_role(kind))
}

/// Approval needs the matching AN or GIP role.
pub fn require_approver<P: AuthorizationProvider + ?Sized>(
    provider: &P,
    actor: &str,
    kind: ApprovalKind,
) -> Result<()> {
    let reason = match kind {
        ApprovalKind::An => "AN role required",
        ApprovalKind::Gip => "GIP role required",
    };
    require_role(provider, actor, approver_role(kind), reason)
}

/// Field edits: the creator or an admin; once paid or done, admins only.
pub fn require_editor<P: AuthorizationProvider + ?Sized>(
    provider: &P,
    actor: &str,
    entry: &Entry,
) -> Result<()> {
    authenticate(provider, actor)?;
    let is_admin = provider.has_role(actor, Role::Admin);

    if entry.created_by != actor && !is_admin {
        return Err(RegistryError::Forbidden(format!(
            "no permission to edit entry {}",
            entry.id
        )));
    }
    if entry.is_settled() && !is_admin {
        return Err(RegistryError::Forbidden(format!(
            "entry {} is paid or done; only an admin can edit it",
            entry.id
        )));
    }
    Ok(())
}

pub fn can_export<P: AuthorizationProvider + ?Sized>(provider: &P, actor: &str) -> bool {
    provider.has_role(actor, Role::Admin)
}

/// What the current actor can do on the listing screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Permissions {
    pub can_approve_an: bool,
    pub can_approve_gip: bool,
    pub can_export: bool,
}

impl Permissions {
    pub fn for_actor<P: AuthorizationProvider + ?Sized>(provider: &P, actor: &str) -> Self {
        Permissions {
            can_approve_an: can_approve(provider, actor, ApprovalKind::An),
            can_approve_gip: can_approve(provider, actor, ApprovalKind::Gip),
            can_export: can_export(provider, actor),
        }
    }
}
