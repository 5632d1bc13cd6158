//! Authorization boundary
//!
//! Every permission decision goes through an [`AuthorizationProvider`] passed
//! in by the caller. The lifecycle guard never checks permissions itself.

mod directory;
mod policy;

pub use directory::{ensure_roles, grant_role, register_user, revoke_role};
pub use policy::{
    authenticate, can_approve, can_export, require_approver, require_editor,
    require_role, Permissions,
};

use crate::schemas::Role;

/// Identity and group membership lookups
pub trait AuthorizationProvider {
    /// Whether `actor` is a registered user
    fn is_known(&self, actor: &str) -> bool;

    /// Whether `actor` holds `role`. Admins and superusers hold every role.
    fn has_role(&self, actor: &str, role: Role) -> bool;
}
