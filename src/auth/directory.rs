//! Group-membership authorization backed by the user directory

use tracing::info;

use crate::errors::{RegistryError, Result};
use crate::schemas::{Role, User, UserDirectory};

use super::AuthorizationProvider;

impl AuthorizationProvider for UserDirectory {
    fn is_known(&self, actor: &str) -> bool {
        self.find(actor).is_some()
    }

    fn has_role(&self, actor: &str, role: Role) -> bool {
        match self.find(actor) {
            Some(user) => {
                user.is_superuser
                    || user.roles.contains(&Role::Admin)
                    || user.roles.contains(&role)
            }
            None => false,
        }
    }
}

/// The role groups every registry knows about
pub fn ensure_roles() -> &'static [Role] {
    &Role::ALL
}

/// Register a new user in the `employee` group.
///
/// # Errors
/// * `DuplicateUser` - username already taken
/// * `FieldValidation` - blank username
pub fn register_user(
    directory: &mut UserDirectory,
    username: &str,
    email: Option<String>,
) -> Result<User> {
    let username = username.trim();
    if username.is_empty() {
        return Err(RegistryError::FieldValidation("username is required".to_string()));
    }
    if directory.find(username).is_some() {
        return Err(RegistryError::DuplicateUser(username.to_string()));
    }

    let user = User::new(username, email);
    directory.users.push(user.clone());
    info!(user = %username, "Registered user");
    Ok(user)
}

/// Add `role` to `username`. Only admins may change group membership.
pub fn grant_role(
    directory: &mut UserDirectory,
    granted_by: &str,
    username: &str,
    role: Role,
) -> Result<()> {
    super::require_role(&*directory, granted_by, Role::Admin, "only admins can change roles")?;
    let user = directory
        .find_mut(username)
        .ok_or_else(|| RegistryError::Unauthenticated(username.to_string()))?;
    user.roles.insert(role);
    info!(user = %username, role = %role, by = %granted_by, "Granted role");
    Ok(())
}

/// Remove `role` from `username`. Only admins may change group membership.
pub fn revoke_role(
    directory: &mut UserDirectory,
    revoked_by: &str,
    username: &str,
    role: Role,
) -> Result<()> {
    super::require_role(&*directory, revoked_by, Role::Admin, "only admins can change roles")?;
    let user = directory
        .find_mut(username)
        .ok_or_else(|| RegistryError::Unauthenticated(username.to_string()))?;
    user.roles.remove(&role);
    info!(user = %username, role = %role, by = %revoked_by, "Revoked role");
    Ok(())
}
