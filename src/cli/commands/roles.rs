//! Grant and revoke commands - Manage role group membership

use std::path::Path;

use crate::auth::{grant_role, revoke_role};
use crate::errors::Result;
use crate::fs::{read_users, write_users, RegistryLock};
use crate::schemas::Role;

use super::{require_user, Session};

pub fn grant(cwd: Option<&Path>, user: Option<&str>, username: &str, role: Role) -> Result<()> {
    let actor = require_user(user)?;
    let session = Session::open(cwd)?;
    let _lock = RegistryLock::acquire(&session.root)?;
    let mut users = read_users(&session.root)?;
    grant_role(&mut users, actor, username, role)?;
    write_users(&session.root, &users)?;

    println!("{} is now in group {}", username, role);
    Ok(())
}

pub fn revoke(cwd: Option<&Path>, user: Option<&str>, username: &str, role: Role) -> Result<()> {
    let actor = require_user(user)?;
    let session = Session::open(cwd)?;
    let _lock = RegistryLock::acquire(&session.root)?;
    let mut users = read_users(&session.root)?;
    revoke_role(&mut users, actor, username, role)?;
    write_users(&session.root, &users)?;

    println!("{} removed from group {}", username, role);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthorizationProvider;
    use crate::cli::commands::{init, register};
    use crate::errors::RegistryError;
    use tempfile::TempDir;

    #[test]
    fn test_grant_and_revoke() {
        let temp = TempDir::new().unwrap();
        init::run(Some(temp.path()), Some("root"), false).unwrap();
        register::run(Some(temp.path()), "ivan", None).unwrap();

        let err = grant(Some(temp.path()), Some("ivan"), "ivan", Role::An).unwrap_err();
        assert!(matches!(err, RegistryError::Forbidden(_)));

        grant(Some(temp.path()), Some("root"), "ivan", Role::An).unwrap();
        assert!(read_users(temp.path()).unwrap().has_role("ivan", Role::An));

        revoke(Some(temp.path()), Some("root"), "ivan", Role::An).unwrap();
        assert!(!read_users(temp.path()).unwrap().has_role("ivan", Role::An));
    }
}
