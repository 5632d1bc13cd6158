//! Init command - Create a new registry

use std::path::Path;

use tracing::info;

use crate::auth::{ensure_roles, register_user};
use crate::errors::{RegistryError, Result};
use crate::fs::{
    get_config_path, get_entries_dir, get_registry_dir, read_users, resolve_cwd, write_json,
    write_users, RegistryLock,
};
use crate::schemas::{Config, UserDirectory};

/// Create `.registry/` with default config, an empty user directory and
/// optionally a first superuser.
pub fn run(cwd: Option<&Path>, admin: Option<&str>, force: bool) -> Result<()> {
    let root = resolve_cwd(cwd);
    let registry_dir = get_registry_dir(&root);

    if registry_dir.exists() && !force {
        return Err(RegistryError::ConfigError(format!(
            "{} already exists; use --force to reinitialize",
            registry_dir.display()
        )));
    }

    std::fs::create_dir_all(get_entries_dir(&root))?;
    let _lock = RegistryLock::acquire(&root)?;
    let config_path = get_config_path(&root);
    if !config_path.exists() {
        write_json(&config_path, &Config::default())?;
    }

    // Reinitializing keeps existing users and config
    let mut users = if force {
        read_users(&root)?
    } else {
        UserDirectory::new()
    };

    if let Some(admin) = admin.map(str::trim) {
        if users.find(admin).is_none() {
            register_user(&mut users, admin, None)?;
        }
        if let Some(user) = users.find_mut(admin) {
            user.is_superuser = true;
        }
    }
    write_users(&root, &users)?;

    let roles: Vec<String> = ensure_roles().iter().map(|r| r.to_string()).collect();
    info!(root = %root.display(), "Initialized registry");
    println!("Initialized registry in {}", registry_dir.display());
    println!("Roles ensured: {}", roles.join(", "));
    Ok(())
}
