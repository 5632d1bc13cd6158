//! Path resolution utilities for the registry
//!
//! Provides functions to locate the registry root and construct paths
//! to the files under `.registry/`.

use std::path::{Path, PathBuf};

use crate::errors::{RegistryError, Result};
use crate::schemas::EntryId;

/// Name of the data directory marking a registry root
pub const REGISTRY_DIR_NAME: &str = ".registry";

/// Find the nearest directory containing a .registry directory.
///
/// Walks up the directory tree from the starting directory.
///
/// # Errors
/// * `RepoNotFound` - If no registry root is found
pub fn find_registry_root(start_cwd: &Path) -> Result<PathBuf> {
    let mut current = start_cwd
        .canonicalize()
        .map_err(|e| RegistryError::RepoNotFound(format!("Cannot resolve path: {}", e)))?;

    loop {
        if current.join(REGISTRY_DIR_NAME).is_dir() {
            return Ok(current);
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => {
                return Err(RegistryError::RepoNotFound(
                    "Could not find a .registry directory; run `registry init` first".to_string(),
                ));
            }
        }
    }
}

/// Resolve the current working directory, optionally using an override.
pub fn resolve_cwd(cwd_option: Option<&Path>) -> PathBuf {
    match cwd_option {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Get the path to the .registry directory.
pub fn get_registry_dir(root: &Path) -> PathBuf {
    root.join(REGISTRY_DIR_NAME)
}

/// Get the path to the config.json file.
pub fn get_config_path(root: &Path) -> PathBuf {
    get_registry_dir(root).join("config.json")
}

/// Get the path to the users.json file.
pub fn get_users_path(root: &Path) -> PathBuf {
    get_registry_dir(root).join("users.json")
}

/// Get the path to the lock file serializing writers.
pub fn get_lock_path(root: &Path) -> PathBuf {
    get_registry_dir(root).join("registry.lock")
}

/// Get the path to the entries directory.
pub fn get_entries_dir(root: &Path) -> PathBuf {
    get_registry_dir(root).join("entries")
}

/// Get the path to a stored entry's JSON file.
pub fn get_entry_path(root: &Path, id: EntryId) -> PathBuf {
    get_entries_dir(root).join(format!("{}.json", id.0))
}
