//! JSON file operations with schema validation
//!
//! Provides functions to read and write JSON files with serde validation.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::{RegistryError, Result};
use crate::schemas::{Config, UserDirectory};

use super::paths::{get_config_path, get_users_path};

/// Read and deserialize a JSON file.
///
/// # Errors
/// * `FileNotFound` - If the file does not exist
/// * `InvalidJson` - If the file contains invalid JSON or does not match the schema
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            RegistryError::FileNotFound(format!("File not found: {}", path.display()))
        } else {
            RegistryError::Io(e)
        }
    })?;

    serde_json::from_str(&content).map_err(|e| {
        RegistryError::InvalidJson(format!("Invalid JSON in file {}: {}", path.display(), e))
    })
}

/// Write a value to a JSON file with pretty formatting.
///
/// Each call writes a uniquely named temp file in the target directory and
/// renames it into place, so readers never see a partial file and
/// concurrent writers never share a temp file.
pub fn write_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(data)
        .map_err(|e| RegistryError::InvalidJson(e.to_string()))?;

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut temp = tempfile::NamedTempFile::new_in(parent)?;
    temp.write_all(content.as_bytes())?;
    temp.write_all(b"\n")?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| RegistryError::Io(e.error))?;

    Ok(())
}

/// Read the config.json file, or defaults if it doesn't exist.
pub fn read_config(root: &Path) -> Result<Config> {
    let path = get_config_path(root);
    if !path.exists() {
        return Ok(Config::default());
    }
    read_json(&path)
}

/// Read users.json, or an empty directory if it doesn't exist.
pub fn read_users(root: &Path) -> Result<UserDirectory> {
    let path = get_users_path(root);
    if !path.exists() {
        return Ok(UserDirectory::default());
    }
    read_json(&path)
}

/// Write users.json.
pub fn write_users(root: &Path, users: &UserDirectory) -> Result<()> {
    write_json(&get_users_path(root), users)
}
