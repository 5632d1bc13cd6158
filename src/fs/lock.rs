//! Exclusive lock serializing writers across processes

use std::fs::{self, File, OpenOptions};
use std::path::Path;

use fs2::FileExt;
use tracing::debug;

use crate::errors::{RegistryError, Result};

use super::paths::{get_lock_path, get_registry_dir};

/// Held for the duration of a read-check-write on registry files.
///
/// The lock is released when the guard is dropped.
#[derive(Debug)]
pub struct RegistryLock {
    file: File,
}

impl RegistryLock {
    /// Block until the registry lock under `root` is held.
    pub fn acquire(root: &Path) -> Result<Self> {
        fs::create_dir_all(get_registry_dir(root))?;
        let lock_path = get_lock_path(root);
        let file = OpenOptions::new()
            .create(true)
            .read(true)
            .write(true)
            .truncate(false)
            .open(&lock_path)?;

        FileExt::lock_exclusive(&file).map_err(|e| {
            RegistryError::wrap(e, format!("failed to lock {}", lock_path.display()))
        })?;
        debug!(path = %lock_path.display(), "Acquired registry lock");
        Ok(RegistryLock { file })
    }
}

impl Drop for RegistryLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}
