//! File system utilities for the registry
//!
//! Provides path resolution and JSON file operations.

mod json;
mod lock;
mod paths;

pub use json::{read_config, read_json, read_users, write_json, write_users};
pub use lock::RegistryLock;
pub use paths::{
    find_registry_root, get_config_path, get_entries_dir, get_entry_path, get_lock_path,
    get_registry_dir, get_users_path, resolve_cwd, REGISTRY_DIR_NAME,
};
