//! Configuration loading with defaults

use std::path::Path;

use crate::errors::{RegistryError, Result};
use crate::fs;
use crate::schemas::Config;

/// Load configuration from the registry, falling back to defaults.
///
/// If config.json exists, it will be read and merged with defaults.
///
/// # Errors
/// * `InvalidJson` - malformed config.json
/// * `ConfigError` - values that parse but cannot be used
pub fn load_config(root: &Path) -> Result<Config> {
    let config = fs::read_config(root)?;
    check_config(&config)?;
    Ok(config)
}

fn check_config(config: &Config) -> Result<()> {
    if config.list_limit == 0 {
        return Err(RegistryError::ConfigError(
            "list_limit must be greater than zero".to_string(),
        ));
    }
    if !config.export.delimiter.is_ascii() {
        return Err(RegistryError::ConfigError(format!(
            "export.delimiter must be a single ASCII character, got {:?}",
            config.export.delimiter
        )));
    }
    Ok(())
}
