//! Config schema - Configuration for the registry

use serde::{Deserialize, Serialize};

/// CSV export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Rendering of a true flag
    #[serde(default = "default_yes_label")]
    pub yes_label: String,

    /// Rendering of a false flag
    #[serde(default = "default_no_label")]
    pub no_label: String,

    /// Field delimiter, a single ASCII character
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            yes_label: default_yes_label(),
            no_label: default_no_label(),
            delimiter: default_delimiter(),
        }
    }
}

/// Main configuration for the registry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Maximum number of entries a listing returns
    #[serde(default = "default_list_limit")]
    pub list_limit: usize,

    /// CSV export settings
    #[serde(default)]
    pub export: ExportConfig,
}

fn default_schema_version() -> u32 {
    1
}

fn default_list_limit() -> usize {
    500
}

fn default_yes_label() -> String {
    "Да".to_string()
}

fn default_no_label() -> String {
    "Нет".to_string()
}

fn default_delimiter() -> char {
    ','
}

impl Default for Config {
    fn default() -> Self {
        Config {
            schema_version: 1,
            list_limit: 500,
            export: ExportConfig::default(),
        }
    }
}
