//! Error types for the registry
//!
//! Each error type has a corresponding error code for programmatic handling.

use thiserror::Error;

/// Result type alias for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Main error type for all registry operations
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A lifecycle invariant would be violated by the candidate entry
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    /// Approval kind is neither AN nor GIP
    #[error("Unknown approval kind: {0}")]
    UnknownApprovalKind(String),

    /// A field-level constraint failed (quantity, lengths, required fields)
    #[error("Invalid field: {0}")]
    FieldValidation(String),

    /// Entry does not exist in the store
    #[error("Entry not found: {0}")]
    NotFound(String),

    /// The candidate was read at a revision that is no longer current
    #[error("Conflicting update: {0}")]
    Conflict(String),

    /// Actor lacks the role required for the operation
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Actor is not a registered user
    #[error("Unknown user: {0}")]
    Unauthenticated(String),

    /// Username is already registered
    #[error("User already exists: {0}")]
    DuplicateUser(String),

    /// No .registry directory found
    #[error("Registry not found: {0}")]
    RepoNotFound(String),

    /// Invalid JSON format
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// CSV writer error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error with context
    #[error("{context}: {message}")]
    Wrapped { context: String, message: String },
}

impl RegistryError {
    /// Get the error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            RegistryError::InvalidTransition(_) => "INVALID_TRANSITION",
            RegistryError::UnknownApprovalKind(_) => "UNKNOWN_APPROVAL_KIND",
            RegistryError::FieldValidation(_) => "FIELD_VALIDATION",
            RegistryError::NotFound(_) => "NOT_FOUND",
            RegistryError::Conflict(_) => "CONFLICT",
            RegistryError::Forbidden(_) => "FORBIDDEN",
            RegistryError::Unauthenticated(_) => "UNAUTHENTICATED",
            RegistryError::DuplicateUser(_) => "DUPLICATE_USER",
            RegistryError::RepoNotFound(_) => "REPO_NOT_FOUND",
            RegistryError::InvalidJson(_) => "INVALID_JSON",
            RegistryError::FileNotFound(_) => "FILE_NOT_FOUND",
            RegistryError::ConfigError(_) => "CONFIG_ERROR",
            RegistryError::Csv(_) => "CSV_ERROR",
            RegistryError::Io(_) => "IO_ERROR",
            RegistryError::Wrapped { .. } => "WRAPPED_ERROR",
        }
    }

    /// Whether the error came from the lifecycle guard or field checks
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            RegistryError::InvalidTransition(_)
                | RegistryError::UnknownApprovalKind(_)
                | RegistryError::FieldValidation(_)
                | RegistryError::Conflict(_)
        )
    }

    /// Wrap an error with additional context
    pub fn wrap<E: std::fmt::Display>(error: E, context: impl Into<String>) -> Self {
        RegistryError::Wrapped {
            context: context.into(),
            message: error.to_string(),
        }
    }
}

/// Convert an error to an appropriate exit code
pub fn to_exit_code(error: &RegistryError) -> i32 {
    match error {
        RegistryError::Forbidden(_) | RegistryError::Unauthenticated(_) => 3,
        e if e.is_rejection() => 2,
        _ => 1,
    }
}
