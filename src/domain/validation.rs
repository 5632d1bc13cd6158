//! Lifecycle invariants and field constraints checked before every commit

use crate::errors::{RegistryError, Result};
use crate::schemas::Entry;

use super::states::{can_settle, ApprovalStage};

pub const MAX_BUILDING_LEN: usize = 200;
pub const MAX_SECTION_LEN: usize = 200;
pub const MAX_MTR_LEN: usize = 300;
pub const MAX_RESPONSIBLE_LEN: usize = 200;

pub const PAID_WITHOUT_APPROVAL: &str = "cannot mark as paid until both AN and GIP have approved";
pub const DONE_WITHOUT_APPROVAL: &str = "cannot mark as done without AN and GIP approval";
pub const DONE_WITHOUT_WORKS: &str = "fill in works before marking as done";

/// Result of a validation check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether the validation passed
    pub valid: bool,

    /// Reason for failure (if valid is false)
    pub reason: Option<String>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        ValidationResult {
            valid: true,
            reason: None,
        }
    }

    /// Create a failed validation result
    pub fn failure(reason: impl Into<String>) -> Self {
        ValidationResult {
            valid: false,
            reason: Some(reason.into()),
        }
    }

    fn into_transition_result(self) -> Result<()> {
        match self.reason {
            Some(reason) if !self.valid => Err(RegistryError::InvalidTransition(reason)),
            _ => Ok(()),
        }
    }
}

/// A paid entry must carry both approvals
pub fn check_paid_requires_approvals(entry: &Entry) -> ValidationResult {
    if entry.is_paid() && !can_settle(ApprovalStage::of(entry)) {
        return ValidationResult::failure(PAID_WITHOUT_APPROVAL);
    }
    ValidationResult::success()
}

/// A done entry must carry both approvals
pub fn check_done_requires_approvals(entry: &Entry) -> ValidationResult {
    if entry.done && !can_settle(ApprovalStage::of(entry)) {
        return ValidationResult::failure(DONE_WITHOUT_APPROVAL);
    }
    ValidationResult::success()
}

/// A done entry must describe the works performed
pub fn check_done_requires_works(entry: &Entry) -> ValidationResult {
    if entry.done && entry.works.trim().is_empty() {
        return ValidationResult::failure(DONE_WITHOUT_WORKS);
    }
    ValidationResult::success()
}

/// Check the lifecycle invariants in order, failing on the first violation.
///
/// Pure: the entry is only borrowed and never modified.
///
/// # Errors
/// * `InvalidTransition` - paid without approvals, done without approvals,
///   or done without works
pub fn validate(entry: &Entry) -> Result<()> {
    check_paid_requires_approvals(entry).into_transition_result()?;
    check_done_requires_approvals(entry).into_transition_result()?;
    check_done_requires_works(entry).into_transition_result()?;
    Ok(())
}

fn check_text(name: &str, value: &str, max_len: usize) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RegistryError::FieldValidation(format!("{} is required", name)));
    }
    let len = value.chars().count();
    if len > max_len {
        return Err(RegistryError::FieldValidation(format!(
            "{} is {} characters long, at most {} allowed",
            name, len, max_len
        )));
    }
    Ok(())
}

/// Check per-field constraints: required text fields, their lengths and quantity ≥ 1.
///
/// # Errors
/// * `FieldValidation` - naming the first offending field
pub fn validate_fields(entry: &Entry) -> Result<()> {
    check_text("building", &entry.building, MAX_BUILDING_LEN)?;
    check_text("section", &entry.section, MAX_SECTION_LEN)?;
    check_text("mtr", &entry.mtr, MAX_MTR_LEN)?;
    if entry.quantity < 1 {
        return Err(RegistryError::FieldValidation(
            "quantity must be at least 1".to_string(),
        ));
    }
    check_text("responsible", &entry.responsible, MAX_RESPONSIBLE_LEN)?;
    if entry.created_by.trim().is_empty() {
        return Err(RegistryError::FieldValidation("created_by is required".to_string()));
    }
    Ok(())
}

/// Field constraints followed by lifecycle invariants; run before every write.
pub fn full_clean(entry: &Entry) -> Result<()> {
    validate_fields(entry)?;
    validate(entry)
}
