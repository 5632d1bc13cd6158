//! Entry lifecycle guard: approval stages, invariants and mutations

mod states;
mod transitions;
mod validation;


pub use states::{
    can_settle, next_stage, pending_approvals, ApprovalStage,
};
pub use transitions::{apply_approval, apply_approval_at, apply_approval_named, apply_changes};
pub use validation::{
    check_done_requires_approvals, check_done_requires_works, check_paid_requires_approvals,
    full_clean, validate, validate_fields, ValidationResult, DONE_WITHOUT_APPROVAL,
    DONE_WITHOUT_WORKS, MAX_BUILDING_LEN, MAX_MTR_LEN, MAX_RESPONSIBLE_LEN, MAX_SECTION_LEN,
    PAID_WITHOUT_APPROVAL,
};
