//! Approval stage definitions
//!
//! The two approval flags form a small lattice:
//! draft → an_only | gip_only → both_approved
//!
//! Approvals are monotonic, nothing ever clears a flag. Paid and done sit
//! outside this chain and are only reachable once both approvals hold.

use crate::schemas::{ApprovalKind, Entry};

/// Where an entry stands in the approval workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApprovalStage {
    /// Neither stage approved
    Draft,
    /// Only the technical reviewer approved
    AnOnly,
    /// Only the chief engineer approved
    GipOnly,
    /// Both approvals in place; paid/done are now permitted
    BothApproved,
}

impl ApprovalStage {
    /// Stage of an entry, derived from its two approval flags
    pub fn of(entry: &Entry) -> Self {
        Self::from_flags(entry.an.approved, entry.gip.approved)
    }

    pub fn from_flags(an: bool, gip: bool) -> Self {
        match (an, gip) {
            (false, false) => ApprovalStage::Draft,
            (true, false) => ApprovalStage::AnOnly,
            (false, true) => ApprovalStage::GipOnly,
            (true, true) => ApprovalStage::BothApproved,
        }
    }

    pub fn has(self, kind: ApprovalKind) -> bool {
        match (self, kind) {
            (ApprovalStage::BothApproved, _) => true,
            (ApprovalStage::AnOnly, ApprovalKind::An) => true,
            (ApprovalStage::GipOnly, ApprovalKind::Gip) => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for ApprovalStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApprovalStage::Draft => write!(f, "draft"),
            ApprovalStage::AnOnly => write!(f, "an_only"),
            ApprovalStage::GipOnly => write!(f, "gip_only"),
            ApprovalStage::BothApproved => write!(f, "both_approved"),
        }
    }
}

/// Stage reached after granting `kind`.
///
/// Approving a stage that is already approved leaves the stage where it is.
pub fn next_stage(current: ApprovalStage, kind: ApprovalKind) -> ApprovalStage {
    let an = current.has(ApprovalKind::An) || kind == ApprovalKind::An;
    let gip = current.has(ApprovalKind::Gip) || kind == ApprovalKind::Gip;
    ApprovalStage::from_flags(an, gip)
}

/// Approvals still missing at the given stage
pub fn pending_approvals(stage: ApprovalStage) -> Vec<ApprovalKind> {
    ApprovalKind::ALL
        .iter()
        .copied()
        .filter(|kind| !stage.has(*kind))
        .collect()
}

/// Whether paid/done may be set at this stage
pub fn can_settle(stage: ApprovalStage) -> bool {
    stage == ApprovalStage::BothApproved
}
