//! Entry schema - The registry record and its approval state

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::RegistryError;

/// Identifier of a stored entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub u64);

impl EntryId {
    /// Placeholder id carried by an entry that has not been stored yet
    pub const UNASSIGNED: EntryId = EntryId(0);
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl std::str::FromStr for EntryId {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim().trim_start_matches('#');
        match raw.parse::<u64>() {
            Ok(0) | Err(_) => Err(RegistryError::FieldValidation(format!(
                "invalid entry id: {}",
                s
            ))),
            Ok(n) => Ok(EntryId(n)),
        }
    }
}

/// The two approval stages an entry goes through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalKind {
    /// Technical reviewer
    An,
    /// Chief engineer
    Gip,
}

impl ApprovalKind {
    pub const ALL: [ApprovalKind; 2] = [ApprovalKind::An, ApprovalKind::Gip];

    /// The other approval stage
    pub fn counterpart(self) -> ApprovalKind {
        match self {
            ApprovalKind::An => ApprovalKind::Gip,
            ApprovalKind::Gip => ApprovalKind::An,
        }
    }
}

impl std::fmt::Display for ApprovalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApprovalKind::An => write!(f, "an"),
            ApprovalKind::Gip => write!(f, "gip"),
        }
    }
}

impl std::str::FromStr for ApprovalKind {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "an" => Ok(ApprovalKind::An),
            "gip" => Ok(ApprovalKind::Gip),
            _ => Err(RegistryError::UnknownApprovalKind(s.to_string())),
        }
    }
}

/// Who approved a stage and when
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Approval {
    pub approved: bool,

    #[serde(default)]
    pub approved_by: Option<String>,

    #[serde(default)]
    pub approved_at: Option<DateTime<Utc>>,
}

/// Fields supplied when an entry is first created
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntryDraft {
    pub building: String,
    pub section: String,
    pub mtr: String,
    pub quantity: u32,
    pub works: String,
    pub paid_date: Option<NaiveDate>,
    pub delivery_deadline: Option<NaiveDate>,
    pub done: bool,
    pub responsible: String,
}

/// A partial field edit. Only the form-editable fields appear here;
/// approvals and audit fields change through their own operations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntryChanges {
    pub building: Option<String>,
    pub section: Option<String>,
    pub mtr: Option<String>,
    pub quantity: Option<u32>,
    pub works: Option<String>,
    /// `Some(None)` clears the date
    pub paid_date: Option<Option<NaiveDate>>,
    /// `Some(None)` clears the date
    pub delivery_deadline: Option<Option<NaiveDate>>,
    pub done: Option<bool>,
    pub responsible: Option<String>,
}

impl EntryChanges {
    pub fn is_empty(&self) -> bool {
        *self == EntryChanges::default()
    }
}

/// A registry entry representing one procurement/work item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Schema version for forward compatibility
    pub schema_version: u32,

    pub id: EntryId,

    /// Store-managed counter, bumped on every committed update
    #[serde(default)]
    pub revision: u64,

    pub building: String,
    pub section: String,

    /// Material/resource descriptor
    pub mtr: String,

    pub quantity: u32,

    #[serde(default)]
    pub works: String,

    #[serde(default)]
    pub an: Approval,

    #[serde(default)]
    pub gip: Approval,

    #[serde(default)]
    pub paid_date: Option<NaiveDate>,

    #[serde(default)]
    pub delivery_deadline: Option<NaiveDate>,

    #[serde(default)]
    pub done: bool,

    pub responsible: String,

    /// Username of the creator, never changes after creation
    pub created_by: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entry {
    /// Create a new unsaved entry in the Draft stage
    pub fn new(draft: EntryDraft, created_by: impl Into<String>) -> Self {
        let now = Utc::now();
        Entry {
            schema_version: 1,
            id: EntryId::UNASSIGNED,
            revision: 0,
            building: draft.building,
            section: draft.section,
            mtr: draft.mtr,
            quantity: draft.quantity,
            works: draft.works,
            an: Approval::default(),
            gip: Approval::default(),
            paid_date: draft.paid_date,
            delivery_deadline: draft.delivery_deadline,
            done: draft.done,
            responsible: draft.responsible,
            created_by: created_by.into(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn approval(&self, kind: ApprovalKind) -> &Approval {
        match kind {
            ApprovalKind::An => &self.an,
            ApprovalKind::Gip => &self.gip,
        }
    }

    pub fn is_approved(&self, kind: ApprovalKind) -> bool {
        self.approval(kind).approved
    }

    pub fn is_paid(&self) -> bool {
        self.paid_date.is_some()
    }

    /// Paid or done entries are locked for non-admin edits
    pub fn is_settled(&self) -> bool {
        self.is_paid() || self.done
    }

    // ===== IMMUTABLE BUILDER METHODS =====

    /// Return a new Entry with the given approval recorded at `at`.
    ///
    /// Only the three fields of that approval change; `updated_at` is
    /// stamped by the store when the entry is committed.
    pub fn with_approval(mut self, kind: ApprovalKind, actor: &str, at: DateTime<Utc>) -> Self {
        let approval = Approval {
            approved: true,
            approved_by: Some(actor.to_string()),
            approved_at: Some(at),
        };
        match kind {
            ApprovalKind::An => self.an = approval,
            ApprovalKind::Gip => self.gip = approval,
        }
        self
    }

    /// Return a new Entry with the field edits applied
    pub fn with_changes(mut self, changes: EntryChanges) -> Self {
        if let Some(building) = changes.building {
            self.building = building;
        }
        if let Some(section) = changes.section {
            self.section = section;
        }
        if let Some(mtr) = changes.mtr {
            self.mtr = mtr;
        }
        if let Some(quantity) = changes.quantity {
            self.quantity = quantity;
        }
        if let Some(works) = changes.works {
            self.works = works;
        }
        if let Some(paid_date) = changes.paid_date {
            self.paid_date = paid_date;
        }
        if let Some(deadline) = changes.delivery_deadline {
            self.delivery_deadline = deadline;
        }
        if let Some(done) = changes.done {
            self.done = done;
        }
        if let Some(responsible) = changes.responsible {
            self.responsible = responsible;
        }
        self.touch_returning()
    }

    /// Return a new Entry with the given id
    pub fn with_id(mut self, id: EntryId) -> Self {
        self.id = id;
        self
    }

    fn touch_returning(mut self) -> Self {
        self.updated_at = Utc::now();
        self
    }
}
