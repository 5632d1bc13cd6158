//! CLI command implementations

pub mod approve;
pub mod create;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod register;
pub mod roles;
pub mod show;

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::config::load_config;
use crate::errors::{RegistryError, Result};
use crate::fs::{find_registry_root, read_users, resolve_cwd};
use crate::domain::{pending_approvals, ApprovalStage};
use crate::schemas::{Approval, Config, Entry, UserDirectory};
use crate::store::JsonEntryStore;

/// Everything a command needs from an initialized registry
pub struct Session {
    pub root: PathBuf,
    pub config: Config,
    pub users: UserDirectory,
    pub store: JsonEntryStore,
}

impl Session {
    /// Locate the registry from `cwd` and load config, users and store.
    pub fn open(cwd: Option<&Path>) -> Result<Self> {
        let root = find_registry_root(&resolve_cwd(cwd))?;
        let config = load_config(&root)?;
        let users = read_users(&root)?;
        let store = JsonEntryStore::new(&root);
        Ok(Session {
            root,
            config,
            users,
            store,
        })
    }
}

/// The acting user, which every command except `init` and `register` needs
pub fn require_user(user: Option<&str>) -> Result<&str> {
    match user.map(str::trim).filter(|u| !u.is_empty()) {
        Some(u) => Ok(u),
        None => Err(RegistryError::Unauthenticated(
            "no user given; pass --user or set REGISTRY_USER".to_string(),
        )),
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

fn date_or_dash(date: Option<NaiveDate>) -> String {
    date.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string())
}

fn approval_text(approval: &Approval) -> String {
    match (&approval.approved_by, approval.approved_at) {
        (Some(by), Some(at)) if approval.approved => format!("yes ({} at {})", by, at.to_rfc3339()),
        _ => yes_no(approval.approved).to_string(),
    }
}

/// Multi-line human-readable rendering of one entry
pub struct EntryDetails<'a>(pub &'a Entry);

impl fmt::Display for EntryDetails<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entry = self.0;
        let pending: Vec<String> = pending_approvals(ApprovalStage::of(entry))
            .iter()
            .map(|kind| kind.to_string())
            .collect();

        writeln!(f, "Entry {} (revision {})", entry.id, entry.revision)?;
        writeln!(f, "  Building:          {}", entry.building)?;
        writeln!(f, "  Section:           {}", entry.section)?;
        writeln!(f, "  MTR:               {}", entry.mtr)?;
        writeln!(f, "  Quantity:          {}", entry.quantity)?;
        writeln!(f, "  Works:             {}", entry.works)?;
        writeln!(f, "  AN approved:       {}", approval_text(&entry.an))?;
        writeln!(f, "  GIP approved:      {}", approval_text(&entry.gip))?;
        if !pending.is_empty() {
            writeln!(f, "  Awaiting:          {}", pending.join(", "))?;
        }
        writeln!(f, "  Paid:              {}", date_or_dash(entry.paid_date))?;
        writeln!(f, "  Delivery deadline: {}", date_or_dash(entry.delivery_deadline))?;
        writeln!(f, "  Done:              {}", yes_no(entry.done))?;
        writeln!(f, "  Responsible:       {}", entry.responsible)?;
        writeln!(
            f,
            "  Created:           {} by {}",
            entry.created_at.to_rfc3339(),
            entry.created_by
        )?;
        write!(f, "  Updated:           {}", entry.updated_at.to_rfc3339())
    }
}

/// Print an entry as JSON or in the human-readable layout
pub fn print_entry(entry: &Entry, json: bool) -> Result<()> {
    if json {
        let text = serde_json::to_string_pretty(entry)
            .map_err(|e| RegistryError::InvalidJson(e.to_string()))?;
        println!("{}", text);
    } else {
        println!("{}", EntryDetails(entry));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::{ApprovalKind, EntryDraft, EntryId};
    use chrono::Utc;

    #[test]
    fn test_require_user() {
        assert_eq!(require_user(Some("alice")).unwrap(), "alice");
        assert_eq!(require_user(Some(" bob ")).unwrap(), "bob");
        assert!(matches!(
            require_user(None).unwrap_err(),
            RegistryError::Unauthenticated(_)
        ));
        assert!(require_user(Some("  ")).is_err());
    }

    #[test]
    fn test_entry_details() {
        let entry = Entry::new(
            EntryDraft {
                building: "A1".to_string(),
                section: "Electrical".to_string(),
                mtr: "cable-5x2.5".to_string(),
                quantity: 10,
                responsible: "Petrov".to_string(),
                ..Default::default()
            },
            "alice",
        )
        .with_id(EntryId(4))
        .with_approval(ApprovalKind::An, "ivan", Utc::now());

        let text = EntryDetails(&entry).to_string();
        assert!(text.starts_with("Entry #4"));
        assert!(text.contains("AN approved:       yes (ivan at"));
        assert!(text.contains("GIP approved:      no"));
        assert!(text.contains("Awaiting:          gip\n"));
        assert!(text.contains("Paid:              -"));
        assert!(text.contains("by alice"));
    }

    #[test]
    fn test_entry_details_fully_approved() {
        let entry = Entry::new(EntryDraft::default(), "alice")
            .with_approval(ApprovalKind::An, "ivan", Utc::now())
            .with_approval(ApprovalKind::Gip, "olga", Utc::now());
        assert!(!EntryDetails(&entry).to_string().contains("Awaiting"));
    }

    #[test]
    fn test_session_requires_registry() {
        let temp = tempfile::TempDir::new().unwrap();
        let err = Session::open(Some(temp.path())).err().unwrap();
        assert!(matches!(err, RegistryError::RepoNotFound(_)));
    }
}
