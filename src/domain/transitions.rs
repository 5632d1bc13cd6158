//! Entry mutations
//!
//! Pure functions: each takes the current entry by reference and returns the
//! candidate next state. Nothing here touches storage or checks permissions.

use chrono::{DateTime, Utc};

use crate::errors::Result;
use crate::schemas::{ApprovalKind, Entry, EntryChanges};

use super::validation::full_clean;

/// Record an approval of `kind` by `actor`, stamped with the current time.
///
/// Only the three fields of that approval change. Approving an already
/// approved stage overwrites the actor and timestamp; the flag stays set.
/// The result still has to pass [`super::validate`] before it is committed.
pub fn apply_approval(entry: &Entry, kind: ApprovalKind, actor: &str) -> Entry {
    apply_approval_at(entry, kind, actor, Utc::now())
}

/// [`apply_approval`] with an explicit timestamp
pub fn apply_approval_at(
    entry: &Entry,
    kind: ApprovalKind,
    actor: &str,
    at: DateTime<Utc>,
) -> Entry {
    entry.clone().with_approval(kind, actor, at)
}

/// [`apply_approval`] for a kind given as text (e.g. from the command line).
///
/// # Errors
/// * `UnknownApprovalKind` - if `kind` is neither "an" nor "gip"; the entry is untouched
pub fn apply_approval_named(entry: &Entry, kind: &str, actor: &str) -> Result<Entry> {
    let kind: ApprovalKind = kind.parse()?;
    Ok(apply_approval(entry, kind, actor))
}

/// Apply a field edit and run the full pre-commit check on the result.
///
/// The input entry is never modified; on failure the candidate is dropped.
pub fn apply_changes(entry: &Entry, changes: EntryChanges) -> Result<Entry> {
    let candidate = entry.clone().with_changes(changes);
    full_clean(&candidate)?;
    Ok(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validate;
    use crate::errors::RegistryError;
    use crate::schemas::EntryDraft;
    use chrono::{Duration, NaiveDate};

    fn make_entry() -> Entry {
        Entry::new(
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
    }

    #[test]
    fn test_apply_an_approval() {
        let entry = make_entry();
        let next = apply_approval(&entry, ApprovalKind::An, "ivan");

        assert!(next.an.approved);
        assert_eq!(next.an.approved_by.as_deref(), Some("ivan"));
        assert!(next.an.approved_at.is_some());
        assert!(!next.gip.approved);
        assert!(next.gip.approved_by.is_none());
        assert!(validate(&next).is_ok());
    }

    #[test]
    fn test_apply_gip_approval() {
        let entry = make_entry();
        let next = apply_approval(&entry, ApprovalKind::Gip, "olga");

        assert!(next.gip.approved);
        assert_eq!(next.gip.approved_by.as_deref(), Some("olga"));
        assert!(!next.an.approved);
    }

    #[test]
    fn test_repeated_approval_overwrites_timestamp() {
        let entry = make_entry();
        let first_at = Utc::now();
        let second_at = first_at + Duration::seconds(5);

        let once = apply_approval_at(&entry, ApprovalKind::An, "ivan", first_at);
        let twice = apply_approval_at(&once, ApprovalKind::An, "ivan", second_at);

        assert!(once.an.approved);
        assert!(twice.an.approved);
        assert_eq!(once.an.approved_by.as_deref(), Some("ivan"));
        assert_eq!(twice.an.approved_by.as_deref(), Some("ivan"));
        assert_eq!(once.an.approved_at, Some(first_at));
        assert_eq!(twice.an.approved_at, Some(second_at));
    }

    #[test]
    fn test_apply_approval_named_unknown_kind() {
        let entry = make_entry();
        let before = entry.clone();

        let err = apply_approval_named(&entry, "XYZ", "ivan").unwrap_err();
        assert!(matches!(err, RegistryError::UnknownApprovalKind(ref k) if k == "XYZ"));
        assert_eq!(entry, before);
    }

    #[test]
    fn test_apply_approval_named_known_kind() {
        let entry = make_entry();
        let next = apply_approval_named(&entry, "gip", "olga").unwrap();
        assert!(next.gip.approved);
    }

    #[test]
    fn test_apply_approval_does_not_mutate_original() {
        let entry = make_entry();
        let before = entry.clone();
        let _ = apply_approval(&entry, ApprovalKind::An, "ivan");
        assert_eq!(entry, before);
    }

    #[test]
    fn test_apply_changes_rejects_paid_without_approvals() {
        let entry = make_entry();
        let result = apply_changes(
            &entry,
            EntryChanges {
                paid_date: Some(NaiveDate::from_ymd_opt(2024, 1, 10)),
                ..Default::default()
            },
        );
        assert!(matches!(result.unwrap_err(), RegistryError::InvalidTransition(_)));
        assert!(entry.paid_date.is_none());
    }

    #[test]
    fn test_apply_changes_done_after_approvals() {
        let entry = apply_approval(&make_entry(), ApprovalKind::An, "ivan");
        let entry = apply_approval(&entry, ApprovalKind::Gip, "olga");

        let without_works = apply_changes(
            &entry,
            EntryChanges {
                done: Some(true),
                works: Some(String::new()),
                ..Default::default()
            },
        );
        assert!(matches!(without_works.unwrap_err(), RegistryError::InvalidTransition(_)));

        let with_works = apply_changes(
            &entry,
            EntryChanges {
                done: Some(true),
                works: Some("installed cable run".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
        assert!(with_works.done);
    }

    #[test]
    fn test_apply_changes_rejects_zero_quantity() {
        let entry = make_entry();
        let result = apply_changes(
            &entry,
            EntryChanges {
                quantity: Some(0),
                ..Default::default()
            },
        );
        assert!(matches!(result.unwrap_err(), RegistryError::FieldValidation(_)));
    }
}
