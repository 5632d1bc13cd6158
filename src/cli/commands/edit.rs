//! Edit command - Change fields of an existing entry

use std::path::Path;

use chrono::NaiveDate;

use crate::cli::EntryFields;
use crate::errors::Result;
use crate::schemas::{EntryChanges, EntryId};
use crate::workflow::edit_entry;

use super::{print_entry, require_user, Session};

/// `Some(None)` clears the date, `None` leaves it alone
fn date_change(value: Option<NaiveDate>, clear: bool) -> Option<Option<NaiveDate>> {
    if clear {
        Some(None)
    } else {
        value.map(Some)
    }
}

pub fn changes_from_fields(
    fields: EntryFields,
    clear_paid_date: bool,
    clear_delivery_deadline: bool,
) -> EntryChanges {
    EntryChanges {
        building: fields.building,
        section: fields.section,
        mtr: fields.mtr,
        quantity: fields.quantity,
        works: fields.works,
        paid_date: date_change(fields.paid_date, clear_paid_date),
        delivery_deadline: date_change(fields.delivery_deadline, clear_delivery_deadline),
        done: fields.done,
        responsible: fields.responsible,
    }
}

pub fn run(
    cwd: Option<&Path>,
    user: Option<&str>,
    id: EntryId,
    changes: EntryChanges,
    json: bool,
) -> Result<()> {
    let actor = require_user(user)?;
    let mut session = Session::open(cwd)?;

    let entry = edit_entry(&mut session.store, &session.users, actor, id, changes)?;
    if !json {
        println!("Updated entry {}", entry.id);
    }
    print_entry(&entry, json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::{create, init, register, roles};
    use crate::errors::RegistryError;
    use crate::schemas::Role;
    use crate::store::{EntryStore, JsonEntryStore};
    use tempfile::TempDir;

    fn setup() -> TempDir {
        let temp = TempDir::new().unwrap();
        init::run(Some(temp.path()), Some("root"), false).unwrap();
        register::run(Some(temp.path()), "alice", None).unwrap();
        register::run(Some(temp.path()), "bob", None).unwrap();
        roles::grant(Some(temp.path()), Some("root"), "bob", Role::An).unwrap();

        let fields = EntryFields {
            building: Some("A1".to_string()),
            section: Some("Electrical".to_string()),
            mtr: Some("cable-5x2.5".to_string()),
            quantity: Some(10),
            responsible: Some("Petrov".to_string()),
            ..Default::default()
        };
        create::run(Some(temp.path()), Some("alice"), fields, true).unwrap();
        temp
    }

    #[test]
    fn test_changes_from_fields() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1);
        let changes = changes_from_fields(
            EntryFields {
                delivery_deadline: date,
                ..Default::default()
            },
            true,
            false,
        );
        assert_eq!(changes.paid_date, Some(None));
        assert_eq!(changes.delivery_deadline, Some(date));
        assert!(changes.building.is_none());

        assert!(changes_from_fields(EntryFields::default(), false, false).is_empty());
    }

    #[test]
    fn test_date_change() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 10);
        assert_eq!(date_change(date, false), Some(date));
        assert_eq!(date_change(None, false), None);
        assert_eq!(date_change(date, true), Some(None));
        assert_eq!(date_change(None, true), Some(None));
    }

    #[test]
    fn test_creator_can_edit() {
        let temp = setup();
        let changes = changes_from_fields(
            EntryFields {
                works: Some("cable laid".to_string()),
                ..Default::default()
            },
            false,
            false,
        );
        run(Some(temp.path()), Some("alice"), EntryId(1), changes, true).unwrap();

        let stored = JsonEntryStore::new(temp.path()).get(EntryId(1)).unwrap();
        assert_eq!(stored.works, "cable laid");
        assert_eq!(stored.revision, 2);
    }

    #[test]
    fn test_other_user_cannot_edit() {
        let temp = setup();
        let changes = changes_from_fields(
            EntryFields {
                quantity: Some(3),
                ..Default::default()
            },
            false,
            false,
        );
        let err = run(Some(temp.path()), Some("bob"), EntryId(1), changes, false).unwrap_err();
        assert!(matches!(err, RegistryError::Forbidden(_)));
    }

    #[test]
    fn test_done_without_approvals_leaves_entry_unchanged() {
        let temp = setup();
        let changes = changes_from_fields(
            EntryFields {
                done: Some(true),
                works: Some("cable laid".to_string()),
                ..Default::default()
            },
            false,
            false,
        );
        let err = run(Some(temp.path()), Some("alice"), EntryId(1), changes, false).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidTransition(_)));

        let stored = JsonEntryStore::new(temp.path()).get(EntryId(1)).unwrap();
        assert!(!stored.done);
        assert!(stored.works.is_empty());
        assert_eq!(stored.revision, 1);
    }
}
