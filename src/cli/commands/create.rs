//! Create command - Add a new entry

use std::path::Path;

use crate::cli::EntryFields;
use crate::errors::Result;
use crate::schemas::EntryDraft;
use crate::workflow::create_entry;

use super::{print_entry, require_user, Session};

/// Turn command-line fields into a draft; missing text stays empty so
/// validation reports it by name.
pub fn draft_from_fields(fields: EntryFields) -> EntryDraft {
    EntryDraft {
        building: fields.building.unwrap_or_default(),
        section: fields.section.unwrap_or_default(),
        mtr: fields.mtr.unwrap_or_default(),
        quantity: fields.quantity.unwrap_or(0),
        works: fields.works.unwrap_or_default(),
        paid_date: fields.paid_date,
        delivery_deadline: fields.delivery_deadline,
        done: fields.done.unwrap_or(false),
        responsible: fields.responsible.unwrap_or_default(),
    }
}

pub fn run(cwd: Option<&Path>, user: Option<&str>, fields: EntryFields, json: bool) -> Result<()> {
    let actor = require_user(user)?;
    let mut session = Session::open(cwd)?;

    let entry = create_entry(
        &mut session.store,
        &session.users,
        actor,
        draft_from_fields(fields),
    )?;
    if !json {
        println!("Created entry {}", entry.id);
    }
    print_entry(&entry, json)
}
