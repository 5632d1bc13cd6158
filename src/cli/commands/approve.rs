//! Approve command - Record an AN or GIP approval

use std::path::Path;

use crate::errors::Result;
use crate::schemas::EntryId;
use crate::workflow::approve_entry_named;

use super::{print_entry, require_user, Session};

pub fn run(cwd: Option<&Path>, user: Option<&str>, id: EntryId, kind: &str, json: bool) -> Result<()> {
    let actor = require_user(user)?;
    let mut session = Session::open(cwd)?;

    let entry = approve_entry_named(&mut session.store, &session.users, actor, id, kind)?;
    if !json {
        println!("Entry {} approved ({})", entry.id, kind.trim().to_lowercase());
    }
    print_entry(&entry, json)
}
