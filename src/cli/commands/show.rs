//! Show command - Show details of a specific entry

use std::path::Path;

use crate::errors::Result;
use crate::schemas::EntryId;
use crate::workflow::show_entry;

use super::{print_entry, require_user, Session};

pub fn run(cwd: Option<&Path>, user: Option<&str>, id: EntryId, json: bool) -> Result<()> {
    let actor = require_user(user)?;
    let session = Session::open(cwd)?;

    let entry = show_entry(&session.store, &session.users, actor, id)?;
    print_entry(&entry, json)
}
