//! List command - List entries with optional filtering

use std::path::Path;

use crate::errors::{RegistryError, Result};
use crate::store::EntryFilter;
use crate::workflow::{list_entries, Listing};

use super::{require_user, Session};

fn flag(value: bool) -> &'static str {
    if value {
        "x"
    } else {
        "-"
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let cut: String = text.chars().take(width.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

/// One line per entry with AN/GIP/paid/done markers
pub fn format_listing(listing: &Listing) -> String {
    let mut lines = vec![format!(
        "{:<6} {:<16} {:<16} {:<24} {:>5}  AN GIP PAID DONE  {}",
        "ID", "BUILDING", "SECTION", "MTR", "QTY", "RESPONSIBLE"
    )];
    for entry in &listing.entries {
        lines.push(format!(
            "{:<6} {:<16} {:<16} {:<24} {:>5}  {:<2} {:<3} {:<4} {:<4}  {}",
            entry.id.to_string(),
            truncate(&entry.building, 16),
            truncate(&entry.section, 16),
            truncate(&entry.mtr, 24),
            entry.quantity,
            flag(entry.an.approved),
            flag(entry.gip.approved),
            flag(entry.is_paid()),
            flag(entry.done),
            entry.responsible,
        ));
    }
    lines.join("\n")
}

pub fn run(cwd: Option<&Path>, user: Option<&str>, filter: EntryFilter, json: bool) -> Result<()> {
    let actor = require_user(user)?;
    let session = Session::open(cwd)?;

    let listing = list_entries(&session.store, &session.users, actor, filter, &session.config)?;

    if json {
        let text = serde_json::to_string_pretty(&listing)
            .map_err(|e| RegistryError::InvalidJson(e.to_string()))?;
        println!("{}", text);
    } else if listing.entries.is_empty() {
        println!("No entries found");
    } else {
        println!("{}", format_listing(&listing));
    }
    Ok(())
}
