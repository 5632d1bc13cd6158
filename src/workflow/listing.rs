//! Read-side operations: listing, single entry, CSV export

use std::io::Write;

use serde::Serialize;
use tracing::info;

use crate::auth::{authenticate, require_role, AuthorizationProvider, Permissions};
use crate::errors::Result;
use crate::export::write_csv;
use crate::schemas::{Config, Entry, EntryId, Role};
use crate::store::{EntryFilter, EntryStore};

/// A page of entries together with what the viewer may do with them
#[derive(Debug, Clone, Serialize)]
pub struct Listing {
    pub entries: Vec<Entry>,
    pub query: Option<String>,
    pub permissions: Permissions,
}

/// Entries matching `filter`, newest first, capped by the configured limit.
///
/// Every registered user sees every entry.
pub fn list_entries<S, A>(
    store: &S,
    auth: &A,
    actor: &str,
    filter: EntryFilter,
    config: &Config,
) -> Result<Listing>
where
    S: EntryStore + ?Sized,
    A: AuthorizationProvider + ?Sized,
{
    authenticate(auth, actor)?;

    let limit = filter.limit.unwrap_or(config.list_limit).min(config.list_limit);
    let filter = EntryFilter {
        limit: Some(limit),
        ..filter
    };
    let entries = store.list(&filter)?;

    Ok(Listing {
        entries,
        query: filter.query,
        permissions: Permissions::for_actor(auth, actor),
    })
}

pub fn show_entry<S, A>(store: &S, auth: &A, actor: &str, id: EntryId) -> Result<Entry>
where
    S: EntryStore + ?Sized,
    A: AuthorizationProvider + ?Sized,
{
    authenticate(auth, actor)?;
    store.get(id)
}

/// Write every entry as CSV, newest first. Admins only.
///
/// Returns the number of rows written, not counting the header.
pub fn export_entries<S, A, W>(
    store: &S,
    auth: &A,
    actor: &str,
    writer: W,
    config: &Config,
) -> Result<usize>
where
    S: EntryStore + ?Sized,
    A: AuthorizationProvider + ?Sized,
    W: Write,
{
    require_role(auth, actor, Role::Admin, "export is available to admins only")?;

    let entries = store.list(&EntryFilter::new())?;
    write_csv(writer, &entries, &config.export)?;

    info!(actor = %actor, rows = entries.len(), "Exported entries");
    Ok(entries.len())
}
