//! Schema types for the registry
//!
//! Everything persisted under `.registry/` is defined here.

mod config;
mod entry;
mod user;

pub use config::{Config, ExportConfig};
pub use entry::{Approval, ApprovalKind, Entry, EntryChanges, EntryDraft, EntryId};
pub use user::{Role, User, UserDirectory};
