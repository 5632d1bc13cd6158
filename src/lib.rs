//! Registry - procurement entries guarded by a two-stage approval lifecycle
//!
//! This library provides the core functionality for the registry CLI, including:
//! - Schema definitions for entries, users and config
//! - Domain logic for the AN/GIP approval stages and the settlement guard
//! - Role-based authorization of approvals, edits and export
//! - Entry stores with revision-checked updates (JSON files and in-memory)
//! - CSV export and the workflow operations the CLI drives

pub mod auth;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod export;
pub mod fs;
pub mod schemas;
pub mod store;
pub mod workflow;

// Re-export commonly used types
pub use errors::{RegistryError, Result};
pub use schemas::{ApprovalKind, Config, Entry, EntryChanges, EntryDraft, EntryId, Role, User};
