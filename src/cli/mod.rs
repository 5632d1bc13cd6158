//! CLI module for the registry
//!
//! Provides the command-line interface using clap.

pub mod commands;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::schemas::{EntryId, Role};

/// Registry - procurement entries with AN/GIP approval
#[derive(Parser, Debug)]
#[command(name = "registry")]
#[command(version)]
#[command(about = "Track procurement entries through AN and GIP approval")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Act as this registered user
    #[arg(short, long, global = true, env = "REGISTRY_USER")]
    pub user: Option<String>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress info-level output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Override the working directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,
}

/// Entry fields shared by `create` and `edit`
#[derive(Args, Debug, Default, Clone)]
pub struct EntryFields {
    /// Building
    #[arg(long)]
    pub building: Option<String>,

    /// Section
    #[arg(long)]
    pub section: Option<String>,

    /// Material/resource descriptor
    #[arg(long)]
    pub mtr: Option<String>,

    /// Quantity (at least 1)
    #[arg(long)]
    pub quantity: Option<u32>,

    /// Description of the works performed
    #[arg(long)]
    pub works: Option<String>,

    /// Payment date (YYYY-MM-DD)
    #[arg(long)]
    pub paid_date: Option<NaiveDate>,

    /// Delivery/completion deadline (YYYY-MM-DD)
    #[arg(long)]
    pub delivery_deadline: Option<NaiveDate>,

    /// Mark as done (true/false)
    #[arg(long)]
    pub done: Option<bool>,

    /// Responsible person
    #[arg(long)]
    pub responsible: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the .registry directory in the current directory
    Init {
        /// Name of the first user; becomes a superuser
        #[arg(long)]
        admin: Option<String>,

        /// Reinitialize even if .registry already exists
        #[arg(long)]
        force: bool,
    },

    /// Register a new user (starts in the employee group)
    Register {
        /// Username
        username: String,

        /// Email address
        #[arg(long)]
        email: Option<String>,
    },

    /// Add a user to a role group (admin only)
    Grant {
        /// Username
        username: String,

        /// Role: employee, an, gip or admin
        role: Role,
    },

    /// Remove a user from a role group (admin only)
    Revoke {
        /// Username
        username: String,

        /// Role: employee, an, gip or admin
        role: Role,
    },

    /// Create a new entry
    Create {
        #[command(flatten)]
        fields: EntryFields,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Edit fields of an existing entry
    Edit {
        /// Entry ID
        id: EntryId,

        #[command(flatten)]
        fields: EntryFields,

        /// Clear the payment date
        #[arg(long, conflicts_with = "paid_date")]
        clear_paid_date: bool,

        /// Clear the delivery deadline
        #[arg(long, conflicts_with = "delivery_deadline")]
        clear_delivery_deadline: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Approve an entry as AN or GIP
    Approve {
        /// Entry ID
        id: EntryId,

        /// Approval kind: an or gip
        kind: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List entries, newest first
    List {
        /// Search building, section, MTR, works, responsible and creator
        #[arg(short = 's', long)]
        query: Option<String>,

        /// Only entries with this AN approval flag
        #[arg(long)]
        an: Option<bool>,

        /// Only entries with this GIP approval flag
        #[arg(long)]
        gip: Option<bool>,

        /// Only entries with this done flag
        #[arg(long)]
        done: Option<bool>,

        /// Only paid (true) or unpaid (false) entries
        #[arg(long)]
        paid: Option<bool>,

        /// Maximum number of entries
        #[arg(long)]
        limit: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show details of a specific entry
    Show {
        /// Entry ID
        id: EntryId,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export all entries as CSV (admin only)
    Export {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
