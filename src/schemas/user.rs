//! User schema - registered actors and their role groups

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role groups known to the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Employee,
    An,
    Gip,
    Admin,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Employee, Role::An, Role::Gip, Role::Admin];
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Employee => write!(f, "employee"),
            Role::An => write!(f, "an"),
            Role::Gip => write!(f, "gip"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "employee" => Ok(Role::Employee),
            "an" => Ok(Role::An),
            "gip" => Ok(Role::Gip),
            "admin" => Ok(Role::Admin),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}

/// A registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default)]
    pub roles: BTreeSet<Role>,

    /// Superusers hold every role
    #[serde(default)]
    pub is_superuser: bool,

    pub joined_at: DateTime<Utc>,
}

impl User {
    /// A freshly registered user. Every new user starts as an employee.
    pub fn new(username: impl Into<String>, email: Option<String>) -> Self {
        let mut roles = BTreeSet::new();
        roles.insert(Role::Employee);
        User {
            username: username.into(),
            email,
            roles,
            is_superuser: false,
            joined_at: Utc::now(),
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.roles.insert(role);
        self
    }

    pub fn as_superuser(mut self) -> Self {
        self.is_superuser = true;
        self
    }
}

/// All registered users, persisted as users.json
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDirectory {
    /// Schema version for forward compatibility
    pub schema_version: u32,

    #[serde(default)]
    pub users: Vec<User>,
}

impl UserDirectory {
    pub fn new() -> Self {
        UserDirectory {
            schema_version: 1,
            users: Vec::new(),
        }
    }

    pub fn find(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|u| u.username == username)
    }

    pub fn find_mut(&mut self, username: &str) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.username == username)
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::new()
    }
}
