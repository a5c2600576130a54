//! Typed user fields and the edit form payload.
//!
//! Role and status come back from the backend as open strings; editing
//! goes through closed enums so an unknown value is rejected before any
//! network call is made.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::Record;

/// User role. Closed set; unknown strings fail to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
    Editor,
}

impl Role {
    /// All roles in selector order.
    pub const ALL: [Role; 3] = [Role::User, Role::Admin, Role::Editor];

    /// Wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
            Role::Editor => "editor",
        }
    }

    /// Parse a wire value. Unknown values are rejected.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == value)
    }

    /// Next role in selector order, wrapping.
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|r| r == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous role in selector order, wrapping.
    pub fn prev(&self) -> Self {
        let idx = Self::ALL.iter().position(|r| r == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// User account status. Closed set; unknown strings fail to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Active,
    Inactive,
    Suspended,
}

impl Status {
    /// All statuses in selector order.
    pub const ALL: [Status; 3] = [Status::Active, Status::Inactive, Status::Suspended];

    /// Wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Inactive => "inactive",
            Status::Suspended => "suspended",
        }
    }

    /// Parse a wire value. Unknown values are rejected.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    /// Next status in selector order, wrapping.
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|s| s == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous status in selector order, wrapping.
    pub fn prev(&self) -> Self {
        let idx = Self::ALL.iter().position(|s| s == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Full replacement payload for a user update.
///
/// Serializes to the `{name, email, role, status}` body the backend's
/// PUT endpoint expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPatch {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: Status,
}

impl UserPatch {
    /// The patch as a field map, for merging into local state.
    pub fn to_map(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            // A struct of strings and unit enums always serializes to an
            // object; this arm is unreachable in practice.
            _ => Map::new(),
        }
    }
}

/// Scratch state owned by an open edit dialog.
///
/// Copied from a [`Record`] when editing starts and discarded on cancel;
/// it reaches the collection only as a validated [`UserPatch`] after the
/// server confirms the write.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditDraft {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: Status,
}

impl EditDraft {
    /// Seed a draft from a record, defaulting unknown or missing
    /// role/status values the way the original rows are displayed.
    pub fn from_record(record: &Record) -> Self {
        Self {
            name: record.get_str("name").unwrap_or_default().to_string(),
            email: record.get_str("email").unwrap_or_default().to_string(),
            role: record
                .get_str("role")
                .and_then(Role::parse)
                .unwrap_or_default(),
            status: record
                .get_str("status")
                .and_then(Status::parse)
                .unwrap_or_default(),
        }
    }

    /// Validate the draft into a submission payload.
    pub fn validate(&self) -> Result<UserPatch, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Name is required".to_string());
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err("Email is required".to_string());
        }
        if !email.contains('@') {
            return Err("Email must be a valid address".to_string());
        }
        Ok(UserPatch {
            name: name.to_string(),
            email: email.to_string(),
            role: self.role,
            status: self.status,
        })
    }
}
