//! The backend collections the console can browse.

use crate::error::ConfigError;

/// A named remote collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Leads,
    Projects,
    Users,
}

impl Resource {
    /// All resources in tab order.
    pub const ALL: [Resource; 3] = [Resource::Leads, Resource::Projects, Resource::Users];

    /// Tab title.
    pub fn title(&self) -> &'static str {
        match self {
            Resource::Leads => "Leads",
            Resource::Projects => "Projects",
            Resource::Users => "Users",
        }
    }

    /// Singular noun for status lines and empty states.
    pub fn noun(&self) -> &'static str {
        match self {
            Resource::Leads => "leads",
            Resource::Projects => "projects",
            Resource::Users => "users",
        }
    }

    /// Path of the list endpoint.
    pub fn list_path(&self) -> &'static str {
        match self {
            Resource::Leads => "/auth/users/leads-details",
            Resource::Projects => "/auth/users/projects-details",
            Resource::Users => "/auth/users/user-data",
        }
    }

    /// Key under which the list response wraps its rows.
    pub fn envelope_key(&self) -> &'static str {
        match self {
            Resource::Leads => "leadsData",
            Resource::Projects => "projectsData",
            Resource::Users => "users",
        }
    }

    /// Path of the update endpoint for one record, where supported.
    pub fn update_path(&self, id: &str) -> Result<String, ConfigError> {
        match self {
            Resource::Users => Ok(format!("/auth/users/user-data/{}", id)),
            _ => Err(ConfigError::ReadOnlyResource {
                resource: self.noun(),
            }),
        }
    }

    /// Path of the delete endpoint for one record, where supported.
    pub fn delete_path(&self, id: &str) -> Result<String, ConfigError> {
        match self {
            Resource::Users => Ok(format!("/auth/users/delete-user/{}", id)),
            _ => Err(ConfigError::ReadOnlyResource {
                resource: self.noun(),
            }),
        }
    }

    /// Whether the backend accepts edits and deletes for this collection.
    pub fn supports_mutation(&self) -> bool {
        matches!(self, Resource::Users)
    }

    /// Next tab, wrapping.
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|r| r == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous tab, wrapping.
    pub fn prev(&self) -> Self {
        let idx = Self::ALL.iter().position(|r| r == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}
