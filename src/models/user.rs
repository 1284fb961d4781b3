//! Host identity and profile models

use serde::{Deserialize, Serialize};

/// Identity supplied by the host platform, when the user is known
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostIdentity {
    pub id: i64,
    pub first_name: String,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub language_code: Option<String>,
}

impl HostIdentity {
    /// Full display name
    pub fn display_name(&self) -> String {
        match &self.last_name {
            Some(last_name) => format!("{} {}", self.first_name, last_name),
            None => self.first_name.clone(),
        }
    }

    /// Initials for the avatar badge
    pub fn initials(&self) -> String {
        let mut initials = String::new();
        if let Some(first) = self.first_name.chars().next() {
            initials.push(first);
        }
        if let Some(last) = self.last_name.as_ref().and_then(|name| name.chars().next()) {
            initials.push(last);
        }
        initials
    }
}

/// Placeholder profile counters shown on the profile view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileStats {
    pub events: u32,
    pub attended: u32,
    pub hosted: u32,
}

impl ProfileStats {
    pub fn placeholder() -> Self {
        Self {
            events: 12,
            attended: 48,
            hosted: 6,
        }
    }
}

/// Data backing the profile view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub identity: Option<HostIdentity>,
    pub stats: ProfileStats,
}

impl ProfileSummary {
    pub fn new(identity: Option<HostIdentity>) -> Self {
        Self {
            identity,
            stats: ProfileStats::placeholder(),
        }
    }

    /// Display name, falling back to a generic label for unknown users
    pub fn display_name(&self) -> String {
        self.identity
            .as_ref()
            .map(|identity| identity.display_name())
            .unwrap_or_else(|| "User".to_string())
    }

    /// Username handle, when the host supplied one
    pub fn username(&self) -> Option<&str> {
        self.identity
            .as_ref()
            .and_then(|identity| identity.username.as_deref())
    }
}
