//! Chef entity, the public face of a user account.

use chrono::{DateTime, Utc};

/// A registered user of the recipe site.
///
/// `username` is unique and is what appears in public profile URLs.
#[derive(Debug, Clone, PartialEq)]
pub struct Chef {
    pub id: i64,
    pub username: String,
    pub display_name: Option<String>,
    pub joined_at: DateTime<Utc>,
}

impl Chef {
    /// Creates a new Chef instance.
    pub fn new(
        id: i64,
        username: String,
        display_name: Option<String>,
        joined_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            username,
            display_name,
            joined_at,
        }
    }

    /// Name shown on pages: the display name when set, the username otherwise.
    pub fn public_name(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.username)
    }
}

/// Input data for registering a chef.
#[derive(Debug, Clone)]
pub struct NewChef {
    pub username: String,
    pub display_name: Option<String>,
}
