//! Login session entity.

use chrono::{DateTime, Utc};

/// A login session owned by a chef.
///
/// Only the HMAC of the session token is stored; the raw token is shown once
/// when the session is issued.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: i64,
    pub chef_id: i64,
    pub name: String,
    pub token_hash: String,
    pub created_at: DateTime<Utc>,
    pub last_used_at: Option<DateTime<Utc>>,
    pub revoked_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn is_revoked(&self) -> bool {
        self.revoked_at.is_some()
    }
}
