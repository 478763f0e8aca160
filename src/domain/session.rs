//! Session record held for every issued token.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use super::Role;

/// Server-side state associated with an issued bearer token.
///
/// All fields are fixed at issuance; the registry owns the record and hands
/// out clones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    #[serde(skip_serializing)]
    pub token: String,
    pub username: String,
    pub role: Role,
    pub issued_at: DateTime<Utc>,
}

impl Session {
    pub fn new(token: String, username: String, role: Role, issued_at: DateTime<Utc>) -> Self {
        Self {
            token,
            username,
            role,
            issued_at,
        }
    }

    /// Time elapsed since issuance as observed at `now`.
    pub fn age_at(&self, now: DateTime<Utc>) -> Duration {
        now - self.issued_at
    }

    /// A session expires once its age strictly exceeds `lifetime`.
    pub fn is_expired_at(&self, now: DateTime<Utc>, lifetime: Duration) -> bool {
        self.age_at(now) > lifetime
    }

    /// Whether this session satisfies an optional role requirement.
    pub fn satisfies(&self, required: Option<Role>) -> bool {
        required.map_or(true, |role| self.role == role)
    }
}
