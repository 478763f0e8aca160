//! In-memory token registry.
//!
//! Maps opaque bearer tokens to their [`Session`] records. A single mutex
//! guards the whole map, so every operation (including the eviction done
//! while checking a token) is atomic with respect to every other.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use chrono::Duration;
use parking_lot::Mutex;
use uuid::Uuid;

use super::clock::{Clock, SystemClock};
use crate::domain::{Role, Session};

/// Outcome of an expiry-aware lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// Token is known and within its lifetime.
    Active(Session),
    /// Token was known but past its lifetime; it has been evicted by this call.
    Expired,
    /// Token is not in the registry.
    Missing,
}

/// Authoritative store of active sessions.
pub struct TokenRegistry {
    sessions: Mutex<HashMap<String, Session>>,
    clock: Arc<dyn Clock>,
}

impl TokenRegistry {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            clock,
        }
    }

    /// Issue a fresh token for `username` and store its session.
    pub fn create(&self, username: &str, role: Role) -> String {
        let mut sessions = self.sessions.lock();
        // Read under the lock so issuance time follows insertion order.
        let issued_at = self.clock.now();

        loop {
            let token = Uuid::new_v4().to_string();
            if let Entry::Vacant(slot) = sessions.entry(token.clone()) {
                slot.insert(Session::new(
                    token.clone(),
                    username.to_string(),
                    role,
                    issued_at,
                ));
                return token;
            }
        }
    }

    /// Plain existence check, no expiry logic.
    pub fn lookup(&self, token: &str) -> Option<Session> {
        self.sessions.lock().get(token).cloned()
    }

    /// Delete a session. Returns `false` if the token was unknown.
    pub fn remove(&self, token: &str) -> bool {
        self.sessions.lock().remove(token).is_some()
    }

    /// Look a token up and evict it if it outlived `lifetime`.
    ///
    /// Lookup and eviction happen under one lock acquisition: of several
    /// concurrent checks on the same expired token exactly one sees
    /// [`Lookup::Expired`], the rest see [`Lookup::Missing`].
    pub fn check(&self, token: &str, lifetime: Duration) -> Lookup {
        let mut sessions = self.sessions.lock();
        let now = self.clock.now();

        match sessions.entry(token.to_string()) {
            Entry::Vacant(_) => Lookup::Missing,
            Entry::Occupied(entry) if entry.get().is_expired_at(now, lifetime) => {
                entry.remove();
                Lookup::Expired
            }
            Entry::Occupied(entry) => Lookup::Active(entry.get().clone()),
        }
    }

    /// Remove every session older than `lifetime`. Returns how many were dropped.
    pub fn sweep(&self, lifetime: Duration) -> usize {
        let mut sessions = self.sessions.lock();
        let now = self.clock.now();
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired_at(now, lifetime));
        before - sessions.len()
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.lock().is_empty()
    }
}

impl Default for TokenRegistry {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}
