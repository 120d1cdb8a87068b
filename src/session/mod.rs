//! Session store
//!
//! In-process session management for the frontend. Sessions are created
//! after the backend verifies credentials, carry the account profile, and
//! expire after a configurable lifetime. The store is the only mutable
//! shared state in the application; lookups of missing or expired tokens
//! yield `None`, never an error.

use chrono::{Duration, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{Session, SessionUser};

/// Default session expiration time in days
const DEFAULT_SESSION_EXPIRATION_DAYS: i64 = 7;

/// In-process session store
#[derive(Debug)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Session>>,
    lifetime: Duration,
}

impl SessionStore {
    /// Create a store with the default 7-day session lifetime
    pub fn new() -> Self {
        Self::with_expiration_days(DEFAULT_SESSION_EXPIRATION_DAYS)
    }

    /// Create a store with a custom session lifetime in days
    pub fn with_expiration_days(days: i64) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            lifetime: Duration::days(days),
        }
    }

    /// Session lifetime in seconds, for the cookie's Max-Age
    pub fn lifetime_seconds(&self) -> i64 {
        self.lifetime.num_seconds()
    }

    /// Create a session for a verified user and return it
    pub async fn create(&self, user: SessionUser) -> Session {
        let now = Utc::now();
        let session = Session {
            id: Uuid::new_v4().to_string(),
            user,
            expires_at: now + self.lifetime,
            created_at: now,
        };

        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id.clone(), session.clone());
        session
    }

    /// Look up a session by token.
    ///
    /// Returns `None` for unknown or expired tokens; expired entries are
    /// left for the purge task.
    pub async fn get(&self, token: &str) -> Option<Session> {
        let sessions = self.sessions.read().await;
        sessions.get(token).filter(|s| !s.is_expired()).cloned()
    }

    /// Destroy a session by token.
    ///
    /// Idempotent: destroying an absent token is a no-op. Returns whether
    /// a session was actually removed.
    pub async fn destroy(&self, token: &str) -> bool {
        let mut sessions = self.sessions.write().await;
        sessions.remove(token).is_some()
    }

    /// Remove expired sessions and return how many were dropped
    pub async fn purge_expired(&self) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired());
        before - sessions.len()
    }

    /// Number of live entries (including not-yet-purged expired ones)
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Check whether the store holds no entries
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64) -> SessionUser {
        SessionUser {
            id,
            email: format!("user{}@example.com", id),
            display_name: None,
            is_admin: false,
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let store = SessionStore::new();
        let session = store.create(user(1)).await;

        let found = store.get(&session.id).await.unwrap();
        assert_eq!(found.user.id, 1);
        assert_eq!(found.id, session.id);
    }

    #[tokio::test]
    async fn test_get_unknown_token() {
        let store = SessionStore::new();
        assert!(store.get("no-such-token").await.is_none());
    }

    #[tokio::test]
    async fn test_destroy_is_idempotent() {
        let store = SessionStore::new();
        let session = store.create(user(1)).await;

        assert!(store.destroy(&session.id).await);
        assert!(store.get(&session.id).await.is_none());
        // second destroy is a no-op, not an error
        assert!(!store.destroy(&session.id).await);
    }

    #[tokio::test]
    async fn test_expired_session_is_invisible() {
        let store = SessionStore::with_expiration_days(-1);
        let session = store.create(user(1)).await;

        // negative lifetime produces an already-expired session
        assert!(store.get(&session.id).await.is_none());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_purge_expired() {
        let expired = SessionStore::with_expiration_days(-1);
        expired.create(user(1)).await;
        expired.create(user(2)).await;

        assert_eq!(expired.purge_expired().await, 2);
        assert!(expired.is_empty().await);

        let live = SessionStore::new();
        live.create(user(3)).await;
        assert_eq!(live.purge_expired().await, 0);
        assert_eq!(live.len().await, 1);
    }

    #[tokio::test]
    async fn test_tokens_are_unique() {
        let store = SessionStore::new();
        let a = store.create(user(1)).await;
        let b = store.create(user(1)).await;
        assert_ne!(a.id, b.id);
        assert_eq!(store.len().await, 2);
    }
}
