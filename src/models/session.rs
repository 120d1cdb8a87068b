//! Session models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User profile attached to a session.
///
/// Produced by the backend sign-in endpoint; this layer displays it but
/// never interprets it beyond the admin flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    /// Backend account identifier
    pub id: i64,
    /// Account email address
    pub email: String,
    /// Display name, when set
    #[serde(default)]
    pub display_name: Option<String>,
    /// Whether the account may access the admin screens
    #[serde(default)]
    pub is_admin: bool,
}

impl SessionUser {
    /// Name to show in the navigation bar
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.email)
    }
}

/// Session entity held by the in-process session store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Session ID (token)
    pub id: String,
    /// Signed-in user profile
    pub user: SessionUser,
    /// Expiration timestamp
    pub expires_at: DateTime<Utc>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Check if the session has expired
    pub fn is_expired(&self) -> bool {
        self.expires_at < Utc::now()
    }
}
