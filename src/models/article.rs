//! Article summary model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Summary of a travel article as shown on the top page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleSummary {
    /// Unique identifier
    pub id: i64,
    /// Article title
    pub title: String,
    /// Short excerpt for list views
    #[serde(default)]
    pub excerpt: String,
    /// Tag set
    #[serde(default)]
    pub tags: Vec<String>,
    /// View count
    #[serde(default)]
    pub view_count: i64,
    /// Like count
    #[serde(default)]
    pub like_count: i64,
    /// Comment count
    #[serde(default)]
    pub comment_count: i64,
    /// Publication timestamp, when the backend includes it
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}
