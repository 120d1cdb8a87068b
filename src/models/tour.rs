//! Tour models
//!
//! This module provides:
//! - `TourId` accepting both string and numeric identifiers from the backend
//! - `TourSummary` for storefront list views
//! - `TourSearchResult` pagination envelope

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tour identifier.
///
/// Older backend records carry numeric ids while newer ones use opaque
/// strings; both arrive through the same endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TourId {
    /// Numeric identifier (legacy records)
    Numeric(i64),
    /// Opaque string identifier
    Text(String),
}

impl fmt::Display for TourId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TourId::Numeric(n) => write!(f, "{}", n),
            TourId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Summary of a tour as shown in storefront lists
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TourSummary {
    /// Tour identifier (string or numeric)
    pub id: TourId,
    /// Tour title
    pub title: String,
    /// Geographic area label
    #[serde(default)]
    pub area: Option<String>,
    /// Average review rating
    #[serde(default)]
    pub rating: f64,
    /// Number of reviews
    #[serde(default)]
    pub review_count: i64,
    /// List price before discount, in minor currency units
    pub original_price: i64,
    /// Current selling price, in minor currency units
    pub current_price: i64,
    /// Tag set
    #[serde(default)]
    pub tags: Vec<String>,
    /// URL-friendly routing slug
    pub slug: String,
}

impl TourSummary {
    /// Check whether the tour is currently discounted
    pub fn is_discounted(&self) -> bool {
        self.current_price < self.original_price
    }
}

/// Search result envelope: an ordered page of tours plus the total count
/// across all pages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TourSearchResult {
    /// Tours in the current page
    #[serde(default)]
    pub tours: Vec<TourSummary>,
    /// Total number of matching tours
    #[serde(default)]
    pub total: i64,
}

impl TourSearchResult {
    /// Calculate the number of pages for a given page size
    pub fn total_pages(&self, per_page: u32) -> u32 {
        if per_page == 0 {
            return 0;
        }
        ((self.total.max(0) as u32) + per_page - 1) / per_page
    }
}
