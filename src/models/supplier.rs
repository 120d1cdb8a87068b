//! Supplier model
//!
//! Suppliers are the tour operators listed in the admin screens. They are
//! created and updated through backend admin operations; this layer only
//! mirrors their shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supplier entity as returned by the backend admin API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    /// Unique identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Contact email address
    pub email: String,
    /// Contact phone number
    #[serde(default)]
    pub phone: Option<String>,
    /// Account status (active/inactive)
    pub status: SupplierStatus,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
    /// Number of tours operated by this supplier, when the backend includes it
    #[serde(default)]
    pub tour_count: Option<i64>,
}

impl Supplier {
    /// Check if the supplier can currently publish tours
    pub fn is_active(&self) -> bool {
        self.status == SupplierStatus::Active
    }
}

/// Supplier account status.
///
/// Inactive suppliers stay listed in the admin screens but their tours are
/// hidden from the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SupplierStatus {
    /// Active - tours visible on the storefront
    #[default]
    Active,
    /// Inactive - tours hidden
    Inactive,
}

impl fmt::Display for SupplierStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SupplierStatus::Active => write!(f, "active"),
            SupplierStatus::Inactive => write!(f, "inactive"),
        }
    }
}

impl FromStr for SupplierStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(SupplierStatus::Active),
            "inactive" => Ok(SupplierStatus::Inactive),
            _ => Err(anyhow::anyhow!("Invalid supplier status: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        assert_eq!(SupplierStatus::Active.to_string(), "active");
        assert_eq!(SupplierStatus::Inactive.to_string(), "inactive");
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!(SupplierStatus::from_str("active").unwrap(), SupplierStatus::Active);
        assert_eq!(SupplierStatus::from_str("ACTIVE").unwrap(), SupplierStatus::Active);
        assert_eq!(SupplierStatus::from_str("Inactive").unwrap(), SupplierStatus::Inactive);
        assert!(SupplierStatus::from_str("suspended").is_err());
    }

    #[test]
    fn test_supplier_deserialization() {
        let json = r#"{
            "id": 12,
            "name": "Sakura Tours",
            "email": "desk@sakura.example",
            "status": "active",
            "created_at": "2025-02-01T09:00:00Z",
            "updated_at": "2025-06-14T12:30:00Z",
            "tour_count": 8
        }"#;
        let supplier: Supplier = serde_json::from_str(json).unwrap();
        assert_eq!(supplier.id, 12);
        assert!(supplier.is_active());
        assert_eq!(supplier.phone, None);
        assert_eq!(supplier.tour_count, Some(8));
    }
}
