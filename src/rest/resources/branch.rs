//! Branch resource implementation.
//!
//! Branches are the physical locations of the business - stores and
//! warehouses. Most other resources reference a branch by ID.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::params::PageParams;
use crate::rest::resource::{Creatable, Deletable, Resource, Updatable};

/// A store or warehouse location.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Branch {
    // --- Read-only fields (not serialized) ---
    /// The unique identifier of the branch.
    #[serde(skip_serializing)]
    pub id: Option<String>,

    /// When the branch was created.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the branch was last updated.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,

    // --- Writable fields ---
    /// The branch name.
    pub name: String,

    /// A short human-facing identifier (e.g., "DT-01").
    pub unique_id: String,

    /// The branch's postal address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// The branch's phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// The kind of location (e.g., "store", "warehouse").
    pub branch_type: String,

    /// The ISO currency code used at the branch.
    pub currency_code: String,

    /// The currency symbol displayed at the branch.
    pub currency_symbol: String,

    /// The default low-stock threshold for products at this branch.
    pub low_stock_threshold: i64,
}

impl Resource for Branch {
    const NAME: &'static str = "branch";
    const SEGMENT: &'static str = "branches";
    type ListParams = PageParams;
}

impl Creatable for Branch {}
impl Updatable for Branch {}
impl Deletable for Branch {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch_serialization_skips_read_only_fields() {
        let branch = Branch {
            id: Some("br-1".to_string()),
            created_at: Some(Utc::now()),
            name: "Downtown".to_string(),
            unique_id: "DT-01".to_string(),
            branch_type: "store".to_string(),
            currency_code: "USD".to_string(),
            currency_symbol: "$".to_string(),
            low_stock_threshold: 5,
            ..Default::default()
        };

        let parsed: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&branch).unwrap()).unwrap();

        assert_eq!(parsed["name"], "Downtown");
        assert_eq!(parsed["unique_id"], "DT-01");
        assert_eq!(parsed["currency_code"], "USD");
        assert!(parsed.get("id").is_none());
        assert!(parsed.get("created_at").is_none());
        assert!(parsed.get("address").is_none());
    }

    #[test]
    fn test_branch_deserialization_from_api_response() {
        let json = r#"{
            "id": "br-1",
            "name": "Downtown",
            "unique_id": "DT-01",
            "branch_type": "store",
            "currency_code": "USD",
            "currency_symbol": "$",
            "low_stock_threshold": 5,
            "created_at": "2025-06-01T00:00:00Z",
            "updated_at": "2026-01-20T10:00:00Z"
        }"#;

        let branch: Branch = serde_json::from_str(json).unwrap();
        assert_eq!(branch.id.as_deref(), Some("br-1"));
        assert_eq!(branch.low_stock_threshold, 5);
        assert!(branch.updated_at.is_some());
    }
}
