//! Stock transfer resource implementation.
//!
//! Stock transfers move inventory between branches. A transfer is created
//! in a pending state, then completed once the stock physically arrives;
//! transfers are never updated or deleted through the API.
//!
//! # Resource-Specific Operations
//!
//! - [`complete`](crate::rest::ResourceHandle::complete) - Mark a
//!   transfer as delivered, applying the stock movement

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::ApiError;
use crate::rest::params::StatusListParams;
use crate::rest::path::action_path;
use crate::rest::resource::{Creatable, Resource, ResourceHandle};

/// A line item on a stock transfer.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StockTransferItem {
    /// The unique identifier of the line item.
    #[serde(skip_serializing)]
    pub id: Option<String>,

    /// The ID of the product being moved.
    pub product: String,

    /// The product's name.
    #[serde(skip_serializing)]
    pub product_name: Option<String>,

    /// The quantity being moved.
    pub quantity: i64,

    /// The internal transfer price per unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_price: Option<f64>,
}

/// A movement of stock between two branches.
///
/// # Read-Only Fields
///
/// `id`, `source_branch_name`, `destination_branch_name`,
/// `created_by_name`, `created_at`, `completed_at`, and `items` are
/// populated by the server and never sent in create requests.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StockTransfer {
    // --- Read-only fields (not serialized) ---
    /// The unique identifier of the transfer.
    #[serde(skip_serializing)]
    pub id: Option<String>,

    /// The sending branch's name.
    #[serde(skip_serializing)]
    pub source_branch_name: Option<String>,

    /// The receiving branch's name.
    #[serde(skip_serializing)]
    pub destination_branch_name: Option<String>,

    /// The name of the staff member who created the transfer.
    #[serde(skip_serializing)]
    pub created_by_name: Option<String>,

    /// When the transfer was created.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the transfer was completed, if it has been.
    #[serde(skip_serializing)]
    pub completed_at: Option<DateTime<Utc>>,

    /// The transferred line items.
    #[serde(skip_serializing)]
    pub items: Option<Vec<StockTransferItem>>,

    // --- Writable fields ---
    /// The human-facing reference for the transfer.
    pub reference_id: String,

    /// The transfer status (e.g., "pending", "completed").
    pub status: String,

    /// The ID of the sending branch.
    pub source_branch: String,

    /// The ID of the receiving branch.
    pub destination_branch: String,

    /// Free-form notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// The ID of the staff member who created the transfer.
    pub created_by: String,
}

impl StockTransfer {
    /// Returns `true` if the transfer has been completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }
}

impl Resource for StockTransfer {
    const NAME: &'static str = "stock transfer";
    const SEGMENT: &'static str = "stock-transfers";
    type ListParams = StatusListParams;
}

impl Creatable for StockTransfer {}

impl ResourceHandle<'_, StockTransfer> {
    /// Marks a stock transfer as delivered.
    ///
    /// Sends a POST to `stock-transfers/{id}/complete/` with no body. The
    /// server deducts stock at the source branch, adds it at the
    /// destination, and returns the completed transfer.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the transfer does not exist and
    /// [`ApiError::Validation`] if it has already been completed.
    pub async fn complete(&self, id: &str) -> Result<StockTransfer, ApiError> {
        self.rest
            .post_empty(
                &action_path(StockTransfer::SEGMENT, id, "complete"),
                &self.cancel,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transfer_serialization_skips_read_only_fields() {
        let transfer = StockTransfer {
            id: Some("tr-1".to_string()),
            source_branch_name: Some("Warehouse".to_string()),
            items: Some(vec![StockTransferItem::default()]),
            reference_id: "TR-2026-003".to_string(),
            status: "pending".to_string(),
            source_branch: "br-1".to_string(),
            destination_branch: "br-2".to_string(),
            created_by: "staff-1".to_string(),
            ..Default::default()
        };

        let parsed: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&transfer).unwrap()).unwrap();

        assert_eq!(parsed["reference_id"], "TR-2026-003");
        assert_eq!(parsed["source_branch"], "br-1");
        assert_eq!(parsed["destination_branch"], "br-2");
        assert!(parsed.get("id").is_none());
        assert!(parsed.get("source_branch_name").is_none());
        assert!(parsed.get("items").is_none());
        assert!(parsed.get("completed_at").is_none());
    }

    #[test]
    fn test_transfer_deserialization_from_api_response() {
        let json = r#"{
            "id": "tr-1",
            "reference_id": "TR-2026-003",
            "status": "completed",
            "source_branch": "br-1",
            "source_branch_name": "Warehouse",
            "destination_branch": "br-2",
            "destination_branch_name": "Downtown",
            "created_by": "staff-1",
            "created_at": "2026-02-11T10:00:00Z",
            "completed_at": "2026-02-12T16:45:00Z",
            "items": [
                {"id": "tri-1", "product": "prod-1", "product_name": "Espresso Beans 1kg",
                 "quantity": 10}
            ]
        }"#;

        let transfer: StockTransfer = serde_json::from_str(json).unwrap();
        assert!(transfer.is_completed());
        assert_eq!(transfer.destination_branch_name.as_deref(), Some("Downtown"));
        assert_eq!(transfer.items.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn test_is_completed_requires_timestamp() {
        let transfer = StockTransfer {
            status: "completed".to_string(),
            ..Default::default()
        };
        assert!(!transfer.is_completed());
    }
}
