//! Stocktake resource implementation.
//!
//! A stocktake session records a physical inventory count at a branch.
//! Sessions are created with their counted entries, then completed to
//! reconcile the recorded stock levels against the count.
//!
//! # Resource-Specific Operations
//!
//! - [`complete`](crate::rest::ResourceHandle::complete) - Finish a
//!   session and apply the reconciliation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::ApiError;
use crate::rest::params::PageParams;
use crate::rest::path::action_path;
use crate::rest::resource::{Creatable, Resource, ResourceHandle};

/// One counted product within a stocktake session.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StocktakeEntry {
    /// The unique identifier of the entry.
    #[serde(skip_serializing)]
    pub id: Option<String>,

    /// The ID of the counted product.
    pub product: String,

    /// The product's name.
    #[serde(skip_serializing)]
    pub product_name: Option<String>,

    /// The product's SKU.
    #[serde(skip_serializing)]
    pub sku: Option<String>,

    /// The quantity physically counted.
    pub counted_quantity: i64,

    /// The quantity the system expected.
    pub expected_quantity: i64,

    /// The discrepancy computed by the server.
    #[serde(skip_serializing)]
    pub difference: Option<i64>,

    /// Free-form notes on the entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// When the entry was last updated.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A physical inventory count at a branch.
///
/// # Read-Only Fields
///
/// `id`, `branch_name`, `created_by_name`, `started_at`, `completed_at`,
/// and `entries` are populated by the server and never sent in create
/// requests.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StocktakeSession {
    // --- Read-only fields (not serialized) ---
    /// The unique identifier of the session.
    #[serde(skip_serializing)]
    pub id: Option<String>,

    /// The branch's name.
    #[serde(skip_serializing)]
    pub branch_name: Option<String>,

    /// The name of the staff member who started the session.
    #[serde(skip_serializing)]
    pub created_by_name: Option<String>,

    /// When the count started.
    #[serde(skip_serializing)]
    pub started_at: Option<DateTime<Utc>>,

    /// When the count was completed, if it has been.
    #[serde(skip_serializing)]
    pub completed_at: Option<DateTime<Utc>>,

    /// The counted entries.
    #[serde(skip_serializing)]
    pub entries: Option<Vec<StocktakeEntry>>,

    // --- Writable fields ---
    /// The ID of the branch being counted.
    pub branch: String,

    /// The session status (e.g., "in_progress", "completed").
    pub status: String,

    /// Free-form notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// The ID of the staff member who started the session.
    pub created_by: String,
}

impl StocktakeSession {
    /// Returns `true` if the session has been completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }
}

impl Resource for StocktakeSession {
    const NAME: &'static str = "stocktake session";
    const SEGMENT: &'static str = "stocktakes";
    type ListParams = PageParams;
}

impl Creatable for StocktakeSession {}

impl ResourceHandle<'_, StocktakeSession> {
    /// Completes a stocktake session.
    ///
    /// Sends a POST to `stocktakes/{id}/complete/` with no body. The
    /// server reconciles stock levels against the counted quantities and
    /// returns the completed session.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the session does not exist and
    /// [`ApiError::Validation`] if it has already been completed.
    pub async fn complete(&self, id: &str) -> Result<StocktakeSession, ApiError> {
        self.rest
            .post_empty(
                &action_path(StocktakeSession::SEGMENT, id, "complete"),
                &self.cancel,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_serialization_skips_read_only_fields() {
        let session = StocktakeSession {
            id: Some("st-1".to_string()),
            branch_name: Some("Downtown".to_string()),
            entries: Some(vec![StocktakeEntry::default()]),
            branch: "br-1".to_string(),
            status: "in_progress".to_string(),
            created_by: "staff-1".to_string(),
            ..Default::default()
        };

        let parsed: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&session).unwrap()).unwrap();

        assert_eq!(parsed["branch"], "br-1");
        assert_eq!(parsed["status"], "in_progress");
        assert!(parsed.get("id").is_none());
        assert!(parsed.get("branch_name").is_none());
        assert!(parsed.get("entries").is_none());
        assert!(parsed.get("started_at").is_none());
    }

    #[test]
    fn test_entry_serialization_skips_computed_difference() {
        let entry = StocktakeEntry {
            id: Some("ste-1".to_string()),
            product: "prod-1".to_string(),
            product_name: Some("Espresso Beans 1kg".to_string()),
            counted_quantity: 38,
            expected_quantity: 40,
            difference: Some(-2),
            ..Default::default()
        };

        let parsed: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&entry).unwrap()).unwrap();

        assert_eq!(parsed["counted_quantity"], 38);
        assert_eq!(parsed["expected_quantity"], 40);
        assert!(parsed.get("difference").is_none());
        assert!(parsed.get("product_name").is_none());
    }

    #[test]
    fn test_session_deserialization_from_api_response() {
        let json = r#"{
            "id": "st-1",
            "branch": "br-1",
            "branch_name": "Downtown",
            "status": "completed",
            "created_by": "staff-1",
            "created_by_name": "June Holt",
            "started_at": "2026-01-31T18:00:00Z",
            "completed_at": "2026-01-31T21:15:00Z",
            "entries": [
                {"id": "ste-1", "product": "prod-1", "counted_quantity": 38,
                 "expected_quantity": 40, "difference": -2}
            ]
        }"#;

        let session: StocktakeSession = serde_json::from_str(json).unwrap();
        assert!(session.is_completed());
        let entries = session.entries.as_ref().unwrap();
        assert_eq!(entries[0].difference, Some(-2));
    }
}
