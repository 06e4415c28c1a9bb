//! Return resource implementation.
//!
//! Returns record merchandise coming back from a completed order. A
//! return is created in a pending state with its items, then approved
//! by a manager, which triggers the refund and any restocking.
//!
//! # Resource-Specific Operations
//!
//! - [`approve`](crate::rest::ResourceHandle::approve) - Approve a
//!   pending return

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::ApiError;
use crate::rest::params::PageParams;
use crate::rest::path::action_path;
use crate::rest::resource::{Creatable, Resource, ResourceHandle};

/// A line item on a return.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ReturnItem {
    /// The unique identifier of the line item.
    #[serde(skip_serializing)]
    pub id: Option<String>,

    /// The ID of the product being returned.
    pub product: String,

    /// The product's name.
    #[serde(skip_serializing)]
    pub product_name: Option<String>,

    /// The quantity returned.
    pub quantity: i64,

    /// The condition of the returned goods (e.g., "unopened", "damaged").
    pub condition: String,

    /// Whether the goods go back into sellable stock.
    pub restock: bool,

    /// The unit price being refunded.
    pub unit_price: f64,
}

/// A merchandise return against an order.
///
/// # Read-Only Fields
///
/// `id`, `order_number`, `customer_name`, `created_at`, and `items` are
/// populated by the server and never sent in create requests.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Return {
    // --- Read-only fields (not serialized) ---
    /// The unique identifier of the return.
    #[serde(skip_serializing)]
    pub id: Option<String>,

    /// The originating order's number.
    #[serde(skip_serializing)]
    pub order_number: Option<String>,

    /// The customer's name.
    #[serde(skip_serializing)]
    pub customer_name: Option<String>,

    /// When the return was created.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// The returned line items.
    #[serde(skip_serializing)]
    pub items: Option<Vec<ReturnItem>>,

    // --- Writable fields ---
    /// The ID of the order the goods came from.
    pub order: String,

    /// The ID of the customer, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,

    /// The return reason (e.g., "defective", "wrong_item").
    pub reason: String,

    /// Additional detail on the reason.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_detail: Option<String>,

    /// The return status (e.g., "pending", "approved").
    pub status: String,

    /// How the refund is paid (e.g., "original_payment", "store_credit").
    pub refund_method: String,

    /// The amount to refund.
    pub refund_amount: f64,
}

impl Resource for Return {
    const NAME: &'static str = "return";
    const SEGMENT: &'static str = "returns";
    type ListParams = PageParams;
}

impl Creatable for Return {}

impl ResourceHandle<'_, Return> {
    /// Approves a pending return.
    ///
    /// Sends a POST to `returns/{id}/approve/` with no body. The server
    /// issues the refund, restocks any items flagged for restocking, and
    /// returns the approved return.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the return does not exist and
    /// [`ApiError::Validation`] if it is not pending.
    pub async fn approve(&self, id: &str) -> Result<Return, ApiError> {
        self.rest
            .post_empty(&action_path(Return::SEGMENT, id, "approve"), &self.cancel)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_return_serialization_skips_read_only_fields() {
        let ret = Return {
            id: Some("ret-1".to_string()),
            order_number: Some("PX-1001".to_string()),
            items: Some(vec![ReturnItem::default()]),
            order: "ord-1".to_string(),
            customer: Some("cust-1".to_string()),
            reason: "defective".to_string(),
            status: "pending".to_string(),
            refund_method: "store_credit".to_string(),
            refund_amount: 18.5,
            ..Default::default()
        };

        let parsed: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&ret).unwrap()).unwrap();

        assert_eq!(parsed["order"], "ord-1");
        assert_eq!(parsed["reason"], "defective");
        assert_eq!(parsed["refund_amount"], 18.5);
        assert!(parsed.get("id").is_none());
        assert!(parsed.get("order_number").is_none());
        assert!(parsed.get("items").is_none());
    }

    #[test]
    fn test_return_deserialization_from_api_response() {
        let json = r#"{
            "id": "ret-1",
            "order": "ord-1",
            "order_number": "PX-1001",
            "customer": "cust-1",
            "customer_name": "Ada Lovelace",
            "reason": "defective",
            "status": "approved",
            "refund_method": "store_credit",
            "refund_amount": 18.5,
            "created_at": "2026-03-12T13:30:00Z",
            "items": [
                {"id": "reti-1", "product": "prod-1", "product_name": "Espresso Beans 1kg",
                 "quantity": 1, "condition": "damaged", "restock": false,
                 "unit_price": 18.5}
            ]
        }"#;

        let ret: Return = serde_json::from_str(json).unwrap();
        assert_eq!(ret.status, "approved");
        let items = ret.items.as_ref().unwrap();
        assert!(!items[0].restock);
        assert_eq!(items[0].condition, "damaged");
    }

    #[test]
    fn test_return_item_serialization_includes_restock_flag() {
        let item = ReturnItem {
            product: "prod-1".to_string(),
            quantity: 1,
            condition: "unopened".to_string(),
            restock: true,
            unit_price: 18.5,
            ..Default::default()
        };

        let parsed: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&item).unwrap()).unwrap();
        assert_eq!(parsed["restock"], true);
        assert_eq!(parsed["condition"], "unopened");
    }
}
