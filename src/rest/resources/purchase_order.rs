//! Purchase order resource implementation.
//!
//! Purchase orders record stock bought from suppliers. They can be
//! listed with a status filter, created, and updated, but not deleted:
//! a purchase order that is no longer wanted should be cancelled via an
//! update instead.
//!
//! # Resource-Specific Operations
//!
//! - [`receive`](crate::rest::ResourceHandle::receive) - Record delivery
//!   of the ordered items, adjusting stock levels server-side
//!
//! # Example
//!
//! ```rust,ignore
//! use puxbay_api::rest::resources::PurchaseOrderItem;
//!
//! let received = client.purchase_orders()
//!     .receive("po-7", &[PurchaseOrderItem {
//!         product: "prod-1".to_string(),
//!         quantity: 24,
//!         unit_cost: 11.0,
//!         ..Default::default()
//!     }])
//!     .await?;
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::ApiError;
use crate::rest::params::StatusListParams;
use crate::rest::path::action_path;
use crate::rest::resource::{Creatable, Resource, ResourceHandle, Updatable};

/// A line item on a purchase order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PurchaseOrderItem {
    /// The unique identifier of the line item.
    #[serde(skip_serializing)]
    pub id: Option<String>,

    /// The ID of the product being purchased.
    pub product: String,

    /// The product's name.
    #[serde(skip_serializing)]
    pub product_name: Option<String>,

    /// The product's SKU.
    #[serde(skip_serializing)]
    pub sku: Option<String>,

    /// The quantity ordered.
    pub quantity: i64,

    /// The agreed cost per unit.
    pub unit_cost: f64,
}

/// An order for stock placed with a supplier.
///
/// # Read-Only Fields
///
/// `id`, `supplier_name`, `branch_name`, `created_by_name`, `created_at`,
/// and `items` are populated by the server and never sent in create or
/// update requests.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PurchaseOrder {
    // --- Read-only fields (not serialized) ---
    /// The unique identifier of the purchase order.
    #[serde(skip_serializing)]
    pub id: Option<String>,

    /// The supplier's name.
    #[serde(skip_serializing)]
    pub supplier_name: Option<String>,

    /// The receiving branch's name.
    #[serde(skip_serializing)]
    pub branch_name: Option<String>,

    /// The name of the staff member who raised the order.
    #[serde(skip_serializing)]
    pub created_by_name: Option<String>,

    /// When the purchase order was created.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// The ordered line items.
    #[serde(skip_serializing)]
    pub items: Option<Vec<PurchaseOrderItem>>,

    // --- Writable fields ---
    /// The human-facing reference for the order.
    pub reference_id: String,

    /// The order status (e.g., "draft", "ordered", "received").
    pub status: String,

    /// The ID of the supplier.
    pub supplier: String,

    /// The ID of the receiving branch.
    pub branch: String,

    /// The total cost of the order.
    pub total_cost: f64,

    /// The expected delivery date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_date: Option<NaiveDate>,

    /// Free-form notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// The ID of the staff member who raised the order.
    pub created_by: String,
}

impl Resource for PurchaseOrder {
    const NAME: &'static str = "purchase order";
    const SEGMENT: &'static str = "purchase-orders";
    type ListParams = StatusListParams;
}

impl Creatable for PurchaseOrder {}
impl Updatable for PurchaseOrder {}

impl ResourceHandle<'_, PurchaseOrder> {
    /// Records delivery of a purchase order.
    ///
    /// Sends a POST to `purchase-orders/{id}/receive/` with the items
    /// actually delivered. The server adjusts stock levels and returns
    /// the updated purchase order. Partial deliveries are allowed - pass
    /// only the items and quantities that arrived.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the purchase order does not
    /// exist and [`ApiError::Validation`] if the order is not in a
    /// receivable status.
    pub async fn receive(
        &self,
        id: &str,
        items: &[PurchaseOrderItem],
    ) -> Result<PurchaseOrder, ApiError> {
        let body = serde_json::json!({ "items": items });
        self.rest
            .post(
                &action_path(PurchaseOrder::SEGMENT, id, "receive"),
                &body,
                &self.cancel,
            )
            .await
    }
}
