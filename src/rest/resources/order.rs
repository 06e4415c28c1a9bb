//! Order resource implementation.
//!
//! This module provides the [`Order`] resource and its [`OrderItem`] line
//! items. Orders can be listed with status and customer filters, created,
//! and partially updated, but never deleted - completed orders are part of
//! the permanent sales record.
//!
//! # Resource-Specific Operations
//!
//! - [`cancel`](crate::rest::ResourceHandle::cancel) - Cancel an order,
//!   optionally recording a cancellation reason
//!
//! # Example
//!
//! ```rust,ignore
//! use puxbay_api::rest::OrderListParams;
//!
//! let params = OrderListParams {
//!     status: Some("pending".to_string()),
//!     ..Default::default()
//! };
//! let page = client.orders().list(&params).await?;
//! for order in &page {
//!     println!("{}: {}", order.order_number, order.total_amount);
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clients::ApiError;
use crate::rest::params::OrderListParams;
use crate::rest::path::item_path;
use crate::rest::resource::{Creatable, Resource, ResourceHandle, Updatable};

/// A line item on an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OrderItem {
    /// The unique identifier of the line item.
    #[serde(skip_serializing)]
    pub id: Option<String>,

    /// The ID of the product sold.
    pub product: String,

    /// The product's name at the time of sale.
    #[serde(skip_serializing)]
    pub product_name: Option<String>,

    /// The product's SKU at the time of sale.
    #[serde(skip_serializing)]
    pub sku: Option<String>,

    /// The position of the item within the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_number: Option<i64>,

    /// The quantity sold.
    pub quantity: i64,

    /// The unit price charged.
    pub price: f64,

    /// The unit cost at the time of sale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_price: Option<f64>,

    /// The extended line total computed by the server.
    #[serde(skip_serializing)]
    pub get_total_item_price: Option<f64>,
}

/// A sales order.
///
/// # Read-Only Fields
///
/// `id`, `created_at`, `updated_at`, `customer_name`, `cashier_name`,
/// `branch_name`, and `items` are populated by the server and never sent
/// in create or update requests.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Order {
    // --- Read-only fields (not serialized) ---
    /// The unique identifier of the order.
    #[serde(skip_serializing)]
    pub id: Option<String>,

    /// When the order was created.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the order was last updated.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,

    /// The customer's name.
    #[serde(skip_serializing)]
    pub customer_name: Option<String>,

    /// The name of the cashier who rang the sale.
    #[serde(skip_serializing)]
    pub cashier_name: Option<String>,

    /// The name of the branch where the sale occurred.
    #[serde(skip_serializing)]
    pub branch_name: Option<String>,

    /// The order's line items.
    #[serde(skip_serializing)]
    pub items: Option<Vec<OrderItem>>,

    // --- Writable fields ---
    /// The human-facing order number.
    pub order_number: String,

    /// The order status (e.g., "pending", "completed", "cancelled").
    pub status: String,

    /// The order subtotal before tax.
    pub subtotal: f64,

    /// The tax charged.
    pub tax_amount: f64,

    /// The grand total.
    pub total_amount: f64,

    /// The amount paid so far.
    pub amount_paid: f64,

    /// The payment method (e.g., "cash", "card").
    pub payment_method: String,

    /// How the order was placed (e.g., "in_store", "online").
    pub ordering_type: String,

    /// A client-generated UUID for offline-created orders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offline_uuid: Option<String>,

    /// The ID of the customer, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,

    /// The ID of the cashier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cashier: Option<String>,

    /// The ID of the branch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,

    /// Free-form metadata attached to the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

impl Order {
    /// Returns the amount still owed on the order.
    #[must_use]
    pub fn balance_due(&self) -> f64 {
        self.total_amount - self.amount_paid
    }
}

impl Resource for Order {
    const NAME: &'static str = "order";
    const SEGMENT: &'static str = "orders";
    type ListParams = OrderListParams;
}

impl Creatable for Order {}
impl Updatable for Order {}

impl ResourceHandle<'_, Order> {
    /// Cancels an order, optionally recording a reason.
    ///
    /// Issues a partial update setting the order's status to `cancelled`.
    /// Pass `Some(reason)` to record why the order was cancelled.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the order does not exist and
    /// [`ApiError::Validation`] if the order cannot be cancelled in its
    /// current status.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let order = client.orders()
    ///     .cancel("ord-17", Some("customer changed their mind"))
    ///     .await?;
    /// assert_eq!(order.status, "cancelled");
    /// ```
    pub async fn cancel(&self, id: &str, reason: Option<&str>) -> Result<Order, ApiError> {
        let mut body = Map::new();
        body.insert("status".to_string(), Value::from("cancelled"));
        if let Some(reason) = reason {
            body.insert("cancellation_reason".to_string(), Value::from(reason));
        }
        self.rest
            .patch(&item_path(Order::SEGMENT, id), &body, &self.cancel)
            .await
    }
}
