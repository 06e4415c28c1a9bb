//! Product resource implementation.
//!
//! This module provides the [`Product`] resource for managing the Puxbay
//! catalog, together with its nested value types: [`ProductVariant`],
//! [`ProductComponent`] for composite products, and [`ProductHistory`]
//! audit entries.
//!
//! # Resource-Specific Operations
//!
//! In addition to the full CRUD set, the product handle provides:
//! - [`adjust_stock`](crate::rest::ResourceHandle::adjust_stock) - Adjust
//!   the stock quantity with an audit reason
//!
//! # Example
//!
//! ```rust,ignore
//! use puxbay_api::rest::resources::Product;
//!
//! let product = Product {
//!     name: "Espresso Beans 1kg".to_string(),
//!     sku: "ESP-1KG".to_string(),
//!     price: 18.50,
//!     stock_quantity: 40,
//!     category: "cat-1".to_string(),
//!     is_active: true,
//!     ..Default::default()
//! };
//!
//! let saved = client.products().create(&product).await?;
//! let restocked = client.products().adjust_stock(
//!     saved.id.as_deref().unwrap_or_default(),
//!     25,
//!     "weekly delivery",
//! ).await?;
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clients::ApiError;
use crate::rest::params::ListParams;
use crate::rest::path::action_path;
use crate::rest::resource::{Creatable, Deletable, Resource, ResourceHandle, Updatable};

/// A sellable variant of a product (e.g., a size or color).
///
/// Variants are managed server-side and appear read-only on the parent
/// product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProductVariant {
    /// The unique identifier of the variant.
    #[serde(skip_serializing)]
    pub id: Option<String>,

    /// The variant name.
    pub name: String,

    /// The variant SKU.
    pub sku: String,

    /// The variant price.
    pub price: f64,

    /// The variant stock quantity.
    pub stock_quantity: i64,

    /// Free-form variant attributes (e.g., `{"size": "L"}`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Map<String, Value>>,

    /// Whether the variant is available for sale.
    pub is_active: bool,
}

/// One component of a composite product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductComponent {
    /// The unique identifier of the component entry.
    #[serde(skip_serializing)]
    pub id: Option<String>,

    /// The ID of the product this component refers to.
    pub component_product: String,

    /// The component product's name.
    #[serde(skip_serializing)]
    pub component_name: Option<String>,

    /// The component product's SKU.
    #[serde(skip_serializing)]
    pub component_sku: Option<String>,

    /// How many units of the component the composite contains.
    pub quantity: i64,
}

/// An audit entry recording a change to a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductHistory {
    /// The unique identifier of the history entry.
    #[serde(skip_serializing)]
    pub id: Option<String>,

    /// The action performed (e.g., "updated", "stock_adjusted").
    pub action: String,

    /// The ID of the staff member who made the change.
    pub changed_by: String,

    /// The name of the staff member who made the change.
    #[serde(skip_serializing)]
    pub changed_by_name: Option<String>,

    /// When the change happened, as reported by the server.
    pub changed_at: String,

    /// A human-readable summary of what changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changes_summary: Option<String>,
}

/// A product in the Puxbay catalog.
///
/// # Read-Only Fields
///
/// The following fields are populated by the server and never sent in
/// create or update requests: `id`, `category_name`, `variants`,
/// `components`, `created_at`, `updated_at`.
///
/// # Example
///
/// ```rust,ignore
/// use puxbay_api::rest::resources::Product;
///
/// let product = Product {
///     name: "Espresso Beans 1kg".to_string(),
///     sku: "ESP-1KG".to_string(),
///     price: 18.50,
///     stock_quantity: 40,
///     category: "cat-1".to_string(),
///     is_active: true,
///     low_stock_threshold: Some(5),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Product {
    // --- Read-only fields (not serialized) ---
    /// The unique identifier of the product.
    #[serde(skip_serializing)]
    pub id: Option<String>,

    /// The name of the product's category.
    #[serde(skip_serializing)]
    pub category_name: Option<String>,

    /// Variants of this product.
    #[serde(skip_serializing)]
    pub variants: Option<Vec<ProductVariant>>,

    /// Components, for composite products.
    #[serde(skip_serializing)]
    pub components: Option<Vec<ProductComponent>>,

    /// When the product was created.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the product was last updated.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,

    // --- Writable fields ---
    /// The product name.
    pub name: String,

    /// The stock-keeping unit.
    pub sku: String,

    /// The selling price.
    pub price: f64,

    /// The quantity currently in stock.
    pub stock_quantity: i64,

    /// An optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The ID of the category this product belongs to.
    pub category: String,

    /// Stock level below which the product counts as low stock.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_stock_threshold: Option<i64>,

    /// The purchase cost per unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_price: Option<f64>,

    /// The product's expiry date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,

    /// The product barcode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,

    /// Whether the product is available for sale.
    pub is_active: bool,

    /// Minimum quantity for wholesale pricing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_wholesale_quantity: Option<i64>,

    /// Whether the product is assembled from components.
    pub is_composite: bool,

    /// Free-form metadata attached to the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

impl Product {
    /// Returns `true` if the current stock is at or below the product's
    /// low-stock threshold. Products without a threshold never report low.
    #[must_use]
    pub fn is_low_stock(&self) -> bool {
        self.low_stock_threshold
            .is_some_and(|threshold| self.stock_quantity <= threshold)
    }
}

impl Resource for Product {
    const NAME: &'static str = "product";
    const SEGMENT: &'static str = "products";
    type ListParams = ListParams;
}

impl Creatable for Product {}
impl Updatable for Product {}
impl Deletable for Product {}

impl ResourceHandle<'_, Product> {
    /// Adjusts a product's stock quantity by a signed amount.
    ///
    /// Sends a POST to `products/{id}/adjust_stock/`. `quantity` is the
    /// delta to apply (negative to remove stock) and `reason` is recorded
    /// in the product's audit history.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the product does not exist,
    /// [`ApiError::Validation`] if the adjustment is rejected, and the
    /// usual transport and decode errors otherwise.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let product = client.products()
    ///     .adjust_stock("prod-42", -3, "damaged in transit")
    ///     .await?;
    /// ```
    pub async fn adjust_stock(
        &self,
        id: &str,
        quantity: i64,
        reason: &str,
    ) -> Result<Product, ApiError> {
        let body = serde_json::json!({
            "quantity": quantity,
            "reason": reason,
        });
        self.rest
            .post(
                &action_path(Product::SEGMENT, id, "adjust_stock"),
                &body,
                &self.cancel,
            )
            .await
    }
}
