//! Inventory operations.
//!
//! Unlike the CRUD resources, inventory is a set of cross-cutting
//! queries and movements over the stock the branches hold:
//!
//! - [`stock_levels`](InventoryApi::stock_levels) - Per-branch stock
//!   quantities
//! - [`low_stock`](InventoryApi::low_stock) - Products at or below a
//!   threshold
//! - [`create_transfer`](InventoryApi::create_transfer) and
//!   [`transfers`](InventoryApi::transfers) - Branch-to-branch stock
//!   movements
//!
//! # Example
//!
//! ```rust,ignore
//! let running_low = client.inventory().low_stock(5).await?;
//! for product in &running_low {
//!     println!("{}: {} left", product.name, product.stock_quantity);
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::clients::rest::RestClient;
use crate::clients::{ApiError, CancelToken};
use crate::rest::params::{serialize_to_query, StatusListParams};
use crate::rest::path::{collection_action_path, collection_path};
use crate::rest::resource::Resource;
use crate::rest::resources::product::Product;
use crate::rest::resources::stock_transfer::StockTransfer;
use crate::rest::response::Page;

/// The stock quantity of one product at one branch.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct StockLevel {
    /// The ID of the product.
    pub product_id: String,

    /// The quantity in stock.
    pub quantity: i64,

    /// The ID of the branch holding the stock.
    pub branch: String,
}

/// Access to inventory queries and stock movements.
///
/// Obtained from [`Puxbay::inventory`](crate::Puxbay::inventory). The
/// handle borrows the client and is meant to be created per call site,
/// not stored.
#[derive(Debug)]
pub struct InventoryApi<'a> {
    rest: &'a RestClient,
    cancel: CancelToken,
}

impl<'a> InventoryApi<'a> {
    pub(crate) fn new(rest: &'a RestClient) -> Self {
        Self {
            rest,
            cancel: CancelToken::new(),
        }
    }

    /// Replaces the handle's cancellation token.
    ///
    /// Requests issued through the handle stop early once the token is
    /// cancelled.
    #[must_use]
    pub fn with_cancellation(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }

    /// Fetches per-branch stock levels.
    ///
    /// Sends a GET to `inventory/stock-levels/`, restricted to a single
    /// branch when `branch` is given.
    ///
    /// # Errors
    ///
    /// Returns the usual transport and decode errors.
    pub async fn stock_levels(&self, branch: Option<&str>) -> Result<Vec<StockLevel>, ApiError> {
        let query = branch.map(|branch| vec![("branch".to_string(), branch.to_string())]);
        self.rest
            .get(
                &collection_action_path("inventory", "stock-levels"),
                query,
                &self.cancel,
            )
            .await
    }

    /// Fetches products whose stock is at or below `threshold`.
    ///
    /// Sends a GET to `inventory/low-stock/?threshold={threshold}`.
    ///
    /// # Errors
    ///
    /// Returns the usual transport and decode errors.
    pub async fn low_stock(&self, threshold: i64) -> Result<Vec<Product>, ApiError> {
        let query = vec![("threshold".to_string(), threshold.to_string())];
        self.rest
            .get(
                &collection_action_path("inventory", "low-stock"),
                Some(query),
                &self.cancel,
            )
            .await
    }

    /// Creates a branch-to-branch stock transfer.
    ///
    /// Equivalent to [`Puxbay::stock_transfers`](crate::Puxbay::stock_transfers)
    /// followed by `create`, provided here so inventory workflows do not
    /// need a second handle.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] if the transfer is rejected.
    pub async fn create_transfer(
        &self,
        transfer: &StockTransfer,
    ) -> Result<StockTransfer, ApiError> {
        self.rest
            .post(
                &collection_path(StockTransfer::SEGMENT),
                transfer,
                &self.cancel,
            )
            .await
    }

    /// Pages through stock transfers, optionally filtered by status.
    ///
    /// # Errors
    ///
    /// Returns the usual transport and decode errors.
    pub async fn transfers(
        &self,
        params: &StatusListParams,
    ) -> Result<Page<StockTransfer>, ApiError> {
        let query = serialize_to_query(params)?;
        let query = if query.is_empty() { None } else { Some(query) };
        self.rest
            .get(&collection_path(StockTransfer::SEGMENT), query, &self.cancel)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_level_deserialization() {
        let json = r#"[
            {"product_id": "prod-1", "quantity": 40, "branch": "br-1"},
            {"product_id": "prod-1", "quantity": 12, "branch": "br-2"}
        ]"#;

        let levels: Vec<StockLevel> = serde_json::from_str(json).unwrap();
        assert_eq!(levels.len(), 2);
        assert_eq!(levels[0].quantity, 40);
        assert_eq!(levels[1].branch, "br-2");
    }
}
