//! The top-level Puxbay client.
//!
//! [`Puxbay`] owns the configuration and the underlying HTTP transport,
//! and hands out typed resource handles. One client is meant to be
//! created at startup and shared for the life of the program - the
//! connection pool lives inside it.
//!
//! # Example
//!
//! ```rust,ignore
//! use puxbay_api::{Config, Puxbay};
//!
//! // The simple path: defaults everywhere
//! let client = Puxbay::new("pb_live_abc123")?;
//!
//! // Or with explicit configuration
//! let config = Config::builder()
//!     .api_key(ApiKey::new("pb_live_abc123")?)
//!     .timeout(Duration::from_secs(10))
//!     .max_retries(5)
//!     .build()?;
//! let client = Puxbay::with_config(config)?;
//!
//! let page = client.orders().list(&Default::default()).await?;
//! ```
//!
//! # Thread Safety
//!
//! `Puxbay` is `Send + Sync`. Share it behind an `Arc` (or a plain
//! reference) across tasks; the handles it returns borrow it and are
//! cheap to create per call site.

use crate::clients::rest::RestClient;
use crate::config::{ApiKey, Config};
use crate::error::ConfigError;
use crate::rest::resources::{
    Branch, CashDrawerSession, Category, Customer, Expense, GiftCard, InventoryApi, Notification,
    Order, Product, PurchaseOrder, ReportsApi, Return, StaffMember, StockTransfer,
    StocktakeSession, Supplier, Webhook,
};
use crate::rest::ResourceHandle;

/// The Puxbay API client.
///
/// See the [module documentation](self) for usage.
#[derive(Debug)]
pub struct Puxbay {
    config: Config,
    rest: RestClient,
}

impl Puxbay {
    /// Creates a client from an API key, using default configuration for
    /// everything else.
    ///
    /// The key must carry the `pb_` prefix issued by the Puxbay
    /// dashboard.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] or
    /// [`ConfigError::InvalidApiKeyFormat`] if the key is malformed, and
    /// [`ConfigError::Transport`] if the HTTP client cannot be built.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let client = Puxbay::new("pb_live_abc123")?;
    /// ```
    pub fn new(api_key: &str) -> Result<Self, ConfigError> {
        let config = Config::builder().api_key(ApiKey::new(api_key)?).build()?;
        Self::with_config(config)
    }

    /// Creates a client from an explicit [`Config`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Transport`] if the HTTP client cannot be
    /// built.
    pub fn with_config(config: Config) -> Result<Self, ConfigError> {
        let rest = RestClient::new(&config)?;
        Ok(Self { config, rest })
    }

    /// Returns the client's configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Returns a handle for product operations.
    #[must_use]
    pub fn products(&self) -> ResourceHandle<'_, Product> {
        ResourceHandle::new(&self.rest)
    }

    /// Returns a handle for order operations.
    #[must_use]
    pub fn orders(&self) -> ResourceHandle<'_, Order> {
        ResourceHandle::new(&self.rest)
    }

    /// Returns a handle for customer operations.
    #[must_use]
    pub fn customers(&self) -> ResourceHandle<'_, Customer> {
        ResourceHandle::new(&self.rest)
    }

    /// Returns a handle for category operations.
    #[must_use]
    pub fn categories(&self) -> ResourceHandle<'_, Category> {
        ResourceHandle::new(&self.rest)
    }

    /// Returns a handle for supplier operations.
    #[must_use]
    pub fn suppliers(&self) -> ResourceHandle<'_, Supplier> {
        ResourceHandle::new(&self.rest)
    }

    /// Returns a handle for purchase order operations.
    #[must_use]
    pub fn purchase_orders(&self) -> ResourceHandle<'_, PurchaseOrder> {
        ResourceHandle::new(&self.rest)
    }

    /// Returns a handle for stock transfer operations.
    #[must_use]
    pub fn stock_transfers(&self) -> ResourceHandle<'_, StockTransfer> {
        ResourceHandle::new(&self.rest)
    }

    /// Returns a handle for stocktake operations.
    #[must_use]
    pub fn stocktakes(&self) -> ResourceHandle<'_, StocktakeSession> {
        ResourceHandle::new(&self.rest)
    }

    /// Returns a handle for cash drawer operations.
    #[must_use]
    pub fn cash_drawers(&self) -> ResourceHandle<'_, CashDrawerSession> {
        ResourceHandle::new(&self.rest)
    }

    /// Returns a handle for gift card operations.
    #[must_use]
    pub fn gift_cards(&self) -> ResourceHandle<'_, GiftCard> {
        ResourceHandle::new(&self.rest)
    }

    /// Returns a handle for expense operations.
    #[must_use]
    pub fn expenses(&self) -> ResourceHandle<'_, Expense> {
        ResourceHandle::new(&self.rest)
    }

    /// Returns a handle for branch operations.
    #[must_use]
    pub fn branches(&self) -> ResourceHandle<'_, Branch> {
        ResourceHandle::new(&self.rest)
    }

    /// Returns a handle for staff operations.
    #[must_use]
    pub fn staff(&self) -> ResourceHandle<'_, StaffMember> {
        ResourceHandle::new(&self.rest)
    }

    /// Returns a handle for webhook operations.
    #[must_use]
    pub fn webhooks(&self) -> ResourceHandle<'_, Webhook> {
        ResourceHandle::new(&self.rest)
    }

    /// Returns a handle for notification operations.
    #[must_use]
    pub fn notifications(&self) -> ResourceHandle<'_, Notification> {
        ResourceHandle::new(&self.rest)
    }

    /// Returns a handle for return operations.
    #[must_use]
    pub fn returns(&self) -> ResourceHandle<'_, Return> {
        ResourceHandle::new(&self.rest)
    }

    /// Returns a handle for inventory queries and stock movements.
    #[must_use]
    pub fn inventory(&self) -> InventoryApi<'_> {
        InventoryApi::new(&self.rest)
    }

    /// Returns a handle for reports.
    #[must_use]
    pub fn reports(&self) -> ReportsApi<'_> {
        ReportsApi::new(&self.rest)
    }
}

// Compile-time verification that Puxbay is Send + Sync
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Puxbay>();
};

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_client() -> Puxbay {
        Puxbay::new("pb_test_key").unwrap()
    }

    #[test]
    fn test_new_with_valid_key() {
        let client = create_test_client();
        assert_eq!(client.config().api_key().as_ref(), "pb_test_key");
    }

    #[test]
    fn test_new_rejects_invalid_key() {
        assert!(matches!(
            Puxbay::new(""),
            Err(ConfigError::EmptyApiKey)
        ));
        assert!(matches!(
            Puxbay::new("sk_wrong_prefix"),
            Err(ConfigError::InvalidApiKeyFormat { .. })
        ));
    }

    #[test]
    fn test_with_config_preserves_settings() {
        let config = Config::builder()
            .api_key(ApiKey::new("pb_test_key").unwrap())
            .max_retries(7)
            .build()
            .unwrap();

        let client = Puxbay::with_config(config).unwrap();
        assert_eq!(client.config().max_retries(), 7);
    }

    #[test]
    fn test_handles_are_creatable_per_call_site() {
        let client = create_test_client();
        // Each accessor hands out a fresh borrow; none of these conflict.
        let _products = client.products();
        let _orders = client.orders();
        let _inventory = client.inventory();
        let _reports = client.reports();
    }
}
