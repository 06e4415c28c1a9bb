//! REST resource implementations.
//!
//! This module contains one submodule per Puxbay resource. Entity
//! structs, their nested value types, and any resource-specific handle
//! operations live together in the resource's module; everything is
//! re-exported here.
//!
//! # Resource Catalog
//!
//! | Resource | List filters | Beyond CRUD |
//! |----------|-------------|-------------|
//! | [`Product`] | page, search | `adjust_stock` |
//! | [`Order`] | page, status, customer | `cancel` (no delete) |
//! | [`Customer`] | page, search | `add_loyalty_points`, `add_store_credit` |
//! | [`Category`] | page | - |
//! | [`Supplier`] | page, search | - |
//! | [`PurchaseOrder`] | page, status | `receive` (no delete) |
//! | [`StockTransfer`] | page, status | `complete` (create-only) |
//! | [`StocktakeSession`] | page | `complete` (create-only) |
//! | [`CashDrawerSession`] | page | `open`, `close` (lifecycle only) |
//! | [`GiftCard`] | page, status | `redeem`, `check_balance` (create-only) |
//! | [`Expense`] | page, category | `categories` |
//! | [`Branch`] | page | - |
//! | [`StaffMember`] | page, role | - |
//! | [`Webhook`] | page | `deliveries` |
//! | [`Notification`] | page | `mark_read` (read-mostly) |
//! | [`Return`] | page | `approve` (create-only) |
//!
//! Inventory queries and reports do not fit the CRUD shape and have
//! their own handles: [`InventoryApi`] and [`ReportsApi`].
//!
//! # Example
//!
//! ```rust,ignore
//! use puxbay_api::rest::resources::{Category, Product};
//!
//! let category = client.categories().create(&Category {
//!     name: "Beverages".to_string(),
//!     ..Default::default()
//! }).await?;
//!
//! let product = client.products().create(&Product {
//!     name: "Espresso Beans 1kg".to_string(),
//!     sku: "ESP-1KG".to_string(),
//!     price: 18.50,
//!     stock_quantity: 40,
//!     category: category.id.clone().unwrap_or_default(),
//!     is_active: true,
//!     ..Default::default()
//! }).await?;
//! ```

pub mod branch;
pub mod cash_drawer;
pub mod category;
pub mod customer;
pub mod expense;
pub mod gift_card;
pub mod inventory;
pub mod notification;
pub mod order;
pub mod product;
pub mod purchase_order;
pub mod reports;
pub mod returns;
pub mod staff;
pub mod stock_transfer;
pub mod stocktake;
pub mod supplier;
pub mod webhook;

pub use branch::Branch;
pub use cash_drawer::CashDrawerSession;
pub use category::Category;
pub use customer::{Customer, CustomerTier};
pub use expense::{Expense, ExpenseCategory};
pub use gift_card::GiftCard;
pub use inventory::{InventoryApi, StockLevel};
pub use notification::Notification;
pub use order::{Order, OrderItem};
pub use product::{Product, ProductComponent, ProductHistory, ProductVariant};
pub use purchase_order::{PurchaseOrder, PurchaseOrderItem};
pub use reports::{CustomerAnalytics, ProfitLoss, ReportsApi, SalesSummary};
pub use returns::{Return, ReturnItem};
pub use staff::StaffMember;
pub use stock_transfer::{StockTransfer, StockTransferItem};
pub use stocktake::{StocktakeEntry, StocktakeSession};
pub use supplier::Supplier;
pub use webhook::{Webhook, WebhookEvent};
