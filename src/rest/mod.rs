//! REST resource infrastructure for the Puxbay API.
//!
//! This module provides the foundational infrastructure shared by every
//! resource:
//!
//! - **[`Resource`] trait**: The binding between an entity type and its
//!   API collection
//! - **[`Creatable`] / [`Updatable`] / [`Deletable`] markers**: Opt-in
//!   capabilities that gate which CRUD operations a handle exposes
//! - **[`ResourceHandle<T>`]**: The typed handle all operations go
//!   through
//! - **[`Page<T>`]**: The paginated collection envelope
//! - **Path building**: Trailing-slash path construction helpers
//! - **List parameters**: Typed filter structs serialized to query
//!   strings
//!
//! # Overview
//!
//! This module is the foundation for resource implementations. The
//! individual resources (Product, Order, etc.) live in the
//! [`resources`] submodule.
//!
//! # Example
//!
//! ```rust,ignore
//! use puxbay_api::Puxbay;
//! use puxbay_api::rest::ListParams;
//!
//! let client = Puxbay::new("pb_live_abc123")?;
//!
//! // List products matching a search term
//! let params = ListParams {
//!     search: Some("espresso".to_string()),
//!     ..Default::default()
//! };
//! let page = client.products().list(&params).await?;
//! println!("{} products total", page.count);
//!
//! // Fetch, modify, save
//! let mut product = client.products().get("prod-42").await?;
//! product.price = 19.75;
//! let saved = client.products().update("prod-42", &product).await?;
//!
//! // Delete
//! client.products().delete("prod-42").await?;
//! ```
//!
//! # Key Types
//!
//! - [`Resource`]: Trait binding an entity to its collection segment
//! - [`ResourceHandle`]: Typed access to one resource's operations
//! - [`Page`]: Paginated response envelope with `count`/`next`/`previous`
//! - [`ListParams`] and friends: Typed list filters
//! - [`resources`]: The resource implementations (e.g., Product, Order)

mod params;
mod path;
mod resource;
mod response;

pub mod resources;

// Public exports
pub use params::{
    CategoryListParams, ListParams, OrderListParams, PageParams, RoleListParams, StatusListParams,
};
pub use path::{action_path, collection_action_path, collection_path, item_path};
pub use resource::{Creatable, Deletable, Resource, ResourceHandle, Updatable};
pub use response::Page;
