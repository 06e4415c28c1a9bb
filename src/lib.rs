//! # Puxbay API Rust SDK
//!
//! A Rust SDK for the Puxbay retail management API, providing type-safe
//! configuration, a retrying HTTP transport, and typed resource handles
//! for every Puxbay resource.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`Config`] and [`ConfigBuilder`]
//! - A validated [`ApiKey`] newtype for API credentials
//! - An async HTTP transport with connection pooling, gzip/deflate
//!   compression, retry with exponential backoff, and cooperative
//!   cancellation
//! - Typed CRUD handles for products, orders, customers, and the rest of
//!   the resource catalog, with per-resource capability enforcement at
//!   compile time
//! - Inventory queries and server-computed reports
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use puxbay_api::Puxbay;
//! use puxbay_api::rest::ListParams;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Puxbay::new("pb_live_abc123")?;
//!
//!     let params = ListParams {
//!         search: Some("espresso".to_string()),
//!         ..Default::default()
//!     };
//!     let page = client.products().list(&params).await?;
//!     for product in &page {
//!         println!("{} ({})", product.name, product.sku);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use puxbay_api::{ApiKey, Config};
//! use std::time::Duration;
//!
//! let config = Config::builder()
//!     .api_key(ApiKey::new("pb_live_abc123").unwrap())
//!     .timeout(Duration::from_secs(10))
//!     .max_retries(5)
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Error Handling
//!
//! Every API call returns [`ApiError`]. HTTP status codes are mapped to
//! semantic variants (`Authentication`, `Validation`, `NotFound`,
//! `RateLimit`, `Server`), each carrying the parsed [`ErrorBody`]:
//!
//! ```rust,ignore
//! use puxbay_api::ApiError;
//!
//! match client.products().get("prod-42").await {
//!     Ok(product) => println!("{}", product.name),
//!     Err(ApiError::NotFound(body)) => println!("gone: {}", body.message),
//!     Err(err) => return Err(err.into()),
//! }
//! ```
//!
//! ## Cancellation
//!
//! Long calls can be stopped early with a [`CancelToken`]:
//!
//! ```rust,ignore
//! use puxbay_api::CancelToken;
//!
//! let token = CancelToken::new();
//! let handle = client.orders().with_cancellation(token.clone());
//!
//! tokio::spawn(async move {
//!     tokio::time::sleep(std::time::Duration::from_secs(2)).await;
//!     token.cancel();
//! });
//!
//! // Fails with ApiError::Canceled once the token is tripped.
//! let result = handle.list(&Default::default()).await;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **Capabilities in the type system**: Operations a resource does not
//!   support do not exist on its handle

pub mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use client::Puxbay;
pub use config::{
    ApiKey, Config, ConfigBuilder, API_KEY_PREFIX, DEFAULT_BASE_URL, DEFAULT_MAX_RETRIES,
    DEFAULT_POOL_IDLE_TIMEOUT, DEFAULT_POOL_MAX_CONNECTIONS, DEFAULT_POOL_MAX_IDLE_PER_HOST,
    DEFAULT_TIMEOUT,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiError, CancelToken, ErrorBody, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
};

// Re-export the pagination envelope
pub use rest::Page;
