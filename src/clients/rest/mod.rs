//! REST API client for the Puxbay API.
//!
//! This module provides a higher-level REST API client built on top of the
//! [`HttpClient`](crate::clients::HttpClient) that offers typed methods
//! for interacting with the Puxbay REST API.
//!
//! # Overview
//!
//! The main type in this module is [`RestClient`], with `get()`, `post()`,
//! `post_empty()`, `patch()` and `delete()` methods. Bodies are serialized
//! from any `Serialize` type, success responses decode into any
//! `DeserializeOwned` type, and every method takes a
//! [`CancelToken`](crate::clients::CancelToken).
//!
//! # Example
//!
//! ```rust,ignore
//! use puxbay_api::clients::{CancelToken, RestClient};
//! use puxbay_api::{ApiKey, Config};
//!
//! let config = Config::builder()
//!     .api_key(ApiKey::new("pb_live_abc123").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = RestClient::new(&config)?;
//!
//! let cancel = CancelToken::new();
//! let product: Product = client.get("products/42/", None, &cancel).await?;
//! ```
//!
//! # Update Semantics
//!
//! Updates use PATCH: the Puxbay API applies partial updates, leaving
//! fields absent from the payload untouched.

mod client;

pub use client::RestClient;
