//! HTTP client types for Puxbay API communication.
//!
//! This module provides the foundational HTTP client layer for making
//! authenticated requests to the Puxbay API. It handles request/response
//! processing, retry logic with exponential backoff, error classification
//! and cooperative cancellation.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A raw response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PATCH, DELETE)
//! - [`CancelToken`]: Cooperative cancellation for in-flight calls
//! - [`ApiError`]: The closed error taxonomy for every call failure
//! - [`rest::RestClient`]: Higher-level typed REST client
//!
//! # Example
//!
//! ```rust,ignore
//! use puxbay_api::clients::{CancelToken, HttpClient, HttpMethod, HttpRequest};
//! use puxbay_api::{ApiKey, Config};
//!
//! let config = Config::builder()
//!     .api_key(ApiKey::new("pb_live_abc123").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = HttpClient::new(&config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "products/").build();
//! let response = client.request(request, &CancelToken::new()).await?;
//! ```
//!
//! # Retry Behavior
//!
//! The client automatically retries transient failures:
//!
//! - **Network errors**: connection failures, DNS errors and timeouts
//! - **429 (Rate Limited)** and **5xx (Server Error)** responses
//!
//! Waits between attempts are 1s, 2s, 4s, doubling each retry. Every
//! other error status returns immediately. The retry limit comes from
//! [`Config::max_retries`](crate::config::Config::max_retries) and
//! defaults to 3 retries (4 total attempts).
//!
//! # Cancellation
//!
//! Every request takes a [`CancelToken`]. Tripping the token aborts the
//! call promptly, including during a backoff wait between attempts, and
//! the call returns [`ApiError::Canceled`].

mod cancel;
mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use cancel::CancelToken;
pub use errors::{ApiError, ErrorBody, UNKNOWN_ERROR_MESSAGE};
pub use http_client::{HttpClient, RETRY_WAIT_TIME, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;

// Re-export the REST client at the clients module level
pub use rest::RestClient;
