//! REST client implementation for the Puxbay API.
//!
//! This module provides the [`RestClient`] type, a thin typed layer over
//! [`HttpClient`](crate::clients::HttpClient): verbs accept serializable
//! bodies, responses are decoded into caller-chosen types, and every call
//! threads a [`CancelToken`] through to the transport.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::cancel::CancelToken;
use crate::clients::errors::ApiError;
use crate::clients::http_client::HttpClient;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::config::Config;
use crate::error::ConfigError;

/// REST API client for the Puxbay API.
///
/// Provides typed verb methods (`get`, `post`, `patch`, `delete`) that
/// serialize request bodies, decode success responses and map error
/// responses to [`ApiError`] variants. Retry and cancellation behavior
/// comes from the underlying [`HttpClient`].
///
/// Updates use PATCH: the Puxbay API applies partial updates, so absent
/// fields are left untouched rather than cleared.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use puxbay_api::clients::{CancelToken, RestClient};
/// use puxbay_api::{ApiKey, Config};
///
/// let config = Config::builder()
///     .api_key(ApiKey::new("pb_live_abc123")?)
///     .build()?;
/// let client = RestClient::new(&config)?;
///
/// let cancel = CancelToken::new();
/// let product: Product = client.get("products/42/", None, &cancel).await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Transport`] if the underlying HTTP transport
    /// cannot be initialized.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self {
            http_client: HttpClient::new(config)?,
        })
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Sends a GET request and decodes the response body into `R`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, error statuses and
    /// response bodies that do not decode into `R`.
    pub async fn get<R>(
        &self,
        path: &str,
        query: Option<Vec<(String, String)>>,
        cancel: &CancelToken,
    ) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        let mut builder = HttpRequest::builder(HttpMethod::Get, path);
        if let Some(query) = query {
            builder = builder.query(query);
        }
        self.send(builder.build(), cancel).await
    }

    /// Sends a POST request with a JSON body and decodes the response
    /// into `R`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Serialization`] if `body` cannot be encoded,
    /// and the usual transport, status and decode errors otherwise.
    pub async fn post<B, R>(&self, path: &str, body: &B, cancel: &CancelToken) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = serde_json::to_value(body).map_err(ApiError::Serialization)?;
        let request = HttpRequest::builder(HttpMethod::Post, path)
            .body(body)
            .build();
        self.send(request, cancel).await
    }

    /// Sends a bodyless POST request and decodes the response into `R`.
    ///
    /// Used for server-side actions that need no input, such as completing
    /// a stock transfer.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures, error statuses and
    /// response bodies that do not decode into `R`.
    pub async fn post_empty<R>(&self, path: &str, cancel: &CancelToken) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        let request = HttpRequest::builder(HttpMethod::Post, path).build();
        self.send(request, cancel).await
    }

    /// Sends a PATCH request with a JSON body and decodes the response
    /// into `R`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Serialization`] if `body` cannot be encoded,
    /// and the usual transport, status and decode errors otherwise.
    pub async fn patch<B, R>(
        &self,
        path: &str,
        body: &B,
        cancel: &CancelToken,
    ) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = serde_json::to_value(body).map_err(ApiError::Serialization)?;
        let request = HttpRequest::builder(HttpMethod::Patch, path)
            .body(body)
            .build();
        self.send(request, cancel).await
    }

    /// Sends a DELETE request. The response body, if any, is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for transport failures and error statuses.
    pub async fn delete(&self, path: &str, cancel: &CancelToken) -> Result<(), ApiError> {
        let request = HttpRequest::builder(HttpMethod::Delete, path).build();
        self.http_client.request(request, cancel).await?;
        Ok(())
    }

    /// Sends the request and decodes the success body into `R`.
    async fn send<R>(&self, request: HttpRequest, cancel: &CancelToken) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        let response = self.http_client.request(request, cancel).await?;
        response.json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiKey;

    fn create_test_config() -> Config {
        Config::builder()
            .api_key(ApiKey::new("pb_test_key").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_rest_client_construction() {
        let config = create_test_config();
        let client = RestClient::new(&config).unwrap();

        assert_eq!(
            client.http_client().base_url(),
            "https://api.puxbay.com/api/v1"
        );
    }

    #[test]
    fn test_rest_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RestClient>();
    }
}
