//! HTTP client for Puxbay API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the Puxbay API with automatic retry handling and
//! cooperative cancellation.

use std::collections::HashMap;
use std::time::Duration;

use crate::clients::cancel::CancelToken;
use crate::clients::errors::ApiError;
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::config::Config;
use crate::error::ConfigError;

/// Base retry wait time in seconds. The wait before retry attempt `n`
/// doubles each time: `RETRY_WAIT_TIME << (n - 1)` seconds.
pub const RETRY_WAIT_TIME: u64 = 1;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Puxbay API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Default headers including the API key and User-Agent
/// - One-time request body serialization shared across attempts
/// - Automatic retry with exponential backoff for network failures,
///   429 and 5xx responses
/// - Cooperative cancellation via [`CancelToken`], honored during
///   backoff waits and while a request is in flight
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
/// The underlying connection pool is reused by every clone of the inner
/// client, so one `HttpClient` per process is the intended shape.
///
/// # Example
///
/// ```rust,ignore
/// use puxbay_api::clients::{CancelToken, HttpClient, HttpMethod, HttpRequest};
/// use puxbay_api::{ApiKey, Config};
///
/// let config = Config::builder()
///     .api_key(ApiKey::new("pb_live_abc123")?)
///     .build()?;
///
/// let client = HttpClient::new(&config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "products/").build();
/// let response = client.request(request, &CancelToken::new()).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL (e.g., `https://api.puxbay.com/api/v1`), no trailing slash.
    base_url: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Number of retries after the first attempt.
    max_retries: u32,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// The request timeout, connection pool sizing and retry limit are
    /// all taken from `config`. Response compression (gzip and deflate)
    /// is negotiated automatically.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Transport`] if the underlying TLS-backed
    /// transport cannot be initialized.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let mut default_headers = HashMap::new();
        default_headers.insert(
            "X-API-Key".to_string(),
            config.api_key().as_ref().to_string(),
        );
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());
        default_headers.insert(
            "User-Agent".to_string(),
            format!("puxbay-rust/{SDK_VERSION}"),
        );

        // The total-connection limit also bounds idle connections, since
        // reqwest only exposes a per-host idle cap.
        let max_idle = config
            .pool_max_idle_per_host()
            .min(config.pool_max_connections());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .pool_max_idle_per_host(max_idle)
            .pool_idle_timeout(config.pool_idle_timeout())
            .gzip(true)
            .deflate(true)
            .build()
            .map_err(|err| ConfigError::Transport {
                message: err.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
            default_headers,
            max_retries: config.max_retries(),
        })
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the number of retries performed after a failed first attempt.
    #[must_use]
    pub const fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Sends an HTTP request to the Puxbay API.
    ///
    /// The request body is serialized exactly once, before the first
    /// attempt. Network failures, 429 and 5xx responses are retried up to
    /// the configured limit with waits of 1s, 2s, 4s, ... between
    /// attempts; every other error status aborts immediately. Tripping
    /// `cancel` aborts the call during a backoff wait or while a request
    /// is in flight.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if:
    /// - The body cannot be serialized (`Serialization`)
    /// - All attempts fail at the transport level (`Network`)
    /// - The final response is an error status (`Authentication`,
    ///   `Validation`, `NotFound`, `RateLimit`, `Server` or `Api`)
    /// - The token was tripped before completion (`Canceled`)
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let request = HttpRequest::builder(HttpMethod::Get, "products/")
    ///     .query_param("page", "1")
    ///     .build();
    ///
    /// let response = client.request(request, &cancel).await?;
    /// if response.is_ok() {
    ///     let page: Page<Product> = response.json()?;
    /// }
    /// ```
    pub async fn request(
        &self,
        request: HttpRequest,
        cancel: &CancelToken,
    ) -> Result<HttpResponse, ApiError> {
        let url = format!("{}/{}", self.base_url, request.path);

        // Serialize once up front; a body that cannot be encoded would
        // fail identically on every attempt.
        let payload = request
            .body
            .as_ref()
            .map(serde_json::to_vec)
            .transpose()
            .map_err(ApiError::Serialization)?;

        let mut attempt: u32 = 0;
        loop {
            if attempt > 0 {
                tokio::select! {
                    () = tokio::time::sleep(Self::retry_delay(attempt)) => {}
                    () = cancel.cancelled() => return Err(ApiError::Canceled),
                }
            }

            tracing::debug!(
                "sending {} {} (attempt {} of {})",
                request.method,
                request.path,
                attempt + 1,
                self.max_retries + 1
            );

            match self
                .execute(&url, &request, payload.as_deref(), cancel)
                .await
            {
                Ok(response) => return Ok(response),
                Err(err) if err.is_retryable() && attempt < self.max_retries => {
                    tracing::warn!(
                        "retrying {} {} after error (attempt {} of {}): {}",
                        request.method,
                        request.path,
                        attempt + 1,
                        self.max_retries + 1,
                        err
                    );
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Performs a single attempt: send, read the body, classify the status.
    async fn execute(
        &self,
        url: &str,
        request: &HttpRequest,
        payload: Option<&[u8]>,
        cancel: &CancelToken,
    ) -> Result<HttpResponse, ApiError> {
        let mut builder = self.client.request(request.method.as_reqwest(), url);

        for (key, value) in &self.default_headers {
            builder = builder.header(key, value);
        }
        if let Some(query) = &request.query {
            builder = builder.query(query);
        }
        if let Some(payload) = payload {
            builder = builder.body(payload.to_vec());
        }

        let response = tokio::select! {
            result = builder.send() => result.map_err(ApiError::Network)?,
            () = cancel.cancelled() => return Err(ApiError::Canceled),
        };

        let status = response.status().as_u16();
        let body = tokio::select! {
            result = response.bytes() => result.map_err(ApiError::Network)?,
            () = cancel.cancelled() => return Err(ApiError::Canceled),
        };

        if status >= 400 {
            return Err(ApiError::from_response(status, &body));
        }

        Ok(HttpResponse::new(status, body.to_vec()))
    }

    /// Returns the wait before retry attempt `attempt` (1-based):
    /// 1s, 2s, 4s, doubling each time. The shift is capped so pathological
    /// retry limits cannot overflow.
    fn retry_delay(attempt: u32) -> Duration {
        let exponent = (attempt - 1).min(63);
        Duration::from_secs(RETRY_WAIT_TIME << exponent)
    }
}
