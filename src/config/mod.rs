//! Client configuration for the Puxbay SDK.
//!
//! This module provides [`Config`], an immutable configuration object built
//! via [`ConfigBuilder`]. Construction validates the credential and fills in
//! production defaults for everything else; once built, a `Config` never
//! changes, so it can be read freely from concurrent calls.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use puxbay_api::config::{ApiKey, Config};
//!
//! let config = Config::builder()
//!     .api_key(ApiKey::new("pb_live_3f9c2d").unwrap())
//!     .timeout(Duration::from_secs(10))
//!     .max_retries(5)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.max_retries(), 5);
//! assert_eq!(config.base_url(), "https://api.puxbay.com/api/v1");
//! ```

mod newtypes;

use std::time::Duration;

use crate::error::ConfigError;

pub use newtypes::{ApiKey, API_KEY_PREFIX};

/// Production API root used when no base URL override is supplied.
pub const DEFAULT_BASE_URL: &str = "https://api.puxbay.com/api/v1";

/// Default total request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default number of retries after the initial attempt.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default upper bound on pooled connections across all hosts.
pub const DEFAULT_POOL_MAX_CONNECTIONS: usize = 100;

/// Default upper bound on idle pooled connections per host.
pub const DEFAULT_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Default lifetime of an idle pooled connection.
pub const DEFAULT_POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(90);

/// Immutable configuration for a Puxbay client.
///
/// Create via [`Config::builder`]. All fields are private; read them through
/// the accessor methods.
///
/// # Thread Safety
///
/// `Config` is `Send + Sync` and never mutated after construction, so one
/// instance can back any number of concurrent calls.
#[derive(Debug, Clone)]
pub struct Config {
    api_key: ApiKey,
    base_url: String,
    timeout: Duration,
    max_retries: u32,
    pool_max_connections: usize,
    pool_max_idle_per_host: usize,
    pool_idle_timeout: Duration,
}

impl Config {
    /// Creates a new [`ConfigBuilder`].
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Returns the validated API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the base URL, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the total per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the number of retries after the initial attempt.
    ///
    /// A value of `n` means a failing call is attempted `n + 1` times in
    /// total before the last error is surfaced.
    #[must_use]
    pub const fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Returns the upper bound on pooled connections across all hosts.
    ///
    /// The per-host idle limit is clamped to this value when the transport
    /// is built; the total itself is advisory, since the connection pool is
    /// sized per host.
    #[must_use]
    pub const fn pool_max_connections(&self) -> usize {
        self.pool_max_connections
    }

    /// Returns the upper bound on idle pooled connections per host.
    #[must_use]
    pub const fn pool_max_idle_per_host(&self) -> usize {
        self.pool_max_idle_per_host
    }

    /// Returns how long an idle pooled connection is kept before being
    /// closed.
    #[must_use]
    pub const fn pool_idle_timeout(&self) -> Duration {
        self.pool_idle_timeout
    }
}

/// Builder for [`Config`].
///
/// Only the API key is required; every other field falls back to the
/// production default named by the `DEFAULT_*` constants in this module.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    api_key: Option<ApiKey>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    max_retries: Option<u32>,
    pool_max_connections: Option<usize>,
    pool_max_idle_per_host: Option<usize>,
    pool_idle_timeout: Option<Duration>,
}

impl ConfigBuilder {
    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, api_key: ApiKey) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Overrides the base URL. A trailing slash is stripped.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Overrides the total per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Overrides the number of retries after the initial attempt.
    #[must_use]
    pub const fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = Some(max_retries);
        self
    }

    /// Overrides the total connection-pool capacity.
    #[must_use]
    pub const fn pool_max_connections(mut self, max: usize) -> Self {
        self.pool_max_connections = Some(max);
        self
    }

    /// Overrides the per-host idle connection limit.
    #[must_use]
    pub const fn pool_max_idle_per_host(mut self, max: usize) -> Self {
        self.pool_max_idle_per_host = Some(max);
        self
    }

    /// Overrides the idle-connection lifetime.
    #[must_use]
    pub const fn pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.pool_idle_timeout = Some(timeout);
        self
    }

    /// Builds the [`Config`], validating required fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if no API key was set,
    /// or [`ConfigError::InvalidBaseUrl`] if a base URL override does not
    /// use an `http://` or `https://` scheme.
    pub fn build(self) -> Result<Config, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigError::InvalidBaseUrl { url: base_url });
        }
        let base_url = base_url.trim_end_matches('/').to_string();

        Ok(Config {
            api_key,
            base_url,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            max_retries: self.max_retries.unwrap_or(DEFAULT_MAX_RETRIES),
            pool_max_connections: self
                .pool_max_connections
                .unwrap_or(DEFAULT_POOL_MAX_CONNECTIONS),
            pool_max_idle_per_host: self
                .pool_max_idle_per_host
                .unwrap_or(DEFAULT_POOL_MAX_IDLE_PER_HOST),
            pool_idle_timeout: self.pool_idle_timeout.unwrap_or(DEFAULT_POOL_IDLE_TIMEOUT),
        })
    }
}

// Verify Config is Send + Sync for safe sharing across concurrent calls
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Config>();
    assert_send_sync::<ConfigBuilder>();
};

#[cfg(test)]
mod tests {
    use super::*;

    fn test_key() -> ApiKey {
        ApiKey::new("pb_test_key").unwrap()
    }

    // === Required Field Tests ===

    #[test]
    fn test_build_fails_without_api_key() {
        let result = Config::builder().build();
        assert_eq!(
            result.unwrap_err(),
            ConfigError::MissingRequiredField { field: "api_key" }
        );
    }

    #[test]
    fn test_build_succeeds_with_only_api_key() {
        let config = Config::builder().api_key(test_key()).build().unwrap();
        assert_eq!(config.api_key().as_ref(), "pb_test_key");
    }

    // === Default Tests ===

    #[test]
    fn test_defaults_match_production_constants() {
        let config = Config::builder().api_key(test_key()).build().unwrap();

        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.max_retries(), 3);
        assert_eq!(config.pool_max_connections(), 100);
        assert_eq!(config.pool_max_idle_per_host(), 10);
        assert_eq!(config.pool_idle_timeout(), Duration::from_secs(90));
    }

    // === Override Tests ===

    #[test]
    fn test_builder_overrides_are_applied() {
        let config = Config::builder()
            .api_key(test_key())
            .base_url("https://staging.puxbay.dev/api/v1")
            .timeout(Duration::from_secs(5))
            .max_retries(1)
            .pool_max_connections(20)
            .pool_max_idle_per_host(2)
            .pool_idle_timeout(Duration::from_secs(15))
            .build()
            .unwrap();

        assert_eq!(config.base_url(), "https://staging.puxbay.dev/api/v1");
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.max_retries(), 1);
        assert_eq!(config.pool_max_connections(), 20);
        assert_eq!(config.pool_max_idle_per_host(), 2);
        assert_eq!(config.pool_idle_timeout(), Duration::from_secs(15));
    }

    #[test]
    fn test_base_url_trailing_slash_is_stripped() {
        let config = Config::builder()
            .api_key(test_key())
            .base_url("https://api.puxbay.com/api/v1/")
            .build()
            .unwrap();
        assert_eq!(config.base_url(), "https://api.puxbay.com/api/v1");
    }

    #[test]
    fn test_base_url_requires_http_scheme() {
        let result = Config::builder()
            .api_key(test_key())
            .base_url("ftp://api.puxbay.com")
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn test_plain_http_base_url_is_accepted() {
        // Plain HTTP is needed for local mock servers in tests.
        let config = Config::builder()
            .api_key(test_key())
            .base_url("http://127.0.0.1:9999")
            .build()
            .unwrap();
        assert_eq!(config.base_url(), "http://127.0.0.1:9999");
    }

    #[test]
    fn test_zero_retries_is_allowed() {
        let config = Config::builder()
            .api_key(test_key())
            .max_retries(0)
            .build()
            .unwrap();
        assert_eq!(config.max_retries(), 0);
    }

    #[test]
    fn test_config_is_cloneable_and_debuggable() {
        let config = Config::builder().api_key(test_key()).build().unwrap();
        let cloned = config.clone();
        assert_eq!(cloned.base_url(), config.base_url());

        // Debug output must not leak the key value.
        let debug = format!("{config:?}");
        assert!(debug.contains("ApiKey(*****)"));
        assert!(!debug.contains("pb_test_key"));
    }
}
