//! Validated newtype for the Puxbay API credential.
//!
//! Wrapping the key in a dedicated type means an invalid credential is
//! rejected at construction time, long before any request is made, and the
//! type system guarantees every configured client holds a well-formed key.
//!
//! # Example
//!
//! ```rust
//! use puxbay_api::config::ApiKey;
//!
//! let key = ApiKey::new("pb_live_3f9c2d").unwrap();
//! assert_eq!(key.as_ref(), "pb_live_3f9c2d");
//!
//! // Keys missing the prefix are rejected outright.
//! assert!(ApiKey::new("sk_live_3f9c2d").is_err());
//! ```

use std::fmt;

use crate::error::ConfigError;

/// The prefix every valid Puxbay API key starts with.
pub const API_KEY_PREFIX: &str = "pb_";

/// A validated Puxbay API key.
///
/// The key is sent as the `X-API-Key` header on every request. Construction
/// fails for empty keys and for keys that do not start with
/// [`API_KEY_PREFIX`] — both would be rejected by the server on every call,
/// so they are surfaced as a fatal [`ConfigError`] instead.
///
/// # Security
///
/// The `Debug` implementation masks the key value so it cannot leak into
/// logs or error output.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new `ApiKey` after validating its format.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty, or
    /// [`ConfigError::InvalidApiKeyFormat`] if it does not start with
    /// [`API_KEY_PREFIX`].
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        if !key.starts_with(API_KEY_PREFIX) {
            return Err(ConfigError::InvalidApiKeyFormat {
                prefix: API_KEY_PREFIX,
            });
        }
        Ok(Self(key))
    }

    /// Consumes the `ApiKey` and returns the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Masked output so credentials never appear in logs.
impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey(*****)")
    }
}

// Verify ApiKey is Send + Sync for safe use across threads
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiKey>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_accepts_prefixed_key() {
        let key = ApiKey::new("pb_live_3f9c2d").unwrap();
        assert_eq!(key.as_ref(), "pb_live_3f9c2d");
    }

    #[test]
    fn test_api_key_accepts_bare_prefix() {
        // "pb_" alone satisfies the format check; the server decides whether
        // the key is actually issued.
        assert!(ApiKey::new("pb_").is_ok());
    }

    #[test]
    fn test_api_key_rejects_empty_string() {
        assert_eq!(ApiKey::new(""), Err(ConfigError::EmptyApiKey));
    }

    #[test]
    fn test_api_key_rejects_missing_prefix() {
        assert_eq!(
            ApiKey::new("sk_live_3f9c2d"),
            Err(ConfigError::InvalidApiKeyFormat { prefix: "pb_" })
        );
    }

    #[test]
    fn test_api_key_rejects_key_shorter_than_prefix() {
        assert_eq!(
            ApiKey::new("pb"),
            Err(ConfigError::InvalidApiKeyFormat { prefix: "pb_" })
        );
    }

    #[test]
    fn test_api_key_debug_is_masked() {
        let key = ApiKey::new("pb_secret_value").unwrap();
        let debug = format!("{key:?}");
        assert_eq!(debug, "ApiKey(*****)");
        assert!(!debug.contains("secret"));
    }

    #[test]
    fn test_api_key_into_inner_returns_original() {
        let key = ApiKey::new("pb_test").unwrap();
        assert_eq!(key.into_inner(), "pb_test");
    }

    #[test]
    fn test_api_key_clone_and_eq() {
        let key = ApiKey::new("pb_test").unwrap();
        assert_eq!(key, key.clone());
        assert_ne!(key, ApiKey::new("pb_other").unwrap());
    }
}
