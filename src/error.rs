//! Error types for SDK configuration.
//!
//! This module defines [`ConfigError`], covering every way client
//! construction can fail. Request-time failures are covered by
//! [`ApiError`](crate::clients::ApiError), which wraps `ConfigError` for
//! callers that want a single error type.

use thiserror::Error;

/// Errors that can occur during client configuration and construction.
///
/// All variants are fatal: a client whose construction fails must not be
/// used, since the failure (an unusable credential, an unusable endpoint)
/// would make every subsequent call fail as well.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The API key was an empty string.
    #[error("API key cannot be empty. Provide the key from your Puxbay dashboard")]
    EmptyApiKey,

    /// The API key did not carry the expected prefix.
    #[error("invalid API key format: the key must start with '{prefix}'")]
    InvalidApiKeyFormat {
        /// The prefix every valid key starts with.
        prefix: &'static str,
    },

    /// A required configuration field was not provided to the builder.
    #[error("missing required configuration field: {field}. Set this field on the builder before calling build()")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The base URL does not look like an HTTP(S) endpoint.
    #[error("invalid base URL '{url}': expected an http:// or https:// endpoint")]
    InvalidBaseUrl {
        /// The rejected URL.
        url: String,
    },

    /// The underlying HTTP transport could not be initialized.
    #[error("failed to initialize HTTP transport: {message}")]
    Transport {
        /// Description of the initialization failure.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_are_actionable() {
        let err = ConfigError::EmptyApiKey;
        assert!(err.to_string().contains("cannot be empty"));

        let err = ConfigError::InvalidApiKeyFormat { prefix: "pb_" };
        assert!(err.to_string().contains("pb_"));

        let err = ConfigError::MissingRequiredField { field: "api_key" };
        assert!(err.to_string().contains("api_key"));

        let err = ConfigError::InvalidBaseUrl {
            url: "ftp://example.com".to_string(),
        };
        assert!(err.to_string().contains("ftp://example.com"));
    }

    #[test]
    fn test_errors_are_cloneable_and_comparable() {
        let err = ConfigError::MissingRequiredField { field: "api_key" };
        let cloned = err.clone();
        assert_eq!(err, cloned);
        assert_ne!(err, ConfigError::EmptyApiKey);
    }
}
