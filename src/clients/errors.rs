//! Error taxonomy for Puxbay API calls.
//!
//! Every failure a call can produce is one variant of [`ApiError`], a
//! closed enum the caller can match exhaustively. HTTP error statuses are
//! classified by [`ApiError::from_response`]: the body is best-effort
//! parsed for a `detail` or `message` field (preferring `detail`), and the
//! status code selects the variant. Classification never fails — an
//! unparsable body simply yields the fixed fallback message.
//!
//! # Retry Semantics
//!
//! [`ApiError::is_retryable`] is the single source of truth for the retry
//! loop: network failures, 429 and 5xx responses are retryable; every
//! other variant aborts the call immediately.

use std::fmt;

use serde::Deserialize;
use thiserror::Error;

use crate::error::ConfigError;

/// Fallback message used when an error body carries neither `detail` nor
/// `message`.
pub const UNKNOWN_ERROR_MESSAGE: &str = "unknown error";

/// The structured payload shared by every HTTP-classified error.
///
/// `message` holds the text chosen during classification (`detail` if the
/// body had one, otherwise `message`, otherwise
/// [`UNKNOWN_ERROR_MESSAGE`]); `detail` preserves the raw `detail` field
/// when present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    /// The HTTP status code of the response.
    pub status: u16,
    /// The classified error text.
    pub message: String,
    /// The raw `detail` field from the response body, if any.
    pub detail: Option<String>,
}

/// Wire shape of a Puxbay error body. Both fields are optional and either
/// may be an empty string, which counts as absent.
#[derive(Debug, Default, Deserialize)]
struct RawErrorBody {
    #[serde(default)]
    detail: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl ErrorBody {
    /// Builds an `ErrorBody` from a raw response, preferring `detail` over
    /// `message` and falling back to [`UNKNOWN_ERROR_MESSAGE`].
    ///
    /// This never fails: malformed or empty bodies produce the fallback.
    #[must_use]
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let raw: RawErrorBody = serde_json::from_slice(body).unwrap_or_default();
        let detail = raw.detail.filter(|text| !text.is_empty());
        let message = raw.message.filter(|text| !text.is_empty());

        let chosen = detail
            .clone()
            .or(message)
            .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string());

        Self {
            status,
            message: chosen,
            detail,
        }
    }
}

impl fmt::Display for ErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}: {}", self.status, self.message)
    }
}

/// Errors produced by Puxbay API calls.
///
/// Exactly one of these is returned per failed logical call. The variants
/// carrying an [`ErrorBody`] correspond to classified HTTP statuses; the
/// rest cover construction, serialization, transport, decoding and
/// cancellation failures.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client construction failed; no network activity has occurred.
    #[error(transparent)]
    Construction(#[from] ConfigError),

    /// The request body could not be encoded as JSON. Not retried: the
    /// same body would fail the same way on every attempt.
    #[error("failed to serialize request body: {0}")]
    Serialization(serde_json::Error),

    /// A transport-level failure before any HTTP response was received
    /// (connection refused, DNS failure, timeout). Retried up to the
    /// configured limit.
    #[error("network request failed: {0}")]
    Network(reqwest::Error),

    /// HTTP 401. The API key was rejected.
    #[error("authentication failed: {0}")]
    Authentication(ErrorBody),

    /// HTTP 400. The server rejected the request payload.
    #[error("request validation failed: {0}")]
    Validation(ErrorBody),

    /// HTTP 404. The resource does not exist.
    #[error("resource not found: {0}")]
    NotFound(ErrorBody),

    /// HTTP 429. Retried up to the configured limit, then surfaced.
    #[error("rate limited: {0}")]
    RateLimit(ErrorBody),

    /// HTTP 5xx. Retried up to the configured limit, then surfaced.
    #[error("server error: {0}")]
    Server(ErrorBody),

    /// Any other HTTP error status with no dedicated variant.
    #[error("API request failed: {0}")]
    Api(ErrorBody),

    /// A success response carried a body that does not match the expected
    /// shape. Not retried: the server already answered.
    #[error("failed to decode response body: {0}")]
    Decode(serde_json::Error),

    /// The caller's cancellation token was tripped during the call.
    #[error("request canceled")]
    Canceled,
}

impl ApiError {
    /// Classifies an HTTP error response into the matching variant.
    ///
    /// The status selects the variant; the body is parsed best-effort via
    /// [`ErrorBody::from_response`] and never causes a failure itself.
    #[must_use]
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let body = ErrorBody::from_response(status, body);
        match status {
            401 => Self::Authentication(body),
            400 => Self::Validation(body),
            404 => Self::NotFound(body),
            429 => Self::RateLimit(body),
            status if status >= 500 => Self::Server(body),
            _ => Self::Api(body),
        }
    }

    /// Returns `true` for failures plausibly caused by transient network
    /// or server load: transport errors, 429 and 5xx.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::RateLimit(_) | Self::Server(_)
        )
    }

    /// Returns the classified payload for HTTP-status variants, `None`
    /// otherwise.
    #[must_use]
    pub const fn error_body(&self) -> Option<&ErrorBody> {
        match self {
            Self::Authentication(body)
            | Self::Validation(body)
            | Self::NotFound(body)
            | Self::RateLimit(body)
            | Self::Server(body)
            | Self::Api(body) => Some(body),
            _ => None,
        }
    }

    /// Returns the HTTP status code for HTTP-status variants.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.error_body().map(|body| body.status)
    }
}

// Verify error types are Send + Sync so they can cross task boundaries
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiError>();
    assert_send_sync::<ErrorBody>();
};
