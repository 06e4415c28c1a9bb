//! HTTP response snapshot.
//!
//! The transport reads the full response body before any status handling,
//! so a [`HttpResponse`] is a plain value: status code plus raw bytes.
//! Decoding into a typed value is deferred to [`HttpResponse::json`] —
//! callers that expect no body (deletes, some actions) simply never decode.

use serde::de::DeserializeOwned;

use crate::clients::errors::ApiError;

/// A successful response from the Puxbay API.
///
/// The transport only hands out responses with status below 400; error
/// statuses are classified into [`ApiError`] before reaching the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub status: u16,
    /// The raw response body. May be empty.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new response snapshot.
    #[must_use]
    pub const fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Returns `true` if the status code is below 400.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status < 400
    }

    /// Decodes the body as JSON into the requested type.
    ///
    /// An empty body is a decode failure: a typed result cannot be
    /// materialized from nothing. Callers expecting an empty body should
    /// not request a decoded result.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if the body is empty or not valid JSON
    /// for the requested shape.
    pub fn json<R: DeserializeOwned>(&self) -> Result<R, ApiError> {
        serde_json::from_slice(&self.body).map_err(ApiError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Widget {
        id: String,
        quantity: i64,
    }

    #[test]
    fn test_is_ok_boundary() {
        assert!(HttpResponse::new(200, Vec::new()).is_ok());
        assert!(HttpResponse::new(204, Vec::new()).is_ok());
        assert!(HttpResponse::new(399, Vec::new()).is_ok());
        assert!(!HttpResponse::new(400, Vec::new()).is_ok());
        assert!(!HttpResponse::new(500, Vec::new()).is_ok());
    }

    #[test]
    fn test_json_decodes_valid_body() {
        let response = HttpResponse::new(200, br#"{"id": "w1", "quantity": 4}"#.to_vec());
        let widget: Widget = response.json().unwrap();
        assert_eq!(
            widget,
            Widget {
                id: "w1".to_string(),
                quantity: 4
            }
        );
    }

    #[test]
    fn test_json_rejects_empty_body() {
        let response = HttpResponse::new(200, Vec::new());
        let result: Result<Widget, _> = response.json();
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_json_rejects_malformed_body() {
        let response = HttpResponse::new(200, b"{not json".to_vec());
        let result: Result<Widget, _> = response.json();
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_json_rejects_shape_mismatch() {
        let response = HttpResponse::new(200, br#"{"id": 17}"#.to_vec());
        let result: Result<Widget, _> = response.json();
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}
