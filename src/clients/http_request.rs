//! HTTP request descriptor types.
//!
//! A [`HttpRequest`] captures one logical call — method, endpoint path,
//! optional JSON body, optional query parameters — independent of retry
//! state. The transport consumes the descriptor and may send it several
//! times; the descriptor itself never changes between attempts.

use std::fmt;

use serde_json::Value;

/// HTTP methods supported by the Puxbay API.
///
/// Updates use `PATCH` throughout; the API has no `PUT` endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// GET request for reads and list operations.
    Get,
    /// POST request for creation and sub-path actions.
    Post,
    /// PATCH request for partial updates.
    Patch,
    /// DELETE request for removal.
    Delete,
}

impl HttpMethod {
    /// Converts to the corresponding `reqwest` method.
    #[must_use]
    pub fn as_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Patch => reqwest::Method::PATCH,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Patch => write!(f, "patch"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// A request to be sent to the Puxbay API.
///
/// Created via [`HttpRequest::builder`]. The `path` is relative to the
/// configured base URL and follows the API's trailing-slash convention
/// (`products/`, `products/{id}/`).
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    /// The HTTP method to use.
    pub method: HttpMethod,
    /// Endpoint path relative to the base URL.
    pub path: String,
    /// Optional JSON body, serialized once per call.
    pub body: Option<Value>,
    /// Optional query parameters, appended in order.
    pub query: Option<Vec<(String, String)>>,
}

impl HttpRequest {
    /// Creates a new [`HttpRequestBuilder`] for the given method and path.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder {
            method,
            path: path.into(),
            body: None,
            query: None,
        }
    }
}

/// Builder for [`HttpRequest`].
#[derive(Debug, Clone)]
pub struct HttpRequestBuilder {
    method: HttpMethod,
    path: String,
    body: Option<Value>,
    query: Option<Vec<(String, String)>>,
}

impl HttpRequestBuilder {
    /// Sets the JSON body.
    #[must_use]
    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Sets the full query-parameter list, replacing any existing one.
    #[must_use]
    pub fn query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = Some(query);
        self
    }

    /// Appends a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query
            .get_or_insert_with(Vec::new)
            .push((key.into(), value.into()));
        self
    }

    /// Builds the [`HttpRequest`].
    #[must_use]
    pub fn build(self) -> HttpRequest {
        HttpRequest {
            method: self.method,
            path: self.path,
            body: self.body,
            query: self.query,
        }
    }
}

// Verify request types are Send + Sync for concurrent dispatch
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpMethod>();
    assert_send_sync::<HttpRequest>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_display_is_lowercase() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Post.to_string(), "post");
        assert_eq!(HttpMethod::Patch.to_string(), "patch");
        assert_eq!(HttpMethod::Delete.to_string(), "delete");
    }

    #[test]
    fn test_http_method_maps_to_reqwest() {
        assert_eq!(HttpMethod::Get.as_reqwest(), reqwest::Method::GET);
        assert_eq!(HttpMethod::Post.as_reqwest(), reqwest::Method::POST);
        assert_eq!(HttpMethod::Patch.as_reqwest(), reqwest::Method::PATCH);
        assert_eq!(HttpMethod::Delete.as_reqwest(), reqwest::Method::DELETE);
    }

    #[test]
    fn test_builder_with_defaults() {
        let request = HttpRequest::builder(HttpMethod::Get, "products/").build();

        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path, "products/");
        assert!(request.body.is_none());
        assert!(request.query.is_none());
    }

    #[test]
    fn test_builder_with_body_and_query() {
        let request = HttpRequest::builder(HttpMethod::Post, "products/")
            .body(json!({"name": "Espresso Beans"}))
            .query(vec![("page".to_string(), "1".to_string())])
            .build();

        assert_eq!(request.body, Some(json!({"name": "Espresso Beans"})));
        assert_eq!(
            request.query,
            Some(vec![("page".to_string(), "1".to_string())])
        );
    }

    #[test]
    fn test_query_param_accumulates_in_order() {
        let request = HttpRequest::builder(HttpMethod::Get, "orders/")
            .query_param("page", "2")
            .query_param("status", "pending")
            .build();

        assert_eq!(
            request.query,
            Some(vec![
                ("page".to_string(), "2".to_string()),
                ("status".to_string(), "pending".to_string()),
            ])
        );
    }
}
