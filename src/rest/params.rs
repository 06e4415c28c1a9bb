//! List-parameter types for REST resources.
//!
//! Each listing endpoint accepts a small set of optional filters. The
//! structs here mirror those filters one-to-one: every field is an
//! `Option`, and only populated fields become query parameters. The
//! default value of each struct therefore means "no filtering, server
//! defaults for pagination".
//!
//! # Example
//!
//! ```rust
//! use puxbay_api::rest::ListParams;
//!
//! let params = ListParams {
//!     page: Some(2),
//!     page_size: Some(50),
//!     search: Some("espresso".to_string()),
//! };
//! ```

use serde::Serialize;
use serde_json::Value;

use crate::clients::ApiError;

/// Parameters for listing searchable resources (products, customers,
/// suppliers).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListParams {
    /// Page number to fetch (1-based).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Number of items per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// Free-text search filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// Parameters for listing orders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderListParams {
    /// Page number to fetch (1-based).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Number of items per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// Filter by order status (e.g., "completed", "cancelled").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Filter by customer ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
}

/// Parameters for resources that only paginate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageParams {
    /// Page number to fetch (1-based).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

/// Parameters for resources filtered by a status field (purchase orders,
/// stock transfers, gift cards).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusListParams {
    /// Page number to fetch (1-based).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Filter by status (e.g., "pending", "active").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Parameters for listing staff members.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RoleListParams {
    /// Page number to fetch (1-based).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Filter by role (e.g., "manager", "cashier").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Parameters for listing expenses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryListParams {
    /// Page number to fetch (1-based).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Filter by expense category ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Serializes a params struct into query parameter pairs.
///
/// `None` fields are skipped; strings pass through, numbers and booleans
/// are stringified, and arrays become comma-separated values. JSON objects
/// iterate in key order, so the output is deterministic.
pub(crate) fn serialize_to_query<T: Serialize>(
    params: &T,
) -> Result<Vec<(String, String)>, ApiError> {
    let value = serde_json::to_value(params).map_err(ApiError::Serialization)?;

    let mut query = Vec::new();
    if let Value::Object(map) = value {
        for (key, val) in map {
            match val {
                Value::Null | Value::Object(_) => {}
                Value::String(text) => query.push((key, text)),
                Value::Number(number) => query.push((key, number.to_string())),
                Value::Bool(flag) => query.push((key, flag.to_string())),
                Value::Array(items) => {
                    let values: Vec<String> = items
                        .iter()
                        .filter_map(|item| match item {
                            Value::String(text) => Some(text.clone()),
                            Value::Number(number) => Some(number.to_string()),
                            _ => None,
                        })
                        .collect();
                    if !values.is_empty() {
                        query.push((key, values.join(",")));
                    }
                }
            }
        }
    }

    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_produce_no_query() {
        let query = serialize_to_query(&ListParams::default()).unwrap();
        assert!(query.is_empty());
    }

    #[test]
    fn test_populated_fields_become_query_pairs() {
        let params = ListParams {
            page: Some(2),
            page_size: Some(50),
            search: Some("espresso".to_string()),
        };
        let query = serialize_to_query(&params).unwrap();

        assert_eq!(
            query,
            vec![
                ("page".to_string(), "2".to_string()),
                ("page_size".to_string(), "50".to_string()),
                ("search".to_string(), "espresso".to_string()),
            ]
        );
    }

    #[test]
    fn test_partial_params_skip_absent_fields() {
        let params = OrderListParams {
            status: Some("completed".to_string()),
            ..Default::default()
        };
        let query = serialize_to_query(&params).unwrap();

        assert_eq!(
            query,
            vec![("status".to_string(), "completed".to_string())]
        );
    }

    #[test]
    fn test_customer_filter_uses_customer_key() {
        let params = OrderListParams {
            customer: Some("cust-9".to_string()),
            ..Default::default()
        };
        let query = serialize_to_query(&params).unwrap();

        assert_eq!(query[0].0, "customer");
        assert_eq!(query[0].1, "cust-9");
    }

    #[test]
    fn test_query_pairs_are_sorted_by_key() {
        #[derive(Serialize)]
        struct Unsorted {
            zebra: u32,
            apple: u32,
        }

        let query = serialize_to_query(&Unsorted { zebra: 1, apple: 2 }).unwrap();
        assert_eq!(query[0].0, "apple");
        assert_eq!(query[1].0, "zebra");
    }

    #[test]
    fn test_arrays_join_with_commas() {
        #[derive(Serialize)]
        struct WithArray {
            ids: Vec<u32>,
        }

        let query = serialize_to_query(&WithArray { ids: vec![1, 2, 3] }).unwrap();
        assert_eq!(query, vec![("ids".to_string(), "1,2,3".to_string())]);
    }

    #[test]
    fn test_booleans_stringify() {
        #[derive(Serialize)]
        struct WithBool {
            is_active: bool,
        }

        let query = serialize_to_query(&WithBool { is_active: true }).unwrap();
        assert_eq!(query, vec![("is_active".to_string(), "true".to_string())]);
    }
}
