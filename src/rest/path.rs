//! Path building helpers for REST resources.
//!
//! Every Puxbay endpoint ends with a trailing slash, and item paths embed
//! the resource ID directly: `products/`, `products/{id}/`,
//! `products/{id}/adjust_stock/`. These helpers centralize that shape so
//! resource code never formats paths by hand.

/// Builds the collection path for a resource segment.
///
/// # Example
///
/// ```rust
/// use puxbay_api::rest::collection_path;
///
/// assert_eq!(collection_path("products"), "products/");
/// ```
#[must_use]
pub fn collection_path(segment: &str) -> String {
    format!("{segment}/")
}

/// Builds the path for a single item within a collection.
///
/// # Example
///
/// ```rust
/// use puxbay_api::rest::item_path;
///
/// assert_eq!(item_path("products", "42"), "products/42/");
/// ```
#[must_use]
pub fn item_path(segment: &str, id: &str) -> String {
    format!("{segment}/{id}/")
}

/// Builds the path for a server-side action on a single item.
///
/// # Example
///
/// ```rust
/// use puxbay_api::rest::action_path;
///
/// assert_eq!(
///     action_path("products", "42", "adjust_stock"),
///     "products/42/adjust_stock/"
/// );
/// ```
#[must_use]
pub fn action_path(segment: &str, id: &str, action: &str) -> String {
    format!("{segment}/{id}/{action}/")
}

/// Builds the path for an action on the collection itself, such as
/// `gift-cards/check-balance/`.
///
/// # Example
///
/// ```rust
/// use puxbay_api::rest::collection_action_path;
///
/// assert_eq!(
///     collection_action_path("gift-cards", "check-balance"),
///     "gift-cards/check-balance/"
/// );
/// ```
#[must_use]
pub fn collection_action_path(segment: &str, action: &str) -> String {
    format!("{segment}/{action}/")
}
