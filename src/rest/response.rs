//! Paginated response envelope for listing endpoints.
//!
//! Listing endpoints wrap their results in a fixed envelope carrying the
//! total count and opaque next/previous page URLs. [`Page`] mirrors that
//! envelope with a typed `results` vector.

use serde::{Deserialize, Serialize};

/// One page of results from a listing endpoint.
///
/// `next` and `previous` are opaque URLs provided by the server; their
/// presence indicates whether more pages exist in either direction. To
/// fetch an adjacent page, issue the list call again with the next page
/// number rather than following the URL.
///
/// # Example
///
/// ```rust,ignore
/// let page = client.products().list(&ListParams::default()).await?;
///
/// println!("{} products total", page.count);
/// for product in &page.results {
///     println!("{}", product.name);
/// }
///
/// if page.has_next() {
///     // Fetch the next page...
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Total number of items across all pages.
    pub count: u64,
    /// URL of the next page, if any.
    pub next: Option<String>,
    /// URL of the previous page, if any.
    pub previous: Option<String>,
    /// The items on this page.
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Returns `true` if a page exists after this one.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Returns `true` if a page exists before this one.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    /// Returns the number of items on this page (not the total count).
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns `true` if this page carries no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Returns an iterator over the items on this page.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.results.iter()
    }

    /// Consumes the page, returning its items.
    #[must_use]
    pub fn into_results(self) -> Vec<T> {
        self.results
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

// Verify Page is Send + Sync for thread-safe payload types
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Page<String>>();
};

#[cfg(test)]
mod tests {
    use super::*;

    fn page_json() -> &'static str {
        r#"{
            "count": 5,
            "next": "https://api.puxbay.com/api/v1/products/?page=2",
            "previous": null,
            "results": ["a", "b", "c"]
        }"#
    }

    #[test]
    fn test_page_deserializes_envelope() {
        let page: Page<String> = serde_json::from_str(page_json()).unwrap();

        assert_eq!(page.count, 5);
        assert!(page.has_next());
        assert!(!page.has_previous());
        assert_eq!(page.len(), 3);
        assert!(!page.is_empty());
    }

    #[test]
    fn test_page_missing_links_mean_no_adjacent_pages() {
        let page: Page<String> =
            serde_json::from_str(r#"{"count": 0, "next": null, "previous": null, "results": []}"#)
                .unwrap();

        assert!(!page.has_next());
        assert!(!page.has_previous());
        assert!(page.is_empty());
    }

    #[test]
    fn test_page_iteration() {
        let page: Page<String> = serde_json::from_str(page_json()).unwrap();

        let joined: Vec<&str> = page.iter().map(String::as_str).collect();
        assert_eq!(joined, vec!["a", "b", "c"]);

        let owned: Vec<String> = page.into_iter().collect();
        assert_eq!(owned.len(), 3);
    }

    #[test]
    fn test_into_results_returns_items() {
        let page: Page<String> = serde_json::from_str(page_json()).unwrap();
        let results = page.into_results();
        assert_eq!(results, vec!["a", "b", "c"]);
    }
}
