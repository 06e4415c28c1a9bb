//! Category resource implementation.
//!
//! Categories group products in the Puxbay catalog. They support the full
//! set of CRUD operations and paginate without filters.

use serde::{Deserialize, Serialize};

use crate::rest::params::PageParams;
use crate::rest::resource::{Creatable, Deletable, Resource, Updatable};

/// A product category.
///
/// # Example
///
/// ```rust,ignore
/// use puxbay_api::rest::resources::Category;
///
/// let category = Category {
///     name: "Beverages".to_string(),
///     description: Some("Hot and cold drinks".to_string()),
///     ..Default::default()
/// };
/// let saved = client.categories().create(&category).await?;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Category {
    // --- Read-only fields (not serialized) ---
    /// The unique identifier of the category.
    #[serde(skip_serializing)]
    pub id: Option<String>,

    // --- Writable fields ---
    /// The category name.
    pub name: String,

    /// An optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Resource for Category {
    const NAME: &'static str = "category";
    const SEGMENT: &'static str = "categories";
    type ListParams = PageParams;
}

impl Creatable for Category {}
impl Updatable for Category {}
impl Deletable for Category {}
