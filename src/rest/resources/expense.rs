//! Expense resource implementation.
//!
//! Expenses record outgoing money against the expense categories the
//! business has configured. The resource supports the full CRUD set with
//! a category filter on listing.
//!
//! # Resource-Specific Operations
//!
//! - [`categories`](crate::rest::ResourceHandle::categories) - List the
//!   configured expense categories

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::ApiError;
use crate::rest::params::CategoryListParams;
use crate::rest::path::collection_path;
use crate::rest::resource::{Creatable, Deletable, Resource, ResourceHandle, Updatable};

/// A category expenses are filed under.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ExpenseCategory {
    /// The unique identifier of the category.
    #[serde(skip_serializing)]
    pub id: Option<String>,

    /// The category name.
    pub name: String,

    /// The category kind (e.g., "operational", "capital").
    #[serde(rename = "type")]
    pub category_type: String,
}

/// A recorded business expense.
///
/// # Read-Only Fields
///
/// `id`, `category_name`, `created_by_name`, and `created_at` are
/// populated by the server and never sent in create or update requests.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Expense {
    // --- Read-only fields (not serialized) ---
    /// The unique identifier of the expense.
    #[serde(skip_serializing)]
    pub id: Option<String>,

    /// The expense category's name.
    #[serde(skip_serializing)]
    pub category_name: Option<String>,

    /// The name of the staff member who recorded the expense.
    #[serde(skip_serializing)]
    pub created_by_name: Option<String>,

    /// When the expense was recorded.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    // --- Writable fields ---
    /// The ID of the expense category.
    pub category: String,

    /// The amount spent.
    pub amount: f64,

    /// The date the expense was incurred.
    pub date: NaiveDate,

    /// A description of the expense.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// A reference to an uploaded receipt file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_file: Option<String>,

    /// The ID of the staff member who recorded the expense.
    pub created_by: String,
}

impl Resource for Expense {
    const NAME: &'static str = "expense";
    const SEGMENT: &'static str = "expenses";
    type ListParams = CategoryListParams;
}

impl Creatable for Expense {}
impl Updatable for Expense {}
impl Deletable for Expense {}

impl ResourceHandle<'_, Expense> {
    /// Lists the configured expense categories.
    ///
    /// Sends a GET to `expense-categories/`. Categories are returned as a
    /// plain array rather than a paginated collection.
    ///
    /// # Errors
    ///
    /// Returns the usual transport and decode errors.
    pub async fn categories(&self) -> Result<Vec<ExpenseCategory>, ApiError> {
        self.rest
            .get(
                &collection_path("expense-categories"),
                None,
                &self.cancel,
            )
            .await
    }
}
