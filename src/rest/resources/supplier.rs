//! Supplier resource implementation.
//!
//! Suppliers are the vendors purchase orders are raised against. The
//! resource supports the full CRUD set with searchable listing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rest::params::ListParams;
use crate::rest::resource::{Creatable, Deletable, Resource, Updatable};

/// A supplier of stock.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Supplier {
    // --- Read-only fields (not serialized) ---
    /// The unique identifier of the supplier.
    #[serde(skip_serializing)]
    pub id: Option<String>,

    /// When the supplier was created.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    // --- Writable fields ---
    /// The supplier's business name.
    pub name: String,

    /// The primary contact person.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,

    /// The supplier's email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// The supplier's phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// The supplier's postal address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Resource for Supplier {
    const NAME: &'static str = "supplier";
    const SEGMENT: &'static str = "suppliers";
    type ListParams = ListParams;
}

impl Creatable for Supplier {}
impl Updatable for Supplier {}
impl Deletable for Supplier {}
