//! Staff resource implementation.
//!
//! Staff members are the user accounts that operate the system. Account
//! identity (username, name, email) is managed by the authentication
//! system and appears read-only here; the API manages the role and
//! branch assignment.

use serde::{Deserialize, Serialize};

use crate::rest::params::RoleListParams;
use crate::rest::resource::{Creatable, Deletable, Resource, Updatable};

/// A staff member account.
///
/// # Read-Only Fields
///
/// `id`, `username`, `full_name`, `email`, and `branch_name` are
/// populated by the server and never sent in create or update requests.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct StaffMember {
    // --- Read-only fields (not serialized) ---
    /// The unique identifier of the staff member.
    #[serde(skip_serializing)]
    pub id: Option<String>,

    /// The account username.
    #[serde(skip_serializing)]
    pub username: Option<String>,

    /// The staff member's full name.
    #[serde(skip_serializing)]
    pub full_name: Option<String>,

    /// The staff member's email address.
    #[serde(skip_serializing)]
    pub email: Option<String>,

    /// The assigned branch's name.
    #[serde(skip_serializing)]
    pub branch_name: Option<String>,

    // --- Writable fields ---
    /// The staff member's role (e.g., "cashier", "manager").
    pub role: String,

    /// The ID of the branch the staff member works at.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
}

impl Resource for StaffMember {
    const NAME: &'static str = "staff member";
    const SEGMENT: &'static str = "staff";
    type ListParams = RoleListParams;
}

impl Creatable for StaffMember {}
impl Updatable for StaffMember {}
impl Deletable for StaffMember {}
