//! Cash drawer resource implementation.
//!
//! Cash drawer sessions track the cash held at a register between an
//! opening and a closing count. Sessions are never created, updated, or
//! deleted through the generic CRUD surface - the lifecycle is strictly
//! open then close.
//!
//! # Resource-Specific Operations
//!
//! - [`open`](crate::rest::ResourceHandle::open) - Open a drawer with a
//!   starting balance
//! - [`close`](crate::rest::ResourceHandle::close) - Close a drawer with
//!   the counted cash
//!
//! # Example
//!
//! ```rust,ignore
//! use puxbay_api::rest::resources::CashDrawerSession;
//!
//! let session = client.cash_drawers().open(&CashDrawerSession {
//!     branch: "br-1".to_string(),
//!     employee: "staff-1".to_string(),
//!     starting_balance: 200.0,
//!     ..Default::default()
//! }).await?;
//!
//! // ... at end of shift ...
//! let closed = client.cash_drawers()
//!     .close(session.id.as_deref().unwrap_or_default(), 1146.50)
//!     .await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::ApiError;
use crate::rest::params::PageParams;
use crate::rest::path::{action_path, collection_path};
use crate::rest::resource::{Resource, ResourceHandle};

/// A cash drawer session at a register.
///
/// # Read-Only Fields
///
/// `id`, `branch_name`, `employee_name`, `start_time`, and `end_time`
/// are populated by the server. `expected_cash` and `difference` are
/// computed at close time.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CashDrawerSession {
    // --- Read-only fields (not serialized) ---
    /// The unique identifier of the session.
    #[serde(skip_serializing)]
    pub id: Option<String>,

    /// The branch's name.
    #[serde(skip_serializing)]
    pub branch_name: Option<String>,

    /// The employee's name.
    #[serde(skip_serializing)]
    pub employee_name: Option<String>,

    /// When the drawer was opened.
    #[serde(skip_serializing)]
    pub start_time: Option<DateTime<Utc>>,

    /// When the drawer was closed, if it has been.
    #[serde(skip_serializing)]
    pub end_time: Option<DateTime<Utc>>,

    // --- Writable fields ---
    /// The ID of the branch.
    pub branch: String,

    /// The ID of the employee responsible for the drawer.
    pub employee: String,

    /// The session status (e.g., "open", "closed").
    pub status: String,

    /// The cash placed in the drawer at opening.
    pub starting_balance: f64,

    /// The cash the server expects at close, based on recorded sales.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_cash: Option<f64>,

    /// The cash actually counted at close.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_cash: Option<f64>,

    /// The difference between expected and actual cash.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difference: Option<f64>,

    /// Free-form notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CashDrawerSession {
    /// Returns `true` if the drawer has been closed.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.end_time.is_some()
    }
}

impl Resource for CashDrawerSession {
    const NAME: &'static str = "cash drawer session";
    const SEGMENT: &'static str = "cash-drawers";
    type ListParams = PageParams;
}

impl ResourceHandle<'_, CashDrawerSession> {
    /// Opens a new cash drawer session.
    ///
    /// Sends a POST to `cash-drawers/` with the branch, employee, and
    /// starting balance, and returns the opened session.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] if the branch or employee is
    /// invalid or a drawer is already open at the register.
    pub async fn open(&self, session: &CashDrawerSession) -> Result<CashDrawerSession, ApiError> {
        self.rest
            .post(
                &collection_path(CashDrawerSession::SEGMENT),
                session,
                &self.cancel,
            )
            .await
    }

    /// Closes a cash drawer session with the counted cash.
    ///
    /// Sends a POST to `cash-drawers/{id}/close/`. The server computes
    /// the expected cash from recorded sales and returns the closed
    /// session with the difference filled in.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the session does not exist and
    /// [`ApiError::Validation`] if it is already closed.
    pub async fn close(&self, id: &str, actual_cash: f64) -> Result<CashDrawerSession, ApiError> {
        let body = serde_json::json!({ "actual_cash": actual_cash });
        self.rest
            .post(
                &action_path(CashDrawerSession::SEGMENT, id, "close"),
                &body,
                &self.cancel,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_serialization_skips_read_only_fields() {
        let session = CashDrawerSession {
            id: Some("cd-1".to_string()),
            branch_name: Some("Downtown".to_string()),
            start_time: Some(Utc::now()),
            branch: "br-1".to_string(),
            employee: "staff-1".to_string(),
            status: "open".to_string(),
            starting_balance: 200.0,
            ..Default::default()
        };

        let parsed: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&session).unwrap()).unwrap();

        assert_eq!(parsed["branch"], "br-1");
        assert_eq!(parsed["starting_balance"], 200.0);
        assert!(parsed.get("id").is_none());
        assert!(parsed.get("branch_name").is_none());
        assert!(parsed.get("start_time").is_none());
        assert!(parsed.get("actual_cash").is_none());
    }

    #[test]
    fn test_session_deserialization_from_api_response() {
        let json = r#"{
            "id": "cd-1",
            "branch": "br-1",
            "branch_name": "Downtown",
            "employee": "staff-1",
            "employee_name": "June Holt",
            "status": "closed",
            "start_time": "2026-03-01T08:00:00Z",
            "end_time": "2026-03-01T18:05:00Z",
            "starting_balance": 200.0,
            "expected_cash": 1150.0,
            "actual_cash": 1146.5,
            "difference": -3.5
        }"#;

        let session: CashDrawerSession = serde_json::from_str(json).unwrap();
        assert!(session.is_closed());
        assert_eq!(session.difference, Some(-3.5));
        assert_eq!(session.employee_name.as_deref(), Some("June Holt"));
    }

    #[test]
    fn test_is_closed_requires_end_time() {
        let session = CashDrawerSession {
            status: "closed".to_string(),
            ..Default::default()
        };
        assert!(!session.is_closed());
    }
}
