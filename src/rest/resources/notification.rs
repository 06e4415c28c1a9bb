//! Notification resource implementation.
//!
//! Notifications are system-generated messages surfaced to staff (low
//! stock alerts, completed transfers, and so on). They cannot be
//! created, updated, or deleted through the API - the only mutation is
//! marking one read.
//!
//! # Resource-Specific Operations
//!
//! - [`mark_read`](crate::rest::ResourceHandle::mark_read) - Mark a
//!   notification as read

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::ApiError;
use crate::rest::params::PageParams;
use crate::rest::path::action_path;
use crate::rest::resource::{Resource, ResourceHandle};

/// A system-generated notification.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Notification {
    // --- Read-only fields (not serialized) ---
    /// The unique identifier of the notification.
    #[serde(skip_serializing)]
    pub id: Option<String>,

    /// When the notification was generated.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    // --- Writable fields ---
    /// The notification title.
    pub title: String,

    /// The notification body.
    pub message: String,

    /// The kind of notification (e.g., "alert", "info").
    pub notification_type: String,

    /// The subject area (e.g., "inventory", "orders").
    pub category: String,

    /// Whether the notification has been read.
    pub is_read: bool,
}

impl Resource for Notification {
    const NAME: &'static str = "notification";
    const SEGMENT: &'static str = "notifications";
    type ListParams = PageParams;
}

impl ResourceHandle<'_, Notification> {
    /// Marks a notification as read.
    ///
    /// Sends a POST to `notifications/{id}/mark-read/` with no body and
    /// returns the notification with `is_read` set.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the notification does not exist.
    pub async fn mark_read(&self, id: &str) -> Result<Notification, ApiError> {
        self.rest
            .post_empty(
                &action_path(Notification::SEGMENT, id, "mark-read"),
                &self.cancel,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_deserialization_from_api_response() {
        let json = r#"{
            "id": "ntf-1",
            "title": "Low stock",
            "message": "Espresso Beans 1kg is below its threshold",
            "notification_type": "alert",
            "category": "inventory",
            "is_read": false,
            "created_at": "2026-03-11T07:00:00Z"
        }"#;

        let notification: Notification = serde_json::from_str(json).unwrap();
        assert_eq!(notification.id.as_deref(), Some("ntf-1"));
        assert_eq!(notification.category, "inventory");
        assert!(!notification.is_read);
    }

    #[test]
    fn test_notification_serialization_skips_server_fields() {
        let notification = Notification {
            id: Some("ntf-1".to_string()),
            created_at: Some(Utc::now()),
            title: "Low stock".to_string(),
            message: "Espresso Beans 1kg is below its threshold".to_string(),
            notification_type: "alert".to_string(),
            category: "inventory".to_string(),
            is_read: true,
        };

        let parsed: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&notification).unwrap()).unwrap();

        assert_eq!(parsed["title"], "Low stock");
        assert_eq!(parsed["is_read"], true);
        assert!(parsed.get("id").is_none());
        assert!(parsed.get("created_at").is_none());
    }
}
