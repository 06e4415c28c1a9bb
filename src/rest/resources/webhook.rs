//! Webhook resource implementation.
//!
//! Webhooks push event notifications to an external URL. The resource
//! supports the full CRUD set, plus access to the delivery log recorded
//! for each webhook.
//!
//! # Resource-Specific Operations
//!
//! - [`deliveries`](crate::rest::ResourceHandle::deliveries) - Page
//!   through the delivery attempts recorded for a webhook
//!
//! # Example
//!
//! ```rust,ignore
//! use puxbay_api::rest::resources::Webhook;
//!
//! let webhook = client.webhooks().create(&Webhook {
//!     url: "https://hooks.example.com/puxbay".to_string(),
//!     events: vec!["order.created".to_string(), "order.cancelled".to_string()],
//!     is_active: true,
//!     secret: Some("whsec_...".to_string()),
//!     ..Default::default()
//! }).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::ApiError;
use crate::rest::params::PageParams;
use crate::rest::path::collection_path;
use crate::rest::resource::{Creatable, Deletable, Resource, ResourceHandle, Updatable};
use crate::rest::response::Page;

/// A webhook subscription.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Webhook {
    // --- Read-only fields (not serialized) ---
    /// The unique identifier of the webhook.
    #[serde(skip_serializing)]
    pub id: Option<String>,

    /// When the webhook was created.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the webhook was last updated.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,

    // --- Writable fields ---
    /// The URL deliveries are POSTed to.
    pub url: String,

    /// The event types the webhook subscribes to.
    pub events: Vec<String>,

    /// Whether deliveries are currently enabled.
    pub is_active: bool,

    /// The shared secret used to sign deliveries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

/// One delivery attempt recorded against a webhook.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct WebhookEvent {
    /// The unique identifier of the delivery record.
    pub id: Option<String>,

    /// The ID of the webhook that was delivered to.
    pub webhook: String,

    /// The event type that fired.
    pub event_type: String,

    /// The payload that was sent.
    pub payload: Value,

    /// The HTTP status code the receiver returned.
    pub status_code: Option<u16>,

    /// The response body the receiver returned.
    pub response: Option<String>,

    /// When the delivery was attempted.
    pub created_at: Option<DateTime<Utc>>,
}

impl Resource for Webhook {
    const NAME: &'static str = "webhook";
    const SEGMENT: &'static str = "webhooks";
    type ListParams = PageParams;
}

impl Creatable for Webhook {}
impl Updatable for Webhook {}
impl Deletable for Webhook {}

impl ResourceHandle<'_, Webhook> {
    /// Pages through the delivery log for a webhook.
    ///
    /// Sends a GET to `webhook-logs/?webhook={id}` with an optional page
    /// number. Each entry records the payload sent and the receiver's
    /// response.
    ///
    /// # Errors
    ///
    /// Returns the usual transport and decode errors.
    pub async fn deliveries(
        &self,
        webhook_id: &str,
        page: Option<u32>,
    ) -> Result<Page<WebhookEvent>, ApiError> {
        let mut query = vec![("webhook".to_string(), webhook_id.to_string())];
        if let Some(page) = page {
            query.push(("page".to_string(), page.to_string()));
        }
        self.rest
            .get(&collection_path("webhook-logs"), Some(query), &self.cancel)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_webhook_serialization_skips_read_only_fields() {
        let webhook = Webhook {
            id: Some("wh-1".to_string()),
            created_at: Some(Utc::now()),
            url: "https://hooks.example.com/puxbay".to_string(),
            events: vec!["order.created".to_string()],
            is_active: true,
            secret: Some("whsec_abc".to_string()),
            ..Default::default()
        };

        let parsed: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&webhook).unwrap()).unwrap();

        assert_eq!(parsed["url"], "https://hooks.example.com/puxbay");
        assert_eq!(parsed["events"][0], "order.created");
        assert_eq!(parsed["secret"], "whsec_abc");
        assert!(parsed.get("id").is_none());
        assert!(parsed.get("created_at").is_none());
    }

    #[test]
    fn test_webhook_event_deserialization() {
        let json = r#"{
            "id": "whl-1",
            "webhook": "wh-1",
            "event_type": "order.created",
            "payload": {"order_id": "ord-1", "total_amount": 108.0},
            "status_code": 200,
            "response": "ok",
            "created_at": "2026-03-10T14:22:05Z"
        }"#;

        let event: WebhookEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.event_type, "order.created");
        assert_eq!(event.status_code, Some(200));
        assert_eq!(event.payload["order_id"], "ord-1");
    }

    #[test]
    fn test_failed_delivery_has_no_status_code() {
        let json = r#"{
            "id": "whl-2",
            "webhook": "wh-1",
            "event_type": "order.created",
            "payload": {}
        }"#;

        let event: WebhookEvent = serde_json::from_str(json).unwrap();
        assert!(event.status_code.is_none());
        assert!(event.response.is_none());
    }
}
