//! Customer resource implementation.
//!
//! This module provides the [`Customer`] resource together with the
//! [`CustomerTier`] value type describing loyalty tiers.
//!
//! # Resource-Specific Operations
//!
//! - [`add_loyalty_points`](crate::rest::ResourceHandle::add_loyalty_points) -
//!   Credit loyalty points to a customer's balance
//! - [`add_store_credit`](crate::rest::ResourceHandle::add_store_credit) -
//!   Credit a monetary amount to a customer's store credit
//!
//! # Example
//!
//! ```rust,ignore
//! let customer = client.customers().get("cust-1").await?;
//! let updated = client.customers()
//!     .add_loyalty_points("cust-1", 50, "birthday bonus")
//!     .await?;
//! assert_eq!(updated.loyalty_points, customer.loyalty_points + 50);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clients::ApiError;
use crate::rest::params::ListParams;
use crate::rest::path::action_path;
use crate::rest::resource::{Creatable, Deletable, Resource, ResourceHandle, Updatable};

/// A loyalty tier customers are assigned to based on their spend.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CustomerTier {
    /// The unique identifier of the tier.
    #[serde(skip_serializing)]
    pub id: Option<String>,

    /// The tier name (e.g., "Gold").
    pub name: String,

    /// The minimum total spend required to reach the tier.
    pub min_spend: f64,

    /// The discount granted to tier members, as a percentage.
    pub discount_percentage: f64,

    /// A display color for the tier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// A display icon for the tier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// A customer account.
///
/// # Read-Only Fields
///
/// `id`, `tier_name`, and `created_at` are populated by the server and
/// never sent in create or update requests. Loyalty points and store
/// credit are adjusted through the dedicated handle operations rather
/// than direct field updates.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Customer {
    // --- Read-only fields (not serialized) ---
    /// The unique identifier of the customer.
    #[serde(skip_serializing)]
    pub id: Option<String>,

    /// The name of the customer's loyalty tier.
    #[serde(skip_serializing)]
    pub tier_name: Option<String>,

    /// When the customer account was created.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    // --- Writable fields ---
    /// The customer's name.
    pub name: String,

    /// The customer's email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// The customer's phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// The customer's postal address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// The account type (e.g., "retail", "wholesale").
    pub customer_type: String,

    /// The customer's current loyalty point balance.
    pub loyalty_points: i64,

    /// The customer's current store credit balance.
    pub store_credit_balance: f64,

    /// The customer's lifetime spend.
    pub total_spend: f64,

    /// The ID of the customer's loyalty tier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,

    /// Whether the customer has opted into marketing.
    pub marketing_opt_in: bool,

    /// Free-form metadata attached to the customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

impl Resource for Customer {
    const NAME: &'static str = "customer";
    const SEGMENT: &'static str = "customers";
    type ListParams = ListParams;
}

impl Creatable for Customer {}
impl Updatable for Customer {}
impl Deletable for Customer {}

impl ResourceHandle<'_, Customer> {
    /// Credits loyalty points to a customer.
    ///
    /// Sends a POST to `customers/{id}/add_loyalty_points/` and returns
    /// the customer with the updated balance. `description` is recorded
    /// against the loyalty transaction.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the customer does not exist and
    /// [`ApiError::Validation`] if the point amount is rejected.
    pub async fn add_loyalty_points(
        &self,
        id: &str,
        points: i64,
        description: &str,
    ) -> Result<Customer, ApiError> {
        let body = serde_json::json!({
            "points": points,
            "description": description,
        });
        self.rest
            .post(
                &action_path(Customer::SEGMENT, id, "add_loyalty_points"),
                &body,
                &self.cancel,
            )
            .await
    }

    /// Credits store credit to a customer.
    ///
    /// Sends a POST to `customers/{id}/add_store_credit/` and returns the
    /// customer with the updated balance. `description` is recorded
    /// against the credit transaction.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the customer does not exist and
    /// [`ApiError::Validation`] if the amount is rejected.
    pub async fn add_store_credit(
        &self,
        id: &str,
        amount: f64,
        description: &str,
    ) -> Result<Customer, ApiError> {
        let body = serde_json::json!({
            "amount": amount,
            "description": description,
        });
        self.rest
            .post(
                &action_path(Customer::SEGMENT, id, "add_store_credit"),
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
    fn test_customer_serialization_skips_read_only_fields() {
        let customer = Customer {
            id: Some("cust-1".to_string()),
            tier_name: Some("Gold".to_string()),
            created_at: Some(Utc::now()),
            name: "Ada Lovelace".to_string(),
            email: Some("ada@example.com".to_string()),
            customer_type: "retail".to_string(),
            loyalty_points: 120,
            store_credit_balance: 15.0,
            total_spend: 640.0,
            tier: Some("tier-3".to_string()),
            marketing_opt_in: true,
            ..Default::default()
        };

        let parsed: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&customer).unwrap()).unwrap();

        assert_eq!(parsed["name"], "Ada Lovelace");
        assert_eq!(parsed["email"], "ada@example.com");
        assert_eq!(parsed["loyalty_points"], 120);
        assert_eq!(parsed["tier"], "tier-3");

        assert!(parsed.get("id").is_none());
        assert!(parsed.get("tier_name").is_none());
        assert!(parsed.get("created_at").is_none());
        assert!(parsed.get("phone").is_none());
    }

    #[test]
    fn test_customer_deserialization_from_api_response() {
        let json = r#"{
            "id": "cust-1",
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "customer_type": "retail",
            "loyalty_points": 120,
            "store_credit_balance": 15.0,
            "total_spend": 640.0,
            "tier": "tier-3",
            "tier_name": "Gold",
            "marketing_opt_in": true,
            "created_at": "2025-11-02T09:00:00Z"
        }"#;

        let customer: Customer = serde_json::from_str(json).unwrap();

        assert_eq!(customer.id.as_deref(), Some("cust-1"));
        assert_eq!(customer.tier_name.as_deref(), Some("Gold"));
        assert_eq!(customer.loyalty_points, 120);
        assert!(customer.created_at.is_some());
    }

    #[test]
    fn test_tier_serialization_omits_absent_display_fields() {
        let tier = CustomerTier {
            name: "Silver".to_string(),
            min_spend: 250.0,
            discount_percentage: 5.0,
            ..Default::default()
        };

        let parsed: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&tier).unwrap()).unwrap();

        assert_eq!(parsed["name"], "Silver");
        assert_eq!(parsed["discount_percentage"], 5.0);
        assert!(parsed.get("color").is_none());
        assert!(parsed.get("icon").is_none());
    }
}
