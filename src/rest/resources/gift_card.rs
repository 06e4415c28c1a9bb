//! Gift card resource implementation.
//!
//! Gift cards carry a prepaid balance redeemable against orders. Cards
//! are created and then drawn down via redemption; they are never
//! updated or deleted directly.
//!
//! # Resource-Specific Operations
//!
//! - [`redeem`](crate::rest::ResourceHandle::redeem) - Deduct an amount
//!   from a card's balance
//! - [`check_balance`](crate::rest::ResourceHandle::check_balance) - Look
//!   up a card by its code without knowing its ID
//!
//! # Example
//!
//! ```rust,ignore
//! let card = client.gift_cards().check_balance("GC-XK42-9917").await?;
//! if card.balance >= 25.0 {
//!     client.gift_cards()
//!         .redeem(card.id.as_deref().unwrap_or_default(), 25.0)
//!         .await?;
//! }
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::clients::ApiError;
use crate::rest::params::StatusListParams;
use crate::rest::path::{action_path, collection_action_path};
use crate::rest::resource::{Creatable, Resource, ResourceHandle};

/// A prepaid gift card.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct GiftCard {
    // --- Read-only fields (not serialized) ---
    /// The unique identifier of the gift card.
    #[serde(skip_serializing)]
    pub id: Option<String>,

    // --- Writable fields ---
    /// The card code printed on the card.
    pub code: String,

    /// The remaining balance.
    pub balance: f64,

    /// The card status (e.g., "active", "redeemed", "expired").
    pub status: String,

    /// The date the card expires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,
}

impl Resource for GiftCard {
    const NAME: &'static str = "gift card";
    const SEGMENT: &'static str = "gift-cards";
    type ListParams = StatusListParams;
}

impl Creatable for GiftCard {}

impl ResourceHandle<'_, GiftCard> {
    /// Redeems an amount against a gift card.
    ///
    /// Sends a POST to `gift-cards/{id}/redeem/` and returns the card
    /// with its reduced balance.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the card does not exist and
    /// [`ApiError::Validation`] if the amount exceeds the remaining
    /// balance or the card is not active.
    pub async fn redeem(&self, id: &str, amount: f64) -> Result<GiftCard, ApiError> {
        let body = serde_json::json!({ "amount": amount });
        self.rest
            .post(
                &action_path(GiftCard::SEGMENT, id, "redeem"),
                &body,
                &self.cancel,
            )
            .await
    }

    /// Looks up a gift card by its printed code.
    ///
    /// Sends a GET to `gift-cards/check-balance/?code={code}`. This is
    /// the call to use at the register, where the card code is known but
    /// the card ID is not.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if no card matches the code.
    pub async fn check_balance(&self, code: &str) -> Result<GiftCard, ApiError> {
        let query = vec![("code".to_string(), code.to_string())];
        self.rest
            .get(
                &collection_action_path(GiftCard::SEGMENT, "check-balance"),
                Some(query),
                &self.cancel,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gift_card_serialization_skips_id() {
        let card = GiftCard {
            id: Some("gc-1".to_string()),
            code: "GC-XK42-9917".to_string(),
            balance: 50.0,
            status: "active".to_string(),
            expiry_date: Some(NaiveDate::from_ymd_opt(2027, 12, 31).unwrap()),
        };

        let parsed: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&card).unwrap()).unwrap();

        assert_eq!(parsed["code"], "GC-XK42-9917");
        assert_eq!(parsed["balance"], 50.0);
        assert_eq!(parsed["expiry_date"], "2027-12-31");
        assert!(parsed.get("id").is_none());
    }

    #[test]
    fn test_gift_card_deserialization_from_api_response() {
        let json = r#"{
            "id": "gc-1",
            "code": "GC-XK42-9917",
            "balance": 25.0,
            "status": "active"
        }"#;

        let card: GiftCard = serde_json::from_str(json).unwrap();
        assert_eq!(card.id.as_deref(), Some("gc-1"));
        assert!((card.balance - 25.0).abs() < f64::EPSILON);
        assert!(card.expiry_date.is_none());
    }
}
