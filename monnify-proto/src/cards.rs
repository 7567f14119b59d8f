//! Card payments: direct charge, OTP authorization and token charge.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::PaymentReference;

/// Collection channel Monnify expects for server-to-server card charges.
pub const API_NOTIFICATION_CHANNEL: &str = "API_NOTIFICATION";

/// Raw card details.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Primary account number.
    pub number: String,
    /// Two-digit expiry month.
    pub expiry_month: String,
    /// Four-digit expiry year.
    pub expiry_year: String,
    /// Card PIN.
    pub pin: String,
    /// Card verification value.
    pub cvv: String,
}

impl std::fmt::Debug for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let last4 = self
            .number
            .get(self.number.len().saturating_sub(4)..)
            .unwrap_or_default();
        f.debug_struct("Card")
            .field("number", &format_args!("****{last4}"))
            .field("expiry_month", &self.expiry_month)
            .field("expiry_year", &self.expiry_year)
            .finish_non_exhaustive()
    }
}

/// Body of `POST /api/v1/merchant/cards/charge`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeCard {
    /// Monnify transaction reference returned by checkout initialization.
    pub transaction_reference: String,

    /// Collection channel, [`API_NOTIFICATION_CHANNEL`] by default.
    pub collection_channel: String,

    /// Card to charge.
    pub card: Card,

    /// Browser/device fingerprint for 3DS flows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_information: Option<Value>,
}

impl ChargeCard {
    /// Creates a card charge on the API notification channel.
    #[must_use]
    pub fn new(transaction_reference: impl Into<String>, card: Card) -> Self {
        Self {
            transaction_reference: transaction_reference.into(),
            collection_channel: API_NOTIFICATION_CHANNEL.to_owned(),
            card,
            device_information: None,
        }
    }

    /// Attaches device information.
    #[must_use]
    pub fn with_device_information(mut self, device_information: Value) -> Self {
        self.device_information = Some(device_information);
        self
    }
}

/// OTP authorization payload for a pending card charge.
///
/// Posted to the card charge path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizeOtp {
    /// Monnify transaction reference.
    pub transaction_reference: String,

    /// Collection channel, [`API_NOTIFICATION_CHANNEL`] by default.
    pub collection_channel: String,

    /// OTP token identifier returned by the charge.
    pub token_id: String,

    /// OTP entered by the customer.
    pub token: String,
}

impl AuthorizeOtp {
    /// Creates an OTP authorization on the API notification channel.
    #[must_use]
    pub fn new(
        transaction_reference: impl Into<String>,
        token_id: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            transaction_reference: transaction_reference.into(),
            collection_channel: API_NOTIFICATION_CHANNEL.to_owned(),
            token_id: token_id.into(),
            token: token.into(),
        }
    }
}

/// Body of `POST /api/v1/merchant/cards/charge-card-token`.
///
/// The merchant contract code is merged in by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeCardToken {
    /// Token of a card saved by an earlier checkout.
    pub card_token: String,

    /// Amount to charge.
    pub amount: Decimal,

    /// Customer's full name.
    pub customer_name: String,

    /// Customer's email; must match the one the token was issued for.
    pub customer_email: String,

    /// Unique merchant reference for this charge.
    pub payment_reference: PaymentReference,

    /// Description of the charge.
    pub payment_description: String,

    /// ISO 4217 currency code.
    pub currency_code: String,

    /// Free-form merchant metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> Card {
        Card {
            number: "4111111111111111".into(),
            expiry_month: "10".into(),
            expiry_year: "2030".into(),
            pin: "1234".into(),
            cvv: "123".into(),
        }
    }

    #[test]
    fn test_card_debug_masks_secrets() {
        let debug = format!("{:?}", card());
        assert!(debug.contains("****1111"));
        assert!(!debug.contains("4111111111111111"));
        assert!(!debug.contains("1234"));
    }

    #[test]
    fn test_charge_card_uses_api_notification_channel() {
        let value = serde_json::to_value(ChargeCard::new("MNFY|1", card())).unwrap();
        assert_eq!(value["collectionChannel"], "API_NOTIFICATION");
        assert_eq!(value["card"]["expiryMonth"], "10");
        assert!(value.get("deviceInformation").is_none());
    }
}
