//! Wire format types for the Monnify payment API.
//!
//! This crate defines the serialization-level data structures exchanged with
//! the Monnify merchant API: the response [`Envelope`], one request type per
//! operation, and the versioned endpoint paths. It has minimal dependencies
//! (`serde`, `serde_json`, `rust_decimal`) and carries no transport code;
//! the `monnify` crate builds the HTTP client on top of it.
//!
//! # Modules
//!
//! - [`envelope`] — Standard `{requestSuccessful, responseMessage, responseBody}` wrapper
//! - [`paths`] — Endpoint path templates
//! - [`reference`] — Time-derived payment references
//! - [`transactions`] — Checkout initialization, bank transfer, search
//! - [`cards`] — Card charge, OTP authorization, card-token charge
//! - [`reserved_accounts`] — Reserved (virtual) account management
//! - [`invoices`] — Invoice creation and reserved-account attachment
//! - [`sub_accounts`] — Settlement sub-accounts
//! - [`refunds`] — Refund initiation
//! - [`settlements`] — Settlement lookups
//! - [`wallets`] — Disbursement wallets
//! - [`verification`] — Bank account and BVN verification

pub mod cards;
pub mod envelope;
pub mod invoices;
pub mod paths;
pub mod reference;
pub mod refunds;
pub mod reserved_accounts;
pub mod settlements;
pub mod sub_accounts;
pub mod transactions;
pub mod verification;
pub mod wallets;

use serde::{Deserialize, Serialize};

pub use envelope::{Envelope, Scoped};
pub use reference::PaymentReference;

/// Errors that can occur when interpreting Monnify wire messages.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// The body is not a JSON object and cannot carry an envelope.
    #[error("response body is not a JSON object")]
    NotAnObject,

    /// JSON deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Payment channels a checkout may offer to the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    /// Debit or credit card.
    Card,
    /// Bank transfer into a dynamically generated account.
    AccountTransfer,
    /// USSD short code.
    Ussd,
    /// Phone number based transfer.
    PhoneNumber,
}

impl PaymentMethod {
    /// Channels offered when the caller does not choose any.
    pub const DEFAULTS: [Self; 2] = [Self::Card, Self::AccountTransfer];
}

/// Zero-based pagination window used by the listing endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Zero-based page index.
    pub page: u32,
    /// Number of items per page.
    pub size: u32,
}

impl Page {
    /// Default page size for most listing endpoints.
    pub const DEFAULT_SIZE: u32 = 10;

    /// Creates a pagination window.
    #[must_use]
    pub const fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(0, Self::DEFAULT_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_method_wire_names() {
        let json = serde_json::to_value(PaymentMethod::DEFAULTS).unwrap();
        assert_eq!(json, serde_json::json!(["CARD", "ACCOUNT_TRANSFER"]));
        let ussd: PaymentMethod = serde_json::from_str("\"USSD\"").unwrap();
        assert_eq!(ussd, PaymentMethod::Ussd);
    }

    #[test]
    fn test_page_defaults() {
        assert_eq!(Page::default(), Page::new(0, 10));
    }
}
