//! Checkout transactions: initialization, bank-transfer collection and search.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::reserved_accounts::SplitConfig;
use crate::{PaymentMethod, PaymentReference};

/// Body of `POST /api/v1/merchant/transactions/init-transaction`.
///
/// The merchant contract code is merged in by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitTransaction {
    /// Amount to charge, in major currency units.
    pub amount: Decimal,

    /// Customer's full name.
    pub customer_name: String,

    /// Customer's email address.
    pub customer_email: String,

    /// Unique merchant reference for this checkout.
    pub payment_reference: PaymentReference,

    /// Description shown on the checkout page.
    pub payment_description: String,

    /// URL the customer is sent back to after payment.
    pub redirect_url: String,

    /// Channels offered on the checkout page.
    pub payment_methods: Vec<PaymentMethod>,

    /// ISO 4217 currency code, e.g. `"NGN"`.
    pub currency_code: String,

    /// Split of the collected amount between sub-accounts.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub income_split_config: Vec<SplitConfig>,

    /// Free-form merchant metadata echoed back in notifications.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<Value>,
}

impl InitTransaction {
    /// Creates a checkout request with a time-derived payment reference and
    /// the default card and account-transfer channels.
    #[must_use]
    pub fn new(
        amount: Decimal,
        customer_name: impl Into<String>,
        customer_email: impl Into<String>,
        payment_description: impl Into<String>,
        redirect_url: impl Into<String>,
        currency_code: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            customer_name: customer_name.into(),
            customer_email: customer_email.into(),
            payment_reference: PaymentReference::now(),
            payment_description: payment_description.into(),
            redirect_url: redirect_url.into(),
            payment_methods: PaymentMethod::DEFAULTS.to_vec(),
            currency_code: currency_code.into(),
            income_split_config: Vec::new(),
            meta_data: None,
        }
    }

    /// Replaces the generated payment reference.
    #[must_use]
    pub fn with_payment_reference(mut self, reference: impl Into<PaymentReference>) -> Self {
        self.payment_reference = reference.into();
        self
    }

    /// Replaces the offered payment channels.
    #[must_use]
    pub fn with_payment_methods(mut self, methods: impl IntoIterator<Item = PaymentMethod>) -> Self {
        self.payment_methods = methods.into_iter().collect();
        self
    }

    /// Sets the income split configuration.
    #[must_use]
    pub fn with_income_split(mut self, split: Vec<SplitConfig>) -> Self {
        self.income_split_config = split;
        self
    }

    /// Attaches merchant metadata.
    #[must_use]
    pub fn with_meta_data(mut self, meta_data: Value) -> Self {
        self.meta_data = Some(meta_data);
        self
    }
}

/// Body of `POST /api/v1/merchant/bank-transfer/init-payment`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankTransferPayment {
    /// Monnify transaction reference returned by checkout initialization.
    pub transaction_reference: String,

    /// Bank whose USSD code should be generated alongside the account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
}

impl BankTransferPayment {
    /// Creates a bank-transfer request for a transaction.
    #[must_use]
    pub fn new(transaction_reference: impl Into<String>) -> Self {
        Self {
            transaction_reference: transaction_reference.into(),
            bank_code: None,
        }
    }

    /// Requests a USSD code for the given bank.
    #[must_use]
    pub fn with_bank_code(mut self, bank_code: impl Into<String>) -> Self {
        self.bank_code = Some(bank_code.into());
        self
    }
}

/// Query of `GET /api/v1/transactions/search`.
///
/// Every filter is optional. Filters not modelled here can be passed through
/// [`TransactionSearch::extra`] and are sent verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSearch {
    /// Zero-based page index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Page size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,

    /// Merchant payment reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_reference: Option<String>,

    /// Monnify transaction reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_reference: Option<String>,

    /// Lower amount bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_amount: Option<Decimal>,

    /// Upper amount bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_amount: Option<Decimal>,

    /// Exact amount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,

    /// Customer name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,

    /// Customer email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,

    /// Payment status, e.g. `"PAID"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<String>,

    /// Start of the date range (epoch millis or `yyyy-MM-dd`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,

    /// End of the date range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,

    /// Additional query parameters sent as-is.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl TransactionSearch {
    /// Adds an arbitrary query parameter.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_init_transaction_defaults() {
        let request = InitTransaction::new(
            Decimal::new(10_000, 2),
            "Jane Doe",
            "jane@example.com",
            "Order 42",
            "https://merchant.example/return",
            "NGN",
        )
        .with_payment_reference("order-42");

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["paymentReference"], "order-42");
        assert_eq!(value["redirectUrl"], "https://merchant.example/return");
        assert_eq!(value["paymentMethods"], json!(["CARD", "ACCOUNT_TRANSFER"]));
        assert!(value.get("incomeSplitConfig").is_none());
        assert!(value.get("metaData").is_none());
    }

    #[test]
    fn test_search_skips_unset_filters() {
        let search = TransactionSearch {
            page: Some(1),
            payment_status: Some("PAID".into()),
            ..TransactionSearch::default()
        }
        .with_param("channel", "CARD");

        let value = serde_json::to_value(&search).unwrap();
        assert_eq!(
            value,
            json!({"page": 1, "paymentStatus": "PAID", "channel": "CARD"})
        );
    }
}
