//! Invoices and reserved-account attachment.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::PaymentMethod;
use crate::reserved_accounts::SplitConfig;

/// Body of `POST /api/v1/invoice/create`.
///
/// The merchant contract code is merged in by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoice {
    /// Amount due.
    pub amount: Decimal,

    /// Unique merchant reference for the invoice.
    pub invoice_reference: String,

    /// Invoice description.
    pub description: String,

    /// ISO 4217 currency code.
    pub currency_code: String,

    /// Customer's email address.
    pub customer_email: String,

    /// Customer's full name.
    pub customer_name: String,

    /// Expiry in `yyyy-MM-dd HH:mm:ss`.
    pub expiry_date: String,

    /// Accepted channels; every channel when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub payment_methods: Vec<PaymentMethod>,

    /// Split of the payment between sub-accounts.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub income_split_config: Vec<SplitConfig>,

    /// URL the customer is sent back to after payment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
}

/// Body posted to the invoice-create path to bind an invoice to an existing
/// invoice reserved account.
///
/// The merchant contract code is merged in by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachReservedAccount {
    /// Amount due.
    pub amount: Decimal,

    /// Unique merchant reference for the invoice.
    pub invoice_reference: String,

    /// Merchant reference of the invoice reserved account.
    pub account_reference: String,

    /// Invoice description.
    pub description: String,

    /// ISO 4217 currency code.
    pub currency_code: String,

    /// Customer's email address.
    pub customer_email: String,

    /// Customer's full name.
    pub customer_name: String,

    /// Expiry in `yyyy-MM-dd HH:mm:ss`.
    pub expiry_date: String,
}
