//! Refunds of completed transactions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/v1/refunds/initiate-refund`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitiateRefund {
    /// Monnify reference of the transaction to refund.
    pub transaction_reference: String,

    /// Unique merchant reference for the refund.
    pub refund_reference: String,

    /// Amount to refund; at most the transaction amount.
    pub refund_amount: Decimal,

    /// Reason recorded by the merchant.
    pub refund_reason: String,

    /// Note shown to the customer.
    pub customer_note: String,

    /// Account to refund into instead of the original source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_account_number: Option<String>,

    /// Bank code of [`Self::destination_account_number`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_account_bank_code: Option<String>,
}

impl InitiateRefund {
    /// Creates a refund to the original payment source.
    #[must_use]
    pub fn new(
        transaction_reference: impl Into<String>,
        refund_reference: impl Into<String>,
        refund_amount: Decimal,
        refund_reason: impl Into<String>,
        customer_note: impl Into<String>,
    ) -> Self {
        Self {
            transaction_reference: transaction_reference.into(),
            refund_reference: refund_reference.into(),
            refund_amount,
            refund_reason: refund_reason.into(),
            customer_note: customer_note.into(),
            destination_account_number: None,
            destination_account_bank_code: None,
        }
    }

    /// Refunds into the given bank account.
    #[must_use]
    pub fn to_account(
        mut self,
        account_number: impl Into<String>,
        bank_code: impl Into<String>,
    ) -> Self {
        self.destination_account_number = Some(account_number.into());
        self.destination_account_bank_code = Some(bank_code.into());
        self
    }
}
