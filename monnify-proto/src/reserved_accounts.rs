//! Reserved (virtual) accounts allocated to merchant customers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::Page;

/// One leg of an income split between the merchant and a sub-account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitConfig {
    /// Sub-account receiving this share.
    pub sub_account_code: String,

    /// Share of the transaction fee borne by the sub-account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee_percentage: Option<Decimal>,

    /// Share of the amount settled to the sub-account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split_percentage: Option<Decimal>,

    /// Fixed amount settled to the sub-account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split_amount: Option<Decimal>,

    /// Whether the sub-account bears the transaction fee.
    #[serde(default)]
    pub fee_bearer: bool,
}

impl SplitConfig {
    /// Creates a percentage split for a sub-account.
    #[must_use]
    pub fn percentage(sub_account_code: impl Into<String>, split_percentage: Decimal) -> Self {
        Self {
            sub_account_code: sub_account_code.into(),
            fee_percentage: None,
            split_percentage: Some(split_percentage),
            split_amount: None,
            fee_bearer: false,
        }
    }
}

/// Bank account allowed to fund a restricted reserved account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccountSource {
    /// Account number.
    pub account_number: String,
    /// CBN bank code.
    pub bank_code: String,
}

/// Payment sources accepted by a restricted reserved account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllowedPaymentSources {
    /// Payer BVNs.
    #[serde(default)]
    pub bvns: Vec<String>,
    /// Payer bank accounts.
    #[serde(default)]
    pub bank_accounts: Vec<BankAccountSource>,
    /// Payer account names.
    #[serde(default)]
    pub account_names: Vec<String>,
}

/// Body of `POST /api/v2/bank-transfer/reserved-accounts`.
///
/// The merchant contract code is merged in by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservedAccount {
    /// Unique merchant reference for the account.
    pub account_reference: String,

    /// Display name of the account.
    pub account_name: String,

    /// ISO 4217 currency code.
    pub currency_code: String,

    /// Customer's email address.
    pub customer_email: String,

    /// Customer's full name.
    pub customer_name: String,

    /// Customer BVN.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bvn: Option<String>,

    /// Customer NIN.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nin: Option<String>,

    /// Allocate an account in every partner bank.
    #[serde(default)]
    pub get_all_available_banks: bool,

    /// Partner bank codes to allocate accounts in.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub preferred_banks: Vec<String>,

    /// Split of collections between sub-accounts.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub income_split_config: Vec<SplitConfig>,

    /// Whether only [`Self::allowed_payment_sources`] may fund the account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restrict_payment_source: Option<bool>,

    /// Accepted payment sources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_payment_sources: Option<AllowedPaymentSources>,
}

impl CreateReservedAccount {
    /// Creates a reserved account request with every optional field unset.
    #[must_use]
    pub fn new(
        account_reference: impl Into<String>,
        account_name: impl Into<String>,
        currency_code: impl Into<String>,
        customer_email: impl Into<String>,
        customer_name: impl Into<String>,
    ) -> Self {
        Self {
            account_reference: account_reference.into(),
            account_name: account_name.into(),
            currency_code: currency_code.into(),
            customer_email: customer_email.into(),
            customer_name: customer_name.into(),
            bvn: None,
            nin: None,
            get_all_available_banks: false,
            preferred_banks: Vec::new(),
            income_split_config: Vec::new(),
            restrict_payment_source: None,
            allowed_payment_sources: None,
        }
    }

    /// Sets the customer BVN.
    #[must_use]
    pub fn with_bvn(mut self, bvn: impl Into<String>) -> Self {
        self.bvn = Some(bvn.into());
        self
    }

    /// Sets the customer NIN.
    #[must_use]
    pub fn with_nin(mut self, nin: impl Into<String>) -> Self {
        self.nin = Some(nin.into());
        self
    }

    /// Allocates accounts in the given partner banks only.
    #[must_use]
    pub fn with_preferred_banks(mut self, banks: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.get_all_available_banks = false;
        self.preferred_banks = banks.into_iter().map(Into::into).collect();
        self
    }

    /// Allocates accounts in every partner bank.
    #[must_use]
    pub const fn with_all_available_banks(mut self) -> Self {
        self.get_all_available_banks = true;
        self
    }
}

/// Kind of reserved account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservedAccountType {
    /// Long-lived account for a customer.
    General,
    /// Account bound to invoices.
    #[default]
    Invoice,
}

/// Body of `POST /api/v1/bank-transfer/reserved-accounts` for invoice accounts.
///
/// The merchant contract code is merged in by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceReservedAccount {
    /// Unique merchant reference for the account.
    pub account_reference: String,

    /// Display name of the account.
    pub account_name: String,

    /// ISO 4217 currency code.
    pub currency_code: String,

    /// Customer's email address.
    pub customer_email: String,

    /// Customer's full name.
    pub customer_name: String,

    /// Customer BVN.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bvn: Option<String>,

    /// Always [`ReservedAccountType::Invoice`] for this endpoint.
    pub reserved_account_type: ReservedAccountType,
}

impl InvoiceReservedAccount {
    /// Creates an invoice reserved account request.
    #[must_use]
    pub fn new(
        account_reference: impl Into<String>,
        account_name: impl Into<String>,
        currency_code: impl Into<String>,
        customer_email: impl Into<String>,
        customer_name: impl Into<String>,
    ) -> Self {
        Self {
            account_reference: account_reference.into(),
            account_name: account_name.into(),
            currency_code: currency_code.into(),
            customer_email: customer_email.into(),
            customer_name: customer_name.into(),
            bvn: None,
            reserved_account_type: ReservedAccountType::Invoice,
        }
    }
}

/// Body of `PUT .../add-linked-accounts/{accountReference}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedAccounts {
    /// Link an account in every partner bank.
    #[serde(default)]
    pub get_all_available_banks: bool,

    /// Partner bank codes to link.
    #[serde(default)]
    pub preferred_banks: Vec<String>,
}

/// Body of `PUT .../update-customer-bvn/{accountReference}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerBvn {
    /// New customer BVN.
    pub bvn: String,
}

/// Body of `PUT .../update-payment-source-filter/{accountReference}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSourceFilter {
    /// Whether only the allowed sources may fund the account.
    pub restrict_payment_source: bool,

    /// Accepted payment sources.
    pub allowed_payment_sources: AllowedPaymentSources,
}

/// Query of `GET /api/v1/bank-transfer/reserved-accounts/transactions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservedAccountTransactions {
    /// Merchant reference of the reserved account.
    pub account_reference: String,
    /// Zero-based page index.
    pub page: u32,
    /// Page size.
    pub size: u32,
}

impl ReservedAccountTransactions {
    /// Creates a query for the first page of ten transactions.
    #[must_use]
    pub fn new(account_reference: impl Into<String>) -> Self {
        Self::paged(account_reference, Page::default())
    }

    /// Creates a query for an explicit page.
    #[must_use]
    pub fn paged(account_reference: impl Into<String>, page: Page) -> Self {
        Self {
            account_reference: account_reference.into(),
            page: page.page,
            size: page.size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_linked_accounts_default_body() {
        let value = serde_json::to_value(LinkedAccounts::default()).unwrap();
        assert_eq!(
            value,
            json!({"getAllAvailableBanks": false, "preferredBanks": []})
        );
    }

    #[test]
    fn test_invoice_account_type() {
        let request = InvoiceReservedAccount::new("inv-acc", "Acme", "NGN", "a@b.c", "Acme Ltd");
        let value = serde_json::to_value(request).unwrap();
        assert_eq!(value["reservedAccountType"], "INVOICE");
        assert!(value.get("bvn").is_none());
    }

    #[test]
    fn test_transactions_query_defaults() {
        let query = ReservedAccountTransactions::new("acc-1");
        assert_eq!((query.page, query.size), (0, 10));
    }

    #[test]
    fn test_preferred_banks_clear_all_banks_flag() {
        let request = CreateReservedAccount::new("r", "n", "NGN", "e@x.io", "c")
            .with_all_available_banks()
            .with_preferred_banks(["035", "058"]);
        assert!(!request.get_all_available_banks);
        assert_eq!(request.preferred_banks, vec!["035", "058"]);
    }
}
