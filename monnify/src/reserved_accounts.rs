//! Reserved (virtual) accounts.

use std::convert::identity;

use monnify_proto::paths;
use monnify_proto::reserved_accounts::{
    CreateReservedAccount, CustomerBvn, InvoiceReservedAccount, LinkedAccounts,
    PaymentSourceFilter, ReservedAccountTransactions, SplitConfig,
};
use reqwest::Method;
use reqwest::header::ACCEPT;
use serde_json::Value;

#[cfg(feature = "telemetry")]
use tracing::{field::Empty, instrument};

use crate::client::MonnifyClient;
use crate::error::MonnifyError;
use crate::outcome::{Data, Outcome, ReservedAccountDetails, UpdatedBvn, conclude};

const UPDATE_BVN_FAILED: &str = "Failed to update BVN for the reserved account.";

impl MonnifyClient {
    /// Creates a general reserved account for a customer.
    ///
    /// `POST /api/v2/bank-transfer/reserved-accounts`, scoped to the merchant
    /// contract.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "monnify.create_reserved_account",
            skip_all,
            fields(
                account_reference = %request.account_reference,
                otel.status_code = Empty,
                error.message = Empty
            )
        )
    )]
    pub async fn create_reserved_account(
        &self,
        request: &CreateReservedAccount,
    ) -> Outcome<ReservedAccountDetails> {
        let result = self
            .envelope(
                Method::POST,
                paths::RESERVED_ACCOUNTS_V2,
                &[],
                "Failed to create reserved account.",
                |r| r.json(&self.scoped(request)),
            )
            .await;
        conclude(result.map(ReservedAccountDetails::from))
    }

    /// Creates a reserved account bound to invoices.
    ///
    /// `POST /api/v1/bank-transfer/reserved-accounts`, scoped to the merchant
    /// contract.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "monnify.create_invoice_reserved_account",
            skip_all,
            fields(
                account_reference = %request.account_reference,
                otel.status_code = Empty,
                error.message = Empty
            )
        )
    )]
    pub async fn create_invoice_reserved_account(
        &self,
        request: &InvoiceReservedAccount,
    ) -> Outcome<Data> {
        let result = self
            .envelope(
                Method::POST,
                paths::RESERVED_ACCOUNTS_V1,
                &[],
                "Failed to create invoiced reserved account.",
                |r| r.json(&self.scoped(request)),
            )
            .await;
        conclude(result.map(Data::from))
    }

    /// Fetches a reserved account.
    ///
    /// `GET /api/v2/bank-transfer/reserved-accounts/{accountReference}`.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "monnify.reserved_account",
            skip_all,
            fields(
                account_reference = %account_reference,
                otel.status_code = Empty,
                error.message = Empty
            )
        )
    )]
    pub async fn reserved_account(&self, account_reference: &str) -> Outcome<Data> {
        let result = self
            .envelope(
                Method::GET,
                paths::RESERVED_ACCOUNT_V2,
                &[account_reference],
                "Failed to retrieve reserved account details.",
                identity,
            )
            .await;
        conclude(result.map(Data::from))
    }

    /// Links accounts in additional partner banks to a reserved account.
    ///
    /// `PUT .../add-linked-accounts/{accountReference}`.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "monnify.add_linked_accounts",
            skip_all,
            fields(
                account_reference = %account_reference,
                otel.status_code = Empty,
                error.message = Empty
            )
        )
    )]
    pub async fn add_linked_accounts(
        &self,
        account_reference: &str,
        request: &LinkedAccounts,
    ) -> Outcome<Data> {
        let result = self
            .envelope(
                Method::PUT,
                paths::RESERVED_ACCOUNT_LINKED_ACCOUNTS,
                &[account_reference],
                "Failed to add linked accounts",
                |r| r.json(request),
            )
            .await;
        conclude(result.map(Data::from))
    }

    /// Updates the customer BVN attached to a reserved account.
    ///
    /// `PUT .../update-customer-bvn/{accountReference}`. Unlike every other
    /// operation, success is decided by a non-empty top-level `bvn` field in
    /// the response rather than the envelope flag, and the API message is
    /// never reported.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "monnify.update_customer_bvn",
            skip_all,
            fields(
                account_reference = %account_reference,
                otel.status_code = Empty,
                error.message = Empty
            )
        )
    )]
    pub async fn update_customer_bvn(
        &self,
        account_reference: &str,
        bvn: &str,
    ) -> Outcome<UpdatedBvn> {
        let body = CustomerBvn {
            bvn: bvn.to_owned(),
        };
        let result = self
            .exchange(
                Method::PUT,
                paths::RESERVED_ACCOUNT_CUSTOMER_BVN,
                &[account_reference],
                |r| r.json(&body),
            )
            .await
            .and_then(|mut raw| match raw.get_mut("bvn") {
                Some(bvn) if is_truthy(bvn) => Ok(UpdatedBvn {
                    updated_bvn: bvn.take(),
                }),
                _ => Err(MonnifyError::rejected(None, UPDATE_BVN_FAILED)),
            });
        conclude(result)
    }

    /// Restricts which sources may fund a reserved account.
    ///
    /// `PUT .../update-payment-source-filter/{accountReference}`.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "monnify.update_payment_source_filter",
            skip_all,
            fields(
                account_reference = %account_reference,
                otel.status_code = Empty,
                error.message = Empty
            )
        )
    )]
    pub async fn update_payment_source_filter(
        &self,
        account_reference: &str,
        request: &PaymentSourceFilter,
    ) -> Outcome<Data> {
        let result = self
            .envelope(
                Method::PUT,
                paths::RESERVED_ACCOUNT_PAYMENT_SOURCE_FILTER,
                &[account_reference],
                "Failed to update allowed payment sources.",
                |r| r.json(request),
            )
            .await;
        conclude(result.map(Data::from))
    }

    /// Replaces the income split configuration of a reserved account.
    ///
    /// `PUT .../update-income-split-config/{accountReference}`.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "monnify.update_income_split_config",
            skip_all,
            fields(
                account_reference = %account_reference,
                otel.status_code = Empty,
                error.message = Empty
            )
        )
    )]
    pub async fn update_income_split_config(
        &self,
        account_reference: &str,
        split: &SplitConfig,
    ) -> Outcome<Data> {
        let result = self
            .envelope(
                Method::PUT,
                paths::RESERVED_ACCOUNT_INCOME_SPLIT,
                &[account_reference],
                "Failed to update income split configuration.",
                |r| r.json(split),
            )
            .await;
        conclude(result.map(Data::from))
    }

    /// Deallocates (deletes) a reserved account.
    ///
    /// `DELETE /api/v1/bank-transfer/reserved-accounts/{accountReference}`.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "monnify.deallocate_reserved_account",
            skip_all,
            fields(
                account_reference = %account_reference,
                otel.status_code = Empty,
                error.message = Empty
            )
        )
    )]
    pub async fn deallocate_reserved_account(&self, account_reference: &str) -> Outcome<Data> {
        let result = self
            .envelope(
                Method::DELETE,
                paths::RESERVED_ACCOUNT_V1,
                &[account_reference],
                "Failed to deallocate reserved account",
                identity,
            )
            .await;
        conclude(result.map(Data::from))
    }

    /// Lists transactions received by a reserved account.
    ///
    /// `GET /api/v1/bank-transfer/reserved-accounts/transactions` with
    /// `accountReference`, `page` and `size` query parameters.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "monnify.reserved_account_transactions",
            skip_all,
            fields(
                account_reference = %query.account_reference,
                page = query.page,
                size = query.size,
                otel.status_code = Empty,
                error.message = Empty
            )
        )
    )]
    pub async fn reserved_account_transactions(
        &self,
        query: &ReservedAccountTransactions,
    ) -> Outcome<Data> {
        let result = self
            .envelope(
                Method::GET,
                paths::RESERVED_ACCOUNT_TRANSACTIONS,
                &[],
                "Failed to fetch transactions",
                |r| r.header(ACCEPT, "application/json").query(query),
            )
            .await;
        conclude(result.map(Data::from))
    }
}

/// JSON truthiness: `null`, `false`, `0` and `""` are falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n.abs() > 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
