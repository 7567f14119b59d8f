//! Settlement lookups.

use monnify_proto::paths;
use monnify_proto::settlements::{SettlementDetail, SettlementTransactions};
use reqwest::Method;

#[cfg(feature = "telemetry")]
use tracing::{field::Empty, instrument};

use crate::client::MonnifyClient;
use crate::outcome::{Data, Outcome, conclude};

impl MonnifyClient {
    /// Lists the transactions paid out in one settlement.
    ///
    /// `GET /api/v1/transactions/find-by-settlement-reference`.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "monnify.settlement_transactions",
            skip_all,
            fields(
                reference = %query.reference,
                page = query.page,
                size = query.size,
                otel.status_code = Empty,
                error.message = Empty
            )
        )
    )]
    pub async fn settlement_transactions(&self, query: &SettlementTransactions) -> Outcome<Data> {
        let result = self
            .envelope(
                Method::GET,
                paths::SETTLEMENT_TRANSACTIONS,
                &[],
                "Failed to fetch settlement transactions",
                |r| r.query(query),
            )
            .await;
        conclude(result.map(Data::from))
    }

    /// Fetches the settlement a transaction was paid out in.
    ///
    /// `GET /api/v1/settlement-detail?transactionReference=`.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "monnify.settlement_details",
            skip_all,
            fields(
                transaction_reference = %transaction_reference,
                otel.status_code = Empty,
                error.message = Empty
            )
        )
    )]
    pub async fn settlement_details(&self, transaction_reference: &str) -> Outcome<Data> {
        let query = SettlementDetail {
            transaction_reference: transaction_reference.to_owned(),
        };
        let result = self
            .envelope(
                Method::GET,
                paths::SETTLEMENT_DETAIL,
                &[],
                "Failed to fetch settlement details",
                |r| r.query(&query),
            )
            .await;
        conclude(result.map(Data::from))
    }
}
