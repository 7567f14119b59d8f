//! Refunds.

use std::convert::identity;

use monnify_proto::refunds::InitiateRefund;
use monnify_proto::{Page, paths};
use reqwest::Method;

#[cfg(feature = "telemetry")]
use tracing::{field::Empty, instrument};

use crate::client::MonnifyClient;
use crate::outcome::{Data, Outcome, conclude};

impl MonnifyClient {
    /// Initiates a full or partial refund of a transaction.
    ///
    /// `POST /api/v1/refunds/initiate-refund`.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "monnify.initiate_refund",
            skip_all,
            fields(
                transaction_reference = %request.transaction_reference,
                refund_reference = %request.refund_reference,
                otel.status_code = Empty,
                error.message = Empty
            )
        )
    )]
    pub async fn initiate_refund(&self, request: &InitiateRefund) -> Outcome<Data> {
        let result = self
            .envelope(
                Method::POST,
                paths::REFUND_INITIATE,
                &[],
                "Failed to initiate refund",
                |r| r.json(request),
            )
            .await;
        conclude(result.map(Data::from))
    }

    /// Lists refunds, one page at a time.
    ///
    /// `GET /api/v1/refunds?page=&size=`.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "monnify.list_refunds",
            skip_all,
            fields(
                page = page.page,
                size = page.size,
                otel.status_code = Empty,
                error.message = Empty
            )
        )
    )]
    pub async fn list_refunds(&self, page: Page) -> Outcome<Data> {
        let result = self
            .envelope(
                Method::GET,
                paths::REFUNDS,
                &[],
                "Failed to fetch refunds",
                |r| r.query(&page),
            )
            .await;
        conclude(result.map(Data::from))
    }

    /// Fetches the status of a refund.
    ///
    /// `GET /api/v1/refunds/{refundReference}`.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "monnify.refund_status",
            skip_all,
            fields(
                refund_reference = %refund_reference,
                otel.status_code = Empty,
                error.message = Empty
            )
        )
    )]
    pub async fn refund_status(&self, refund_reference: &str) -> Outcome<Data> {
        let result = self
            .envelope(
                Method::GET,
                paths::REFUND,
                &[refund_reference],
                "Failed to fetch refund status",
                identity,
            )
            .await;
        conclude(result.map(Data::from))
    }
}
