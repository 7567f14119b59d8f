//! Checkout transactions.

use std::convert::identity;

use monnify_proto::paths;
use monnify_proto::transactions::{BankTransferPayment, InitTransaction, TransactionSearch};
use reqwest::Method;

#[cfg(feature = "telemetry")]
use tracing::{field::Empty, instrument};

use crate::client::MonnifyClient;
use crate::outcome::{Checkout, Data, Outcome, TransactionDetails, TransactionPage, conclude};

impl MonnifyClient {
    /// Initializes a checkout and returns the hosted checkout URL.
    ///
    /// `POST /api/v1/merchant/transactions/init-transaction`, scoped to the
    /// merchant contract.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "monnify.initialize_transaction",
            skip_all,
            fields(
                payment_reference = %request.payment_reference,
                otel.status_code = Empty,
                error.message = Empty
            )
        )
    )]
    pub async fn initialize_transaction(&self, request: &InitTransaction) -> Outcome<Checkout> {
        let result = self
            .envelope(
                Method::POST,
                paths::INIT_TRANSACTION,
                &[],
                "Failed to initialize transaction",
                |r| r.json(&self.scoped(request)),
            )
            .await;
        conclude(result.map(Checkout::from))
    }

    /// Generates bank-transfer details for an initialized transaction.
    ///
    /// `POST /api/v1/merchant/bank-transfer/init-payment`.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "monnify.init_bank_transfer",
            skip_all,
            fields(
                otel.status_code = Empty,
                error.message = Empty
            )
        )
    )]
    pub async fn init_bank_transfer(&self, request: &BankTransferPayment) -> Outcome<Data> {
        let result = self
            .envelope(
                Method::POST,
                paths::BANK_TRANSFER_INIT_PAYMENT,
                &[],
                "Failed to initialize bank transfer payment",
                |r| r.json(request),
            )
            .await;
        conclude(result.map(Data::from))
    }

    /// Searches transactions.
    ///
    /// `GET /api/v1/transactions/search`; filters are passed through as
    /// query parameters. The page content is returned as `transactions`
    /// with paging totals under `metadata`.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "monnify.search_transactions",
            skip_all,
            fields(
                otel.status_code = Empty,
                error.message = Empty
            )
        )
    )]
    pub async fn search_transactions(&self, search: &TransactionSearch) -> Outcome<TransactionPage> {
        let result = self
            .envelope(
                Method::GET,
                paths::TRANSACTION_SEARCH,
                &[],
                "Failed to fetch transactions",
                |r| r.query(search),
            )
            .await;
        conclude(result.map(TransactionPage::from))
    }

    /// Fetches the status of a transaction.
    ///
    /// `GET /api/v2/transactions/{transactionReference}`.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "monnify.transaction_status",
            skip_all,
            fields(
                transaction_reference = %transaction_reference,
                otel.status_code = Empty,
                error.message = Empty
            )
        )
    )]
    pub async fn transaction_status(&self, transaction_reference: &str) -> Outcome<TransactionDetails> {
        let result = self
            .envelope(
                Method::GET,
                paths::TRANSACTION_STATUS,
                &[transaction_reference],
                "Failed to fetch transaction status",
                identity,
            )
            .await;
        conclude(result.map(TransactionDetails::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use monnify_proto::PaymentMethod;
    use rust_decimal::Decimal;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn setup() -> (MockServer, MonnifyClient) {
        let server = MockServer::start().await;
        let client = MonnifyClient::new("k", "s", "626609763141", server.uri()).unwrap();
        (server, client)
    }

    #[tokio::test]
    async fn test_initialize_transaction_returns_checkout_url() {
        let (server, client) = setup().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/merchant/transactions/init-transaction"))
            .and(body_partial_json(json!({
                "contractCode": "626609763141",
                "paymentReference": "order-7",
                "customerEmail": "stephen@ikhane.com",
                "redirectUrl": "https://my-merchants-page.com/transaction/confirm",
                "paymentMethods": ["CARD"],
                "currencyCode": "NGN"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "requestSuccessful": true,
                "responseMessage": "success",
                "responseCode": "0",
                "responseBody": {
                    "transactionReference": "MNFY|20190915200044|000090",
                    "paymentReference": "order-7",
                    "checkoutUrl": "https://sandbox.sdk.monnify.com/checkout/MNFY|20190915200044|000090"
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let request = InitTransaction::new(
            Decimal::new(100, 0),
            "Stephen Ikhane",
            "stephen@ikhane.com",
            "Trial transaction",
            "https://my-merchants-page.com/transaction/confirm",
            "NGN",
        )
        .with_payment_reference("order-7")
        .with_payment_methods([PaymentMethod::Card]);

        let checkout = client
            .initialize_transaction(&request)
            .await
            .into_result()
            .unwrap();
        assert_eq!(
            checkout.checkout_url.as_deref(),
            Some("https://sandbox.sdk.monnify.com/checkout/MNFY|20190915200044|000090")
        );
    }

    #[tokio::test]
    async fn test_search_passes_filters_and_reshapes_page() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/transactions/search"))
            .and(query_param("page", "0"))
            .and(query_param("size", "5"))
            .and(query_param("paymentStatus", "PAID"))
            .and(query_param("channel", "CARD"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "requestSuccessful": true,
                "responseBody": {
                    "content": [{"paymentReference": "order-7", "amount": 100.0}],
                    "totalElements": 31,
                    "totalPages": 7
                }
            })))
            .mount(&server)
            .await;

        let search = TransactionSearch {
            page: Some(0),
            size: Some(5),
            payment_status: Some("PAID".into()),
            ..TransactionSearch::default()
        }
        .with_param("channel", "CARD");

        let outcome = client.search_transactions(&search).await;
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({
                "status": "success",
                "transactions": [{"paymentReference": "order-7", "amount": 100.0}],
                "metadata": {"totalElements": 31, "totalPages": 7}
            })
        );
    }

    #[tokio::test]
    async fn test_transaction_status_encodes_reference() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/transactions/order%207%2Fa"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "requestSuccessful": true,
                "responseBody": {"paymentStatus": "PAID"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let outcome = client.transaction_status("order 7/a").await;
        assert_eq!(
            outcome,
            Outcome::Success(TransactionDetails {
                transaction_details: json!({"paymentStatus": "PAID"})
            })
        );
    }

    #[tokio::test]
    async fn test_bank_transfer_rejection_without_message() {
        let (server, client) = setup().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/merchant/bank-transfer/init-payment"))
            .and(body_partial_json(json!({"transactionReference": "MNFY|1", "bankCode": "058"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"requestSuccessful": false})),
            )
            .mount(&server)
            .await;

        let request = BankTransferPayment::new("MNFY|1").with_bank_code("058");
        let outcome = client.init_bank_transfer(&request).await;
        assert_eq!(
            outcome,
            Outcome::error("Failed to initialize bank transfer payment")
        );
    }
}
