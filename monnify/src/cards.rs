//! Card charges.

use monnify_proto::cards::{AuthorizeOtp, ChargeCard, ChargeCardToken};
use monnify_proto::paths;
use reqwest::Method;

#[cfg(feature = "telemetry")]
use tracing::{field::Empty, instrument};

use crate::client::MonnifyClient;
use crate::outcome::{Data, Outcome, conclude};

impl MonnifyClient {
    /// Charges a card against an initialized transaction.
    ///
    /// `POST /api/v1/merchant/cards/charge`. The payload reports whether an
    /// OTP or 3DS step is required.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "monnify.charge_card",
            skip_all,
            fields(
                transaction_reference = %request.transaction_reference,
                otel.status_code = Empty,
                error.message = Empty
            )
        )
    )]
    pub async fn charge_card(&self, request: &ChargeCard) -> Outcome<Data> {
        let result = self
            .envelope(
                Method::POST,
                paths::CARD_CHARGE,
                &[],
                "Failed to charge card",
                |r| r.json(request),
            )
            .await;
        conclude(result.map(Data::from))
    }

    /// Completes a card charge with the OTP entered by the customer.
    ///
    /// Posts the OTP payload to the card charge path.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "monnify.authorize_otp",
            skip_all,
            fields(
                transaction_reference = %request.transaction_reference,
                otel.status_code = Empty,
                error.message = Empty
            )
        )
    )]
    pub async fn authorize_otp(&self, request: &AuthorizeOtp) -> Outcome<Data> {
        let result = self
            .envelope(
                Method::POST,
                paths::CARD_CHARGE,
                &[],
                "Failed to authorize OTP",
                |r| r.json(request),
            )
            .await;
        conclude(result.map(Data::from))
    }

    /// Charges a tokenized card.
    ///
    /// `POST /api/v1/merchant/cards/charge-card-token`, scoped to the
    /// merchant contract.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "monnify.charge_card_token",
            skip_all,
            fields(
                payment_reference = %request.payment_reference,
                otel.status_code = Empty,
                error.message = Empty
            )
        )
    )]
    pub async fn charge_card_token(&self, request: &ChargeCardToken) -> Outcome<Data> {
        let result = self
            .envelope(
                Method::POST,
                paths::CARD_TOKEN_CHARGE,
                &[],
                "Failed to charge card token",
                |r| r.json(&self.scoped(request)),
            )
            .await;
        conclude(result.map(Data::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_authorize_otp_posts_to_charge_path() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/merchant/cards/charge"))
            .and(body_json(json!({
                "transactionReference": "MNFY|1",
                "collectionChannel": "API_NOTIFICATION",
                "tokenId": "7d9a4d5c",
                "token": "123456"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "requestSuccessful": true,
                "responseBody": {"status": "SUCCESS", "amount": 20.0}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = MonnifyClient::new("k", "s", "c", server.uri()).unwrap();
        let outcome = client
            .authorize_otp(&AuthorizeOtp::new("MNFY|1", "7d9a4d5c", "123456"))
            .await;
        assert_eq!(
            outcome.success().unwrap().data,
            json!({"status": "SUCCESS", "amount": 20.0})
        );
    }
}
