//! Bank account and BVN verification, and bank directories.

use std::convert::identity;

use monnify_proto::paths;
use monnify_proto::verification::{AccountValidation, BvnAccountMatch, BvnInformation};
use reqwest::Method;

#[cfg(feature = "telemetry")]
use tracing::{field::Empty, instrument};

use crate::client::MonnifyClient;
use crate::outcome::{Data, Outcome, conclude};

impl MonnifyClient {
    /// Resolves the account name behind a bank account.
    ///
    /// `GET /api/v1/disbursements/account/validate?accountNumber=&bankCode=`.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "monnify.validate_bank_account",
            skip_all,
            fields(
                bank_code = %query.bank_code,
                otel.status_code = Empty,
                error.message = Empty
            )
        )
    )]
    pub async fn validate_bank_account(&self, query: &AccountValidation) -> Outcome<Data> {
        let result = self
            .envelope(
                Method::GET,
                paths::ACCOUNT_VALIDATE,
                &[],
                "Failed to validate bank account",
                |r| r.query(query),
            )
            .await;
        conclude(result.map(Data::from))
    }

    /// Matches customer details against BVN records.
    ///
    /// `POST /api/v1/vas/bvn-details-match`.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "monnify.verify_bvn_information",
            skip_all,
            fields(
                otel.status_code = Empty,
                error.message = Empty
            )
        )
    )]
    pub async fn verify_bvn_information(&self, request: &BvnInformation) -> Outcome<Data> {
        let result = self
            .envelope(
                Method::POST,
                paths::BVN_DETAILS_MATCH,
                &[],
                "Failed to verify BVN information",
                |r| r.json(request),
            )
            .await;
        conclude(result.map(Data::from))
    }

    /// Checks that a bank account belongs to a BVN.
    ///
    /// `POST /api/v1/vas/bvn-account-match`.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "monnify.verify_bvn_account_match",
            skip_all,
            fields(
                bank_code = %request.bank_code,
                otel.status_code = Empty,
                error.message = Empty
            )
        )
    )]
    pub async fn verify_bvn_account_match(&self, request: &BvnAccountMatch) -> Outcome<Data> {
        let result = self
            .envelope(
                Method::POST,
                paths::BVN_ACCOUNT_MATCH,
                &[],
                "Failed to match BVN with bank account",
                |r| r.json(request),
            )
            .await;
        conclude(result.map(Data::from))
    }

    /// Lists supported banks.
    ///
    /// `GET /api/v1/banks`.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "monnify.banks",
            skip_all,
            fields(
                otel.status_code = Empty,
                error.message = Empty
            )
        )
    )]
    pub async fn banks(&self) -> Outcome<Data> {
        let result = self
            .envelope(
                Method::GET,
                paths::BANKS,
                &[],
                "Failed to fetch banks",
                identity,
            )
            .await;
        conclude(result.map(Data::from))
    }

    /// Lists banks with their USSD templates.
    ///
    /// `GET /api/v1/sdk/transactions/banks`.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "monnify.banks_with_ussd",
            skip_all,
            fields(
                otel.status_code = Empty,
                error.message = Empty
            )
        )
    )]
    pub async fn banks_with_ussd(&self) -> Outcome<Data> {
        let result = self
            .envelope(
                Method::GET,
                paths::BANKS_WITH_USSD,
                &[],
                "Failed to fetch banks with USSD support",
                identity,
            )
            .await;
        conclude(result.map(Data::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_validate_bank_account_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/disbursements/account/validate"))
            .and(query_param("accountNumber", "0068687503"))
            .and(query_param("bankCode", "232"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "requestSuccessful": true,
                "responseBody": {"accountName": "SEGUN ADEBAYO"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = MonnifyClient::new("k", "s", "c", server.uri()).unwrap();
        let query = AccountValidation {
            account_number: "0068687503".into(),
            bank_code: "232".into(),
        };
        let outcome = client.validate_bank_account(&query).await;
        assert_eq!(
            outcome.success().unwrap().data,
            json!({"accountName": "SEGUN ADEBAYO"})
        );
    }

    #[tokio::test]
    async fn test_verify_bvn_information_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/vas/bvn-details-match"))
            .and(body_json(json!({
                "bvn": "22222222222",
                "name": "Benjamin Ranae RORY",
                "dateOfBirth": "03-Oct-1993",
                "mobileNo": "08016857829"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "requestSuccessful": true,
                "responseBody": {"name": {"matchStatus": "FULL_MATCH"}}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = MonnifyClient::new("k", "s", "c", server.uri()).unwrap();
        let request = BvnInformation {
            bvn: "22222222222".into(),
            name: "Benjamin Ranae RORY".into(),
            date_of_birth: "03-Oct-1993".into(),
            mobile_no: "08016857829".into(),
        };
        assert!(client.verify_bvn_information(&request).await.is_success());
    }

    #[tokio::test]
    async fn test_banks_with_ussd_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/sdk/transactions/banks"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"requestSuccessful": false})),
            )
            .mount(&server)
            .await;

        let client = MonnifyClient::new("k", "s", "c", server.uri()).unwrap();
        assert_eq!(
            client.banks_with_ussd().await.message(),
            Some("Failed to fetch banks with USSD support")
        );
    }
}
