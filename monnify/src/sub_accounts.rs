//! Sub-accounts receiving split settlements.

use std::convert::identity;

use monnify_proto::paths;
use monnify_proto::sub_accounts::{SubAccount, UpdateSubAccount};
use reqwest::Method;

#[cfg(feature = "telemetry")]
use tracing::{field::Empty, instrument};

use crate::client::MonnifyClient;
use crate::outcome::{Data, Outcome, conclude};

impl MonnifyClient {
    /// Creates one or more sub-accounts.
    ///
    /// `POST /api/v1/sub-accounts` with a JSON array body.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "monnify.create_sub_accounts",
            skip_all,
            fields(
                count = accounts.len(),
                otel.status_code = Empty,
                error.message = Empty
            )
        )
    )]
    pub async fn create_sub_accounts(&self, accounts: &[SubAccount]) -> Outcome<Data> {
        let result = self
            .envelope(
                Method::POST,
                paths::SUB_ACCOUNTS,
                &[],
                "Failed to create sub account(s)",
                |r| r.json(accounts),
            )
            .await;
        conclude(result.map(Data::from))
    }

    /// Lists the merchant's sub-accounts.
    ///
    /// `GET /api/v1/sub-accounts`.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "monnify.list_sub_accounts",
            skip_all,
            fields(
                otel.status_code = Empty,
                error.message = Empty
            )
        )
    )]
    pub async fn list_sub_accounts(&self) -> Outcome<Data> {
        let result = self
            .envelope(
                Method::GET,
                paths::SUB_ACCOUNTS,
                &[],
                "Failed to fetch sub accounts",
                identity,
            )
            .await;
        conclude(result.map(Data::from))
    }

    /// Updates a sub-account.
    ///
    /// `PUT /api/v1/sub-accounts`; the sub-account code travels in the body.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "monnify.update_sub_account",
            skip_all,
            fields(
                sub_account_code = %request.sub_account_code,
                otel.status_code = Empty,
                error.message = Empty
            )
        )
    )]
    pub async fn update_sub_account(&self, request: &UpdateSubAccount) -> Outcome<Data> {
        let result = self
            .envelope(
                Method::PUT,
                paths::SUB_ACCOUNTS,
                &[],
                "Failed to update sub account",
                |r| r.json(request),
            )
            .await;
        conclude(result.map(Data::from))
    }

    /// Deletes a sub-account.
    ///
    /// `DELETE /api/v1/sub-accounts/{subAccountCode}`.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "monnify.delete_sub_account",
            skip_all,
            fields(
                sub_account_code = %sub_account_code,
                otel.status_code = Empty,
                error.message = Empty
            )
        )
    )]
    pub async fn delete_sub_account(&self, sub_account_code: &str) -> Outcome<Data> {
        let result = self
            .envelope(
                Method::DELETE,
                paths::SUB_ACCOUNT,
                &[sub_account_code],
                "Failed to delete sub account",
                identity,
            )
            .await;
        conclude(result.map(Data::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_create_sub_accounts_sends_array() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/sub-accounts"))
            .and(body_json(json!([{
                "currencyCode": "NGN",
                "bankCode": "058",
                "accountNumber": "0123456789",
                "email": "tamira1@gmail.com",
                "defaultSplitPercentage": 20.87
            }])))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "requestSuccessful": true,
                "responseBody": [{"subAccountCode": "MFY_SUB_319452883228"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = MonnifyClient::new("k", "s", "c", server.uri()).unwrap();
        let accounts = [SubAccount {
            currency_code: "NGN".into(),
            bank_code: "058".into(),
            account_number: "0123456789".into(),
            email: "tamira1@gmail.com".into(),
            default_split_percentage: Decimal::new(2087, 2),
        }];
        let outcome = client.create_sub_accounts(&accounts).await;
        assert_eq!(
            outcome.success().unwrap().data,
            json!([{"subAccountCode": "MFY_SUB_319452883228"}])
        );
    }

    #[tokio::test]
    async fn test_delete_sub_account_path() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/v1/sub-accounts/MFY_SUB_319452883228"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "requestSuccessful": true,
                "responseMessage": "success"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = MonnifyClient::new("k", "s", "c", server.uri()).unwrap();
        let outcome = client.delete_sub_account("MFY_SUB_319452883228").await;
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({"status": "success", "data": null})
        );
    }
}
