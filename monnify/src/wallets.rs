//! Disbursement wallets.

use monnify_proto::paths;
use monnify_proto::wallets::{CreateWallet, WalletAccount, WalletLookup};
use reqwest::Method;

#[cfg(feature = "telemetry")]
use tracing::{field::Empty, instrument};

use crate::client::MonnifyClient;
use crate::outcome::{Data, Outcome, conclude};

impl MonnifyClient {
    /// Creates a disbursement wallet.
    ///
    /// `POST /api/v1/disbursements/wallet`.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "monnify.create_wallet",
            skip_all,
            fields(
                wallet_reference = %request.wallet_reference,
                otel.status_code = Empty,
                error.message = Empty
            )
        )
    )]
    pub async fn create_wallet(&self, request: &CreateWallet) -> Outcome<Data> {
        let result = self
            .envelope(
                Method::POST,
                paths::WALLETS,
                &[],
                "Failed to create wallet",
                |r| r.json(request),
            )
            .await;
        conclude(result.map(Data::from))
    }

    /// Fetches the balance of a wallet.
    ///
    /// `GET /api/v1/disbursements/wallet/balance?accountNumber=`.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "monnify.wallet_balance",
            skip_all,
            fields(
                otel.status_code = Empty,
                error.message = Empty
            )
        )
    )]
    pub async fn wallet_balance(&self, account_number: &str) -> Outcome<Data> {
        let query = WalletAccount {
            account_number: account_number.to_owned(),
        };
        let result = self
            .envelope(
                Method::GET,
                paths::WALLET_BALANCE,
                &[],
                "Failed to fetch wallet balance",
                |r| r.query(&query),
            )
            .await;
        conclude(result.map(Data::from))
    }

    /// Lists wallets matching a merchant reference.
    ///
    /// `GET /api/v1/disbursements/wallet?walletReference=`.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "monnify.list_wallets",
            skip_all,
            fields(
                wallet_reference = %wallet_reference,
                otel.status_code = Empty,
                error.message = Empty
            )
        )
    )]
    pub async fn list_wallets(&self, wallet_reference: &str) -> Outcome<Data> {
        let query = WalletLookup {
            wallet_reference: wallet_reference.to_owned(),
        };
        let result = self
            .envelope(
                Method::GET,
                paths::WALLETS,
                &[],
                "Failed to fetch wallets",
                |r| r.query(&query),
            )
            .await;
        conclude(result.map(Data::from))
    }

    /// Lists the transactions of a wallet.
    ///
    /// `GET /api/v1/disbursements/wallet/transactions?accountNumber=`.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "monnify.wallet_transactions",
            skip_all,
            fields(
                otel.status_code = Empty,
                error.message = Empty
            )
        )
    )]
    pub async fn wallet_transactions(&self, account_number: &str) -> Outcome<Data> {
        let query = WalletAccount {
            account_number: account_number.to_owned(),
        };
        let result = self
            .envelope(
                Method::GET,
                paths::WALLET_TRANSACTIONS,
                &[],
                "Failed to fetch wallet transactions",
                |r| r.query(&query),
            )
            .await;
        conclude(result.map(Data::from))
    }
}
