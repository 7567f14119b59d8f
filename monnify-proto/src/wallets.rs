//! Disbursement wallets.

use serde::{Deserialize, Serialize};

/// BVN details identifying a wallet owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BvnDetails {
    /// Owner BVN.
    pub bvn: String,
    /// Date of birth registered with the BVN, `yyyy-MM-dd`.
    pub bvn_date_of_birth: String,
}

/// Body of `POST /api/v1/disbursements/wallet`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWallet {
    /// Unique merchant reference for the wallet.
    pub wallet_reference: String,
    /// Display name of the wallet.
    pub wallet_name: String,
    /// Owner's full name.
    pub customer_name: String,
    /// Owner's email address.
    pub customer_email: String,
    /// Owner identity.
    pub bvn_details: BvnDetails,
}

/// Query selecting a wallet by its account number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletAccount {
    /// Wallet account number.
    pub account_number: String,
}

/// Query of `GET /api/v1/disbursements/wallet`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletLookup {
    /// Merchant reference of the wallet.
    pub wallet_reference: String,
}
