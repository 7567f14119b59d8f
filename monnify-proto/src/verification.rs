//! Bank account validation and BVN verification.

use serde::{Deserialize, Serialize};

/// Query of `GET /api/v1/disbursements/account/validate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountValidation {
    /// Account number to resolve.
    pub account_number: String,
    /// CBN bank code.
    pub bank_code: String,
}

/// Body of `POST /api/v1/vas/bvn-details-match`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BvnInformation {
    /// BVN to check.
    pub bvn: String,
    /// Full name to match.
    pub name: String,
    /// Date of birth to match, `dd-MMM-yyyy`.
    pub date_of_birth: String,
    /// Phone number to match.
    pub mobile_no: String,
}

/// Body of `POST /api/v1/vas/bvn-account-match`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BvnAccountMatch {
    /// CBN bank code of the account.
    pub bank_code: String,
    /// Account number.
    pub account_number: String,
    /// BVN expected to own the account.
    pub bvn: String,
}
