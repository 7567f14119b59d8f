//! Sub-accounts receiving a share of split settlements.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One element of the `POST /api/v1/sub-accounts` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubAccount {
    /// ISO 4217 currency code.
    pub currency_code: String,
    /// CBN bank code of the settlement account.
    pub bank_code: String,
    /// Settlement account number.
    pub account_number: String,
    /// Email notified of settlements.
    pub email: String,
    /// Percentage settled when a split does not specify one.
    pub default_split_percentage: Decimal,
}

/// Body of `PUT /api/v1/sub-accounts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubAccount {
    /// Code of the sub-account to update.
    pub sub_account_code: String,
    /// New account details.
    #[serde(flatten)]
    pub account: SubAccount,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_flattens_account_fields() {
        let update = UpdateSubAccount {
            sub_account_code: "MFY_SUB_1".into(),
            account: SubAccount {
                currency_code: "NGN".into(),
                bank_code: "058".into(),
                account_number: "0123456789".into(),
                email: "ops@example.com".into(),
                default_split_percentage: Decimal::new(20, 0),
            },
        };
        let value = serde_json::to_value(update).unwrap();
        assert_eq!(value["subAccountCode"], "MFY_SUB_1");
        assert_eq!(value["accountNumber"], json!("0123456789"));
        assert!(value.get("account").is_none());
    }
}
