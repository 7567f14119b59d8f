//! Endpoint path templates for the Monnify API.
//!
//! Paths are relative to the configured base URL. A `{}` segment stands for
//! an identifier supplied at call time; the client substitutes identifiers in
//! order and percent-encodes each one as a single path segment.

/// `POST`: initialize a checkout transaction.
pub const INIT_TRANSACTION: &str = "/api/v1/merchant/transactions/init-transaction";

/// `POST`: initialize a bank-transfer collection for a transaction.
pub const BANK_TRANSFER_INIT_PAYMENT: &str = "/api/v1/merchant/bank-transfer/init-payment";

/// `POST`: charge a card, also used to authorize the OTP of a card charge.
pub const CARD_CHARGE: &str = "/api/v1/merchant/cards/charge";

/// `POST`: charge a previously tokenized card.
pub const CARD_TOKEN_CHARGE: &str = "/api/v1/merchant/cards/charge-card-token";

/// `GET`: search transactions.
pub const TRANSACTION_SEARCH: &str = "/api/v1/transactions/search";

/// `GET`: status of a single transaction.
pub const TRANSACTION_STATUS: &str = "/api/v2/transactions/{}";

/// `POST`: create a general reserved account.
pub const RESERVED_ACCOUNTS_V2: &str = "/api/v2/bank-transfer/reserved-accounts";

/// `POST`: create an invoice reserved account.
pub const RESERVED_ACCOUNTS_V1: &str = "/api/v1/bank-transfer/reserved-accounts";

/// `GET`: reserved account details.
pub const RESERVED_ACCOUNT_V2: &str = "/api/v2/bank-transfer/reserved-accounts/{}";

/// `DELETE`: deallocate a reserved account.
pub const RESERVED_ACCOUNT_V1: &str = "/api/v1/bank-transfer/reserved-accounts/{}";

/// `PUT`: add linked accounts to a reserved account.
pub const RESERVED_ACCOUNT_LINKED_ACCOUNTS: &str =
    "/api/v1/bank-transfer/reserved-accounts/add-linked-accounts/{}";

/// `PUT`: update the customer BVN of a reserved account.
pub const RESERVED_ACCOUNT_CUSTOMER_BVN: &str =
    "/api/v1/bank-transfer/reserved-accounts/update-customer-bvn/{}";

/// `PUT`: restrict the payment sources accepted by a reserved account.
pub const RESERVED_ACCOUNT_PAYMENT_SOURCE_FILTER: &str =
    "/api/v1/bank-transfer/reserved-accounts/update-payment-source-filter/{}";

/// `PUT`: update the income split configuration of a reserved account.
pub const RESERVED_ACCOUNT_INCOME_SPLIT: &str =
    "/api/v1/bank-transfer/reserved-accounts/update-income-split-config/{}";

/// `GET`: transactions received by a reserved account.
pub const RESERVED_ACCOUNT_TRANSACTIONS: &str =
    "/api/v1/bank-transfer/reserved-accounts/transactions";

/// `POST`: create an invoice, also used to attach a reserved account to one.
pub const INVOICE_CREATE: &str = "/api/v1/invoice/create";

/// `GET`: list invoices.
pub const INVOICES: &str = "/api/v1/invoice/all";

/// `GET`: invoice details.
pub const INVOICE_DETAILS: &str = "/api/v1/invoice/{}/details";

/// `DELETE`: cancel an invoice.
pub const INVOICE_CANCEL: &str = "/api/v1/invoice/{}/cancel";

/// `POST` create, `GET` list and `PUT` update sub-accounts.
pub const SUB_ACCOUNTS: &str = "/api/v1/sub-accounts";

/// `DELETE`: delete a sub-account.
pub const SUB_ACCOUNT: &str = "/api/v1/sub-accounts/{}";

/// `POST`: initiate a refund.
pub const REFUND_INITIATE: &str = "/api/v1/refunds/initiate-refund";

/// `GET`: list refunds.
pub const REFUNDS: &str = "/api/v1/refunds";

/// `GET`: status of a refund.
pub const REFUND: &str = "/api/v1/refunds/{}";

/// `GET`: transactions settled under a settlement reference.
pub const SETTLEMENT_TRANSACTIONS: &str = "/api/v1/transactions/find-by-settlement-reference";

/// `GET`: settlement information for a transaction.
pub const SETTLEMENT_DETAIL: &str = "/api/v1/settlement-detail";

/// `POST` create and `GET` list disbursement wallets.
pub const WALLETS: &str = "/api/v1/disbursements/wallet";

/// `GET`: wallet balance.
pub const WALLET_BALANCE: &str = "/api/v1/disbursements/wallet/balance";

/// `GET`: wallet transactions.
pub const WALLET_TRANSACTIONS: &str = "/api/v1/disbursements/wallet/transactions";

/// `GET`: validate a bank account number.
pub const ACCOUNT_VALIDATE: &str = "/api/v1/disbursements/account/validate";

/// `POST`: match customer information against a BVN.
pub const BVN_DETAILS_MATCH: &str = "/api/v1/vas/bvn-details-match";

/// `POST`: match a bank account against a BVN.
pub const BVN_ACCOUNT_MATCH: &str = "/api/v1/vas/bvn-account-match";

/// `GET`: supported banks.
pub const BANKS: &str = "/api/v1/banks";

/// `GET`: banks with USSD short codes.
pub const BANKS_WITH_USSD: &str = "/api/v1/sdk/transactions/banks";
