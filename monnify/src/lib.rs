#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Async client for the Monnify payment API.
//!
//! [`MonnifyClient`] wraps the Monnify merchant API: checkout initialization,
//! card charges, bank-transfer collection, reserved accounts, invoices,
//! sub-accounts, refunds, settlements, disbursement wallets and bank/BVN
//! verification. Each method issues exactly one HTTP request and resolves to
//! an [`Outcome`]; no operation returns `Err` or panics on API or transport
//! failure.
//!
//! # Modules
//!
//! - [`client`] — The client and its request pipeline
//! - [`config`] — Credentials, base URL and environment loading
//! - [`error`] — Internal error taxonomy
//! - [`outcome`] — Normalized results and success payloads
//!
//! Operations are grouped by API area in `transactions`, `cards`,
//! `reserved_accounts`, `invoices`, `sub_accounts`, `refunds`,
//! `settlements`, `wallets` and `verification`.
//!
//! # Feature Flags
//!
//! - `telemetry` - Enables tracing instrumentation for debugging and monitoring

pub mod client;
pub mod config;
pub mod error;
pub mod outcome;

mod cards;
mod invoices;
mod refunds;
mod reserved_accounts;
mod settlements;
mod sub_accounts;
mod transactions;
mod verification;
mod wallets;

pub use client::MonnifyClient;
pub use config::{ClientConfig, LIVE_BASE_URL, SANDBOX_BASE_URL};
pub use error::{ConfigError, MonnifyError};
pub use monnify_proto as proto;
pub use outcome::{
    Checkout, Data, Outcome, ReservedAccountDetails, SearchMetadata, TransactionDetails,
    TransactionPage, UpdatedBvn,
};
pub use rust_decimal::Decimal;
