//! Normalized operation results.
//!
//! Every client operation resolves to an [`Outcome`], serialized with a
//! `status` discriminant:
//!
//! ```json
//! {"status": "success", "checkoutUrl": "https://sandbox.sdk.monnify.com/checkout/MNFY|..."}
//! {"status": "error", "message": "Invalid contract code"}
//! ```
//!
//! Success payloads keep the API's `responseBody` as raw JSON. The client
//! does not validate payload shape; fields the API omits surface as `null`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[cfg(feature = "telemetry")]
use tracing::Span;

use crate::error::MonnifyError;

/// Result of one API operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome<T> {
    /// The API accepted the request.
    Success(T),
    /// The API rejected the request, or the call failed in transport.
    Error {
        /// Human-readable reason.
        message: String,
    },
}

impl<T> Outcome<T> {
    /// Creates an error outcome.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    /// Returns `true` for [`Outcome::Success`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for [`Outcome::Error`].
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// Returns the error message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Error { message } => Some(message),
        }
    }

    /// Returns the success payload, discarding any error.
    #[must_use]
    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(payload) => Some(payload),
            Self::Error { .. } => None,
        }
    }

    /// Converts into a `Result` with the error message as the error.
    ///
    /// # Errors
    ///
    /// Returns the message of an [`Outcome::Error`].
    pub fn into_result(self) -> Result<T, String> {
        match self {
            Self::Success(payload) => Ok(payload),
            Self::Error { message } => Err(message),
        }
    }

    /// Maps the success payload.
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Success(payload) => Outcome::Success(f(payload)),
            Self::Error { message } => Outcome::Error { message },
        }
    }
}

impl<T> From<Result<T, MonnifyError>> for Outcome<T> {
    fn from(result: Result<T, MonnifyError>) -> Self {
        match result {
            Ok(payload) => Self::Success(payload),
            Err(err) => Self::Error {
                message: err.to_string(),
            },
        }
    }
}

/// Folds an internal result into an [`Outcome`], recording it on the
/// current span.
pub(crate) fn conclude<T>(result: Result<T, MonnifyError>) -> Outcome<T> {
    record_result_on_span(&result);
    result.into()
}

/// Records the outcome of a request on a tracing span, including status and errors.
#[cfg(feature = "telemetry")]
fn record_result_on_span<T>(result: &Result<T, MonnifyError>) {
    let span = Span::current();
    match result {
        Ok(_) => {
            span.record("otel.status_code", "OK");
        }
        Err(err) => {
            span.record("otel.status_code", "ERROR");
            span.record("error.message", tracing::field::display(err));
            tracing::event!(tracing::Level::ERROR, error = %err, "Monnify request failed");
        }
    }
}

/// Records the outcome of a request on a tracing span, including status and errors.
/// Noop if telemetry feature is off.
#[cfg(not(feature = "telemetry"))]
fn record_result_on_span<T>(_result: &Result<T, MonnifyError>) {}

/// Generic payload: the envelope's `responseBody` under `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Data {
    /// The API's `responseBody`.
    pub data: Value,
}

impl From<Value> for Data {
    fn from(data: Value) -> Self {
        Self { data }
    }
}

/// Payload of transaction initialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checkout {
    /// Hosted checkout page for the customer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkout_url: Option<String>,
}

impl From<Value> for Checkout {
    fn from(body: Value) -> Self {
        Self {
            checkout_url: body
                .get("checkoutUrl")
                .and_then(Value::as_str)
                .map(str::to_owned),
        }
    }
}

/// Totals reported alongside a transaction search page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchMetadata {
    /// Number of matching transactions.
    pub total_elements: Value,
    /// Number of pages.
    pub total_pages: Value,
}

/// Payload of transaction search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionPage {
    /// Transactions on this page (`responseBody.content`).
    pub transactions: Value,
    /// Paging totals.
    pub metadata: SearchMetadata,
}

impl From<Value> for TransactionPage {
    fn from(mut body: Value) -> Self {
        let mut take = |key: &str| body.get_mut(key).map(Value::take).unwrap_or_default();
        let transactions = take("content");
        let total_elements = take("totalElements");
        let total_pages = take("totalPages");
        Self {
            transactions,
            metadata: SearchMetadata {
                total_elements,
                total_pages,
            },
        }
    }
}

/// Payload of transaction status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDetails {
    /// The API's `responseBody`.
    pub transaction_details: Value,
}

impl From<Value> for TransactionDetails {
    fn from(transaction_details: Value) -> Self {
        Self {
            transaction_details,
        }
    }
}

/// Payload of reserved account creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservedAccountDetails {
    /// The API's `responseBody`.
    pub reserved_account_details: Value,
}

impl From<Value> for ReservedAccountDetails {
    fn from(reserved_account_details: Value) -> Self {
        Self {
            reserved_account_details,
        }
    }
}

/// Payload of the reserved-account BVN update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdatedBvn {
    /// The `bvn` echoed by the API.
    #[serde(rename = "updatedBVN")]
    pub updated_bvn: Value,
}
