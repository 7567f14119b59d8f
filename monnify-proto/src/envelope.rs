//! The standard Monnify response envelope.
//!
//! Every endpoint except the reserved-account BVN update answers with:
//!
//! ```json
//! {
//!   "requestSuccessful": true,
//!   "responseMessage": "success",
//!   "responseCode": "0",
//!   "responseBody": { "...": "..." }
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ProtocolError;

/// Response wrapper returned by the Monnify API.
///
/// Every field is optional on the wire; a missing `requestSuccessful` is
/// read as `false` and a missing `responseBody` as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    /// Whether the API accepted the request.
    #[serde(default)]
    pub request_successful: bool,

    /// Human-readable status message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_message: Option<String>,

    /// Machine-readable status code, a string or a number (`"0"` on success).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_code: Option<Value>,

    /// Operation-specific payload.
    #[serde(default)]
    pub response_body: Value,
}

impl Envelope {
    /// Creates a successful envelope around `body`.
    #[must_use]
    pub fn success(body: Value) -> Self {
        Self {
            request_successful: true,
            response_message: Some("success".to_owned()),
            response_code: Some(Value::from("0")),
            response_body: body,
        }
    }

    /// Creates a rejected envelope with an optional message.
    #[must_use]
    pub fn rejected(message: Option<&str>) -> Self {
        Self {
            request_successful: false,
            response_message: message.map(str::to_owned),
            response_code: None,
            response_body: Value::Null,
        }
    }

    /// Interprets a decoded JSON body as an envelope.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::NotAnObject`] if `value` is not a JSON object,
    /// or [`ProtocolError::Json`] if a field has an unexpected type.
    pub fn from_value(value: Value) -> Result<Self, ProtocolError> {
        if !value.is_object() {
            return Err(ProtocolError::NotAnObject);
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Returns `true` if `value` carries the envelope discriminant.
    ///
    /// Used to tell an API rejection sent with a 4xx status apart from an
    /// arbitrary error page.
    #[must_use]
    pub fn is_envelope(value: &Value) -> bool {
        value.get("requestSuccessful").is_some()
    }

    /// Returns the response message, ignoring empty strings.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.response_message.as_deref().filter(|m| !m.is_empty())
    }

    /// Consumes the envelope and returns the payload.
    #[must_use]
    pub fn into_body(self) -> Value {
        self.response_body
    }
}

/// A request body scoped to the merchant's contract.
///
/// Serializes `inner` with a `contractCode` field merged in, for endpoints
/// that require the contract code alongside the operation fields.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scoped<'a, T> {
    /// Merchant contract code.
    pub contract_code: &'a str,
    /// The operation request body.
    #[serde(flatten)]
    pub inner: &'a T,
}

impl<'a, T> Scoped<'a, T> {
    /// Wraps `inner` with the given contract code.
    #[must_use]
    pub const fn new(contract_code: &'a str, inner: &'a T) -> Self {
        Self {
            contract_code,
            inner,
        }
    }
}
