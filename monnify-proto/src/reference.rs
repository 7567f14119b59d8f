//! Merchant-side payment references.
//!
//! Monnify requires the merchant to supply a unique `paymentReference` when
//! initializing a transaction. [`PaymentReference::now`] derives one from the
//! current time in milliseconds since the Unix epoch, which is unique enough
//! for a single merchant issuing one checkout at a time. Callers that keep
//! their own order identifiers should use [`PaymentReference::new`].

use std::fmt::{Display, Formatter};
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

/// A merchant payment reference, serialized as a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentReference(String);

impl PaymentReference {
    /// Wraps a caller-chosen reference.
    #[must_use]
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// Creates a reference from a millisecond timestamp.
    #[must_use]
    pub fn from_millis(millis: u128) -> Self {
        Self(millis.to_string())
    }

    /// Derives a reference from the current system time.
    ///
    /// A clock set before the Unix epoch yields `"0"`.
    #[must_use]
    pub fn now() -> Self {
        let millis = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis())
            .unwrap_or_default();
        Self::from_millis(millis)
    }

    /// Returns the reference as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for PaymentReference {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for PaymentReference {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for PaymentReference {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}
