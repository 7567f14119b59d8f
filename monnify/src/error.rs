//! Error types for the Monnify client.
//!
//! [`MonnifyError`] is what the client propagates internally with `?`. It
//! never reaches callers of an operation directly: every operation folds it
//! into [`Outcome::Error`](crate::Outcome::Error) using its display text.

use monnify_proto::ProtocolError;
use reqwest::StatusCode;

/// Errors that can occur while talking to the Monnify API.
#[derive(Debug, thiserror::Error)]
pub enum MonnifyError {
    /// Base URL parse error.
    #[error("URL parse error: {context}: {source}")]
    UrlParse {
        /// Human-readable context.
        context: &'static str,
        /// The underlying parse error.
        #[source]
        source: url::ParseError,
    },

    /// The base URL cannot carry a path (e.g. `mailto:`).
    #[error("base URL cannot be used for API paths: {0}")]
    CannotBeABase(String),

    /// A path template has more `{}` segments than identifiers supplied.
    #[error("missing identifier for path {template}")]
    MissingPathParameter {
        /// The endpoint path template.
        template: &'static str,
    },

    /// An identifier that cannot stand as a single path segment.
    #[error("invalid identifier {value:?} for path {template}")]
    InvalidPathParameter {
        /// The endpoint path template.
        template: &'static str,
        /// The rejected identifier.
        value: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Building the underlying HTTP client failed.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// The request did not complete within the configured timeout.
    #[error("request timed out: {context}")]
    Timeout {
        /// Endpoint path template.
        context: &'static str,
        /// The underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },

    /// HTTP transport error.
    #[error("HTTP error: {context}: {source}")]
    Http {
        /// Endpoint path template.
        context: &'static str,
        /// The underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },

    /// Failed to read the response body.
    #[error("Failed to read response body as text: {context}: {source}")]
    ResponseBodyRead {
        /// Endpoint path template.
        context: &'static str,
        /// The underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },

    /// A 2xx response whose body is not JSON.
    #[error("Failed to deserialize JSON: {context}: {source}")]
    JsonDeserialization {
        /// Endpoint path template.
        context: &'static str,
        /// The underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// A non-2xx response that does not carry an envelope.
    #[error("Unexpected HTTP status {status}: {context}: {body}")]
    HttpStatus {
        /// Endpoint path template.
        context: &'static str,
        /// The HTTP status code.
        status: StatusCode,
        /// The response body.
        body: String,
    },

    /// The body could not be read as an envelope.
    #[error("invalid response envelope: {0}")]
    Protocol(#[from] ProtocolError),

    /// The API answered with `requestSuccessful: false`.
    ///
    /// Displays the API's message, or the operation's fallback message.
    #[error("{message}")]
    Rejected {
        /// Message reported to the caller.
        message: String,
    },
}

impl MonnifyError {
    /// Classifies a transport failure, separating timeouts.
    pub(crate) fn transport(context: &'static str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::Timeout { context, source }
        } else {
            Self::Http { context, source }
        }
    }

    /// Creates a rejection from an optional API message.
    pub(crate) fn rejected(message: Option<&str>, fallback: &str) -> Self {
        Self::Rejected {
            message: message.unwrap_or(fallback).to_owned(),
        }
    }
}

/// Errors that can occur while loading [`ClientConfig`](crate::ClientConfig)
/// from the environment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is unset or empty.
    #[error("missing environment variable {0}")]
    MissingVar(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_prefers_api_message() {
        let err = MonnifyError::rejected(Some("Invalid amount"), "Failed to initialize transaction");
        assert_eq!(err.to_string(), "Invalid amount");
    }

    #[test]
    fn test_rejected_falls_back() {
        let err = MonnifyError::rejected(None, "Failed to initialize transaction");
        assert_eq!(err.to_string(), "Failed to initialize transaction");
    }

    #[test]
    fn test_invalid_path_parameter_display() {
        let err = MonnifyError::InvalidPathParameter {
            template: "/api/v1/sub-accounts/{}",
            value: "..".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid identifier \"..\" for path /api/v1/sub-accounts/{}"
        );
    }

    #[test]
    fn test_http_status_display() {
        let err = MonnifyError::HttpStatus {
            context: "/api/v1/banks",
            status: StatusCode::BAD_GATEWAY,
            body: "upstream down".into(),
        };
        assert_eq!(
            err.to_string(),
            "Unexpected HTTP status 502 Bad Gateway: /api/v1/banks: upstream down"
        );
    }
}
