//! Client configuration.
//!
//! A [`ClientConfig`] holds the merchant credentials and the API base URL.
//! It is consumed once by [`MonnifyClient::from_config`](crate::MonnifyClient::from_config)
//! and is immutable afterwards.
//!
//! # Environment Variables
//!
//! [`ClientConfig::from_env`] loads a `.env` file when present, then reads:
//!
//! - `MONNIFY_API_KEY` — merchant API key
//! - `MONNIFY_SECRET_KEY` — merchant secret key
//! - `MONNIFY_CONTRACT_CODE` — merchant contract code
//! - `MONNIFY_BASE_URL` — API base URL (default: [`SANDBOX_BASE_URL`])

use std::time::Duration;

use crate::error::ConfigError;

/// Monnify sandbox API.
pub const SANDBOX_BASE_URL: &str = "https://sandbox.monnify.com";

/// Monnify live API.
pub const LIVE_BASE_URL: &str = "https://api.monnify.com";

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "MONNIFY_API_KEY";

/// Environment variable holding the secret key.
pub const SECRET_KEY_VAR: &str = "MONNIFY_SECRET_KEY";

/// Environment variable holding the contract code.
pub const CONTRACT_CODE_VAR: &str = "MONNIFY_CONTRACT_CODE";

/// Environment variable holding the base URL.
pub const BASE_URL_VAR: &str = "MONNIFY_BASE_URL";

/// Configuration for [`MonnifyClient`](crate::MonnifyClient).
#[derive(Clone)]
pub struct ClientConfig {
    /// Merchant API key.
    pub api_key: String,

    /// Merchant secret key.
    pub secret_key: String,

    /// Merchant contract code, merged into contract-scoped request bodies.
    pub contract_code: String,

    /// API base URL, e.g. [`SANDBOX_BASE_URL`].
    pub base_url: String,

    /// Optional per-request timeout. The transport default applies when unset.
    pub timeout: Option<Duration>,

    /// Optional pre-configured reqwest client. If `None`, a new client is
    /// created.
    pub http_client: Option<reqwest::Client>,
}

impl ClientConfig {
    /// Creates a config from the four required settings.
    #[must_use]
    pub fn new(
        api_key: impl Into<String>,
        secret_key: impl Into<String>,
        contract_code: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            secret_key: secret_key.into(),
            contract_code: contract_code.into(),
            base_url: base_url.into(),
            timeout: None,
            http_client: None,
        }
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets a pre-configured reqwest client.
    #[must_use]
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Loads the configuration from the process environment, reading a
    /// `.env` file first if one exists.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVar`] if a credential is unset or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is fine; real environment variables still apply.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVar`] if a credential is unset or empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::MissingVar(name))
        };
        let api_key = required(API_KEY_VAR)?;
        let secret_key = required(SECRET_KEY_VAR)?;
        let contract_code = required(CONTRACT_CODE_VAR)?;
        let base_url = lookup(BASE_URL_VAR)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| SANDBOX_BASE_URL.to_owned());

        Ok(Self::new(api_key, secret_key, contract_code, base_url))
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &self.api_key)
            .field("secret_key", &"<redacted>")
            .field("contract_code", &self.contract_code)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("has_http_client", &self.http_client.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_from_lookup_defaults_to_sandbox() {
        let config = ClientConfig::from_lookup(lookup(&[
            (API_KEY_VAR, "MK_TEST_KEY"),
            (SECRET_KEY_VAR, "SECRET"),
            (CONTRACT_CODE_VAR, "1234567890"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, SANDBOX_BASE_URL);
        assert_eq!(config.contract_code, "1234567890");
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_from_lookup_honours_base_url() {
        let config = ClientConfig::from_lookup(lookup(&[
            (API_KEY_VAR, "MK_PROD_KEY"),
            (SECRET_KEY_VAR, "SECRET"),
            (CONTRACT_CODE_VAR, "1234567890"),
            (BASE_URL_VAR, LIVE_BASE_URL),
        ]))
        .unwrap();
        assert_eq!(config.base_url, LIVE_BASE_URL);
    }

    #[test]
    fn test_from_lookup_missing_secret() {
        let err = ClientConfig::from_lookup(lookup(&[
            (API_KEY_VAR, "MK_TEST_KEY"),
            (SECRET_KEY_VAR, "  "),
            (CONTRACT_CODE_VAR, "1234567890"),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::MissingVar(SECRET_KEY_VAR));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = ClientConfig::new("key", "top-secret", "code", SANDBOX_BASE_URL);
        let debug = format!("{config:?}");
        assert!(!debug.contains("top-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
