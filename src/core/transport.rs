//! HTTP transport shared by both backends.
//!
//! TLS relaxation lives on the client built here and nowhere else; it never
//! touches process-wide state.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use tracing::trace;

use crate::core::constants;
use crate::error::ConfigError;

/// Settings for the outbound HTTP client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    /// Upper bound for a whole request, connect included.
    pub timeout: Duration,
    /// Verify server certificates. Off by default so instances behind a
    /// private CA work out of the box.
    pub verify_tls: bool,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(constants::DEFAULT_TIMEOUT_SECS),
            verify_tls: false,
        }
    }
}

/// Blocking HTTP client that authenticates against the GitLab API.
#[derive(Debug, Clone)]
pub struct Transport {
    client: Client,
}

impl Transport {
    /// Build a transport from its configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Client` if the TLS backend cannot be initialized.
    pub fn new(config: &TransportConfig) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .danger_accept_invalid_certs(!config.verify_tls)
            .user_agent(concat!("gitlab-vault/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ConfigError::Client)?;

        Ok(Self { client })
    }

    /// Send an authenticated GET request.
    ///
    /// The token travels in the `PRIVATE-TOKEN` header so it never ends up in
    /// access logs or proxy caches the way a query parameter would.
    pub fn get(&self, url: &str, token: &str) -> reqwest::Result<Response> {
        trace!(url, "GET");
        self.client
            .get(url)
            .header(constants::TOKEN_HEADER, token)
            .send()
    }
}
