//! Runtime configuration.
//!
//! Everything is read from environment variables. A variable missing from
//! the process environment is looked up in a `.env` file in the current
//! directory; the file is parsed on its own and never exported into the
//! process environment.
//!
//! Only the token is needed up front. Each endpoint is required only by the
//! backend that uses it, see [`Resolver::resolve`](crate::core::resolver::Resolver::resolve).

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::core::constants;
use crate::core::transport::TransportConfig;
use crate::error::{ConfigError, Error, Result};

/// Resolved configuration for one run.
#[derive(Clone)]
pub struct Config {
    /// GitLab access token
    pub token: Zeroizing<String>,
    /// Full URL of the CI/CD variables listing
    pub variables_url: Option<String>,
    /// Base URL of the repository files API
    pub files_url: Option<String>,
    /// HTTP client settings
    pub transport: TransportConfig,
}

impl Config {
    /// Load configuration from the environment, falling back to `.env`.
    ///
    /// `.env` is parsed at most once. If it cannot be parsed while looking up
    /// the token the error is fatal; for any other setting it is logged and
    /// the setting is treated as absent.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` if the token is absent,
    /// `ConfigError::Invalid` for an unparsable optional setting and
    /// `ConfigError::EnvFile` if `.env` has to supply the token but cannot be
    /// read.
    pub fn from_env() -> Result<Self> {
        let mut dotenv: Option<HashMap<String, String>> = None;

        Self::from_lookup(|name| {
            if let Ok(value) = std::env::var(name) {
                return Ok(Some(value));
            }
            if dotenv.is_none() {
                // A broken file is reported once, later lookups see it as empty
                match read_env_file(Path::new(constants::ENV_FILE)) {
                    Ok(vars) => dotenv = Some(vars),
                    Err(e) => {
                        dotenv = Some(HashMap::new());
                        return Err(e);
                    }
                }
            }
            Ok(dotenv.as_ref().and_then(|vars| vars.get(name).cloned()))
        })
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as absent. Lookup errors are fatal for the
    /// token; for every other setting a `.env` error only drops the value.
    pub fn from_lookup<F>(mut lookup: F) -> Result<Self>
    where
        F: FnMut(&str) -> Result<Option<String>>,
    {
        let token = lookup(constants::TOKEN_VAR)?
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::Missing(constants::TOKEN_VAR))?;

        let mut get = |name: &'static str| -> Result<Option<String>> {
            match lookup(name) {
                Ok(value) => Ok(value.filter(|value| !value.is_empty())),
                Err(Error::Config(ConfigError::EnvFile(e))) => {
                    warn!(variable = name, error = %e, "ignoring unreadable .env file");
                    Ok(None)
                }
                Err(e) => Err(e),
            }
        };

        let variables_url = get(constants::VARIABLES_URL_VAR)?;
        let files_url = get(constants::FILES_URL_VAR)?;

        let mut transport = TransportConfig::default();
        if let Some(raw) = get(constants::TIMEOUT_VAR)? {
            transport.timeout = parse_timeout(&raw)?;
        }
        if let Some(raw) = get(constants::TLS_VERIFY_VAR)? {
            transport.verify_tls = parse_flag(constants::TLS_VERIFY_VAR, &raw)?;
        }

        debug!(
            variables_url = variables_url.as_deref().unwrap_or("-"),
            files_url = files_url.as_deref().unwrap_or("-"),
            timeout_secs = transport.timeout.as_secs(),
            verify_tls = transport.verify_tls,
            "configuration loaded"
        );

        Ok(Self {
            token: Zeroizing::new(token),
            variables_url,
            files_url,
            transport,
        })
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<redacted>")
            .field("variables_url", &self.variables_url)
            .field("files_url", &self.files_url)
            .field("transport", &self.transport)
            .finish()
    }
}

/// Read a dotenv file into a map. A missing file yields an empty map.
pub fn read_env_file(path: &Path) -> Result<HashMap<String, String>> {
    if !path.exists() {
        return Ok(HashMap::new());
    }

    debug!(path = %path.display(), "reading dotenv file");
    let vars = dotenvy::from_path_iter(path)
        .map_err(ConfigError::EnvFile)?
        .collect::<std::result::Result<HashMap<_, _>, _>>()
        .map_err(ConfigError::EnvFile)?;

    Ok(vars)
}

fn parse_timeout(raw: &str) -> Result<Duration> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::Invalid {
            name: constants::TIMEOUT_VAR,
            reason: format!("expected a positive number of seconds, got '{}'", raw),
        }
        .into()),
    }
}

fn parse_flag(name: &'static str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            name,
            reason: format!("expected true or false, got '{}'", raw),
        }
        .into()),
    }
}
