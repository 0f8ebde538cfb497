use thiserror::Error;

/// Top-level error for gitlab-vault operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Configuration could not be resolved. Always fatal.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("environment variable not set: {0}")]
    Missing(&'static str),

    #[error("invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },

    #[error("failed to load .env file: {0}")]
    EnvFile(#[from] dotenvy::Error),

    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),
}

/// A lookup against one of the backends failed.
///
/// Only `NotFound` means the backend answered without the secret; the other
/// variants are lower-level failures that callers may want to tell apart.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("secret not found: '{key}', details: '{detail}'")]
    NotFound { key: String, detail: String },

    #[error("request for '{key}' failed: {source}")]
    Transport {
        key: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected response for '{key}': {source}")]
    Parse {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// The lookup key the failure belongs to.
    pub fn key(&self) -> &str {
        match self {
            FetchError::NotFound { key, .. }
            | FetchError::Transport { key, .. }
            | FetchError::Parse { key, .. } => key,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
