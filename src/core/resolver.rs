//! Secret resolution.
//!
//! Routes a lookup key to the backend its shape calls for and hands the
//! backend's answer back untouched.

use tracing::debug;
use zeroize::Zeroizing;

use crate::core::backend::{Backend, FileStore, VariableStore};
use crate::core::config::Config;
use crate::core::constants;
use crate::core::domain::Secret;
use crate::core::key::{self, KeyKind};
use crate::core::transport::Transport;
use crate::error::{ConfigError, Result};

/// Resolves lookup keys against a GitLab project.
///
/// Holds no mutable state; one resolver can serve any number of lookups,
/// from any number of threads.
pub struct Resolver {
    token: Zeroizing<String>,
    variables: Option<VariableStore>,
    files: Option<FileStore>,
    transport: Transport,
}

impl Resolver {
    /// Create a resolver from resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Client` if the HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self> {
        let transport = Transport::new(&config.transport)?;

        Ok(Self {
            token: config.token,
            variables: config.variables_url.map(VariableStore::new),
            files: config.files_url.map(FileStore::new),
            transport,
        })
    }

    /// Create a resolver configured from the environment and `.env`.
    pub fn from_env() -> Result<Self> {
        Self::new(Config::from_env()?)
    }

    /// Resolve a single lookup key.
    ///
    /// Keys containing `/` are read from the repository, all others from the
    /// CI/CD variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` if the backend the key needs has no
    /// endpoint configured, otherwise the backend's `FetchError` unchanged.
    pub fn resolve(&self, key: &str) -> Result<Secret> {
        let kind = key::classify(key);
        let backend = self.backend(kind)?;
        debug!(key, kind = %kind, backend = backend.name(), "resolving");

        Ok(backend.fetch(&self.transport, &self.token, key)?)
    }

    fn backend(&self, kind: KeyKind) -> std::result::Result<&dyn Backend, ConfigError> {
        match kind {
            KeyKind::Variable => self
                .variables
                .as_ref()
                .map(|store| store as &dyn Backend)
                .ok_or(ConfigError::Missing(constants::VARIABLES_URL_VAR)),
            KeyKind::File => self
                .files
                .as_ref()
                .map(|store| store as &dyn Backend)
                .ok_or(ConfigError::Missing(constants::FILES_URL_VAR)),
        }
    }
}

impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("token", &"<redacted>")
            .field("variables", &self.variables)
            .field("files", &self.files)
            .finish_non_exhaustive()
    }
}
