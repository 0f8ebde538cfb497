//! CI/CD variables backend.

use tracing::debug;

use crate::core::backend::Backend;
use crate::core::domain::{variable, Secret, VariableEntry};
use crate::core::transport::Transport;
use crate::error::FetchError;

const NOT_LISTED: &str = "key not listed in response";

/// Project or group CI/CD variables.
#[derive(Debug, Clone)]
pub struct VariableStore {
    /// Full listing URL, e.g. `.../api/v4/projects/42/variables`
    endpoint: String,
}

impl VariableStore {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Backend for VariableStore {
    fn name(&self) -> &'static str {
        "variables"
    }

    fn fetch(&self, transport: &Transport, token: &str, key: &str) -> Result<Secret, FetchError> {
        let transport_err = |source: reqwest::Error| FetchError::Transport {
            key: key.to_string(),
            source,
        };

        let body = transport
            .get(&self.endpoint, token)
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .map_err(transport_err)?;

        let entries: Vec<VariableEntry> =
            serde_json::from_str(&body).map_err(|source| FetchError::Parse {
                key: key.to_string(),
                source,
            })?;
        debug!(count = entries.len(), "listed variables");

        match variable::find(&entries, key) {
            Some(value) => Ok(Secret::new(key, value)),
            None => {
                debug!(key, "variable not listed");
                Err(FetchError::NotFound {
                    key: key.to_string(),
                    detail: NOT_LISTED.to_string(),
                })
            }
        }
    }
}
