//! Repository files backend.

use tracing::debug;

use crate::core::backend::Backend;
use crate::core::constants;
use crate::core::domain::{FileRecord, Secret};
use crate::core::path;
use crate::core::transport::Transport;
use crate::error::FetchError;

/// Files committed to a repository, read from the default branch.
#[derive(Debug, Clone)]
pub struct FileStore {
    /// Files API base, e.g. `.../api/v4/projects/42/repository/files/`
    endpoint: String,
}

impl FileStore {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Request URL for a raw repository path.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}{}?ref={}",
            self.endpoint,
            path::encode(path),
            constants::DEFAULT_REF
        )
    }
}

impl Backend for FileStore {
    fn name(&self) -> &'static str {
        "files"
    }

    fn fetch(&self, transport: &Transport, token: &str, key: &str) -> Result<Secret, FetchError> {
        let url = self.url(key);
        debug!(url = %url, "requesting file");

        let transport_err = |source: reqwest::Error| FetchError::Transport {
            key: key.to_string(),
            source,
        };

        let response = transport.get(&url, token).map_err(transport_err)?;

        // Every non-success status counts as "not found", auth failures included.
        let status = response.status();
        if !status.is_success() {
            debug!(%status, "file lookup failed");
            return Err(FetchError::NotFound {
                key: key.to_string(),
                detail: status.to_string(),
            });
        }

        let body = response.text().map_err(transport_err)?;
        let record: FileRecord =
            serde_json::from_str(&body).map_err(|source| FetchError::Parse {
                key: key.to_string(),
                source,
            })?;
        debug!(
            file_path = record.file_path.as_deref().unwrap_or(key),
            encoding = record.encoding.as_deref().unwrap_or("text"),
            reference = record.reference.as_deref().unwrap_or(constants::DEFAULT_REF),
            "received file"
        );

        Ok(Secret::new(key, record.content))
    }
}
