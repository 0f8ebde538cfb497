//! Repository file payload.

use serde::Deserialize;

/// Response of the repository files API.
///
/// Only `content` is returned to the caller. The rest is kept for log
/// output; any other metadata GitLab sends (size, blob and commit ids) is
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FileRecord {
    pub content: String,
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub encoding: Option<String>,
    #[serde(default, rename = "ref")]
    pub reference: Option<String>,
}
