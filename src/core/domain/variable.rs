//! CI/CD variable payload.

use serde::Deserialize;

/// One element of the variables listing.
///
/// GitLab also sends `environment_scope`, `masked`, `protected`,
/// `variable_type` and friends; they are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VariableEntry {
    pub key: String,
    pub value: String,
}

/// Return the value of the first entry named `key`.
pub fn find<'a>(entries: &'a [VariableEntry], key: &str) -> Option<&'a str> {
    entries
        .iter()
        .find(|entry| entry.key == key)
        .map(|entry| entry.value.as_str())
}
