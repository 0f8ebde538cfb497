//! Secret type.
//!
//! Represents a resolved secret value together with the key it was looked up by.

use zeroize::Zeroizing;

/// A resolved secret.
///
/// The value is wiped from memory when the secret is dropped and never shows
/// up in `Debug` or `Display` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret {
    key: String,
    value: Zeroizing<String>,
}

impl Secret {
    /// Create a new secret from a lookup key and its plaintext value
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Zeroizing::new(value.into()),
        }
    }

    /// Lookup key the secret was resolved for
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Plaintext value
    pub fn expose(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secret")
            .field("key", &self.key)
            .field("value", &"<redacted>")
            .finish()
    }
}

impl std::fmt::Display for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key)
    }
}
