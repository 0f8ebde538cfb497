//! Lookup key classification.
//!
//! The shape of the key alone decides which backend answers it: anything
//! containing a `/` is a repository file path, everything else is the name
//! of a CI/CD variable.

/// Backend a lookup key is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// CI/CD variable name, e.g. `DATABASE_URL`.
    Variable,
    /// Repository file path, e.g. `certificates/ca.pem`.
    File,
}

impl KeyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyKind::Variable => "variable",
            KeyKind::File => "file",
        }
    }
}

impl std::fmt::Display for KeyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a lookup key.
pub fn classify(key: &str) -> KeyKind {
    if key.contains('/') {
        KeyKind::File
    } else {
        KeyKind::Variable
    }
}
