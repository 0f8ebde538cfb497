//! Secret backends.
//!
//! GitLab offers two places to keep secrets:
//!
//! - **Variables**: the project's CI/CD variables, listed in one request.
//! - **Files**: files committed to a repository, one request per file.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `Backend` trait
//! 2. Add the implementation in a new file
//! 3. Route to it from `Resolver::backend`

use crate::core::domain::Secret;
use crate::core::transport::Transport;
use crate::error::FetchError;

mod files;
mod variables;

pub use files::FileStore;
pub use variables::VariableStore;

/// A place secrets can be fetched from.
pub trait Backend {
    /// Backend name for log output.
    fn name(&self) -> &'static str;

    /// Fetch the secret stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::NotFound` when the backend answered without the
    /// secret, `FetchError::Transport` or `FetchError::Parse` when it could
    /// not be asked or its answer could not be read.
    fn fetch(&self, transport: &Transport, token: &str, key: &str) -> Result<Secret, FetchError>;
}
