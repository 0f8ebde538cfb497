//! gitlab-vault - Resolve secrets from GitLab for summon.
//!
//! A lookup key names either a CI/CD variable (`DATABASE_URL`) or a file in
//! a repository (`certificates/ca.pem`); any key containing a `/` is a file.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   └── output        # stdout/stderr helpers
//! └── core/             # Core library components
//!     ├── config        # Environment and .env configuration
//!     ├── key           # Lookup key classification
//!     ├── path          # Files API path encoding
//!     ├── transport     # Authenticated HTTP client
//!     ├── backend/      # Secret backends
//!     │   ├── mod       # Backend trait
//!     │   ├── variables # CI/CD variables
//!     │   └── files     # Repository files
//!     └── resolver      # Key → backend dispatch
//! ```
//!
//! # Example
//!
//! ```no_run
//! use gitlab_vault::core::resolver::Resolver;
//!
//! let resolver = Resolver::from_env()?;
//! let secret = resolver.resolve("DATABASE_URL")?;
//! println!("{}", secret.expose());
//! # Ok::<(), gitlab_vault::error::Error>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;
