//! Constants used throughout gitlab-vault.
//!
//! Centralizes environment variable names and GitLab API details.

/// Access token for the GitLab API.
pub const TOKEN_VAR: &str = "GITLAB_TOKEN";

/// Full URL of the CI/CD variables listing,
/// e.g. `https://gitlab.example.com/api/v4/projects/42/variables`.
pub const VARIABLES_URL_VAR: &str = "GITLAB_VAULT_API";

/// Base URL of the repository files API, including the trailing slash,
/// e.g. `https://gitlab.example.com/api/v4/projects/42/repository/files/`.
pub const FILES_URL_VAR: &str = "GITLAB_VAULT_STORE";

/// Request timeout in whole seconds.
pub const TIMEOUT_VAR: &str = "GITLAB_VAULT_TIMEOUT_SECS";

/// Opt-in switch for TLS certificate verification.
pub const TLS_VERIFY_VAR: &str = "GITLAB_VAULT_TLS_VERIFY";

/// Tracing filter directive.
pub const LOG_VAR: &str = "GITLAB_VAULT_LOG";

/// Dotenv file consulted when a variable is missing from the environment.
pub const ENV_FILE: &str = ".env";

/// Header GitLab reads personal/project access tokens from.
pub const TOKEN_HEADER: &str = "PRIVATE-TOKEN";

/// Branch every repository file is read from.
pub const DEFAULT_REF: &str = "main";

/// Timeout applied when `GITLAB_VAULT_TIMEOUT_SECS` is unset.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
