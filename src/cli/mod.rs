//! Command-line interface.

pub mod output;

use clap::Parser;
use tracing::debug;

use crate::core::resolver::Resolver;
use crate::error::{Error, Result};

/// gitlab-vault - Resolve a secret from GitLab for summon.
#[derive(Parser, Debug)]
#[command(
    name = "gitlab-vault",
    about = "Resolve a secret from GitLab CI/CD variables or repository files",
    version,
    disable_version_flag = true,
    after_help = "Keys containing '/' are read from the repository, all others from CI/CD variables."
)]
pub struct Cli {
    /// Variable name (e.g., DATABASE_URL) or repository file path (e.g., certs/ca.pem)
    #[arg(required_unless_present = "version")]
    pub key: Option<String>,

    /// Enable debug output
    #[arg(long)]
    pub verbose: bool,

    /// Print version
    #[arg(short = 'v', long = "version", conflicts_with = "key")]
    pub version: bool,
}

/// Resolve the key and print the outcome.
///
/// A failed lookup is reported on stderr but is not an error: summon treats
/// a zero exit status with empty output as "use the default value".
///
/// Without a key only the version is printed and no configuration is read.
///
/// # Errors
///
/// Returns `ConfigError` if configuration is missing or invalid, including
/// when the backend the key needs has no endpoint.
pub fn execute(cli: &Cli) -> Result<()> {
    let Some(key) = cli.key.as_deref() else {
        output::version();
        return Ok(());
    };

    let resolver = Resolver::from_env()?;

    match resolver.resolve(key) {
        Ok(secret) => output::secret(&secret),
        Err(Error::Fetch(e)) => {
            debug!(key = e.key(), not_found = e.is_not_found(), "lookup failed");
            output::error(&e.to_string());
        }
        Err(e) => return Err(e),
    }

    Ok(())
}
