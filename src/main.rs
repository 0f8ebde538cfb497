//! gitlab-vault - Summon provider for GitLab-hosted secrets.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use gitlab_vault::cli::output;
use gitlab_vault::cli::{execute, Cli};
use gitlab_vault::core::constants;
use gitlab_vault::error::{ConfigError, Error};

fn main() {
    let cli = Cli::parse();

    // Logs share stderr with diagnostics; stdout is reserved for the secret
    let filter = EnvFilter::try_from_env(constants::LOG_VAR).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("gitlab_vault=debug")
        } else {
            EnvFilter::new("gitlab_vault=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(&cli) {
        let suggestion = match &e {
            Error::Config(ConfigError::Missing(var)) => Some(format!(
                "set {} in the environment or in {}",
                var,
                constants::ENV_FILE
            )),
            Error::Config(ConfigError::EnvFile(_)) => {
                Some(format!("check the syntax of {}", constants::ENV_FILE))
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(&hint);
        }
        std::process::exit(1);
    }
}
