//! Terminal output helpers.
//!
//! stdout carries nothing but the secret; every diagnostic goes to stderr.
//!
//! Color scheme (respects NO_COLOR):
//! - Red: errors
//! - Cyan: hints

use console::style;

use crate::core::domain::Secret;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print the secret value on stdout, followed by a newline.
pub fn secret(secret: &Secret) {
    println!("{}", secret.expose());
}

/// Print the bare version number on stdout.
pub fn version() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

/// Print an error message to stderr (red).
///
/// Example: `✗ secret not found: 'smoketest', details: '404 Not Found'`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red().for_stderr(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ set GITLAB_TOKEN in the environment or in .env`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!(
            "{} {}",
            style("→").cyan().for_stderr(),
            style(msg).cyan().for_stderr()
        );
    } else {
        eprintln!("→ {}", msg);
    }
}
