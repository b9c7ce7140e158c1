// SPDX-License-Identifier: Apache-2.0

//! Command-line interface for the Vulnpix server.

use clap::Parser;

/// Intentionally vulnerable photo service for security training.
///
/// Do not expose this server beyond a training network.
#[derive(Debug, Parser)]
#[command(name = "vulnpix", version, about)]
pub struct Cli {
    /// Bind address override, e.g. 127.0.0.1:9000
    #[arg(long)]
    pub bind: Option<String>,

    /// Database URL override, e.g. sqlite://vulnpix.db
    #[arg(long)]
    pub database_url: Option<String>,

    /// Insert demo photos when the photo table is empty
    #[arg(long)]
    pub seed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_overrides() {
        let cli = Cli::parse_from([
            "vulnpix",
            "--bind",
            "0.0.0.0:9000",
            "--database-url",
            "sqlite::memory:",
            "--seed",
        ]);
        assert_eq!(cli.bind.as_deref(), Some("0.0.0.0:9000"));
        assert_eq!(cli.database_url.as_deref(), Some("sqlite::memory:"));
        assert!(cli.seed);
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["vulnpix"]);
        assert!(cli.bind.is_none());
        assert!(cli.database_url.is_none());
        assert!(!cli.seed);
    }
}
