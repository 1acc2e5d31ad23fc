//! Top-level CLI arguments and wiring.

use crate::commands::Command;
use anyhow::Context;
use bookie_net::NodeAddressConfig;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "bookie-addr", version, about = "Resolve a bookie's advertised address")]
pub struct CliConfig {
    /// JSON file with address configuration; flags override its values.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (RUST_LOG takes precedence).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl CliConfig {
    pub fn run(&self) -> anyhow::Result<()> {
        self.init_tracing();
        let base = self.base_config()?;
        let result = self.command.execute(base)?;
        println!("{}", result.render(self.json)?);
        Ok(())
    }

    /// Configuration from `--config`, or defaults.
    pub fn base_config(&self) -> anyhow::Result<NodeAddressConfig> {
        match &self.config {
            Some(path) => NodeAddressConfig::load(path)
                .with_context(|| format!("loading {}", path.display())),
            None => Ok(NodeAddressConfig::default()),
        }
    }

    fn init_tracing(&self) {
        let level = match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
        // Ignore the error if a subscriber is already installed.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = CliConfig::try_parse_from(["bookie-addr", "resolve", "--json", "-vv"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_missing_config_file() {
        let cli = CliConfig::try_parse_from([
            "bookie-addr",
            "--config",
            "/nonexistent/bookie.json",
            "show-config",
        ])
        .unwrap();
        assert!(cli.base_config().is_err());
    }

    #[test]
    fn test_subcommand_required() {
        assert!(CliConfig::try_parse_from(["bookie-addr"]).is_err());
    }
}
