//! Subcommands and their results.

use anyhow::Context;
use bookie_net::network::{classify_host, is_loopback_host};
use bookie_net::{AddressResolver, HostKind, NodeAddress, NodeAddressConfig};
use clap::{Args, Subcommand};
use serde_json::json;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve the address this node would advertise.
    Resolve(Overrides),
    /// Report whether HOST is an IP literal or hostname, and if it is loopback.
    Classify {
        host: String,
    },
    /// Print the effective address configuration.
    ShowConfig(Overrides),
}

/// Flags layered over the configuration file.
#[derive(Debug, Default, Args)]
pub struct Overrides {
    /// Explicit address to advertise instead of auto-detecting.
    #[arg(long, value_name = "HOST")]
    pub advertised_address: Option<String>,

    /// Accept a loopback advertised address.
    #[arg(long)]
    pub allow_loopback: bool,

    /// Advertise the reverse-resolved hostname instead of the IP.
    #[arg(long)]
    pub use_hostname: bool,

    /// With --use-hostname, keep only the first label.
    #[arg(long)]
    pub short_hostname: bool,

    /// Interface to take the address from (default: the host's primary address).
    #[arg(long, value_name = "NAME")]
    pub interface: Option<String>,

    /// Bookie port to append.
    #[arg(long)]
    pub port: Option<u16>,
}

impl Overrides {
    pub fn apply(&self, mut config: NodeAddressConfig) -> NodeAddressConfig {
        if let Some(address) = &self.advertised_address {
            config.advertised_address = Some(address.clone());
        }
        if let Some(interface) = &self.interface {
            config.service_selector = interface.clone();
        }
        if self.port.is_some() {
            config.port = self.port;
        }
        config.allow_loopback |= self.allow_loopback;
        config.use_hostname_as_identity |= self.use_hostname;
        config.use_short_hostname |= self.short_hostname;
        config
    }
}

#[derive(Debug)]
pub enum CommandResult {
    Address(NodeAddress),
    Classification {
        host: String,
        kind: Option<HostKind>,
        loopback: bool,
    },
    Config(NodeAddressConfig),
}

impl CommandResult {
    pub fn render(&self, as_json: bool) -> anyhow::Result<String> {
        if !as_json {
            return Ok(match self {
                CommandResult::Address(address) => address.to_string(),
                CommandResult::Classification {
                    host,
                    kind,
                    loopback,
                } => {
                    let kind = kind.map_or_else(|| "invalid".to_string(), |k| k.to_string());
                    format!("{host}: {kind}, loopback={loopback}")
                }
                CommandResult::Config(config) => serde_json::to_string_pretty(config)?,
            });
        }

        let value = match self {
            CommandResult::Address(address) => json!({
                "address": address.to_string(),
                "host": address.host(),
                "port": address.port(),
                "kind": address.host_kind().to_string(),
            }),
            CommandResult::Classification {
                host,
                kind,
                loopback,
            } => json!({
                "host": host,
                "kind": kind.map(|k| k.to_string()),
                "loopback": loopback,
            }),
            CommandResult::Config(config) => serde_json::to_value(config)?,
        };
        Ok(serde_json::to_string_pretty(&value)?)
    }
}

impl Command {
    pub fn execute(&self, base: NodeAddressConfig) -> anyhow::Result<CommandResult> {
        match self {
            Command::Resolve(overrides) => {
                let config = overrides.apply(base);
                tracing::debug!(?config, "resolving");
                let address = AddressResolver::system()
                    .resolve(&config)
                    .context("failed to resolve advertised address")?;
                Ok(CommandResult::Address(address))
            }
            Command::Classify { host } => Ok(CommandResult::Classification {
                host: host.clone(),
                kind: classify_host(host),
                loopback: is_loopback_host(host),
            }),
            Command::ShowConfig(overrides) => Ok(CommandResult::Config(overrides.apply(base))),
        }
    }
}
