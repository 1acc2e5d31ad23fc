//! Advertised-address resolution.
//!
//! # Decision procedure
//!
//! 1. **Explicit**: a non-blank `advertised_address` is published exactly as
//!    written, after a loopback check gated by `allow_loopback`.
//! 2. **Auto-detect**: otherwise the default-IP provider is queried once with
//!    `service_selector`. The raw IP is published as is, or, in hostname
//!    mode, replaced by its reverse-resolved name.
//!
//! Loopback safety applies only to the explicit path. Auto-detected
//! addresses come from the local network stack and are published even when
//! they are loopback.
//!
//! Resolution is stateless: nothing is cached between calls and every
//! failure is returned to the caller without retry.

use crate::config::NodeAddressConfig;
use crate::error::{AddressError, Result};
use crate::network::{is_loopback_host, parse_ip_literal};
use crate::node::NodeAddress;
use crate::provider::{DefaultIpProvider, ReverseLookup};
use crate::system::{SystemDefaultIp, SystemReverseLookup};
use tracing::{debug, warn};

/// Resolves the address a node advertises to the cluster.
///
/// Generic over its two capabilities so tests can inject doubles.
#[derive(Debug, Clone)]
pub struct AddressResolver<P, R> {
    provider: P,
    reverse: R,
}

impl AddressResolver<SystemDefaultIp, SystemReverseLookup> {
    /// Resolver backed by the operating system's network stack.
    pub fn system() -> Self {
        Self::new(SystemDefaultIp::new(), SystemReverseLookup::new())
    }
}

impl<P, R> AddressResolver<P, R>
where
    P: DefaultIpProvider,
    R: ReverseLookup,
{
    pub fn new(provider: P, reverse: R) -> Self {
        Self { provider, reverse }
    }

    /// Resolve the advertised address for `config`.
    ///
    /// # Errors
    ///
    /// - `UnsafeLoopbackAddress` if the explicit address is loopback and
    ///   `allow_loopback` is false
    /// - `InvalidAddress` if the explicit address is not a valid host
    /// - `LookupFailure` if the provider or the reverse lookup fails
    pub fn resolve(&self, config: &NodeAddressConfig) -> Result<NodeAddress> {
        let address = match config.explicit_address() {
            Some(explicit) => self.resolve_explicit(explicit, config.allow_loopback)?,
            None => self.resolve_detected(config)?,
        };
        let address = address.with_port(config.port);
        debug!(%address, "resolved advertised address");
        Ok(address)
    }

    fn resolve_explicit(&self, address: &str, allow_loopback: bool) -> Result<NodeAddress> {
        // Surrounding whitespace must not hide a loopback value.
        if is_loopback_host(address.trim()) && !allow_loopback {
            warn!(address, "refusing loopback advertised address");
            return Err(AddressError::UnsafeLoopbackAddress {
                address: address.to_string(),
            });
        }
        debug!(address, "using configured advertised address");
        NodeAddress::new(address)
    }

    fn resolve_detected(&self, config: &NodeAddressConfig) -> Result<NodeAddress> {
        let selector = config.service_selector.as_str();
        let raw = self.provider.default_ip(selector)?;
        let ip = parse_ip_literal(&raw).ok_or_else(|| {
            AddressError::lookup(selector, format!("provider returned non-IP value {raw:?}"))
        })?;
        debug!(selector, %ip, "detected default ip");

        if !config.use_hostname_as_identity {
            return NodeAddress::new(raw);
        }

        let mut hostname = self.reverse.reverse_lookup(ip)?;

        // Hostname mode must never publish an IP. Checked on the full name,
        // since truncating "10.0.0.1" would leave a valid-looking label.
        if parse_ip_literal(&hostname).is_some() {
            return Err(AddressError::lookup(
                ip.to_string(),
                format!("reverse lookup returned IP literal {hostname:?}"),
            ));
        }
        if config.use_short_hostname {
            if let Some((short, _)) = hostname.split_once('.') {
                hostname = short.to_string();
            }
        }
        NodeAddress::new(hostname.as_str()).map_err(|_| {
            AddressError::lookup(
                ip.to_string(),
                format!("reverse lookup returned invalid hostname {hostname:?}"),
            )
        })
    }
}
