//! Providers backed by the operating system's network stack.

use crate::config::DEFAULT_SERVICE_SELECTOR;
use crate::error::{AddressError, Result};
use crate::provider::{DefaultIpProvider, ReverseLookup};
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::Resolver;
use std::net::{IpAddr, ToSocketAddrs};
use tracing::trace;

/// Default-IP provider that asks the OS.
///
/// - `"default"`: resolve the local hostname and take its first address
/// - anything else: treat the selector as an interface name (`eth0`, `en0`)
///
/// IPv4 addresses are preferred over IPv6 in both cases.
#[derive(Debug, Default, Clone)]
pub struct SystemDefaultIp {
    _private: (),
}

impl SystemDefaultIp {
    pub fn new() -> Self {
        Self::default()
    }

    fn local_host_ip(&self) -> Result<IpAddr> {
        let name = hostname::get()
            .map_err(|e| AddressError::lookup(DEFAULT_SERVICE_SELECTOR, e))?
            .into_string()
            .map_err(|_| {
                AddressError::lookup(DEFAULT_SERVICE_SELECTOR, "local hostname is not valid UTF-8")
            })?;
        trace!(hostname = %name, "resolving local hostname");

        let addrs = (name.as_str(), 0)
            .to_socket_addrs()
            .map_err(|e| AddressError::lookup(DEFAULT_SERVICE_SELECTOR, format!("{name}: {e}")))?
            .map(|addr| addr.ip());

        prefer_ipv4(addrs).ok_or_else(|| {
            AddressError::lookup(
                DEFAULT_SERVICE_SELECTOR,
                format!("hostname {name} resolved to no addresses"),
            )
        })
    }

    fn interface_ip(&self, interface: &str) -> Result<IpAddr> {
        let addrs = if_addrs::get_if_addrs()
            .map_err(|e| AddressError::lookup(interface, e))?
            .into_iter()
            .filter(|iface| iface.name == interface)
            .map(|iface| iface.ip());

        prefer_ipv4(addrs).ok_or_else(|| {
            AddressError::lookup(interface, "no such interface, or it has no address")
        })
    }
}

impl DefaultIpProvider for SystemDefaultIp {
    fn default_ip(&self, selector: &str) -> Result<String> {
        let ip = if selector == DEFAULT_SERVICE_SELECTOR {
            self.local_host_ip()?
        } else {
            self.interface_ip(selector)?
        };
        trace!(selector, %ip, "default ip");
        Ok(ip.to_string())
    }
}

/// First IPv4 address if there is one, otherwise the first address.
fn prefer_ipv4(addrs: impl IntoIterator<Item = IpAddr>) -> Option<IpAddr> {
    let addrs: Vec<IpAddr> = addrs.into_iter().collect();
    addrs
        .iter()
        .find(|ip| ip.is_ipv4())
        .or_else(|| addrs.first())
        .copied()
}

/// PTR lookups through hickory's synchronous resolver.
///
/// A resolver is built for each lookup, from the system configuration
/// unless an explicit one was supplied.
#[derive(Debug, Default, Clone)]
pub struct SystemReverseLookup {
    config: Option<(ResolverConfig, ResolverOpts)>,
}

impl SystemReverseLookup {
    /// Use `/etc/resolv.conf` (or the platform equivalent).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ResolverConfig, opts: ResolverOpts) -> Self {
        Self {
            config: Some((config, opts)),
        }
    }

    fn resolver(&self) -> Result<Resolver> {
        let resolver = match &self.config {
            Some((config, opts)) => Resolver::new(config.clone(), opts.clone()),
            None => Resolver::from_system_conf(),
        };
        resolver.map_err(|e| AddressError::lookup("resolver configuration", e))
    }
}

impl ReverseLookup for SystemReverseLookup {
    fn reverse_lookup(&self, ip: IpAddr) -> Result<String> {
        let response = self
            .resolver()?
            .reverse_lookup(ip)
            .map_err(|e| AddressError::lookup(ip.to_string(), e))?;

        let name = response
            .iter()
            .next()
            .map(|name| name.to_string().trim_end_matches('.').to_string())
            .ok_or_else(|| AddressError::lookup(ip.to_string(), "no PTR record"))?;
        trace!(%ip, hostname = %name, "reverse lookup");
        Ok(name)
    }
}
