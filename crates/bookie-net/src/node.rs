//! The advertised address of a bookie node.
//!
//! A `NodeAddress` is what the registration layer publishes for this node:
//! a host (IP literal or hostname) and, optionally, the bookie port.

use crate::error::{AddressError, Result};
use crate::network::{self, HostKind};
use serde::Serialize;
use std::fmt;
use std::net::Ipv6Addr;
use std::str::FromStr;

/// Port bookies listen on unless configured otherwise.
pub const DEFAULT_BOOKIE_PORT: u16 = 3181;

/// Network identity a node advertises to its peers.
///
/// # Invariants
///
/// - `host` is never empty
/// - `host` is either a parseable IP literal or a syntactically valid hostname
///
/// The host string is stored exactly as given; no case folding or
/// normalization is applied.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize)]
pub struct NodeAddress {
    host: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    port: Option<u16>,
}

impl NodeAddress {
    /// Construct an address without a port, validating the host.
    pub fn new(host: impl Into<String>) -> Result<Self> {
        let host = host.into();
        if network::classify_host(&host).is_none() {
            return Err(AddressError::InvalidAddress(format!(
                "{host:?} is neither an IP literal nor a valid hostname"
            )));
        }
        Ok(Self { host, port: None })
    }

    /// Attach (or replace) the port.
    pub fn with_port(mut self, port: impl Into<Option<u16>>) -> Self {
        self.port = port.into();
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    pub fn host_kind(&self) -> HostKind {
        // Construction guarantees classification succeeds.
        network::classify_host(&self.host).unwrap_or(HostKind::Hostname)
    }

    pub fn is_ip_literal(&self) -> bool {
        self.host_kind() == HostKind::IpLiteral
    }

    pub fn is_loopback(&self) -> bool {
        network::is_loopback_host(&self.host)
    }

    fn needs_brackets(&self) -> bool {
        self.host.contains(':') && !self.host.starts_with('[')
    }
}

impl fmt::Display for NodeAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.port {
            Some(port) if self.needs_brackets() => write!(f, "[{}]:{}", self.host, port),
            Some(port) => write!(f, "{}:{}", self.host, port),
            None => write!(f, "{}", self.host),
        }
    }
}

impl FromStr for NodeAddress {
    type Err = AddressError;

    /// Parses `host`, `host:port`, `[v6]` and `[v6]:port`.
    fn from_str(s: &str) -> Result<Self> {
        let (host, port) = if let Some(rest) = s.strip_prefix('[') {
            let (inner, tail) = rest
                .split_once(']')
                .ok_or_else(|| AddressError::InvalidAddress(format!("unclosed bracket in {s:?}")))?;
            let port = match tail {
                "" => None,
                _ => Some(tail.strip_prefix(':').ok_or_else(|| {
                    AddressError::InvalidAddress(format!("unexpected {tail:?} after ']' in {s:?}"))
                })?),
            };
            if inner.parse::<Ipv6Addr>().is_err() {
                return Err(AddressError::InvalidAddress(format!(
                    "brackets are only allowed around IPv6 literals: {s:?}"
                )));
            }
            (inner, port)
        } else if s.matches(':').count() > 1 {
            // Bare IPv6 literal, no room for a port.
            (s, None)
        } else {
            match s.split_once(':') {
                Some((host, port)) => (host, Some(port)),
                None => (s, None),
            }
        };

        let port = port
            .map(|p| {
                p.parse::<u16>()
                    .map_err(|e| AddressError::InvalidAddress(format!("bad port {p:?}: {e}")))
            })
            .transpose()?;

        Ok(NodeAddress::new(host)?.with_port(port))
    }
}
