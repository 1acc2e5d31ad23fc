//! Address configuration for a bookie node.

use crate::error::{AddressError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Selector that asks the default-IP provider for the host's primary address.
pub const DEFAULT_SERVICE_SELECTOR: &str = "default";

/// Inputs to a single address resolution.
///
/// Every field has a default, so a JSON document only needs to name the
/// options it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeAddressConfig {
    /// Host the operator wants published. Absent or blank means auto-detect.
    pub advertised_address: Option<String>,

    /// Whether a loopback advertised address is acceptable.
    pub allow_loopback: bool,

    /// Auto-detect only: publish the reverse-resolved hostname instead of the IP.
    pub use_hostname_as_identity: bool,

    /// Hostname mode only: keep just the first label of the resolved name.
    pub use_short_hostname: bool,

    /// Passed through to the default-IP provider (`"default"` or an interface name).
    pub service_selector: String,

    /// Bookie port attached to the resolved address.
    pub port: Option<u16>,
}

impl Default for NodeAddressConfig {
    fn default() -> Self {
        Self {
            advertised_address: None,
            allow_loopback: false,
            use_hostname_as_identity: false,
            use_short_hostname: false,
            service_selector: DEFAULT_SERVICE_SELECTOR.to_string(),
            port: None,
        }
    }
}

impl NodeAddressConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_advertised_address(mut self, address: impl Into<String>) -> Self {
        self.advertised_address = Some(address.into());
        self
    }

    pub fn with_allow_loopback(mut self, allow: bool) -> Self {
        self.allow_loopback = allow;
        self
    }

    pub fn with_hostname_identity(mut self, enabled: bool) -> Self {
        self.use_hostname_as_identity = enabled;
        self
    }

    pub fn with_short_hostname(mut self, enabled: bool) -> Self {
        self.use_short_hostname = enabled;
        self
    }

    pub fn with_service_selector(mut self, selector: impl Into<String>) -> Self {
        self.service_selector = selector.into();
        self
    }

    pub fn with_port(mut self, port: impl Into<Option<u16>>) -> Self {
        self.port = port.into();
        self
    }

    /// The advertised address, if one is configured and not blank.
    ///
    /// The returned string is the configured value untouched; blankness is
    /// only used to decide between the explicit and auto-detect paths.
    pub fn explicit_address(&self) -> Option<&str> {
        self.advertised_address
            .as_deref()
            .filter(|addr| !addr.trim().is_empty())
    }

    /// Parse a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| AddressError::Config(e.to_string()))
    }

    /// Load a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AddressError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&content)
    }
}
