//! Capabilities the resolver consumes from the local network stack.
//!
//! Both are single-method traits so tests can substitute deterministic
//! doubles. The OS-backed implementations live in [`crate::system`].

use crate::error::Result;
use std::net::IpAddr;
use std::sync::Arc;

/// Returns the primary IP address of the local host.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; one provider may serve concurrent
/// resolutions.
pub trait DefaultIpProvider: Send + Sync {
    /// Look up the default IP for `selector`.
    ///
    /// # Arguments
    /// * `selector` - `"default"` or an implementation-defined key such as
    ///   an interface name
    ///
    /// # Errors
    /// `AddressError::LookupFailure` when no address can be determined.
    fn default_ip(&self, selector: &str) -> Result<String>;
}

/// Maps an IP address back to a hostname (PTR lookup).
pub trait ReverseLookup: Send + Sync {
    /// # Errors
    /// `AddressError::LookupFailure` when the address has no name.
    fn reverse_lookup(&self, ip: IpAddr) -> Result<String>;
}

impl<T: DefaultIpProvider + ?Sized> DefaultIpProvider for &T {
    fn default_ip(&self, selector: &str) -> Result<String> {
        (**self).default_ip(selector)
    }
}

impl<T: DefaultIpProvider + ?Sized> DefaultIpProvider for Arc<T> {
    fn default_ip(&self, selector: &str) -> Result<String> {
        (**self).default_ip(selector)
    }
}

impl<T: ReverseLookup + ?Sized> ReverseLookup for &T {
    fn reverse_lookup(&self, ip: IpAddr) -> Result<String> {
        (**self).reverse_lookup(ip)
    }
}

impl<T: ReverseLookup + ?Sized> ReverseLookup for Arc<T> {
    fn reverse_lookup(&self, ip: IpAddr) -> Result<String> {
        (**self).reverse_lookup(ip)
    }
}
