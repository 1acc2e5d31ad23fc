//! Error types for address resolution.

use thiserror::Error;

/// Result type alias for the address resolution library.
pub type Result<T> = std::result::Result<T, AddressError>;

/// Errors that can occur while resolving a node's advertised address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// Explicit advertised address is loopback and loopback is not allowed
    #[error(
        "advertised address {address} is a loopback address, which is forbidden \
         unless allow_loopback is set"
    )]
    UnsafeLoopbackAddress { address: String },

    /// Local network stack could not produce an address
    #[error("address lookup failed for {selector}: {reason}")]
    LookupFailure { selector: String, reason: String },

    /// Host or socket string is malformed
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(String),
}

impl AddressError {
    pub fn lookup(selector: impl Into<String>, reason: impl ToString) -> Self {
        AddressError::LookupFailure {
            selector: selector.into(),
            reason: reason.to_string(),
        }
    }

    pub fn is_unsafe_loopback(&self) -> bool {
        matches!(self, AddressError::UnsafeLoopbackAddress { .. })
    }

    pub fn is_lookup_failure(&self) -> bool {
        matches!(self, AddressError::LookupFailure { .. })
    }
}
