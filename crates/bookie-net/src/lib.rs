//! Advertised-address resolution for bookie nodes.
//!
//! This crate decides which network identity a storage node publishes to the
//! rest of the cluster:
//! - Configuration (`NodeAddressConfig`)
//! - Address model and host classification
//! - Pluggable default-IP and reverse-lookup capabilities
//! - The `AddressResolver` decision procedure

pub mod config;
pub mod error;
pub mod network;
pub mod node;
pub mod provider;
pub mod resolver;
pub mod system;

pub use config::{NodeAddressConfig, DEFAULT_SERVICE_SELECTOR};
pub use error::{AddressError, Result};
pub use node::{NodeAddress, DEFAULT_BOOKIE_PORT};
pub use network::HostKind;
pub use provider::{DefaultIpProvider, ReverseLookup};
pub use resolver::AddressResolver;
pub use system::{SystemDefaultIp, SystemReverseLookup};
