//! Operator tool for inspecting a bookie's advertised address.
//!
//! Provides commands for:
//! - Resolving the address this host would advertise
//! - Classifying a host string (IP literal / hostname, loopback)
//! - Printing the effective address configuration

pub mod commands;
pub mod config;

pub use commands::{Command, CommandResult};
pub use config::CliConfig;
