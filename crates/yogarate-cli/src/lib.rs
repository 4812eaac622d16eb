//! Command-line adapter for yogarate.
//!
//! Parses arguments, composes the store and service in [`bootstrap`], and
//! routes each subcommand to a handler that prints to the terminal.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use tempfile as _;

// dotenvy is only called from main.rs
use dotenvy as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap, bootstrap_with, init_tracing};
pub use commands::{Commands, RateArgs};
pub use error::CliError;
pub use parser::Cli;
