//! yayconf: yet another YAML configuration library
//!
//! This module exports the resolver and the pieces of the command-line tool.

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;

pub use config::{ConfigSources, Configuration, Priority, Schema, SchemaEntry};
pub use error::{ConfigError, ConfigResult};
