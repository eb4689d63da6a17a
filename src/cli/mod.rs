//! CLI command definitions for yayconf
//!
//! This module defines the CLI structure using clap's derive macros.
//! The main entry point is the `Cli` struct which contains subcommands.

pub mod resolve;
pub mod sample;

use clap::{Parser, Subcommand};
use resolve::ResolveArgs;
use sample::SampleArgs;

/// Resolve YAML configuration from a schema, a config file and the environment
#[derive(Parser, Debug)]
#[command(name = "yayconf", author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Logging output: 0/off, 1/stdout, 2/stderr (default), or filename
    #[arg(short, long, default_value = "2", global = true)]
    pub log: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the resolved configuration
    Resolve(ResolveArgs),

    /// Print a sample configuration file built from schema defaults
    Sample(SampleArgs),
}
