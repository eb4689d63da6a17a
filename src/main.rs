//! yayconf
//!
//! Resolves configuration from a schema, a YAML file and the environment.

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use yayconf::cli::{Cli, Command, resolve, sample};
use yayconf::logging::{LogTarget, init_logging};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&LogTarget::parse(&cli.log), cli.verbose)?;
    debug!(command = ?cli.command, "Starting");

    match &cli.command {
        Command::Resolve(args) => resolve::run(args),
        Command::Sample(args) => sample::run(args),
    }
}
