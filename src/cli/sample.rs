//! Sample subcommand

use crate::config::{ConfigSources, Configuration};
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the sample subcommand
#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Schema file listing the known fields
    #[arg(short, long, value_name = "FILE", env = "YAYCONF_SCHEMA")]
    pub schema: PathBuf,
}

/// Execute the sample command
pub fn run(args: &SampleArgs) -> Result<()> {
    let sources = ConfigSources::new().with_schema_file(&args.schema);
    let config = Configuration::load(sources).context("Failed to load schema")?;
    config
        .print_config_file()
        .context("Failed to write sample configuration")
}
