//! Resolve subcommand
//!
//! Loads the schema and configuration file, merges them with the environment
//! and prints the result.

use crate::config::{ConfigSources, Configuration};
use crate::format::{OutputFormat, format_mapping};
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// Arguments for the resolve subcommand
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Schema file listing the known fields
    #[arg(short, long, value_name = "FILE", env = "YAYCONF_SCHEMA")]
    pub schema: Option<PathBuf>,

    /// YAML configuration file
    #[arg(short, long, value_name = "FILE", env = "YAYCONF_CONFIG")]
    pub config: Option<PathBuf>,

    /// Read environment-priority fields from the environment
    #[arg(short, long)]
    pub env: bool,

    /// Do not fall back to schema defaults for unresolved fields
    #[arg(long)]
    pub no_defaults: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,
}

impl ResolveArgs {
    pub fn sources(&self) -> ConfigSources {
        ConfigSources {
            schema_file: self.schema.clone(),
            config_file: self.config.clone(),
            read_from_env: self.env,
            use_defaults: !self.no_defaults,
        }
    }
}

/// Execute the resolve command
pub fn run(args: &ResolveArgs) -> Result<()> {
    let config = Configuration::load(args.sources()).context("Failed to load configuration")?;
    info!(
        fields = config.as_map().len(),
        read_from_env = args.env,
        "Resolved configuration"
    );

    print!("{}", format_mapping(config.as_map(), args.format)?);
    Ok(())
}
