//! Output formatting for resolved configuration.

use anyhow::Result;
use clap::ValueEnum;
use serde_yaml::{Mapping, Value};

/// Output format for the resolved mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// YAML mapping (default)
    #[default]
    Yaml,
    /// Pretty-printed JSON object
    Json,
}

/// Render a resolved mapping in the given format.
pub fn format_mapping(map: &Mapping, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => {
            if map.is_empty() {
                return Ok(String::from("{}\n"));
            }
            Ok(serde_yaml::to_string(map)?)
        }
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(&Value::Mapping(map.clone()))?;
            out.push('\n');
            Ok(out)
        }
    }
}
