//! Configuration loader with per-field priority resolution.
//!
//! Loads the schema and configuration file, optionally reads the environment,
//! and picks each field's value from the source its schema entry names.

use super::env::{EnvSource, ProcessEnv, config_from_env};
use super::files::read_config;
use super::schema::{Priority, Schema, SchemaEntry};
use crate::error::{ConfigError, ConfigResult};
use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Source that supplied a resolved value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    /// Schema default
    Default,
    /// Configuration file
    Config,
    /// Environment variable
    Environment,
    /// Nothing applied and defaults are disabled
    Unset,
}

impl std::fmt::Display for ValueSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueSource::Default => write!(f, "default"),
            ValueSource::Config => write!(f, "config"),
            ValueSource::Environment => write!(f, "environment"),
            ValueSource::Unset => write!(f, "unset"),
        }
    }
}

/// Where to load configuration from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSources {
    /// Schema file (no schema when `None`)
    pub schema_file: Option<PathBuf>,
    /// Configuration file (no file values when `None`)
    pub config_file: Option<PathBuf>,
    /// Whether environment-priority fields read the environment
    pub read_from_env: bool,
    /// Whether schema defaults are used as the last fallback
    pub use_defaults: bool,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            schema_file: None,
            config_file: None,
            read_from_env: false,
            use_defaults: true,
        }
    }
}

impl ConfigSources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_schema_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.schema_file = Some(path.into());
        self
    }

    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    pub fn read_from_env(mut self, enabled: bool) -> Self {
        self.read_from_env = enabled;
        self
    }

    pub fn use_defaults(mut self, enabled: bool) -> Self {
        self.use_defaults = enabled;
        self
    }
}

/// A loaded and resolved configuration.
#[derive(Debug, Clone)]
pub struct Configuration {
    sources: ConfigSources,
    schema: Schema,
    resolved: Mapping,
}

impl Configuration {
    /// Load and resolve using the process environment.
    pub fn load(sources: ConfigSources) -> ConfigResult<Self> {
        Self::load_with_env(sources, &ProcessEnv)
    }

    /// Load and resolve using an explicit environment.
    pub fn load_with_env<E: EnvSource + ?Sized>(
        sources: ConfigSources,
        env: &E,
    ) -> ConfigResult<Self> {
        let schema = Schema::load(sources.schema_file.as_deref())?;
        let file_values = read_config(sources.config_file.as_deref())?;

        let env_values = if sources.read_from_env {
            config_from_env(&schema, env)
        } else {
            BTreeMap::new()
        };

        let resolved = resolve(&schema, &file_values, &env_values, sources.use_defaults);

        Ok(Self {
            sources,
            schema,
            resolved,
        })
    }

    /// Resolved values, one per distinct schema field, in schema order.
    pub fn as_map(&self) -> &Mapping {
        &self.resolved
    }

    /// Consume the configuration and return the resolved mapping.
    pub fn into_map(self) -> Mapping {
        self.resolved
    }

    /// Resolved value for a field.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.resolved.get(name)
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn sources(&self) -> &ConfigSources {
        &self.sources
    }

    pub fn schema_file(&self) -> Option<&Path> {
        self.sources.schema_file.as_deref()
    }

    pub fn config_file(&self) -> Option<&Path> {
        self.sources.config_file.as_deref()
    }

    /// Deserialize the resolved mapping into a caller-defined type.
    pub fn deserialize<T: DeserializeOwned>(&self) -> ConfigResult<T> {
        serde_yaml::from_value(Value::Mapping(self.resolved.clone()))
            .map_err(ConfigError::Deserialize)
    }
}

/// Pick a value for every schema entry.
///
/// A field name repeated in the schema keeps its first definition; later
/// duplicates are skipped with a warning.
///
/// `env_values` holds the environment mapping; pass an empty map when
/// environment reading is disabled, and environment-priority fields fall back
/// to the configuration file.
pub fn resolve(
    schema: &Schema,
    file_values: &Mapping,
    env_values: &BTreeMap<String, Option<String>>,
    use_defaults: bool,
) -> Mapping {
    let mut resolved = Mapping::with_capacity(schema.len());

    for entry in schema {
        if resolved.contains_key(entry.name.as_str()) {
            warn!(field = %entry.name, "Duplicate schema field, keeping the first definition");
            continue;
        }
        let (value, source) = resolve_entry(entry, file_values, env_values, use_defaults);
        debug!(field = %entry.name, priority = %entry.priority, %source, "Resolved field");
        resolved.insert(Value::String(entry.name.clone()), value);
    }

    resolved
}

fn resolve_entry(
    entry: &SchemaEntry,
    file_values: &Mapping,
    env_values: &BTreeMap<String, Option<String>>,
    use_defaults: bool,
) -> (Value, ValueSource) {
    let from_env = || {
        env_values
            .get(&entry.name)
            .and_then(Option::as_ref)
            .map(|v| (Value::String(v.clone()), ValueSource::Environment))
    };
    let from_file = || {
        file_values
            .get(entry.name.as_str())
            .map(|v| (v.clone(), ValueSource::Config))
    };
    let fallback = || {
        if use_defaults {
            (entry.default.clone(), ValueSource::Default)
        } else {
            (Value::Null, ValueSource::Unset)
        }
    };

    match entry.priority {
        Priority::Default => (entry.default.clone(), ValueSource::Default),
        Priority::Config => from_file().unwrap_or_else(fallback),
        Priority::Environment => from_env().or_else(from_file).unwrap_or_else(fallback),
    }
}
