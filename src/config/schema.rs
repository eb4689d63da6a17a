//! Schema types.
//!
//! A schema is an ordered list of field descriptors. Each descriptor names a
//! field, gives its default, optionally names the environment variable that can
//! supply it, and says which source wins.

use super::files::read_yaml;
use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::path::Path;
use tracing::debug;

/// Which source supplies a field's final value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// The schema default always wins (default)
    #[default]
    Default,
    /// The configuration file wins
    Config,
    /// The environment wins, when environment reading is enabled
    Environment,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Default => "default",
            Priority::Config => "config",
            Priority::Environment => "environment",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaEntry {
    /// Field name, also the key looked up in the configuration file.
    pub name: String,

    /// Value used when no higher-priority source applies.
    #[serde(default)]
    pub default: Value,

    /// Example configuration-file value. Informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Value>,

    /// Name of the environment variable that supplies this field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,

    #[serde(default)]
    pub priority: Priority,
}

impl SchemaEntry {
    pub fn new(name: impl Into<String>, default: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            default: default.into(),
            config: None,
            environment: None,
            priority: Priority::Default,
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_environment(mut self, var: impl Into<String>) -> Self {
        self.environment = Some(var.into());
        self
    }

    pub fn with_config(mut self, value: impl Into<Value>) -> Self {
        self.config = Some(value.into());
        self
    }
}

/// Ordered sequence of schema entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    entries: Vec<SchemaEntry>,
}

impl Schema {
    pub fn new(entries: Vec<SchemaEntry>) -> Self {
        Self { entries }
    }

    /// Load a schema file. `None` gives an empty schema.
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let entries = match read_yaml(path)? {
            Value::Null => Vec::new(),
            value @ Value::Sequence(_) => {
                serde_yaml::from_value(value).map_err(|source| ConfigError::Yaml {
                    path: path.to_path_buf(),
                    source,
                })?
            }
            _ => {
                return Err(ConfigError::InvalidDocument {
                    path: path.to_path_buf(),
                    expected: "sequence",
                });
            }
        };

        debug!(path = %path.display(), fields = entries.len(), "Loaded schema");
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[SchemaEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SchemaEntry> {
        self.entries.iter()
    }

    /// Find an entry by field name.
    pub fn get(&self, name: &str) -> Option<&SchemaEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = &'a SchemaEntry;
    type IntoIter = std::slice::Iter<'a, SchemaEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
