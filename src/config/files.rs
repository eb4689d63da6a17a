//! YAML document reading.
//!
//! Both the schema and the configuration file go through [`read_yaml`], so they
//! share one existence contract: a path that was given but does not exist is a
//! [`ConfigError::ConfigurationFileNotFound`].

use crate::error::{ConfigError, ConfigResult};
use serde_yaml::{Mapping, Value};
use std::path::Path;
use tracing::debug;

/// Read and parse a YAML document.
///
/// An empty (or whitespace-only) file yields `Value::Null`.
pub fn read_yaml(path: &Path) -> ConfigResult<Value> {
    if !path.exists() {
        return Err(ConfigError::not_found(path));
    }

    let content = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ConfigError::not_found(path)
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    if content.trim().is_empty() {
        debug!(path = %path.display(), "YAML file is empty");
        return Ok(Value::Null);
    }

    serde_yaml::from_str(&content).map_err(|source| ConfigError::Yaml {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the flat key/value configuration file.
///
/// `None` and empty files both produce an empty mapping.
pub fn read_config(path: Option<&Path>) -> ConfigResult<Mapping> {
    let Some(path) = path else {
        return Ok(Mapping::new());
    };

    match read_yaml(path)? {
        Value::Null => Ok(Mapping::new()),
        Value::Mapping(map) => {
            debug!(path = %path.display(), keys = map.len(), "Loaded configuration file");
            Ok(map)
        }
        _ => Err(ConfigError::InvalidDocument {
            path: path.to_path_buf(),
            expected: "mapping",
        }),
    }
}
