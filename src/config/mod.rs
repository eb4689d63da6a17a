//! Schema-driven configuration resolution.
//!
//! Merges values from three sources, chosen per field:
//! 1. **Default** - the `default` declared in the schema
//! 2. **Config** - the flat YAML configuration file
//! 3. **Environment** - the variable named by the entry's `environment` key
//!
//! ## Fallback
//! A field whose chosen source has no value falls back down the list:
//! environment -> config -> default. Environment lookup only happens when
//! `read_from_env` is enabled.
//!
//! ## Errors
//! A schema or configuration path that was given but does not exist fails with
//! `ConfigurationFileNotFound`. An empty configuration file is an empty mapping.

mod env;
mod files;
mod loader;
mod sample;
mod schema;

pub use env::{EnvSource, ProcessEnv, config_from_env};
pub use files::{read_config, read_yaml};
pub use loader::{ConfigSources, Configuration, ValueSource, resolve};
pub use sample::{render_value, write_sample};
pub use schema::{Priority, Schema, SchemaEntry};
