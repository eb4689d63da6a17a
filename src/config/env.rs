//! Environment variable lookup.

use super::schema::{Priority, Schema};
use std::collections::{BTreeMap, HashMap};

/// Source of environment variable values.
pub trait EnvSource {
    fn var(&self, key: &str) -> Option<String>;
}

/// The current process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<S: EnvSource + ?Sized> EnvSource for &S {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

/// Collect values for every environment-priority field.
///
/// Every such field gets a key, even when its variable is unset or the entry
/// names no variable; those map to `None`.
pub fn config_from_env<E: EnvSource + ?Sized>(
    schema: &Schema,
    env: &E,
) -> BTreeMap<String, Option<String>> {
    schema
        .iter()
        .filter(|entry| entry.priority == Priority::Environment)
        .map(|entry| {
            let value = entry.environment.as_deref().and_then(|var| env.var(var));
            (entry.name.clone(), value)
        })
        .collect()
}
