//! Sample configuration file output.

use super::loader::Configuration;
use super::schema::Schema;
use serde_yaml::{Mapping, Value};
use std::io::{self, Write};

/// Write one `name: default` line per schema entry.
pub fn write_sample<W: Write>(schema: &Schema, out: &mut W) -> io::Result<()> {
    for entry in schema {
        writeln!(
            out,
            "{}: {}",
            render_string(&entry.name, false),
            render_value(&entry.default)
        )?;
    }
    Ok(())
}

/// Render a value on a single line.
///
/// Collections use YAML flow style so that nested defaults stay on one line.
/// Strings that would not read back unchanged as plain scalars are quoted.
pub fn render_value(value: &Value) -> String {
    render(value, false)
}

fn render(value: &Value, flow: bool) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => render_string(s, flow),
        Value::Sequence(items) => {
            let items: Vec<String> = items.iter().map(|v| render(v, true)).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Mapping(map) => {
            let pairs: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", render(k, true), render(v, true)))
                .collect();
            format!("{{{}}}", pairs.join(", "))
        }
        Value::Tagged(tagged) => format!("{} {}", tagged.tag, render(&tagged.value, flow)),
    }
}

/// Plain when it reads back as the same string, otherwise a double-quoted scalar.
fn render_string(s: &str, flow: bool) -> String {
    if plain_is_safe(s, flow) {
        return s.to_string();
    }
    // A JSON string is a valid single-line YAML double-quoted scalar.
    serde_json::to_string(s).unwrap_or_else(|_| format!("{s:?}"))
}

fn plain_is_safe(s: &str, flow: bool) -> bool {
    if s.is_empty() || s.trim() != s || s.chars().any(char::is_control) {
        return false;
    }
    if flow && s.contains([',', '[', ']', '{', '}']) {
        return false;
    }

    // Must survive both as a key and as a value.
    let expected = Value::String(s.to_string());
    match serde_yaml::from_str::<Mapping>(&format!("{s}: {s}\n")) {
        Ok(map) => map.len() == 1 && map.get(s) == Some(&expected),
        Err(_) => false,
    }
}

impl Configuration {
    /// Write the sample configuration file for this schema.
    pub fn write_sample<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write_sample(self.schema(), out)
    }

    /// Print the sample configuration file to stdout.
    pub fn print_config_file(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.write_sample(&mut lock)?;
        lock.flush()
    }
}
