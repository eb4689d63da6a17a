//! Integration tests for configuration resolution.
//!
//! Each test writes a schema and configuration file into a temp directory and
//! checks which source each field's value came from.

use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use yayconf::config::{ConfigSources, Configuration, Priority, Schema, config_from_env, read_config};
use yayconf::error::ErrorCode;

/// Schema mixing all three priorities. Every entry carries a distinct value per
/// source so the winning source is visible in the result.
fn schema_yaml() -> &'static str {
    r#"
- name: app_name
  default: demo
  config: demo-from-file
  priority: default
- name: port
  default: 8080
  config: 9090
  priority: config
- name: debug
  default: false
  config: true
  priority: config
- name: db_url
  default: sqlite://default.db
  config: postgres://file
  environment: YAYCONF_TEST_DB_URL
  priority: environment
- name: api_token
  default: none
  config: token-from-file
  environment: YAYCONF_TEST_API_TOKEN
  priority: environment
"#
}

fn config_yaml() -> &'static str {
    r#"
app_name: demo-from-file
port: 9090
debug: true
db_url: postgres://file
api_token: token-from-file
"#
}

/// Write the fixture files and return (temp dir, schema path, config path).
fn fixture() -> (TempDir, PathBuf, PathBuf) {
    let temp = TempDir::new().expect("temp dir");
    let schema = temp.path().join("schema.yaml");
    let config = temp.path().join("config.yaml");
    std::fs::write(&schema, schema_yaml()).expect("write schema");
    std::fs::write(&config, config_yaml()).expect("write config");
    (temp, schema, config)
}

fn fake_env() -> HashMap<String, String> {
    [
        ("YAYCONF_TEST_DB_URL", "postgres://env"),
        ("YAYCONF_TEST_API_TOKEN", "token-from-env"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

fn load(schema: &Path, config: &Path, read_from_env: bool) -> Configuration {
    let sources = ConfigSources::new()
        .with_schema_file(schema)
        .with_config_file(config)
        .read_from_env(read_from_env);
    Configuration::load_with_env(sources, &fake_env()).expect("load configuration")
}

#[test]
fn test_default_sources_are_empty_and_use_defaults() {
    let sources = ConfigSources::default();
    assert_eq!(sources.schema_file, None);
    assert_eq!(sources.config_file, None);
    assert!(!sources.read_from_env);
    assert!(sources.use_defaults);
}

#[test]
fn test_missing_config_file_is_not_found() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("does-not-exist.yaml");

    let err = read_config(Some(&missing)).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.code(), ErrorCode::ConfigurationFileNotFound);

    let err = Configuration::load(ConfigSources::new().with_config_file(&missing)).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_missing_schema_file_is_not_found() {
    let temp = TempDir::new().unwrap();
    let sources = ConfigSources::new().with_schema_file(temp.path().join("schema.yaml"));

    let err = Configuration::load(sources).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_valid_config_file_is_read_as_mapping() {
    let (_temp, _schema, config) = fixture();

    let map = read_config(Some(&config)).unwrap();
    let expected: Mapping = serde_yaml::from_str(config_yaml()).unwrap();
    assert_eq!(map, expected);
}

#[test]
fn test_empty_config_file_is_empty_mapping() {
    let (temp, schema, _config) = fixture();
    let empty = temp.path().join("empty.yaml");
    std::fs::write(&empty, "").unwrap();

    assert_eq!(read_config(Some(&empty)).unwrap(), Mapping::new());

    // Not an error during resolution either: config fields use defaults.
    let cfg = load(&schema, &empty, false);
    assert_eq!(cfg.get("port"), Some(&Value::from(8080)));
    assert_eq!(cfg.get("db_url"), Some(&Value::from("sqlite://default.db")));
}

#[test]
fn test_schema_file_is_read_in_order() {
    let (_temp, schema, _config) = fixture();

    let schema = Schema::load(Some(&schema)).unwrap();
    let names: Vec<&str> = schema.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["app_name", "port", "debug", "db_url", "api_token"]);

    let expected: Vec<Value> = serde_yaml::from_str(schema_yaml()).unwrap();
    let reserialized: Vec<Value> = schema
        .iter()
        .map(|e| serde_yaml::to_value(e).unwrap())
        .collect();
    assert_eq!(reserialized, expected);
}

#[test]
fn test_env_mapping_holds_every_environment_field() {
    let (_temp, schema, _config) = fixture();
    let schema = Schema::load(Some(&schema)).unwrap();

    let from_env = config_from_env(&schema, &fake_env());

    let expected: Vec<&str> = schema
        .iter()
        .filter(|e| e.priority == Priority::Environment)
        .map(|e| e.name.as_str())
        .collect();
    let keys: Vec<&str> = from_env.keys().map(String::as_str).collect();
    let mut expected_sorted = expected.clone();
    expected_sorted.sort();
    assert_eq!(keys, expected_sorted);

    assert_eq!(from_env["db_url"].as_deref(), Some("postgres://env"));
    assert_eq!(from_env["api_token"].as_deref(), Some("token-from-env"));
}

#[test]
fn test_env_mapping_includes_unset_variables() {
    let (_temp, schema, _config) = fixture();
    let schema = Schema::load(Some(&schema)).unwrap();
    let env: HashMap<String, String> = HashMap::new();

    let from_env = config_from_env(&schema, &env);
    assert_eq!(from_env.len(), 2);
    assert!(from_env.values().all(Option::is_none));
}

#[test]
fn test_resolves_with_environment() {
    let (_temp, schema, config) = fixture();
    let cfg = load(&schema, &config, true);

    let expected: Mapping = serde_yaml::from_str(
        r#"
app_name: demo
port: 9090
debug: true
db_url: postgres://env
api_token: token-from-env
"#,
    )
    .unwrap();
    assert_eq!(cfg.as_map(), &expected);
}

#[test]
fn test_resolves_without_environment() {
    let (_temp, schema, config) = fixture();
    let cfg = load(&schema, &config, false);

    // Environment-priority fields take the config file value instead.
    let expected: Mapping = serde_yaml::from_str(
        r#"
app_name: demo
port: 9090
debug: true
db_url: postgres://file
api_token: token-from-file
"#,
    )
    .unwrap();
    assert_eq!(cfg.as_map(), &expected);
}

#[test]
fn test_every_priority_picks_its_source() {
    let (_temp, schema_path, config) = fixture();
    let cfg = load(&schema_path, &config, true);
    let env = fake_env();

    for entry in cfg.schema() {
        let value = cfg.get(&entry.name).expect("every field resolved");
        match entry.priority {
            Priority::Default => assert_eq!(value, &entry.default),
            Priority::Config => assert_eq!(Some(value), entry.config.as_ref()),
            Priority::Environment => {
                let var = entry.environment.as_ref().unwrap();
                assert_eq!(value, &Value::from(env[var].as_str()));
            }
        }
    }
}

#[test]
fn test_disabling_defaults_leaves_unresolved_fields_null() {
    let (temp, schema, _config) = fixture();
    let empty = temp.path().join("empty.yaml");
    std::fs::write(&empty, "").unwrap();

    let sources = ConfigSources::new()
        .with_schema_file(&schema)
        .with_config_file(&empty)
        .use_defaults(false);
    let cfg = Configuration::load_with_env(sources, &HashMap::<String, String>::new()).unwrap();

    assert_eq!(cfg.as_map().len(), 5);
    assert_eq!(cfg.get("app_name"), Some(&Value::from("demo")));
    assert_eq!(cfg.get("port"), Some(&Value::Null));
    assert_eq!(cfg.get("db_url"), Some(&Value::Null));
}

#[test]
fn test_resolved_mapping_deserializes_into_struct() {
    #[derive(Debug, Deserialize)]
    struct AppConfig {
        app_name: String,
        port: u16,
        debug: bool,
        db_url: String,
        api_token: String,
    }

    let (_temp, schema, config) = fixture();
    let app: AppConfig = load(&schema, &config, true).deserialize().unwrap();

    assert_eq!(app.app_name, "demo");
    assert_eq!(app.port, 9090);
    assert!(app.debug);
    assert_eq!(app.db_url, "postgres://env");
    assert_eq!(app.api_token, "token-from-env");
}

#[test]
fn test_deserialize_type_mismatch_is_reported() {
    #[derive(Debug, Deserialize)]
    #[allow(dead_code)]
    struct Wrong {
        port: bool,
    }

    let (_temp, schema, config) = fixture();
    let err = load(&schema, &config, false).deserialize::<Wrong>().unwrap_err();
    assert_eq!(err.code(), ErrorCode::DeserializeFailed);
}

#[test]
fn test_sample_file_lists_schema_defaults() {
    let (_temp, schema, config) = fixture();
    let cfg = load(&schema, &config, false);

    let mut out = Vec::new();
    cfg.write_sample(&mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "app_name: demo\n\
         port: 8080\n\
         debug: false\n\
         db_url: sqlite://default.db\n\
         api_token: none\n"
    );
}

#[test]
fn test_sample_file_parses_back_to_defaults() {
    let (_temp, schema, config) = fixture();
    let cfg = load(&schema, &config, false);

    let mut out = Vec::new();
    cfg.write_sample(&mut out).unwrap();
    let parsed: Mapping = serde_yaml::from_slice(&out).unwrap();

    for entry in cfg.schema() {
        assert_eq!(parsed.get(entry.name.as_str()), Some(&entry.default));
    }
}
