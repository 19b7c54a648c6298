//! Tests for layout file discovery.

use kiln_config::{ConfigDiscovery, ConfigError, CONFIG_FILE};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn discovers_kiln_toml() {
    let dir = TempDir::new().expect("tempdir");
    let config_path = dir.path().join(CONFIG_FILE);
    fs::write(&config_path, "context = \"app\"\n").expect("write config");

    let discovery = ConfigDiscovery::new(dir.path());
    assert_eq!(discovery.find(), Some(config_path));

    let config = discovery.load().expect("load config");
    assert_eq!(config.context, PathBuf::from("app"));
}

#[test]
fn toml_aliases_replace_defaults() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join(CONFIG_FILE),
        r#"
[[aliases]]
name = "~"
path = "app"
"#,
    )
    .expect("write config");

    let config = ConfigDiscovery::new(dir.path()).load().expect("load config");
    assert_eq!(config.aliases.len(), 1);
    assert_eq!(config.aliases[0].name, "~");
}

#[test]
fn toml_keeps_duplicate_alias_entries_for_resolution() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join(CONFIG_FILE),
        r#"
[[aliases]]
name = "@"
path = "src"

[[aliases]]
name = "@"
path = "lib"
"#,
    )
    .expect("write config");

    let config = ConfigDiscovery::new(dir.path()).load().expect("load config");
    assert_eq!(config.aliases.len(), 2);
}

#[test]
fn package_json_field_is_used_when_no_toml() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join("package.json"),
        r#"{ "name": "app", "kiln": { "output_dir": "build" } }"#,
    )
    .expect("write package.json");

    let config = ConfigDiscovery::new(dir.path()).load().expect("load config");
    assert_eq!(config.output_dir, PathBuf::from("build"));
}

#[test]
fn null_package_json_field_is_ignored() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join("package.json"),
        r#"{ "name": "app", "kiln": null }"#,
    )
    .expect("write package.json");

    let discovery = ConfigDiscovery::new(dir.path());
    assert!(discovery.find().is_none());
    assert!(matches!(discovery.load(), Err(ConfigError::NotFound)));
}

#[test]
fn explicit_missing_file_is_not_found() {
    let dir = TempDir::new().expect("tempdir");
    let discovery = ConfigDiscovery::new(dir.path());
    let result = discovery.load_from(&dir.path().join("custom.toml"));
    assert!(matches!(result, Err(ConfigError::NotFound)));
}

#[test]
fn wrong_field_type_is_invalid_value() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join(CONFIG_FILE), "entries = 5\n").expect("write config");

    let err = ConfigDiscovery::new(dir.path()).load().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
}
