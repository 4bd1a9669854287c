//! Loading ListBuilderConfig from files and the environment.

use std::fs;

use adminkit_list::{ListBuilderConfig, TemplateMap};
use serial_test::serial;
use tempfile::TempDir;

#[test]
#[serial]
fn load_without_file_uses_standard_table() {
    let config = ListBuilderConfig::load(None).unwrap();
    assert_eq!(config.template_map(), TemplateMap::standard());
}

#[test]
#[serial]
fn load_merges_yaml_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("list.yaml");
    fs::write(
        &path,
        "templates:\n  boolean: custom/bool.html\n  rating: custom/rating.html\n",
    )
    .unwrap();

    let config = ListBuilderConfig::load(Some(&path)).unwrap();
    let map = config.template_map();
    assert_eq!(map.get("boolean"), Some("custom/bool.html"));
    assert_eq!(map.get("rating"), Some("custom/rating.html"));
    assert_eq!(map.get("string"), Some("@Admin/CRUD/list_string.html"));
}

#[test]
#[serial]
fn missing_file_falls_back_to_defaults() {
    let tmp = TempDir::new().unwrap();
    let config = ListBuilderConfig::load(Some(&tmp.path().join("absent.yaml"))).unwrap();
    assert_eq!(config, ListBuilderConfig::default());
}

#[test]
#[serial]
fn environment_overrides_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("list.yaml");
    fs::write(&path, "templates:\n  boolean: custom/bool.html\n").unwrap();

    std::env::set_var("ADMINKIT_LIST_TEMPLATES__BOOLEAN", "env/bool.html");
    let config = ListBuilderConfig::load(Some(&path));
    std::env::remove_var("ADMINKIT_LIST_TEMPLATES__BOOLEAN");

    let map = config.unwrap().template_map();
    assert_eq!(map.get("boolean"), Some("env/bool.html"));
}

#[test]
fn yaml_round_trip_through_serde() {
    let config = ListBuilderConfig::default();
    let yaml = serde_yaml_ng::to_string(&config).unwrap();
    let parsed = ListBuilderConfig::from_yaml_str(&yaml).unwrap();
    assert_eq!(parsed.template_map().len(), config.template_map().len());
}
