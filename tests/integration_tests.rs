// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for loading and querying a resolved configuration.
//!
//! These tests go from YAML text or files through the store to the derived
//! settings: lookups, search paths, the fact blacklist, and validation.

mod common;

use common::{create_temp_yaml, MockDocumentSource, SAMPLE_YAML};
use provcfg::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn sample_store(environment: &str) -> ConfigStore {
    let document = YamlParser::new().parse(SAMPLE_YAML).unwrap();
    ConfigStore::new(document, environment)
}

#[test]
fn test_load_from_yaml_file() {
    init_tracing();
    let file = create_temp_yaml(SAMPLE_YAML);
    let source = YamlFileAdapter::from_file(file.path()).unwrap();

    let store = ConfigStore::load(&source, "development").unwrap();

    assert_eq!(store.environment(), "development");
    assert_eq!(
        store.lookup(&ConfigKey::from("checkin_interval")),
        Some(&ConfigValue::Integer(5))
    );
    assert_eq!(
        store
            .lookup(&ConfigKey::from("microkernel.debug_level"))
            .and_then(ConfigValue::as_str),
        Some("debug")
    );
}

#[test]
fn test_lookup_missing_keys() {
    let store = sample_store("production");

    assert!(store.lookup(&ConfigKey::from("no_such_key")).is_none());
    assert!(store.lookup(&ConfigKey::from("checkin_interval.value")).is_none());
    assert!(store.lookup(&ConfigKey::from("facts.blacklist.domain")).is_none());
    assert!(!store.has(&ConfigKey::from("microkernel.nope")));
}

#[test]
fn test_get_or_default() {
    let store = sample_store("production");

    let value = store.get_or_default(&ConfigKey::from("repo_store_root"), ConfigValue::from("/var/lib"));
    assert_eq!(value.as_str(), Some("/var/lib"));
}

#[test]
fn test_installer_paths_from_defaults() {
    let store = sample_store("production");
    let root = Path::new("/opt/provision");

    assert_eq!(
        store.installer_paths(root),
        vec![
            PathBuf::from("/opt/provision/installers"),
            PathBuf::from("/usr/share/provision/installers"),
        ]
    );
}

#[test]
fn test_broker_paths_override_only_in_production() {
    let root = Path::new("/opt/provision");

    assert_eq!(
        sample_store("production").broker_paths(root),
        vec![
            PathBuf::from("/etc/provision/brokers"),
            PathBuf::from("/opt/provision/brokers"),
        ]
    );
    assert_eq!(
        sample_store("development").broker_paths(root),
        vec![PathBuf::from("/opt/provision/brokers")]
    );
}

#[test]
fn test_resolve_paths_by_category_name() {
    let store = sample_store("development");
    let category: PluginCategory = "broker".parse().unwrap();

    assert_eq!(
        resolve_paths(category, &store, Path::new("/srv")),
        vec![PathBuf::from("/srv/brokers")]
    );
    assert!("widget".parse::<PluginCategory>().is_err());
}

#[test]
fn test_fact_blacklist_from_defaults() {
    let store = sample_store("development");

    assert!(store.is_fact_blacklisted("domain").unwrap());
    assert!(store.is_fact_blacklisted("macaddress_eth0").unwrap());
    assert!(store.is_fact_blacklisted("ipaddress6_eth1").unwrap());
    assert!(!store.is_fact_blacklisted("domainname").unwrap());
    assert!(!store.is_fact_blacklisted("hostname").unwrap());
}

#[test]
fn test_fact_blacklist_scalar_override() {
    // production replaces the whole facts mapping with a single entry
    let store = sample_store("production");

    assert!(store.is_fact_blacklisted("uptime_seconds").unwrap());
    assert!(!store.is_fact_blacklisted("domain").unwrap());
    assert!(!store.is_fact_blacklisted("macaddress_eth0").unwrap());
}

#[test]
fn test_validate_sample() {
    assert!(sample_store("development").validate().is_ok());
    assert!(validate(&sample_store("production")).is_ok());
}

#[test]
fn test_validate_reports_bad_pattern() {
    init_tracing();
    let yaml = r#"
all:
  facts:
    blacklist:
      - plain
      - "/(unclosed/"
"#;
    let store = ConfigStore::new(YamlParser::new().parse(yaml).unwrap(), "test");

    match store.validate() {
        Err(ConfigError::InvalidConfiguration { key, message }) => {
            assert_eq!(key, "facts.blacklist");
            assert!(message.contains("(unclosed"));
        }
        other => panic!("expected InvalidConfiguration, got {:?}", other),
    }
}

#[test]
fn test_template_values() {
    let store = sample_store("development");
    let values = store.template_values();

    assert_eq!(values["checkin_interval"], ConfigValue::Integer(5));
    assert_eq!(values["microkernel.debug_level"], ConfigValue::from("debug"));
    assert!(!values.contains_key("microkernel.kernel_args"));
}

#[test]
fn test_load_failure_propagates() {
    let source = MockDocumentSource::new("broken", ConfigDocument::new()).with_failing_load(true);
    let result = ConfigStore::load(&source, "test");

    assert!(matches!(result, Err(ConfigError::SourceError { .. })));
}

#[test]
fn test_load_from_mock_source() {
    let document = YamlParser::new().parse(SAMPLE_YAML).unwrap();
    let source = MockDocumentSource::new("mock", document);
    let store = ConfigStore::load(&source, "production").unwrap();

    assert_eq!(store.get(&ConfigKey::from("checkin_interval")).unwrap(), ConfigValue::Integer(60));
}

#[test]
fn test_from_environment_with_injected_values() {
    let file = create_temp_yaml(SAMPLE_YAML);

    let mut values = HashMap::new();
    values.insert(
        "PROVCFG_CONFIG".to_string(),
        file.path().to_string_lossy().into_owned(),
    );
    values.insert("PROVCFG_ENV".to_string(), "production".to_string());
    let env = EnvVarAdapter::with_values(values);

    let store = ConfigStore::from_environment(None, &env, Path::new("/nonexistent")).unwrap();

    assert_eq!(store.environment(), "production");
    assert_eq!(
        store.lookup(&ConfigKey::from("checkin_interval")),
        Some(&ConfigValue::Integer(60))
    );
}

#[test]
fn test_from_environment_missing_file() {
    let env = EnvVarAdapter::with_values(HashMap::new());
    let result = ConfigStore::from_environment(None, &env, Path::new("/nonexistent/root"));

    assert!(matches!(result, Err(ConfigError::SourceError { .. })));
}

#[test]
fn test_invalid_yaml_file() {
    let file = create_temp_yaml("all: [unclosed");
    let result = YamlFileAdapter::from_file(file.path());

    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}
