//! Integration tests for YAML host configuration
use profile_host::config::{load_config, load_config_or_default, parse_config, Config};
use profile_host::error::ConfigError;
use profile_host::logging::log_file_path;

#[test]
fn test_parse_full_config() {
    let config = parse_config(
        "profile: SpecificProfile\ninstance_id: 1\nservice_id: 2\nlog_level: debug\nlog_to_file: true\nlog_file: log/host.log\n",
    )
    .expect("Failed to parse config");
    assert_eq!(config.profile.as_deref(), Some("SpecificProfile"));
    assert_eq!((config.instance_id, config.service_id), (1, 2));
    assert_eq!(config.log_level, "debug");
    assert!(config.log_to_file);
    assert_eq!(log_file_path(&config), "log/host.log");
}

#[test]
fn test_missing_fields_use_defaults() {
    let config = parse_config("log_level: warn\n").expect("Failed to parse config");
    assert_eq!(config.profile, None);
    assert_eq!(config.instance_id, 28);
    assert_eq!(config.service_id, 42);
    assert_eq!(config.log_level, "warn");
}

#[test]
fn test_invalid_yaml_is_a_parse_error() {
    let result = parse_config("instance_id: [not, a, number]\n");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_missing_file_is_io_error_or_default() {
    let path = "does/not/exist/config.yaml";
    assert!(matches!(load_config(path), Err(ConfigError::Io { .. })));
    assert_eq!(load_config_or_default(path).expect("fallback"), Config::default());
}

#[test]
fn test_default_log_file_is_dated() {
    let path = log_file_path(&Config::default());
    assert!(path.starts_with("log/"), "Unexpected log path: {}", path);
    assert!(path.ends_with("-profile-host.log"), "Unexpected log path: {}", path);
}

#[test]
fn test_shipped_config_file_loads() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config.yaml");
    let config = load_config(path).expect("Failed to load shipped config.yaml");
    assert_eq!(config.profile.as_deref(), Some("SpecificProfile"));
    assert_eq!((config.instance_id, config.service_id), (28, 42));
}
