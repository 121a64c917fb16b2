use crate::config::{ClientConfig, DEFAULT_API_BASE_URL};
use crate::error::ConfigError;

use std::time::Duration;

use tempfile::TempDir;

#[test]
fn given_defaults_when_inspected_then_point_at_local_backend() {
    let config = ClientConfig::default();

    assert_eq!(DEFAULT_API_BASE_URL, "http://localhost:3000/api/v1");
    assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
    assert_eq!(config.timeout(), Duration::from_secs(30));
    assert_eq!(config.session.login_path, "/login");
    assert!(config.validate().is_ok());
}

/// **VALUE**: First run works without a config file.
#[test]
fn given_missing_file_when_loading_then_defaults_returned() {
    let dir = TempDir::new().expect("temp dir");

    let config = ClientConfig::load(dir.path()).expect("defaults");

    assert_eq!(config, ClientConfig::default());
}

#[test]
fn given_saved_config_when_loading_then_values_survive_and_no_temp_file_left() {
    // GIVEN: A customized config saved to disk
    let dir = TempDir::new().expect("temp dir");
    let mut config = ClientConfig::default();
    config.api.base_url = "https://natours.example.com/api/v1".to_string();
    config.api.timeout_secs = 10;
    config.api.asset_base_url = Some("https://cdn.example.com".to_string());
    config.save(dir.path()).expect("save");

    // WHEN: Loading it back
    let loaded = ClientConfig::load(dir.path()).expect("load");

    // THEN
    assert_eq!(loaded, config);
    assert!(!dir.path().join("config.json.tmp").exists());
}

/// **VALUE**: Partial files fill the gaps with defaults.
#[test]
fn given_partial_file_when_loading_then_missing_fields_defaulted() {
    let dir = TempDir::new().expect("temp dir");
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"api": {"base_url": "http://10.0.0.5:3000/api/v1"}}"#,
    )
    .expect("write");

    let config = ClientConfig::load(dir.path()).expect("load");

    assert_eq!(config.api.base_url, "http://10.0.0.5:3000/api/v1");
    assert_eq!(config.api.timeout_secs, 30);
    assert_eq!(config.session.file_name, "session.json");
}

/// **BUG THIS CATCHES**: Would catch a corrupted file being silently replaced by defaults.
#[test]
fn given_corrupted_file_when_loading_then_parse_error() {
    let dir = TempDir::new().expect("temp dir");
    std::fs::write(dir.path().join("config.json"), "{ not json").expect("write");

    let result = ClientConfig::load(dir.path());

    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn given_out_of_range_values_when_validating_then_validation_error() {
    let mut zero_timeout = ClientConfig::default();
    zero_timeout.api.timeout_secs = 0;
    assert!(matches!(
        zero_timeout.validate(),
        Err(ConfigError::ValidationError { .. })
    ));

    let mut bad_scheme = ClientConfig::default();
    bad_scheme.api.base_url = "ftp://example.com/api/v1".to_string();
    assert!(matches!(
        bad_scheme.validate(),
        Err(ConfigError::ValidationError { .. })
    ));

    let mut bad_login = ClientConfig::default();
    bad_login.session.login_path = "login".to_string();
    assert!(matches!(
        bad_login.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn given_invalid_config_when_saving_then_nothing_written() {
    let dir = TempDir::new().expect("temp dir");
    let mut config = ClientConfig::default();
    config.api.timeout_secs = 1000;

    assert!(config.save(dir.path()).is_err());
    assert!(!dir.path().join("config.json").exists());
}

#[test]
fn given_config_when_resolving_paths_and_assets_then_uses_configured_values() {
    let dir = TempDir::new().expect("temp dir");
    let config = ClientConfig::default();

    assert_eq!(config.session_file(dir.path()), dir.path().join("session.json"));
    assert_eq!(
        config.asset_url(Some("tour-3-cover.jpg")),
        "http://localhost:3000/img/tour-3-cover.jpg"
    );
}
