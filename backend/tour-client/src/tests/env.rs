use crate::config::ClientConfig;
use crate::config::env::{
    API_BASE_URL_VAR, API_TIMEOUT_SECS_VAR, ASSET_BASE_URL_VAR, apply_overrides,
};
use crate::error::ConfigError;

use std::collections::HashMap;

use serial_test::serial;
use tempfile::TempDir;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| vars.get(name).cloned()
}

#[test]
fn given_env_values_when_applying_overrides_then_config_updated() {
    // GIVEN: All three variables set
    let mut config = ClientConfig::default();
    let env = lookup(&[
        (API_BASE_URL_VAR, "https://staging.example.com/api/v1"),
        (ASSET_BASE_URL_VAR, "https://cdn.example.com"),
        (API_TIMEOUT_SECS_VAR, " 45 "),
    ]);

    // WHEN
    apply_overrides(&mut config, env).expect("overrides apply");

    // THEN
    assert_eq!(config.api.base_url, "https://staging.example.com/api/v1");
    assert_eq!(
        config.api.asset_base_url.as_deref(),
        Some("https://cdn.example.com")
    );
    assert_eq!(config.api.timeout_secs, 45);
}

#[test]
fn given_empty_env_values_when_applying_overrides_then_config_unchanged() {
    let mut config = ClientConfig::default();

    apply_overrides(&mut config, lookup(&[(API_BASE_URL_VAR, "  ")])).expect("no-op");

    assert_eq!(config, ClientConfig::default());
}

/// **BUG THIS CATCHES**: Would catch a typo in the timeout variable silently
/// falling back to the default.
#[test]
fn given_non_numeric_timeout_when_applying_overrides_then_env_override_error() {
    let mut config = ClientConfig::default();

    let result = apply_overrides(&mut config, lookup(&[(API_TIMEOUT_SECS_VAR, "soon")]));

    assert!(matches!(
        result,
        Err(ConfigError::EnvOverride {
            variable: API_TIMEOUT_SECS_VAR,
            ..
        })
    ));
}

/// **VALUE**: Process environment wins over the config file.
#[test]
#[serial]
fn given_process_env_when_loading_with_env_then_file_value_overridden() {
    // GIVEN: A config file and a process-level override
    let dir = TempDir::new().expect("temp dir");
    ClientConfig::default().save(dir.path()).expect("save");
    // SAFETY: serialized with every other test touching the process environment
    unsafe { std::env::set_var(API_BASE_URL_VAR, "http://override.local:4000/api/v1") };

    // WHEN
    let result = ClientConfig::load_with_env(dir.path());
    unsafe { std::env::remove_var(API_BASE_URL_VAR) };

    // THEN
    let config = result.expect("load");
    assert_eq!(config.api.base_url, "http://override.local:4000/api/v1");
}
