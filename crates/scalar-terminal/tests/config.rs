// crates/scalar-terminal/tests/config.rs
use std::time::Duration;

use scalar_terminal::config::{ClientConfig, ConfigError, FormVariant};

#[test]
fn defaults_apply_to_missing_keys() {
    let config = ClientConfig::from_toml_str("").unwrap();
    assert_eq!(config, ClientConfig::default());
    assert_eq!(config.base_url, "http://127.0.0.1:8001");
    assert_eq!(config.variant, FormVariant::Leveraged);
    assert_eq!(config.request_timeout(), Duration::from_secs(10));
    assert!(config.log_dir.is_none());
}

#[test]
fn parses_full_file() {
    let config = ClientConfig::from_toml_str(
        r#"
        base_url = "https://markets.example.com"
        variant = "scalar"
        request_timeout_secs = 3
        log_level = "debug"
        log_dir = "/tmp/scalar-terminal"
        "#,
    )
    .unwrap();

    assert_eq!(config.base_url, "https://markets.example.com");
    assert_eq!(config.variant, FormVariant::Scalar);
    assert_eq!(config.request_timeout(), Duration::from_secs(3));
    assert_eq!(config.log_level, "debug");
    assert_eq!(config.log_dir.as_deref(), Some(std::path::Path::new("/tmp/scalar-terminal")));
}

#[test]
fn rejects_bad_values() {
    assert!(matches!(
        ClientConfig::from_toml_str(r#"base_url = "localhost:8001""#),
        Err(ConfigError::BaseUrl(_))
    ));
    assert!(matches!(
        ClientConfig::from_toml_str("request_timeout_secs = 0"),
        Err(ConfigError::Timeout)
    ));
    assert!(matches!(
        ClientConfig::from_toml_str(r#"variant = "binary""#),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn missing_file_reports_path() {
    let err = ClientConfig::load(std::path::Path::new("/definitely/not/here.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains("/definitely/not/here.toml"));
}
