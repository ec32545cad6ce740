#![allow(clippy::unwrap_used)]

use std::io::Write;

use hyperswitch_masking::PeekInterface;
use rust_apm_client::{error::ConfigurationError, logger::config::LogFormat, ApmClient, Config};

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn loads_merchant_and_log_settings_from_file() {
    let file = config_file(
        r#"
        [merchant]
        merchant_id = "merch1"
        account = "internet"
        shared_secret = "mysecret"

        [log.console]
        enabled = true
        level = "debug"
        log_format = "default"
        "#,
    );

    let config = Config::new_with_config_path(Some(file.path().to_path_buf())).unwrap();

    assert_eq!(config.merchant.merchant_id, "merch1");
    assert_eq!(config.merchant.account.as_deref(), Some("internet"));
    assert_eq!(config.merchant.shared_secret.peek(), "mysecret");
    assert!(config.log.console.enabled);
    assert_eq!(config.log.console.level.into_level(), tracing::Level::DEBUG);
    assert_eq!(config.log.console.log_format, LogFormat::Default);
    assert!(ApmClient::from_config(&config).is_ok());
}

#[test]
fn log_section_is_optional() {
    let file = config_file(
        r#"
        [merchant]
        merchant_id = "merch1"
        shared_secret = "mysecret"
        "#,
    );

    let config = Config::new_with_config_path(Some(file.path().to_path_buf())).unwrap();

    assert_eq!(config.merchant.account, None);
    assert!(!config.log.console.enabled);
    assert_eq!(config.log.console.level.into_level(), tracing::Level::INFO);
    assert_eq!(config.log.console.log_format, LogFormat::Json);
}

#[test]
fn empty_merchant_id_fails_validation() {
    let file = config_file(
        r#"
        [merchant]
        merchant_id = ""
        shared_secret = "mysecret"
        "#,
    );

    let error = Config::new_with_config_path(Some(file.path().to_path_buf())).unwrap_err();
    assert!(matches!(error, ConfigurationError::InvalidMerchant(_)));
}

#[test]
fn unknown_log_level_is_a_configuration_error() {
    let file = config_file(
        r#"
        [merchant]
        merchant_id = "merch1"
        shared_secret = "mysecret"

        [log.console]
        level = "loud"
        "#,
    );

    let error = Config::new_with_config_path(Some(file.path().to_path_buf())).unwrap_err();
    assert!(matches!(error, ConfigurationError::ConfigError(_)));
}
