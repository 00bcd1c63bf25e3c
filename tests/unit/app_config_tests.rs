/*!
 * Tests for application configuration functionality
 */

use std::net::SocketAddr;

use transcheck::app_config::{Config, LogLevel, parse_port};
use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 5000);
    assert_eq!(config.validation.min_length_ratio, 0.2);
    assert_eq!(config.validation.max_length_ratio, 3.0);
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

/// Test that the default bind address covers all interfaces
#[test]
fn test_bindAddress_withDefaults_shouldListenOnAllInterfaces() {
    let addr = Config::default().bind_address().unwrap();
    assert_eq!(addr, "0.0.0.0:5000".parse::<SocketAddr>().unwrap());
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();

    config.server.port = 0;
    assert!(config.validate().is_err());
    config.server.port = 8080;

    config.server.host = "not-an-ip".to_string();
    assert!(config.validate().is_err());
    config.server.host = "127.0.0.1".to_string();

    config.validation.min_length_ratio = 4.0;
    assert!(config.validate().is_err());
    config.validation.min_length_ratio = 0.2;

    config.validation.max_length_ratio = f64::NAN;
    assert!(config.validate().is_err());
    config.validation.max_length_ratio = 3.0;

    assert!(config.validate().is_ok());
}

/// Test loading a partial configuration file
#[test]
fn test_load_withPartialFile_shouldFillDefaults() -> anyhow::Result<()> {
    let dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        dir.path(),
        "conf.json",
        r#"{ "server": { "port": 8081 }, "log_level": "debug" }"#,
    )?;

    let config = Config::load(&path)?;

    assert_eq!(config.server.port, 8081);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.validation.max_length_ratio, 3.0);
    Ok(())
}

/// Test loading when the file is absent
#[test]
fn test_load_withMissingFile_shouldUseDefaults() -> anyhow::Result<()> {
    let dir = common::create_temp_dir()?;
    let config = Config::load(&dir.path().join("absent.json"))?;

    assert_eq!(config, Config::default());
    Ok(())
}

/// Test loading a broken configuration file
#[test]
fn test_load_withInvalidJson_shouldError() -> anyhow::Result<()> {
    let dir = common::create_temp_dir()?;
    let path = common::create_test_file(dir.path(), "conf.json", "{ not json")?;

    let err = Config::load(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse config file"));
    Ok(())
}

/// Test port parsing as read from the environment
#[test]
fn test_parsePort_withEnvironmentValues_shouldParse() {
    assert_eq!(parse_port("10000").unwrap(), 10000);
    assert!(parse_port("-1").is_err());
    assert!(parse_port("port").is_err());
}

/// Test serialization round trip keeps the file format stable
#[test]
fn test_config_serialization_shouldUseLowercaseLogLevel() {
    let json = serde_json::to_value(Config::default()).unwrap();

    assert_eq!(json["log_level"], "info");
    assert_eq!(json["server"]["port"], 5000);
}
