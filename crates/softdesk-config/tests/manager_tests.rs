use std::fs;

use softdesk_config::*;

const SECRET: &str = "file-secret-0123456789";

#[test]
fn test_missing_explicit_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let manager = ConfigManager::with_path(dir.path().join("absent.toml"));
    assert!(matches!(manager.load_config(), Err(ConfigError::NotFound(_))));
}

#[test]
fn test_file_values_override_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        format!(
            r#"
port = 9100
log_level = "debug"

[auth]
jwt_secret = "{SECRET}"
token_ttl_minutes = 15

[admin]
username = "root"
password = "adm1n-pass"
birth_date = "1980-01-01"
"#
        ),
    )
    .unwrap();

    let config = ConfigManager::with_path(path)
        .with_env_prefix("SOFTDESK_TEST_FILE")
        .load_config()
        .unwrap();
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 9100);
    assert_eq!(config.log_level, "debug");
    assert_eq!(config.auth.jwt_secret, SECRET);
    assert_eq!(config.auth.token_ttl_minutes, 15);
    assert_eq!(config.admin.unwrap().username, "root");
}

#[test]
fn test_environment_overrides_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, format!("port = 9100\n[auth]\njwt_secret = \"{SECRET}\"\n")).unwrap();

    std::env::set_var("SOFTDESK_TEST_ENV_PORT", "9200");
    std::env::set_var("SOFTDESK_TEST_ENV_AUTH__TOKEN_TTL_MINUTES", "5");
    let config = ConfigManager::with_path(path)
        .with_env_prefix("SOFTDESK_TEST_ENV")
        .load_config()
        .unwrap();
    std::env::remove_var("SOFTDESK_TEST_ENV_PORT");
    std::env::remove_var("SOFTDESK_TEST_ENV_AUTH__TOKEN_TTL_MINUTES");

    assert_eq!(config.port, 9200);
    assert_eq!(config.auth.token_ttl_minutes, 5);
    assert_eq!(config.auth.jwt_secret, SECRET);
}

#[test]
fn test_empty_secret_is_generated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "port = 8080\n").unwrap();

    let config = ConfigManager::with_path(path)
        .with_env_prefix("SOFTDESK_TEST_GEN")
        .load_config()
        .unwrap();
    assert!(config.auth.jwt_secret.len() >= types::MIN_SECRET_BYTES);
}

#[test]
fn test_invalid_file_values_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[auth]\njwt_secret = \"too-short\"\n").unwrap();

    let err = ConfigManager::with_path(path)
        .with_env_prefix("SOFTDESK_TEST_BAD")
        .load_config()
        .unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)));
}

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    let manager = ConfigManager::with_path(path.clone()).with_env_prefix("SOFTDESK_TEST_SAVE");

    let mut config = ServerConfig::default();
    config.port = 7000;
    config.auth.jwt_secret = SECRET.to_string();
    manager.save_config(&config).unwrap();

    assert!(path.exists());
    assert_eq!(manager.load_config().unwrap(), config);
}
