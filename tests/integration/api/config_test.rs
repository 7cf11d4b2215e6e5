//! Server configuration from environment variables
//!
//! These tests mutate the process environment, so they run serially.

use expense_tracker::backend::server::config::{ServerConfig, DEFAULT_PORT};
use expense_tracker::shared::ConfigError;
use serial_test::serial;

const KEYS: [&str; 6] = [
    "JWT_SECRET",
    "DATABASE_URL",
    "SERVER_PORT",
    "TOKEN_TTL_SECS",
    "BCRYPT_COST",
    "CORS_ORIGIN",
];

fn clear_env() {
    for key in KEYS {
        std::env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_from_env_requires_secret() {
    clear_env();
    let result = ServerConfig::from_env();
    assert!(matches!(result, Err(ConfigError::MissingValue("JWT_SECRET"))));
}

#[test]
#[serial]
fn test_from_env_reads_values() {
    clear_env();
    std::env::set_var("JWT_SECRET", "env-secret");
    std::env::set_var("SERVER_PORT", "6000");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.jwt_secret, "env-secret");
    assert_eq!(config.port, 6000);
    assert_ne!(config.port, DEFAULT_PORT);
}

#[test]
#[serial]
fn test_from_env_rejects_bad_port() {
    clear_env();
    std::env::set_var("JWT_SECRET", "env-secret");
    std::env::set_var("SERVER_PORT", "eighty");

    let result = ServerConfig::from_env();
    clear_env();

    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}
