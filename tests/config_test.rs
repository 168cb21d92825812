//! Tests for environment-driven configuration

use pipeline_demo::config::{Config, APP_ENV_VAR, NODE_ENV_VAR, PORT_VAR};

fn clear_env() {
    std::env::remove_var(PORT_VAR);
    std::env::remove_var(APP_ENV_VAR);
    std::env::remove_var(NODE_ENV_VAR);
}

// Env vars are process-global, so every scenario runs inside this single
// test to keep the harness from interleaving them.
#[test]
fn from_env_scenarios() {
    // Defaults when nothing is set
    clear_env();
    let config = Config::from_env().expect("defaults should load");
    assert_eq!(config.port, 3000);
    assert_eq!(config.environment, "development");

    // PORT is parsed
    clear_env();
    std::env::set_var(PORT_VAR, "8080");
    let config = Config::from_env().expect("valid PORT should load");
    assert_eq!(config.port, 8080);

    // Invalid PORT is rejected
    clear_env();
    std::env::set_var(PORT_VAR, "not-a-port");
    assert!(Config::from_env().is_err());

    // NODE_ENV is honored
    clear_env();
    std::env::set_var(NODE_ENV_VAR, "production");
    let config = Config::from_env().expect("NODE_ENV should load");
    assert_eq!(config.environment, "production");

    // APP_ENV wins over NODE_ENV
    clear_env();
    std::env::set_var(NODE_ENV_VAR, "production");
    std::env::set_var(APP_ENV_VAR, "staging");
    let config = Config::from_env().expect("APP_ENV should load");
    assert_eq!(config.environment, "staging");

    clear_env();
}

#[test]
fn listen_addr_binds_all_interfaces() {
    let config = Config {
        port: 4000,
        environment: "development".to_string(),
    };
    assert_eq!(config.listen_addr(), "0.0.0.0:4000");
}

#[test]
fn default_config_matches_spec_defaults() {
    let config = Config::default();
    assert_eq!(config.port, 3000);
    assert_eq!(config.environment, "development");
}
