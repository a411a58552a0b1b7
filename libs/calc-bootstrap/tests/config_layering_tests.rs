#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Layering tests for `AppConfig::load_or_default`.
//!
//! Every test pins the environment it depends on through `temp_env`, which
//! also serializes access to the process environment across tests.

use std::io::Write;

use calc_bootstrap::{AppConfig, ConfigError, DEFAULT_PORT, LogFormat};
use tempfile::NamedTempFile;

const CLEAN_ENV: [(&str, Option<&str>); 4] = [
    ("PORT", None),
    ("APP__SERVER__PORT", None),
    ("APP__SERVER__HOST", None),
    ("APP__LOGGING__LEVEL", None),
];

fn with_env<R>(vars: &[(&str, Option<&str>)], f: impl FnOnce() -> R) -> R {
    let mut all: Vec<(&str, Option<&str>)> = CLEAN_ENV
        .into_iter()
        .filter(|(key, _)| !vars.iter().any(|(k, _)| k == key))
        .collect();
    all.extend_from_slice(vars);
    temp_env::with_vars(all, f)
}

fn yaml_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn unset_port_falls_back_to_default() {
    let cfg = with_env(&[], || AppConfig::load_or_default(None)).unwrap();
    assert_eq!(cfg.server.port, DEFAULT_PORT);
    assert_eq!(cfg.listen_addr().to_string(), "0.0.0.0:8080");
}

#[test]
fn empty_port_counts_as_unset() {
    let cfg = with_env(&[("PORT", Some(""))], || AppConfig::load_or_default(None)).unwrap();
    assert_eq!(cfg.server.port, DEFAULT_PORT);
}

#[test]
fn port_env_sets_listen_port() {
    let cfg = with_env(&[("PORT", Some("9090"))], || AppConfig::load_or_default(None)).unwrap();
    assert_eq!(cfg.server.port, 9090);
    assert_eq!(cfg.listen_addr().to_string(), "0.0.0.0:9090");
}

#[test]
fn non_numeric_port_is_a_config_error() {
    let err = with_env(&[("PORT", Some("eighty"))], || AppConfig::load_or_default(None))
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "eighty"));
}

#[test]
fn out_of_range_port_is_a_config_error() {
    let err =
        with_env(&[("PORT", Some("70000"))], || AppConfig::load_or_default(None)).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { .. }));
}

#[test]
fn yaml_file_is_applied() {
    let file = yaml_file(
        "server:\n  host: 127.0.0.1\n  port: 7000\nlogging:\n  level: debug\n  format: json\n",
    );
    let cfg = with_env(&[], || AppConfig::load_or_default(Some(file.path()))).unwrap();

    assert_eq!(cfg.listen_addr().to_string(), "127.0.0.1:7000");
    assert_eq!(cfg.logging.level, "debug");
    assert_eq!(cfg.logging.format, LogFormat::Json);
}

#[test]
fn prefixed_env_overrides_yaml() {
    let file = yaml_file("server:\n  port: 7000\nlogging:\n  level: debug\n");
    let cfg = with_env(
        &[
            ("APP__SERVER__PORT", Some("7100")),
            ("APP__LOGGING__LEVEL", Some("warn")),
        ],
        || AppConfig::load_or_default(Some(file.path())),
    )
    .unwrap();

    assert_eq!(cfg.server.port, 7100);
    assert_eq!(cfg.logging.level, "warn");
}

#[test]
fn port_env_overrides_every_file_and_prefixed_layer() {
    let file = yaml_file("server:\n  port: 7000\n");
    let cfg = with_env(
        &[("APP__SERVER__PORT", Some("7100")), ("PORT", Some("7200"))],
        || AppConfig::load_or_default(Some(file.path())),
    )
    .unwrap();

    assert_eq!(cfg.server.port, 7200);
}

#[test]
fn missing_file_is_reported() {
    let err = with_env(&[], || {
        AppConfig::load_or_default(Some(std::path::Path::new("/nonexistent/calculator.yaml")))
    })
    .unwrap_err();

    assert!(matches!(err, ConfigError::NotFound { .. }));
    assert!(err.to_string().contains("does not exist"));
}

#[test]
fn unknown_keys_are_rejected() {
    let file = yaml_file("server:\n  port: 7000\n  tls: true\n");
    let err = with_env(&[], || AppConfig::load_or_default(Some(file.path()))).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}
