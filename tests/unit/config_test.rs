//! Tests for queue configuration

use serial_dispatch::config::QueueConfig;

#[test]
fn defaults_are_fail_safe_with_five_second_watchdog() {
    let cfg = QueueConfig::default();
    assert!(!cfg.fail_fast);
    assert_eq!(cfg.default_timeout_ms, 5000);
    assert!(cfg.validate().is_ok());
}

#[test]
fn empty_json_object_yields_defaults() {
    let cfg = QueueConfig::from_json_str("{}").unwrap();
    assert!(!cfg.fail_fast);
    assert_eq!(cfg.default_timeout_ms, 5000);
}

#[test]
fn json_overrides_are_applied() {
    let cfg =
        QueueConfig::from_json_str(r#"{"fail_fast": true, "default_timeout_ms": 250}"#).unwrap();
    assert!(cfg.fail_fast);
    assert_eq!(cfg.default_timeout_ms, 250);
}

#[test]
fn zero_timeout_fails_validation() {
    let err = QueueConfig::from_json_str(r#"{"default_timeout_ms": 0}"#).unwrap_err();
    assert!(err.contains("default_timeout_ms"));

    let cfg = QueueConfig {
        fail_fast: false,
        default_timeout_ms: 0,
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = QueueConfig::from_json_str("{not json").unwrap_err();
    assert!(err.starts_with("parse error"));
}

#[test]
fn json_round_trip() {
    let cfg = QueueConfig {
        fail_fast: true,
        default_timeout_ms: 750,
    };
    let encoded = serde_json::to_string(&cfg).unwrap();
    let decoded = QueueConfig::from_json_str(&encoded).unwrap();
    assert!(decoded.fail_fast);
    assert_eq!(decoded.default_timeout_ms, 750);
}

#[test]
fn env_overrides_are_applied() {
    // All env interactions live in one test; parallel tests must not race
    // on these variables.
    std::env::set_var("SERIAL_DISPATCH_FAIL_FAST", "true");
    std::env::set_var("SERIAL_DISPATCH_DEFAULT_TIMEOUT_MS", "1234");
    let cfg = QueueConfig::from_env().unwrap();
    assert!(cfg.fail_fast);
    assert_eq!(cfg.default_timeout_ms, 1234);

    std::env::set_var("SERIAL_DISPATCH_DEFAULT_TIMEOUT_MS", "not-a-number");
    assert!(QueueConfig::from_env().is_err());

    std::env::remove_var("SERIAL_DISPATCH_FAIL_FAST");
    std::env::remove_var("SERIAL_DISPATCH_DEFAULT_TIMEOUT_MS");
    let cfg = QueueConfig::from_env().unwrap();
    assert!(!cfg.fail_fast);
    assert_eq!(cfg.default_timeout_ms, 5000);
}
