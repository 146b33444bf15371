//! Tests for error types

use std::time::Duration;

use serial_dispatch::core::{CommandError, SchedulerError};

#[test]
fn command_error_renders_message_only() {
    let err = CommandError::new("disk full", "save-settings");
    assert_eq!(format!("{err}"), "disk full");
    assert_eq!(err.message(), "disk full");
    assert_eq!(err.command_id(), "save-settings");
}

#[test]
fn timed_out_uses_fixed_template() {
    let err = CommandError::timed_out("sync", Duration::from_millis(10));
    assert_eq!(format!("{err}"), "timeout after 10 milliseconds");
    assert_eq!(err.command_id(), "sync");

    let err = CommandError::timed_out("sync", Duration::from_secs(5));
    assert_eq!(format!("{err}"), "timeout after 5000 milliseconds");
}

#[test]
fn command_error_survives_anyhow_round_trip() {
    let failure: anyhow::Error = CommandError::new("wedged", "probe").into();
    assert_eq!(failure.to_string(), "wedged");
    let err = failure
        .downcast_ref::<CommandError>()
        .expect("downcast lost the concrete type");
    assert_eq!(err.command_id(), "probe");
}

#[test]
fn reserved_id_error() {
    let err = SchedulerError::ReservedId("__drain_marker__".to_string());
    assert_eq!(
        format!("{err}"),
        "command id `__drain_marker__` is reserved for internal use"
    );
}

#[test]
fn invalid_config_error() {
    let err = SchedulerError::InvalidConfig("default_timeout_ms must be greater than 0".into());
    assert_eq!(
        format!("{err}"),
        "invalid configuration: default_timeout_ms must be greater than 0"
    );
}
