//! Tests for the queue builder

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serial_dispatch::builders::CommandQueueBuilder;
use serial_dispatch::config::QueueConfig;
use serial_dispatch::core::{FnCommand, SchedulerError};

#[tokio::test]
async fn builds_with_defaults() {
    let queue = CommandQueueBuilder::new().build().unwrap();
    assert!(!queue.fail_fast_enabled());
    queue.finish().await;
}

#[tokio::test]
async fn fail_fast_knob_reaches_the_queue() {
    let queue = CommandQueueBuilder::new().fail_fast(true).build().unwrap();
    assert!(queue.fail_fast_enabled());
}

#[tokio::test]
async fn carries_an_existing_config() {
    let queue = CommandQueueBuilder::from_config(QueueConfig {
        fail_fast: true,
        default_timeout_ms: 100,
    })
    .build()
    .unwrap();
    assert!(queue.fail_fast_enabled());
}

#[tokio::test]
async fn rejects_invalid_config() {
    let err = CommandQueueBuilder::new()
        .default_timeout(Duration::from_millis(0))
        .build()
        .unwrap_err();
    assert!(matches!(err, SchedulerError::InvalidConfig(_)));
}

#[tokio::test]
async fn default_error_handler_is_wired_into_the_sink() {
    let invoked = Arc::new(AtomicBool::new(false));
    let seen = Arc::clone(&invoked);
    let queue = CommandQueueBuilder::new()
        .default_error_handler(move |failure| {
            assert_eq!(failure.to_string(), "handled by the builder's sink");
            seen.store(true, Ordering::SeqCst);
        })
        .build()
        .unwrap();

    queue
        .dispatch(FnCommand::new("failing", || async {
            Err(anyhow::anyhow!("handled by the builder's sink"))
        }))
        .unwrap();
    queue.finish().await;

    assert!(invoked.load(Ordering::SeqCst));
}
