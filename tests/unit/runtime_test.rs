//! Tests for runtime spawner adapters

use serial_dispatch::core::Spawn;
use serial_dispatch::runtime::TokioSpawner;
use tokio::sync::oneshot;

#[tokio::test]
async fn current_spawner_runs_tasks_on_the_ambient_runtime() {
    let spawner = TokioSpawner::current();
    let (tx, rx) = oneshot::channel();
    spawner.spawn(async move {
        let _ = tx.send(42u32);
    });
    assert_eq!(rx.await.unwrap(), 42);
}

#[tokio::test]
async fn explicit_handle_spawner_works() {
    let spawner = TokioSpawner::new(tokio::runtime::Handle::current());
    let (tx, rx) = oneshot::channel();
    spawner.spawn(async move {
        let _ = tx.send("done");
    });
    assert_eq!(rx.await.unwrap(), "done");
}

#[tokio::test]
async fn clones_share_the_runtime() {
    let spawner = TokioSpawner::current();
    let clone = spawner.clone();
    let (tx, rx) = oneshot::channel();
    clone.spawn(async move {
        let _ = tx.send(());
    });
    rx.await.unwrap();
}
