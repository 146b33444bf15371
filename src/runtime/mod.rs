//! Runtime adapters for task spawning.

pub mod tokio_spawner;

pub use tokio_spawner::TokioSpawner;
