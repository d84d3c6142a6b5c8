//! Error types for the detection bridge

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DetectError {
    /// Detector configuration rejected at construction
    #[error("Invalid detector configuration: {0}")]
    InvalidConfig(String),

    /// A worker thread could not be started
    #[error("Failed to spawn detection worker: {0}")]
    Spawn(String),

    /// The worker pool no longer accepts tasks
    #[error("Detection worker pool is shut down")]
    PoolClosed,

    /// A scheduled task never came back from its worker
    #[error("Detection worker exited before returning its task")]
    WorkerLost,

    /// The engine panicked while executing a task
    #[error("Language detection engine fault: {0}")]
    EngineFault(String),
}

pub type Result<T> = std::result::Result<T, DetectError>;
