//! Engine error type.

use thiserror::Error;

/// Errors surfaced by configuration, logging setup and the background loop.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Engine thread panicked")]
    ThreadPanicked,
}

/// Result alias used across the engine.
pub type EngineResult<T> = Result<T, EngineError>;
