//! Error types for Cedar analysis operations.

use std::time::Duration;
use thiserror::Error;

/// A staged policy or schema file could not be written.
///
/// Surfaced before any engine invocation is attempted; the operation that hit
/// it terminates immediately.
#[derive(Debug, Error)]
#[error("failed to stage {kind} content: {source}")]
pub struct StagingError {
    /// Which kind of artifact failed to stage.
    pub kind: crate::staging::ArtifactKind,
    /// The underlying filesystem error.
    #[source]
    pub source: std::io::Error,
}

/// Errors from invoking the external Cedar analysis engine.
///
/// All variants are terminal for the owning operation; nothing here is
/// retried.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine binary was not found on PATH (or at the configured path).
    #[error("Cedar CLI not found: {0}")]
    NotFound(String),

    /// The engine process could not be launched.
    #[error("failed to start Cedar CLI: {0}")]
    Spawn(#[source] std::io::Error),

    /// The engine exited with a non-zero status. The message preserves the
    /// engine's own diagnostic output verbatim.
    #[error("Cedar CLI exited with {status}: {message}")]
    Failed {
        /// Exit status as reported by the OS.
        status: std::process::ExitStatus,
        /// Captured stderr, falling back to stdout when stderr is empty.
        message: String,
    },

    /// The engine did not complete within the configured timeout.
    #[error("Cedar CLI timed out after {0:?}")]
    Timeout(Duration),
}

/// Union of everything an analyze/compare operation can fail with.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Staging(#[from] StagingError),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;
