//! This crate provides the core orchestration logic for Cedar policy analysis:
//! - Staging of caller-supplied policy/schema text as ephemeral on-disk files
//! - Invocation of the external `cedar-lean-cli` analysis engine
//! - High-level analyze/compare operations used by the CLI and MCP adapters
//!
//! The Cedar language itself is never parsed or evaluated here; the external
//! engine is the sole authority on policy well-formedness and semantics.

pub mod commands;
mod engine;
mod error;
mod staging;

// Test utilities are available in both unit tests and integration tests
#[cfg(any(test, feature = "integ-test"))]
pub mod test_support;

// Re-exports for a small, focused public API
pub use commands::CedarAnalysisService;
pub use engine::{CedarEngine, CEDAR_CLI_PATH_VAR, DEFAULT_CEDAR_CLI};
pub use error::{AnalysisError, AnalysisResult, EngineError, StagingError};
pub use staging::{ArtifactKind, StagedFile};
