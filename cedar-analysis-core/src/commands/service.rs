//! Cedar Analysis Service Layer
//!
//! This module provides the main service interface that encapsulates the
//! orchestration logic for Cedar policy analysis. The service holds the
//! engine handle and provides high-level operations (analyze, compare) that
//! can be used by different adapters (CLI, MCP).

use crate::engine::CedarEngine;

/// Main service struct that owns the engine handle and drives analysis
/// operations.
///
/// Each operation is stateless and independent; the service may be cloned
/// freely and called concurrently.
#[derive(Debug, Clone)]
pub struct CedarAnalysisService {
    pub(crate) engine: CedarEngine,
}

impl CedarAnalysisService {
    /// Create a service backed by the given engine handle.
    pub fn new(engine: CedarEngine) -> Self {
        Self { engine }
    }

    /// Create a service using the engine configured through the environment
    /// (`CEDAR_CLI_PATH`, defaulting to `cedar-lean-cli` on PATH).
    pub fn from_env() -> Self {
        Self::new(CedarEngine::from_env())
    }

    // analyze_policies() implementation is in analyze.rs
    // compare_policy_sets() implementation is in compare.rs
}
