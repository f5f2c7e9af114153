//! Tool implementations behind the MCP surface.
//!
//! Each tool is a thin wrapper over [`cedar_analysis_core::CedarAnalysisService`]:
//! deserialize the input shape, run the operation, and describe the result.
//! Envelope formatting happens one layer up, in the server's tool router.

mod analyze_policies;
mod compare_policy_sets;

pub(crate) use analyze_policies::{analyze_policies, AnalyzePoliciesInput};
pub(crate) use compare_policy_sets::{compare_policy_sets, ComparePolicySetsInput};

use schemars::JsonSchema;
use serde::Serialize;

/// Result shape shared by both tools: the engine's JSON output plus a short
/// human-readable summary.
#[derive(Debug, Serialize, JsonSchema, PartialEq, Eq)]
pub struct AnalysisOutput {
    /// Raw JSON emitted by the analysis engine on stdout.
    pub output: String,
    /// One-line description of what completed.
    pub summary: String,
}
