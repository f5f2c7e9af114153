//! Envelope formatting for tool results.
//!
//! Every tool handler converges on rmcp's [`CallToolResult`]: one textual
//! content segment, with `is_error` set on the failure path. No handler
//! returns a raw, unformatted result, and formatting an error can itself
//! never fail.

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;

/// Wrap result data in a success envelope with one JSON text segment.
///
/// If the data cannot be serialized (which no current payload can trigger),
/// the serialization error is reported through the error envelope instead.
pub fn success(data: &impl Serialize) -> CallToolResult {
    match serde_json::to_string_pretty(data) {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(err) => failure(&anyhow::Error::new(err)),
    }
}

/// Wrap an error in an error envelope with one JSON text segment.
///
/// The segment carries the top-level message plus the full context chain so
/// callers can diagnose staging, engine, and serialization failures from the
/// envelope alone.
pub fn failure(error: &anyhow::Error) -> CallToolResult {
    let chain: Vec<String> = error
        .chain()
        .skip(1)
        .map(|cause| cause.to_string())
        .collect();
    let payload = serde_json::json!({
        "message": error.to_string(),
        "chain": chain,
    });
    let text =
        serde_json::to_string_pretty(&payload).unwrap_or_else(|_| format!("{error:#}"));
    CallToolResult::error(vec![Content::text(text)])
}
