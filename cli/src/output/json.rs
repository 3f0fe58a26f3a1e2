//! JSON output helpers for `--json` mode.

use anyhow::{Context, Result};

use crate::domain::Deployment;

/// Format a successful deployment.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "security_group_id": "sg-…",
///   "instance_id": "i-…",
///   "url": "http://…",
///   "tagged": true,
///   "elapsed_secs": 62
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_deployment(deployment: &Deployment, elapsed_secs: u64) -> Result<String> {
    let mut obj = serde_json::to_value(deployment).context("JSON serialization failed")?;
    obj["elapsed_secs"] = serde_json::json!(elapsed_secs);
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}
