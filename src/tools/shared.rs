//! Shared tool infrastructure
//!
//! Every tool answers with one JSON object as text content. Success envelopes
//! carry `success: true`; failures carry `error` plus the path(s) involved and
//! never a `success` key, so agents branch on the presence of `error`.

use std::fmt::Display;

use anyhow::{Context, Result};
use rust_mcp_sdk::schema::{CallToolResult, TextContent};
use serde::Serialize;
use serde_json::{Value, json};

/// Wrap a serializable envelope as a tool result.
pub fn json_result<T: Serialize>(envelope: &T) -> Result<CallToolResult> {
    let text = serde_json::to_string(envelope).context("Failed to serialize tool envelope")?;
    Ok(CallToolResult::text_content(vec![TextContent::from(text)]))
}

/// `{ error, path }`
pub fn error_envelope(message: impl Display, path: &str) -> Value {
    json!({
        "error": message.to_string(),
        "path": path,
    })
}

/// Run a tool body on the blocking pool and wrap its envelope.
///
/// Tool bodies touch the filesystem synchronously; keeping them off the
/// async workers leaves the stdio transport responsive during long walks.
pub async fn respond_blocking<T>(tool: T, body: fn(&T) -> Value) -> Result<CallToolResult>
where
    T: Send + 'static,
{
    let envelope = tokio::task::spawn_blocking(move || body(&tool))
        .await
        .context("Tool task failed to complete")?;
    json_result(&envelope)
}

/// Extract the text payload of a tool result.
pub fn result_text(result: &CallToolResult) -> String {
    result
        .content
        .iter()
        .filter_map(|content_block| {
            serde_json::to_value(content_block).ok().and_then(|json| {
                json.get("text")
                    .and_then(|v| v.as_str())
                    .map(|s| s.to_string())
            })
        })
        .collect::<Vec<_>>()
        .join("\n")
}
