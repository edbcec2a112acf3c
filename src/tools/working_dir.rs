//! Process working-directory tools.
//!
//! The working directory is process-wide: changing it affects how every later
//! relative path is resolved.

use std::path::Path;

use anyhow::Result;
use rust_mcp_sdk::macros::{JsonSchema, mcp_tool};
use rust_mcp_sdk::schema::CallToolResult;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{debug, info};

use super::shared::{error_envelope, respond_blocking};

#[mcp_tool(
    name = "get_current_directory",
    description = "Gets the current working directory.",
    title = "Get Current Directory",
    idempotent_hint = true,
    destructive_hint = false,
    open_world_hint = false,
    read_only_hint = true
)]
#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
pub struct GetCurrentDirectoryTool {}

impl GetCurrentDirectoryTool {
    pub async fn call_tool(&self) -> Result<CallToolResult> {
        respond_blocking(self.clone(), Self::run).await
    }

    pub fn run(&self) -> Value {
        match std::env::current_dir() {
            Ok(dir) => json!({
                "success": true,
                "currentDirectory": dir.to_string_lossy(),
            }),
            Err(e) => json!({ "error": e.to_string() }),
        }
    }
}

#[mcp_tool(
    name = "set_current_directory",
    description = "Changes the current working directory.",
    title = "Set Current Directory",
    idempotent_hint = true,
    destructive_hint = false,
    open_world_hint = false,
    read_only_hint = false
)]
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct SetCurrentDirectoryTool {
    /// New working directory
    pub path: String,
}

impl SetCurrentDirectoryTool {
    pub async fn call_tool(&self) -> Result<CallToolResult> {
        debug!("Set current directory: {}", self.path);
        respond_blocking(self.clone(), Self::run).await
    }

    pub fn run(&self) -> Value {
        let path = Path::new(&self.path);
        if !path.is_dir() {
            return error_envelope("Directory not found", &self.path);
        }

        let changed = std::env::set_current_dir(path).and_then(|_| std::env::current_dir());
        match changed {
            Ok(dir) => {
                info!("📁 Working directory is now {}", dir.display());
                json!({
                    "success": true,
                    "message": "Directory changed successfully",
                    "currentDirectory": dir.to_string_lossy(),
                })
            }
            Err(e) => error_envelope(e, &self.path),
        }
    }
}
