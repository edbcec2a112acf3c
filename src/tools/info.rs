//! Inspection tools: file info, existence checks, directory sizes.

use std::fs;
use std::path::Path;

use anyhow::Result;
use rust_mcp_sdk::macros::{JsonSchema, mcp_tool};
use rust_mcp_sdk::schema::CallToolResult;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::debug;

use super::shared::{error_envelope, respond_blocking};
use crate::search::SearchError;
use crate::search::walker::{ensure_directory, is_file_entry, sorted_entries};
use crate::utils::file_utils::{
    accessed_local, bytes_to_mb, created_local, dotted_extension, file_name_of, modified_local,
};

#[mcp_tool(
    name = "get_file_info",
    description = "Gets detailed information about a file or directory.",
    title = "Get File Info",
    idempotent_hint = true,
    destructive_hint = false,
    open_world_hint = false,
    read_only_hint = true
)]
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct GetFileInfoTool {
    /// File or directory to inspect
    pub path: String,
}

impl GetFileInfoTool {
    pub async fn call_tool(&self) -> Result<CallToolResult> {
        debug!("Get file info: {}", self.path);
        respond_blocking(self.clone(), Self::run).await
    }

    pub fn run(&self) -> Value {
        let path = Path::new(&self.path);
        let described = if path.is_file() {
            describe_file(path)
        } else if path.is_dir() {
            describe_directory(path)
        } else {
            return error_envelope("Path not found", &self.path);
        };

        described.unwrap_or_else(|e| error_envelope(e, &self.path))
    }
}

fn describe_file(path: &Path) -> std::io::Result<Value> {
    let metadata = fs::metadata(path)?;
    let full_path = fs::canonicalize(path)?;

    Ok(json!({
        "success": true,
        "type": "file",
        "name": file_name_of(path),
        "path": full_path.to_string_lossy(),
        "size": metadata.len(),
        "extension": dotted_extension(path),
        "created": created_local(&metadata),
        "lastModified": modified_local(&metadata),
        "lastAccessed": accessed_local(&metadata),
        "isReadOnly": metadata.permissions().readonly(),
        "attributes": attributes(path, &metadata)?,
    }))
}

fn describe_directory(path: &Path) -> std::io::Result<Value> {
    let metadata = fs::metadata(path)?;
    let full_path = fs::canonicalize(path)?;

    let mut file_count = 0usize;
    let mut subdirectory_count = 0usize;
    for entry in fs::read_dir(path)? {
        let entry_path = entry?.path();
        if entry_path.is_dir() {
            subdirectory_count += 1;
        } else if entry_path.is_file() {
            file_count += 1;
        }
    }

    Ok(json!({
        "success": true,
        "type": "directory",
        "name": file_name_of(&full_path),
        "path": full_path.to_string_lossy(),
        "created": created_local(&metadata),
        "lastModified": modified_local(&metadata),
        "lastAccessed": accessed_local(&metadata),
        "fileCount": file_count,
        "subdirectoryCount": subdirectory_count,
        "attributes": attributes(path, &metadata)?,
    }))
}

/// Comma-separated attribute flags, "Normal" when none apply.
fn attributes(path: &Path, metadata: &fs::Metadata) -> std::io::Result<String> {
    let mut flags = Vec::new();
    if metadata.permissions().readonly() {
        flags.push("ReadOnly");
    }
    if file_name_of(path).starts_with('.') {
        flags.push("Hidden");
    }
    if metadata.is_dir() {
        flags.push("Directory");
    }
    if fs::symlink_metadata(path)?.file_type().is_symlink() {
        flags.push("ReparsePoint");
    }
    if flags.is_empty() {
        flags.push("Normal");
    }
    Ok(flags.join(", "))
}

#[mcp_tool(
    name = "path_exists",
    description = "Checks if a file or directory exists at the specified path.",
    title = "Path Exists",
    idempotent_hint = true,
    destructive_hint = false,
    open_world_hint = false,
    read_only_hint = true
)]
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct PathExistsTool {
    /// Path to check
    pub path: String,
}

impl PathExistsTool {
    pub async fn call_tool(&self) -> Result<CallToolResult> {
        debug!("Path exists: {}", self.path);
        respond_blocking(self.clone(), Self::run).await
    }

    pub fn run(&self) -> Value {
        let path = Path::new(&self.path);
        let is_file = path.is_file();
        let is_directory = path.is_dir();

        json!({
            "success": true,
            "path": self.path,
            "exists": is_file || is_directory,
            "isFile": is_file,
            "isDirectory": is_directory,
        })
    }
}

#[mcp_tool(
    name = "get_directory_size",
    description = "Calculates the total size of a directory including all subdirectories and files.",
    title = "Get Directory Size",
    idempotent_hint = true,
    destructive_hint = false,
    open_world_hint = false,
    read_only_hint = true
)]
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct GetDirectorySizeTool {
    /// Directory to measure
    #[serde(rename = "directoryPath")]
    pub directory_path: String,
}

/// Totals for a directory tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectoryTotals {
    pub total_size: u64,
    pub file_count: usize,
    pub directory_count: usize,
}

impl GetDirectorySizeTool {
    pub async fn call_tool(&self) -> Result<CallToolResult> {
        debug!("Get directory size: {}", self.directory_path);
        respond_blocking(self.clone(), Self::run).await
    }

    pub fn run(&self) -> Value {
        match self.measure() {
            Ok(totals) => json!({
                "success": true,
                "path": self.directory_path,
                "totalSize": totals.total_size,
                "totalSizeMB": bytes_to_mb(totals.total_size),
                "fileCount": totals.file_count,
                "directoryCount": totals.directory_count,
            }),
            Err(SearchError::NotFound { .. }) => {
                error_envelope("Directory not found", &self.directory_path)
            }
            Err(e) => error_envelope(e, &self.directory_path),
        }
    }

    pub fn measure(&self) -> Result<DirectoryTotals, SearchError> {
        let root = Path::new(&self.directory_path);
        ensure_directory(root)?;

        let mut totals = DirectoryTotals::default();
        for entry in sorted_entries(root, true) {
            let entry = entry?;
            if is_file_entry(&entry) {
                totals.total_size += fs::metadata(entry.path())?.len();
                totals.file_count += 1;
            } else if entry.file_type().is_dir() {
                totals.directory_count += 1;
            }
        }

        Ok(totals)
    }
}
