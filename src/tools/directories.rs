//! Directory tools: create, delete, list.

use std::fs;
use std::path::Path;

use anyhow::Result;
use chrono::{DateTime, Local};
use rust_mcp_sdk::macros::{JsonSchema, mcp_tool};
use rust_mcp_sdk::schema::CallToolResult;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::debug;

use super::shared::{error_envelope, respond_blocking};
use crate::search::SearchError;
use crate::search::walker::{ensure_directory, is_file_entry, name_matcher, sorted_entries};
use crate::utils::file_utils::{file_name_of, modified_local};

#[mcp_tool(
    name = "create_directory",
    description = "Creates a directory at the specified path.",
    title = "Create Directory",
    idempotent_hint = true,
    destructive_hint = false,
    open_world_hint = false,
    read_only_hint = false
)]
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct CreateDirectoryTool {
    /// Directory to create, including missing parents
    #[serde(rename = "directoryPath")]
    pub directory_path: String,
}

impl CreateDirectoryTool {
    pub async fn call_tool(&self) -> Result<CallToolResult> {
        debug!("Create directory: {}", self.directory_path);
        respond_blocking(self.clone(), Self::run).await
    }

    pub fn run(&self) -> Value {
        let path = Path::new(&self.directory_path);
        if path.is_dir() {
            return json!({
                "message": "Directory already exists",
                "path": self.directory_path,
            });
        }

        match fs::create_dir_all(path) {
            Ok(()) => json!({
                "success": true,
                "message": "Directory created successfully",
                "path": self.directory_path,
            }),
            Err(e) => error_envelope(e, &self.directory_path),
        }
    }
}

#[mcp_tool(
    name = "delete_directory",
    description = "Deletes a directory at the specified path. Use recursive=true to delete non-empty directories.",
    title = "Delete Directory",
    idempotent_hint = false,
    destructive_hint = true,
    open_world_hint = false,
    read_only_hint = false
)]
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct DeleteDirectoryTool {
    /// Directory to delete
    #[serde(rename = "directoryPath")]
    pub directory_path: String,
    /// Delete contents as well (default: false)
    #[serde(default)]
    pub recursive: Option<bool>,
}

impl DeleteDirectoryTool {
    pub async fn call_tool(&self) -> Result<CallToolResult> {
        debug!(
            "Delete directory: {} (recursive: {:?})",
            self.directory_path, self.recursive
        );
        respond_blocking(self.clone(), Self::run).await
    }

    pub fn run(&self) -> Value {
        let path = Path::new(&self.directory_path);
        if !path.is_dir() {
            return error_envelope("Directory not found", &self.directory_path);
        }

        let removed = if self.recursive.unwrap_or(false) {
            fs::remove_dir_all(path)
        } else {
            fs::remove_dir(path)
        };

        match removed {
            Ok(()) => json!({
                "success": true,
                "message": "Directory deleted successfully",
                "path": self.directory_path,
            }),
            Err(e) => error_envelope(e, &self.directory_path),
        }
    }
}

#[mcp_tool(
    name = "list_directory",
    description = "Lists files and directories in the specified path.",
    title = "List Directory",
    idempotent_hint = true,
    destructive_hint = false,
    open_world_hint = false,
    read_only_hint = true
)]
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct ListDirectoryTool {
    /// Directory to list
    #[serde(rename = "directoryPath")]
    pub directory_path: String,
    /// Glob matched against entry names (default: "*")
    #[serde(default, rename = "searchPattern")]
    pub search_pattern: Option<String>,
    /// Descend into subdirectories (default: false)
    #[serde(default, rename = "includeSubdirectories")]
    pub include_subdirectories: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryItem {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub name: String,
    pub path: String,
    pub size: Option<u64>,
    pub last_modified: Option<DateTime<Local>>,
}

impl ListDirectoryTool {
    pub async fn call_tool(&self) -> Result<CallToolResult> {
        debug!("List directory: {}", self.directory_path);
        respond_blocking(self.clone(), Self::run).await
    }

    pub fn run(&self) -> Value {
        match self.list() {
            Ok(items) => json!({
                "success": true,
                "path": self.directory_path,
                "count": items.len(),
                "items": items,
            }),
            Err(SearchError::NotFound { .. }) => {
                error_envelope("Directory not found", &self.directory_path)
            }
            Err(e) => error_envelope(e, &self.directory_path),
        }
    }

    /// Files first, then directories, each in walk order.
    pub fn list(&self) -> Result<Vec<DirectoryItem>, SearchError> {
        let root = Path::new(&self.directory_path);
        ensure_directory(root)?;
        let matcher = name_matcher(self.search_pattern.as_deref().unwrap_or("*"))?;

        let mut files = Vec::new();
        let mut directories = Vec::new();

        for entry in sorted_entries(root, self.include_subdirectories.unwrap_or(false)) {
            let entry = entry?;
            if !matcher.is_match(entry.file_name()) {
                continue;
            }

            let path = entry.path();
            if is_file_entry(&entry) {
                let metadata = fs::metadata(path)?;
                files.push(DirectoryItem {
                    kind: "file",
                    name: file_name_of(path),
                    path: path.to_string_lossy().into_owned(),
                    size: Some(metadata.len()),
                    last_modified: modified_local(&metadata),
                });
            } else if path.is_dir() {
                let metadata = fs::metadata(path)?;
                directories.push(DirectoryItem {
                    kind: "directory",
                    name: file_name_of(path),
                    path: path.to_string_lossy().into_owned(),
                    size: None,
                    last_modified: modified_local(&metadata),
                });
            }
        }

        files.extend(directories);
        Ok(files)
    }
}
