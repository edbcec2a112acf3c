//! Single-file tools: read, write, append, delete, copy, move.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use anyhow::Result;
use rust_mcp_sdk::macros::{JsonSchema, mcp_tool};
use rust_mcp_sdk::schema::CallToolResult;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::debug;

use super::shared::{error_envelope, respond_blocking};
use crate::utils::file_utils::ensure_parent_dir;

//******************//
//    Read File     //
//******************//

#[mcp_tool(
    name = "read_file",
    description = "Reads the content of a file at the specified path.",
    title = "Read File",
    idempotent_hint = true,
    destructive_hint = false,
    open_world_hint = false,
    read_only_hint = true
)]
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct ReadFileTool {
    /// Path of the file to read
    #[serde(rename = "filePath")]
    pub file_path: String,
}

impl ReadFileTool {
    pub async fn call_tool(&self) -> Result<CallToolResult> {
        debug!("Read file: {}", self.file_path);
        respond_blocking(self.clone(), Self::run).await
    }

    pub fn run(&self) -> Value {
        let path = Path::new(&self.file_path);
        if !path.is_file() {
            return error_envelope("File not found", &self.file_path);
        }

        match fs::read_to_string(path) {
            Ok(content) => json!({
                "success": true,
                "size": content.len(),
                "content": content,
                "path": self.file_path,
            }),
            Err(e) => error_envelope(e, &self.file_path),
        }
    }
}

//******************//
//    Write File    //
//******************//

#[mcp_tool(
    name = "write_file",
    description = "Writes content to a file at the specified path. Creates the file if it doesn't exist.",
    title = "Write File",
    idempotent_hint = true,
    destructive_hint = true,
    open_world_hint = false,
    read_only_hint = false
)]
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct WriteFileTool {
    /// Path of the file to write
    #[serde(rename = "filePath")]
    pub file_path: String,
    /// Full text content to write
    pub content: String,
    /// Replace an existing file (default: true)
    #[serde(default)]
    pub overwrite: Option<bool>,
}

impl WriteFileTool {
    pub async fn call_tool(&self) -> Result<CallToolResult> {
        debug!("Write file: {} ({} bytes)", self.file_path, self.content.len());
        respond_blocking(self.clone(), Self::run).await
    }

    pub fn run(&self) -> Value {
        let path = Path::new(&self.file_path);
        if path.exists() && !self.overwrite.unwrap_or(true) {
            return error_envelope("File already exists and overwrite is false", &self.file_path);
        }

        let written = ensure_parent_dir(path).and_then(|_| fs::write(path, &self.content));
        match written {
            Ok(()) => json!({
                "success": true,
                "message": "File written successfully",
                "path": self.file_path,
                "size": self.content.len(),
            }),
            Err(e) => error_envelope(e, &self.file_path),
        }
    }
}

//******************//
//  Append To File  //
//******************//

#[mcp_tool(
    name = "append_to_file",
    description = "Appends content to an existing file or creates a new file if it doesn't exist.",
    title = "Append To File",
    idempotent_hint = false,
    destructive_hint = false,
    open_world_hint = false,
    read_only_hint = false
)]
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct AppendToFileTool {
    /// Path of the file to append to
    #[serde(rename = "filePath")]
    pub file_path: String,
    /// Text appended at the end of the file
    pub content: String,
}

impl AppendToFileTool {
    pub async fn call_tool(&self) -> Result<CallToolResult> {
        debug!("Append to file: {} ({} bytes)", self.file_path, self.content.len());
        respond_blocking(self.clone(), Self::run).await
    }

    pub fn run(&self) -> Value {
        let path = Path::new(&self.file_path);
        let appended = ensure_parent_dir(path)
            .and_then(|_| OpenOptions::new().create(true).append(true).open(path))
            .and_then(|mut file| file.write_all(self.content.as_bytes()))
            .and_then(|_| fs::metadata(path));

        match appended {
            Ok(metadata) => json!({
                "success": true,
                "message": "Content appended successfully",
                "path": self.file_path,
                "size": metadata.len(),
            }),
            Err(e) => error_envelope(e, &self.file_path),
        }
    }
}

//******************//
//   Delete File    //
//******************//

#[mcp_tool(
    name = "delete_file",
    description = "Deletes a file at the specified path.",
    title = "Delete File",
    idempotent_hint = false,
    destructive_hint = true,
    open_world_hint = false,
    read_only_hint = false
)]
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct DeleteFileTool {
    /// Path of the file to delete
    #[serde(rename = "filePath")]
    pub file_path: String,
}

impl DeleteFileTool {
    pub async fn call_tool(&self) -> Result<CallToolResult> {
        debug!("Delete file: {}", self.file_path);
        respond_blocking(self.clone(), Self::run).await
    }

    pub fn run(&self) -> Value {
        let path = Path::new(&self.file_path);
        if !path.is_file() {
            return error_envelope("File not found", &self.file_path);
        }

        match fs::remove_file(path) {
            Ok(()) => json!({
                "success": true,
                "message": "File deleted successfully",
                "path": self.file_path,
            }),
            Err(e) => error_envelope(e, &self.file_path),
        }
    }
}

//******************//
//  Copy/Move File  //
//******************//

/// `{ error, sourcePath, destinationPath }`
fn transfer_error(message: impl std::fmt::Display, source: &str, destination: &str) -> Value {
    json!({
        "error": message.to_string(),
        "sourcePath": source,
        "destinationPath": destination,
    })
}

/// Checks shared by copy and move; `None` when the transfer may proceed.
fn transfer_precheck(source: &str, destination: &str, overwrite: bool) -> Option<Value> {
    if !Path::new(source).is_file() {
        return Some(json!({ "error": "Source file not found", "sourcePath": source }));
    }
    if Path::new(destination).exists() && !overwrite {
        return Some(json!({
            "error": "Destination file already exists and overwrite is false",
            "destinationPath": destination,
        }));
    }
    None
}

#[mcp_tool(
    name = "copy_file",
    description = "Copies a file from source to destination path.",
    title = "Copy File",
    idempotent_hint = true,
    destructive_hint = false,
    open_world_hint = false,
    read_only_hint = false
)]
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct CopyFileTool {
    /// File to copy
    #[serde(rename = "sourcePath")]
    pub source_path: String,
    /// Target path of the copy
    #[serde(rename = "destinationPath")]
    pub destination_path: String,
    /// Replace an existing destination (default: false)
    #[serde(default)]
    pub overwrite: Option<bool>,
}

impl CopyFileTool {
    pub async fn call_tool(&self) -> Result<CallToolResult> {
        debug!("Copy file: {} -> {}", self.source_path, self.destination_path);
        respond_blocking(self.clone(), Self::run).await
    }

    pub fn run(&self) -> Value {
        let overwrite = self.overwrite.unwrap_or(false);
        if let Some(rejection) =
            transfer_precheck(&self.source_path, &self.destination_path, overwrite)
        {
            return rejection;
        }

        let destination = Path::new(&self.destination_path);
        let copied = ensure_parent_dir(destination)
            .and_then(|_| fs::copy(&self.source_path, destination));

        match copied {
            Ok(_) => json!({
                "success": true,
                "message": "File copied successfully",
                "sourcePath": self.source_path,
                "destinationPath": self.destination_path,
            }),
            Err(e) => transfer_error(e, &self.source_path, &self.destination_path),
        }
    }
}

#[mcp_tool(
    name = "move_file",
    description = "Moves a file from source to destination path.",
    title = "Move File",
    idempotent_hint = false,
    destructive_hint = true,
    open_world_hint = false,
    read_only_hint = false
)]
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct MoveFileTool {
    /// File to move
    #[serde(rename = "sourcePath")]
    pub source_path: String,
    /// New path of the file
    #[serde(rename = "destinationPath")]
    pub destination_path: String,
    /// Replace an existing destination (default: false)
    #[serde(default)]
    pub overwrite: Option<bool>,
}

impl MoveFileTool {
    pub async fn call_tool(&self) -> Result<CallToolResult> {
        debug!("Move file: {} -> {}", self.source_path, self.destination_path);
        respond_blocking(self.clone(), Self::run).await
    }

    pub fn run(&self) -> Value {
        let overwrite = self.overwrite.unwrap_or(false);
        if let Some(rejection) =
            transfer_precheck(&self.source_path, &self.destination_path, overwrite)
        {
            return rejection;
        }

        let destination = Path::new(&self.destination_path);
        let moved = ensure_parent_dir(destination).and_then(|_| {
            if destination.is_file() {
                fs::remove_file(destination)?;
            }
            move_across(Path::new(&self.source_path), destination)
        });

        match moved {
            Ok(()) => json!({
                "success": true,
                "message": "File moved successfully",
                "sourcePath": self.source_path,
                "destinationPath": self.destination_path,
            }),
            Err(e) => transfer_error(e, &self.source_path, &self.destination_path),
        }
    }
}

/// Rename, falling back to copy + delete when the target is on another device.
fn move_across(source: &Path, destination: &Path) -> std::io::Result<()> {
    match fs::rename(source, destination) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::CrossesDevices => {
            fs::copy(source, destination)?;
            fs::remove_file(source)
        }
        Err(e) => Err(e),
    }
}
