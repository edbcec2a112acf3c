// fsmcp MCP Tools - grouped by the kind of filesystem access they provide

use anyhow::Result;
use rust_mcp_sdk::schema::CallToolResult;
use rust_mcp_sdk::tool_box;

// Shared infrastructure used by all tools
pub mod shared;

pub mod directories;
pub mod files;
pub mod info;
pub mod search;
pub mod working_dir;

pub use directories::{CreateDirectoryTool, DeleteDirectoryTool, ListDirectoryTool};
pub use files::{
    AppendToFileTool, CopyFileTool, DeleteFileTool, MoveFileTool, ReadFileTool, WriteFileTool,
};
pub use info::{GetDirectorySizeTool, GetFileInfoTool, PathExistsTool};
pub use search::{SearchFilesTool, SearchInFilesRegexTool, SearchInFilesTool};
pub use working_dir::{GetCurrentDirectoryTool, SetCurrentDirectoryTool};

tool_box!(FileSystemTools, [
    // File operations
    ReadFileTool,
    WriteFileTool,
    AppendToFileTool,
    DeleteFileTool,
    CopyFileTool,
    MoveFileTool,
    // Directory operations
    CreateDirectoryTool,
    DeleteDirectoryTool,
    ListDirectoryTool,
    // Search operations
    SearchFilesTool,
    SearchInFilesTool,
    SearchInFilesRegexTool,
    // File information
    GetFileInfoTool,
    PathExistsTool,
    // Utility operations
    GetCurrentDirectoryTool,
    SetCurrentDirectoryTool,
    GetDirectorySizeTool
]);

impl FileSystemTools {
    /// Execute whichever tool the request decoded into.
    pub async fn call_tool(&self) -> Result<CallToolResult> {
        match self {
            FileSystemTools::ReadFileTool(tool) => tool.call_tool().await,
            FileSystemTools::WriteFileTool(tool) => tool.call_tool().await,
            FileSystemTools::AppendToFileTool(tool) => tool.call_tool().await,
            FileSystemTools::DeleteFileTool(tool) => tool.call_tool().await,
            FileSystemTools::CopyFileTool(tool) => tool.call_tool().await,
            FileSystemTools::MoveFileTool(tool) => tool.call_tool().await,
            FileSystemTools::CreateDirectoryTool(tool) => tool.call_tool().await,
            FileSystemTools::DeleteDirectoryTool(tool) => tool.call_tool().await,
            FileSystemTools::ListDirectoryTool(tool) => tool.call_tool().await,
            FileSystemTools::SearchFilesTool(tool) => tool.call_tool().await,
            FileSystemTools::SearchInFilesTool(tool) => tool.call_tool().await,
            FileSystemTools::SearchInFilesRegexTool(tool) => tool.call_tool().await,
            FileSystemTools::GetFileInfoTool(tool) => tool.call_tool().await,
            FileSystemTools::PathExistsTool(tool) => tool.call_tool().await,
            FileSystemTools::GetCurrentDirectoryTool(tool) => tool.call_tool().await,
            FileSystemTools::SetCurrentDirectoryTool(tool) => tool.call_tool().await,
            FileSystemTools::GetDirectorySizeTool(tool) => tool.call_tool().await,
        }
    }
}
