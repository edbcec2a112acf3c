//! Search tools
//!
//! Thin MCP wrappers around [`crate::search`]:
//! - `search_files`: file names matching a glob
//! - `search_in_files`: lines containing literal text
//! - `search_in_files_regex`: every regex match, with capture groups

pub mod formatting;

use anyhow::Result;
use rust_mcp_sdk::macros::{JsonSchema, mcp_tool};
use rust_mcp_sdk::schema::CallToolResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use self::formatting::{content_search_envelope, name_search_envelope};
use super::shared::respond_blocking;
use crate::search::types::{
    DEFAULT_CONTENT_MAX_RESULTS, DEFAULT_FILE_PATTERN, DEFAULT_NAME_MAX_RESULTS,
};
use crate::search::{ContentSearchRequest, NameSearchRequest, SearchMode, WalkOptions};

//******************//
//   Search Tools   //
//******************//

#[mcp_tool(
    name = "search_files",
    description = "Searches for files by name pattern in the specified directory and optionally subdirectories.",
    title = "Search Files By Name",
    idempotent_hint = true,
    destructive_hint = false,
    open_world_hint = false,
    read_only_hint = true
)]
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct SearchFilesTool {
    /// Directory to search
    #[serde(rename = "directoryPath")]
    pub directory_path: String,
    /// Glob matched against file names, e.g. "*.rs" (default: "*")
    #[serde(default, rename = "searchPattern")]
    pub search_pattern: Option<String>,
    /// Search subdirectories too (default: true)
    #[serde(default, rename = "includeSubdirectories")]
    pub include_subdirectories: Option<bool>,
    /// Maximum files returned (default: 100)
    #[serde(default, rename = "maxResults")]
    pub max_results: Option<u32>,
}

impl SearchFilesTool {
    pub fn request(&self) -> NameSearchRequest {
        let walk = walk_options(
            &self.directory_path,
            self.search_pattern.as_deref(),
            self.include_subdirectories,
        );
        NameSearchRequest::new(walk).with_max_results(
            self.max_results
                .map_or(DEFAULT_NAME_MAX_RESULTS, |max| max as usize),
        )
    }

    pub async fn call_tool(&self) -> Result<CallToolResult> {
        debug!(
            "🔍 Search files: {} in {}",
            self.search_pattern.as_deref().unwrap_or(DEFAULT_FILE_PATTERN),
            self.directory_path
        );
        respond_blocking(self.clone(), Self::run).await
    }

    pub fn run(&self) -> Value {
        name_search_envelope(&self.request())
    }
}

#[mcp_tool(
    name = "search_in_files",
    description = "Searches for content within files using text pattern matching.",
    title = "Search Text In Files",
    idempotent_hint = true,
    destructive_hint = false,
    open_world_hint = false,
    read_only_hint = true
)]
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct SearchInFilesTool {
    /// Directory to search
    #[serde(rename = "directoryPath")]
    pub directory_path: String,
    /// Literal text to find; reports the first occurrence per line
    #[serde(rename = "searchText")]
    pub search_text: String,
    /// Glob matched against file names (default: "*")
    #[serde(default, rename = "filePattern")]
    pub file_pattern: Option<String>,
    /// Search subdirectories too (default: true)
    #[serde(default, rename = "includeSubdirectories")]
    pub include_subdirectories: Option<bool>,
    /// Match case exactly (default: false)
    #[serde(default, rename = "caseSensitive")]
    pub case_sensitive: Option<bool>,
    /// Maximum matches returned across all files (default: 50)
    #[serde(default, rename = "maxResults")]
    pub max_results: Option<u32>,
}

impl SearchInFilesTool {
    pub fn request(&self) -> ContentSearchRequest {
        content_request(
            walk_options(
                &self.directory_path,
                self.file_pattern.as_deref(),
                self.include_subdirectories,
            ),
            SearchMode::SearchText(self.search_text.clone()),
            self.case_sensitive,
            self.max_results,
        )
    }

    pub async fn call_tool(&self) -> Result<CallToolResult> {
        debug!("🔍 Search in files: '{}' in {}", self.search_text, self.directory_path);
        respond_blocking(self.clone(), Self::run).await
    }

    pub fn run(&self) -> Value {
        content_search_envelope(&self.request())
    }
}

#[mcp_tool(
    name = "search_in_files_regex",
    description = "Searches for content within files using regular expression pattern matching.",
    title = "Search Regex In Files",
    idempotent_hint = true,
    destructive_hint = false,
    open_world_hint = false,
    read_only_hint = true
)]
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct SearchInFilesRegexTool {
    /// Directory to search
    #[serde(rename = "directoryPath")]
    pub directory_path: String,
    /// Regular expression; every non-overlapping match is reported with its groups
    #[serde(rename = "regexPattern")]
    pub regex_pattern: String,
    /// Glob matched against file names (default: "*")
    #[serde(default, rename = "filePattern")]
    pub file_pattern: Option<String>,
    /// Search subdirectories too (default: true)
    #[serde(default, rename = "includeSubdirectories")]
    pub include_subdirectories: Option<bool>,
    /// Match case exactly (default: false)
    #[serde(default, rename = "caseSensitive")]
    pub case_sensitive: Option<bool>,
    /// Maximum matches returned across all files (default: 50)
    #[serde(default, rename = "maxResults")]
    pub max_results: Option<u32>,
}

impl SearchInFilesRegexTool {
    pub fn request(&self) -> ContentSearchRequest {
        content_request(
            walk_options(
                &self.directory_path,
                self.file_pattern.as_deref(),
                self.include_subdirectories,
            ),
            SearchMode::RegexPattern(self.regex_pattern.clone()),
            self.case_sensitive,
            self.max_results,
        )
    }

    pub async fn call_tool(&self) -> Result<CallToolResult> {
        debug!(
            "🔍 Search in files (regex): /{}/ in {}",
            self.regex_pattern, self.directory_path
        );
        respond_blocking(self.clone(), Self::run).await
    }

    pub fn run(&self) -> Value {
        content_search_envelope(&self.request())
    }
}

fn walk_options(directory: &str, pattern: Option<&str>, recursive: Option<bool>) -> WalkOptions {
    WalkOptions::new(directory)
        .with_file_pattern(pattern.unwrap_or(DEFAULT_FILE_PATTERN))
        .recursive(recursive.unwrap_or(true))
}

fn content_request(
    walk: WalkOptions,
    mode: SearchMode,
    case_sensitive: Option<bool>,
    max_results: Option<u32>,
) -> ContentSearchRequest {
    ContentSearchRequest::new(walk, mode)
        .case_sensitive(case_sensitive.unwrap_or(false))
        .with_max_results(max_results.map_or(DEFAULT_CONTENT_MAX_RESULTS, |max| max as usize))
}
