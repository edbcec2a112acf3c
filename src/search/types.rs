//! Request and result types shared by name search and content search.

use std::path::PathBuf;

use chrono::{DateTime, Local};
use serde::Serialize;

pub const DEFAULT_FILE_PATTERN: &str = "*";
pub const DEFAULT_CONTENT_MAX_RESULTS: usize = 50;
pub const DEFAULT_NAME_MAX_RESULTS: usize = 100;

/// How lines are matched in a content search.
///
/// Serializes as the envelope field naming the query, `searchText` or
/// `regexPattern`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchMode {
    SearchText(String),
    RegexPattern(String),
}

impl SearchMode {
    pub fn query(&self) -> &str {
        match self {
            SearchMode::SearchText(text) => text,
            SearchMode::RegexPattern(pattern) => pattern,
        }
    }

    pub fn is_regex(&self) -> bool {
        matches!(self, SearchMode::RegexPattern(_))
    }
}

/// Tree walk settings common to both searches.
#[derive(Debug, Clone)]
pub struct WalkOptions {
    pub root: PathBuf,
    /// Glob matched against file names; empty means everything
    pub file_pattern: String,
    pub recursive: bool,
}

impl WalkOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            file_pattern: DEFAULT_FILE_PATTERN.to_string(),
            recursive: true,
        }
    }

    pub fn with_file_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.file_pattern = pattern.into();
        self
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }
}

#[derive(Debug, Clone)]
pub struct NameSearchRequest {
    pub walk: WalkOptions,
    pub max_results: usize,
}

impl NameSearchRequest {
    pub fn new(walk: WalkOptions) -> Self {
        Self {
            walk,
            max_results: DEFAULT_NAME_MAX_RESULTS,
        }
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}

#[derive(Debug, Clone)]
pub struct ContentSearchRequest {
    pub walk: WalkOptions,
    pub mode: SearchMode,
    pub case_sensitive: bool,
    pub max_results: usize,
}

impl ContentSearchRequest {
    pub fn new(walk: WalkOptions, mode: SearchMode) -> Self {
        Self {
            walk,
            mode,
            case_sensitive: false,
            max_results: DEFAULT_CONTENT_MAX_RESULTS,
        }
    }

    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}

/// One reportable hit from a content search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineMatch {
    pub file: String,
    pub file_name: String,
    /// 1-based
    pub line_number: usize,
    /// Trimmed line text
    pub line: String,
    /// Character offset of the match within the untrimmed line
    pub match_position: usize,
    /// Whole regex match; absent for literal searches
    #[serde(rename = "match", skip_serializing_if = "Option::is_none")]
    pub matched: Option<String>,
    /// Capture groups 1..n; absent for literal searches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<String>>,
}

/// One file reported by a name search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileHit {
    pub name: String,
    pub path: String,
    pub directory: String,
    pub size: u64,
    pub last_modified: Option<DateTime<Local>>,
}

/// A complete, capped batch of hits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<T> {
    pub hits: Vec<T>,
    pub truncated: bool,
}

impl<T> SearchResult<T> {
    pub fn count(&self) -> usize {
        self.hits.len()
    }
}
