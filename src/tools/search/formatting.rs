//! Result envelopes for search responses
//!
//! Shared by the MCP tools and the `fsmcp-search` command line.

use serde::Serialize;
use serde_json::{Value, json};

use crate::search::{
    ContentSearchRequest, FileHit, LineMatch, NameSearchRequest, SearchError, SearchMode,
    SearchResult,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSearchEnvelope<'a> {
    pub success: bool,
    pub search_path: String,
    /// `searchText` or `regexPattern`
    #[serde(flatten)]
    pub query: &'a SearchMode,
    pub file_pattern: &'a str,
    pub case_sensitive: bool,
    pub matches: &'a [LineMatch],
    pub count: usize,
    pub truncated: bool,
}

impl<'a> ContentSearchEnvelope<'a> {
    pub fn new(request: &'a ContentSearchRequest, result: &'a SearchResult<LineMatch>) -> Self {
        Self {
            success: true,
            search_path: request.walk.root.to_string_lossy().into_owned(),
            query: &request.mode,
            file_pattern: &request.walk.file_pattern,
            case_sensitive: request.case_sensitive,
            matches: &result.hits,
            count: result.count(),
            truncated: result.truncated,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NameSearchEnvelope<'a> {
    pub success: bool,
    pub search_path: String,
    pub pattern: &'a str,
    pub files: &'a [FileHit],
    pub count: usize,
    pub truncated: bool,
}

impl<'a> NameSearchEnvelope<'a> {
    pub fn new(request: &'a NameSearchRequest, result: &'a SearchResult<FileHit>) -> Self {
        Self {
            success: true,
            search_path: request.walk.root.to_string_lossy().into_owned(),
            pattern: &request.walk.file_pattern,
            files: &result.hits,
            count: result.count(),
            truncated: result.truncated,
        }
    }
}

/// `{ error, path }`, plus `regex` when a regex search failed.
pub fn search_error_envelope(error: &SearchError, path: &str, mode: Option<&SearchMode>) -> Value {
    let mut envelope = json!({
        "error": error.to_string(),
        "path": path,
    });

    if let (Some(SearchMode::RegexPattern(pattern)), Some(fields)) =
        (mode, envelope.as_object_mut())
    {
        fields.insert("regex".to_string(), Value::String(pattern.clone()));
    }

    envelope
}

/// Content search rendered as an envelope, success or failure.
pub fn content_search_envelope(request: &ContentSearchRequest) -> Value {
    let outcome = crate::search::search_content(request).and_then(|result| {
        serde_json::to_value(ContentSearchEnvelope::new(request, &result))
            .map_err(|e| SearchError::Io(e.into()))
    });

    outcome.unwrap_or_else(|e| {
        search_error_envelope(
            &e,
            &request.walk.root.to_string_lossy(),
            Some(&request.mode),
        )
    })
}

/// Name search rendered as an envelope, success or failure.
pub fn name_search_envelope(request: &NameSearchRequest) -> Value {
    let outcome = crate::search::search_names(request).and_then(|result| {
        serde_json::to_value(NameSearchEnvelope::new(request, &result))
            .map_err(|e| SearchError::Io(e.into()))
    });

    outcome.unwrap_or_else(|e| search_error_envelope(&e, &request.walk.root.to_string_lossy(), None))
}
