//! Name search: files whose names match a glob, with basic metadata.

use std::ops::ControlFlow;

use tracing::debug;

use super::accumulator::ResultAccumulator;
use super::content::ensure_positive_cap;
use super::error::Result;
use super::types::{FileHit, NameSearchRequest, SearchResult};
use super::walker::TreeWalker;
use crate::utils::file_utils::{file_name_of, modified_local, parent_display};

pub fn search_names(request: &NameSearchRequest) -> Result<SearchResult<FileHit>> {
    let walker = TreeWalker::new(&request.walk)?;
    ensure_positive_cap(request.max_results)?;
    let mut accumulator = ResultAccumulator::new(request.max_results);

    for candidate in walker {
        let path = candidate?;
        let metadata = std::fs::metadata(&path)?;

        let hit = FileHit {
            name: file_name_of(&path),
            path: path.to_string_lossy().into_owned(),
            directory: parent_display(&path),
            size: metadata.len(),
            last_modified: modified_local(&metadata),
        };

        if let ControlFlow::Break(()) = accumulator.offer(hit) {
            break;
        }
    }

    let result = accumulator.finish();
    debug!(
        "Name search for '{}' found {} files (truncated: {})",
        request.walk.file_pattern,
        result.count(),
        result.truncated
    );
    Ok(result)
}
