//! Content search: tree walk, per-file read guard, per-line matching.

use tracing::debug;

use super::accumulator::ResultAccumulator;
use super::error::{Result, SearchError};
use super::matcher::LineMatcher;
use super::types::{ContentSearchRequest, LineMatch, SearchResult};
use super::walker::TreeWalker;
use crate::utils::file_utils::{file_name_of, read_text};

/// Run a content search to completion or to the result cap.
///
/// Files that cannot be read as text are skipped. Any other failure aborts
/// the search and discards what was collected so far.
pub fn search_content(request: &ContentSearchRequest) -> Result<SearchResult<LineMatch>> {
    let walker = TreeWalker::new(&request.walk)?;
    ensure_positive_cap(request.max_results)?;
    let matcher = LineMatcher::new(&request.mode, request.case_sensitive)?;
    let mut accumulator = ResultAccumulator::new(request.max_results);

    'files: for candidate in walker {
        let path = candidate?;

        let content = match read_text(&path) {
            Ok(content) => content,
            Err(reason) => {
                debug!("Skipping {}: {}", path.display(), reason);
                continue;
            }
        };

        let file = path.to_string_lossy().into_owned();
        let file_name = file_name_of(&path);

        for (index, line) in content.split('\n').enumerate() {
            let flow = matcher.scan_line(line, |hit| {
                accumulator.offer(LineMatch {
                    file: file.clone(),
                    file_name: file_name.clone(),
                    line_number: index + 1,
                    line: line.trim().to_string(),
                    match_position: hit.char_position(line),
                    matched: hit.matched.map(str::to_string),
                    groups: hit.groups,
                })
            });

            if flow.is_break() {
                break 'files;
            }
        }
    }

    let result = accumulator.finish();
    debug!(
        "Content search for '{}' found {} matches (truncated: {})",
        request.mode.query(),
        result.count(),
        result.truncated
    );
    Ok(result)
}

pub(crate) fn ensure_positive_cap(max_results: usize) -> Result<()> {
    if max_results == 0 {
        return Err(SearchError::InvalidArgument(
            "maxResults must be a positive integer".to_string(),
        ));
    }
    Ok(())
}
