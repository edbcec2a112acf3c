//! Tests for content search: ordering, caps, truncation, skip policy

use anyhow::Result;
use tempfile::TempDir;

use crate::search::{
    ContentSearchRequest, SearchError, SearchMode, WalkOptions, search_content,
};
use crate::tests::test_utils::{fixture, write_file};

fn text_request(root: &TempDir, text: &str) -> ContentSearchRequest {
    ContentSearchRequest::new(
        WalkOptions::new(root.path()),
        SearchMode::SearchText(text.to_string()),
    )
}

fn regex_request(root: &TempDir, regex: &str) -> ContentSearchRequest {
    ContentSearchRequest::new(
        WalkOptions::new(root.path()),
        SearchMode::RegexPattern(regex.to_string()),
    )
}

fn foo_fixture() -> Result<TempDir> {
    fixture(&[("a.txt", "foo\nfoobar\nbaz"), ("b.txt", "foo")])
}

#[test]
fn test_matches_across_files_in_order() -> Result<()> {
    let temp_dir = foo_fixture()?;
    let result = search_content(&text_request(&temp_dir, "foo").with_max_results(10))?;

    let positions: Vec<(&str, usize)> = result
        .hits
        .iter()
        .map(|m| (m.file_name.as_str(), m.line_number))
        .collect();
    assert_eq!(positions, vec![("a.txt", 1), ("a.txt", 2), ("b.txt", 1)]);
    assert_eq!(result.count(), 3);
    assert!(!result.truncated);

    let first = &result.hits[0];
    assert_eq!(first.file, temp_dir.path().join("a.txt").to_string_lossy());
    assert_eq!(first.line, "foo");
    assert_eq!(first.match_position, 0);
    Ok(())
}

#[test]
fn test_cap_of_one_truncates() -> Result<()> {
    let temp_dir = foo_fixture()?;
    let result = search_content(&text_request(&temp_dir, "foo").with_max_results(1))?;

    assert_eq!(result.count(), 1);
    assert_eq!(result.hits[0].file_name, "a.txt");
    assert_eq!(result.hits[0].line_number, 1);
    assert!(result.truncated);
    Ok(())
}

#[test]
fn test_one_more_match_than_cap_truncates() -> Result<()> {
    let content = vec!["hit"; 6].join("\n");
    let temp_dir = fixture(&[("many.txt", content.as_str())])?;

    let result = search_content(&text_request(&temp_dir, "hit").with_max_results(5))?;

    assert_eq!(result.count(), 5);
    assert!(result.truncated);
    Ok(())
}

#[test]
fn test_exactly_cap_matches_is_not_truncated() -> Result<()> {
    let content = vec!["hit"; 5].join("\n");
    let temp_dir = fixture(&[("many.txt", content.as_str()), ("other.txt", "miss")])?;

    let result = search_content(&text_request(&temp_dir, "hit").with_max_results(5))?;

    assert_eq!(result.count(), 5);
    assert!(!result.truncated, "No sixth match exists");
    Ok(())
}

#[test]
fn test_cap_applies_across_files() -> Result<()> {
    let temp_dir = fixture(&[
        ("1.txt", "x\nx"),
        ("2.txt", "x\nx"),
        ("3.txt", "x\nx"),
    ])?;

    let result = search_content(&text_request(&temp_dir, "x").with_max_results(3))?;

    assert_eq!(result.count(), 3);
    assert_eq!(result.hits[2].file_name, "2.txt");
    assert!(result.truncated);
    Ok(())
}

#[test]
fn test_literal_is_case_insensitive_by_default() -> Result<()> {
    let temp_dir = fixture(&[("log.txt", "an error happened")])?;

    let loose = search_content(&text_request(&temp_dir, "ERROR"))?;
    assert_eq!(loose.count(), 1);

    let strict = search_content(&text_request(&temp_dir, "ERROR").case_sensitive(true))?;
    assert_eq!(strict.count(), 0);
    assert!(!strict.truncated);
    Ok(())
}

#[test]
fn test_literal_one_match_per_line_regex_all() -> Result<()> {
    let temp_dir = fixture(&[("dup.txt", "cat cat cat")])?;

    let literal = search_content(&text_request(&temp_dir, "cat"))?;
    assert_eq!(literal.count(), 1);

    let regex = search_content(&regex_request(&temp_dir, "cat"))?;
    let offsets: Vec<usize> = regex.hits.iter().map(|m| m.match_position).collect();
    assert_eq!(offsets, vec![0, 4, 8]);
    assert!(regex.hits.iter().all(|m| m.line_number == 1));
    Ok(())
}

#[test]
fn test_regex_single_group_is_reported() -> Result<()> {
    let temp_dir = fixture(&[("cfg.ini", "port=8080\nhost=local\nport=9090")])?;

    let result = search_content(&regex_request(&temp_dir, r"port=(\d+)"))?;

    assert_eq!(result.count(), 2);
    assert_eq!(result.hits[0].matched.as_deref(), Some("port=8080"));
    assert_eq!(result.hits[0].groups, Some(vec!["8080".to_string()]));
    assert_eq!(result.hits[1].groups, Some(vec!["9090".to_string()]));
    assert_eq!(result.hits[1].line_number, 3);
    Ok(())
}

#[test]
fn test_regex_cap_stops_inside_a_line() -> Result<()> {
    let temp_dir = fixture(&[("digits.txt", "1 2 3 4 5")])?;

    let result = search_content(&regex_request(&temp_dir, r"\d").with_max_results(2))?;

    assert_eq!(result.count(), 2);
    assert!(result.truncated);
    assert_eq!(result.hits[1].matched.as_deref(), Some("2"));
    Ok(())
}

#[test]
fn test_binary_and_non_utf8_files_are_skipped() -> Result<()> {
    let temp_dir = fixture(&[("one.txt", "needle"), ("two.txt", "a needle")])?;
    write_file(temp_dir.path(), "blob.bin", b"needle\0\x01\x02needle")?;
    write_file(temp_dir.path(), "latin1.txt", b"needle caf\xe9")?;

    let result = search_content(&text_request(&temp_dir, "needle"))?;

    let files: Vec<&str> = result.hits.iter().map(|m| m.file_name.as_str()).collect();
    assert_eq!(files, vec!["one.txt", "two.txt"]);
    Ok(())
}

#[test]
fn test_non_recursive_search_ignores_subdirectories() -> Result<()> {
    let temp_dir = fixture(&[("top.txt", "word"), ("sub/deep.txt", "word")])?;

    let mut request = text_request(&temp_dir, "word");
    request.walk = request.walk.recursive(false);
    let result = search_content(&request)?;

    assert_eq!(result.count(), 1);
    assert_eq!(result.hits[0].file_name, "top.txt");
    Ok(())
}

#[test]
fn test_file_pattern_limits_candidates() -> Result<()> {
    let temp_dir = fixture(&[("keep.rs", "fn main"), ("skip.txt", "fn main")])?;

    let mut request = text_request(&temp_dir, "fn");
    request.walk = request.walk.with_file_pattern("*.rs");
    let result = search_content(&request)?;

    assert_eq!(result.count(), 1);
    assert_eq!(result.hits[0].file_name, "keep.rs");
    Ok(())
}

#[test]
fn test_line_is_trimmed_but_position_is_not() -> Result<()> {
    let temp_dir = fixture(&[("indent.txt", "    let value = 1;\r\nnext")])?;

    let result = search_content(&text_request(&temp_dir, "value"))?;

    assert_eq!(result.hits[0].line, "let value = 1;");
    assert_eq!(result.hits[0].match_position, 8);
    Ok(())
}

#[test]
fn test_byte_order_mark_is_ignored() -> Result<()> {
    let temp_dir = fixture(&[("bom.txt", "\u{feff}start here")])?;

    let result = search_content(&text_request(&temp_dir, "start"))?;

    assert_eq!(result.hits[0].match_position, 0);
    assert_eq!(result.hits[0].line, "start here");
    Ok(())
}

#[test]
fn test_long_literal_query_is_not_a_pattern_error() -> Result<()> {
    let needle = "abcdefghij".repeat(20_000);
    let content = format!("x{needle}y");
    let temp_dir = fixture(&[("big.txt", content.as_str())])?;

    let loose = search_content(&text_request(&temp_dir, &needle))?;
    let strict = search_content(&text_request(&temp_dir, &needle).case_sensitive(true))?;

    assert_eq!(loose.count(), 1);
    assert_eq!(loose.hits[0].match_position, 1);
    assert_eq!(strict.count(), 1);
    Ok(())
}

#[test]
fn test_missing_root_fails() {
    let request = ContentSearchRequest::new(
        WalkOptions::new("/no/such/place/for/fsmcp"),
        SearchMode::SearchText("x".to_string()),
    );

    assert!(matches!(
        search_content(&request),
        Err(SearchError::NotFound { .. })
    ));
}

#[test]
fn test_invalid_regex_fails_whole_call() -> Result<()> {
    let temp_dir = foo_fixture()?;

    let result = search_content(&regex_request(&temp_dir, "foo("));

    assert!(matches!(result, Err(SearchError::InvalidPattern(_))));
    Ok(())
}

#[test]
fn test_zero_cap_is_rejected() -> Result<()> {
    let temp_dir = foo_fixture()?;

    let result = search_content(&text_request(&temp_dir, "foo").with_max_results(0));

    assert!(matches!(result, Err(SearchError::InvalidArgument(_))));
    Ok(())
}

/// Lock `path` with mode 000. Returns false when the process can still read
/// it anyway (running as root), in which case the caller skips its checks.
#[cfg(unix)]
fn lock(path: &std::path::Path) -> Result<bool> {
    use std::os::unix::fs::PermissionsExt;

    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o000))?;
    let still_readable = if path.is_dir() {
        std::fs::read_dir(path).is_ok()
    } else {
        std::fs::read(path).is_ok()
    };
    Ok(!still_readable)
}

#[cfg(unix)]
fn unlock(path: &std::path::Path, mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode))?;
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_unopenable_file_is_skipped() -> Result<()> {
    let temp_dir = fixture(&[("a.txt", "needle"), ("b.txt", "needle"), ("c.txt", "needle")])?;
    let locked = temp_dir.path().join("b.txt");

    if !lock(&locked)? {
        unlock(&locked, 0o644)?;
        return Ok(());
    }
    let result = search_content(&text_request(&temp_dir, "needle"));
    unlock(&locked, 0o644)?;

    let result = result?;
    let files: Vec<&str> = result.hits.iter().map(|m| m.file_name.as_str()).collect();
    assert_eq!(files, vec!["a.txt", "c.txt"]);
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_unreadable_subdirectory_fails_whole_search() -> Result<()> {
    let temp_dir = fixture(&[("a.txt", "needle"), ("locked/inner.txt", "needle")])?;
    let locked = temp_dir.path().join("locked");

    if !lock(&locked)? {
        unlock(&locked, 0o755)?;
        return Ok(());
    }
    let result = search_content(&text_request(&temp_dir, "needle"));
    unlock(&locked, 0o755)?;

    assert!(
        matches!(result, Err(SearchError::Unexpected(_))),
        "Partial results from a.txt must be discarded"
    );
    Ok(())
}
