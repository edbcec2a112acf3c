//! Per-line matching for content search
//!
//! Literal search is an ordinal substring test that reports only the first
//! occurrence on a line. Regex search reports every non-overlapping
//! occurrence with its capture groups.

use std::ops::ControlFlow;

use regex::{Regex, RegexBuilder};

use super::error::{Result, SearchError};
use super::types::SearchMode;

/// A single occurrence on a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineHit<'a> {
    /// Byte offset into the untrimmed line
    pub start: usize,
    /// Whole match, regex mode only
    pub matched: Option<&'a str>,
    /// Capture groups 1..n, regex mode only
    pub groups: Option<Vec<String>>,
}

impl LineHit<'_> {
    /// Offset in characters, as reported to callers.
    pub fn char_position(&self, line: &str) -> usize {
        line[..self.start].chars().count()
    }
}

/// Compiled once per call, shared by every line of every file.
#[derive(Debug, Clone)]
pub enum LineMatcher {
    /// Needle stored pre-folded when matching ignores case
    Literal { needle: String, ignore_case: bool },
    Pattern(Regex),
}

impl LineMatcher {
    pub fn new(mode: &SearchMode, case_sensitive: bool) -> Result<Self> {
        match mode {
            SearchMode::SearchText(text) => {
                if text.is_empty() {
                    return Err(SearchError::InvalidArgument(
                        "searchText must not be empty".to_string(),
                    ));
                }
                let ignore_case = !case_sensitive;
                let needle = if ignore_case {
                    fold_case(text)
                } else {
                    text.clone()
                };
                Ok(LineMatcher::Literal {
                    needle,
                    ignore_case,
                })
            }
            SearchMode::RegexPattern(pattern) => {
                let regex = RegexBuilder::new(pattern)
                    .case_insensitive(!case_sensitive)
                    .build()?;
                Ok(LineMatcher::Pattern(regex))
            }
        }
    }

    /// Feed every hit on `line` to `emit`, stopping as soon as it breaks.
    pub fn scan_line<'a, F>(&self, line: &'a str, mut emit: F) -> ControlFlow<()>
    where
        F: FnMut(LineHit<'a>) -> ControlFlow<()>,
    {
        match self {
            LineMatcher::Literal {
                needle,
                ignore_case,
            } => match find_literal(line, needle, *ignore_case) {
                Some(start) => emit(LineHit {
                    start,
                    matched: None,
                    groups: None,
                }),
                None => ControlFlow::Continue(()),
            },
            LineMatcher::Pattern(regex) => {
                for captures in regex.captures_iter(line) {
                    let Some(whole) = captures.get(0) else {
                        continue;
                    };
                    let groups = captures
                        .iter()
                        .skip(1)
                        .map(|group| group.map(|m| m.as_str().to_string()).unwrap_or_default())
                        .collect();

                    emit(LineHit {
                        start: whole.start(),
                        matched: Some(whole.as_str()),
                        groups: Some(groups),
                    })?;
                }
                ControlFlow::Continue(())
            }
        }
    }
}

/// Simple uppercase mapping per character. Characters whose uppercase form
/// is more than one character are left as they are, so folding never
/// changes the character count.
fn fold_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(folded), None) => folded,
        _ => c,
    }
}

fn fold_case(text: &str) -> String {
    text.chars().map(fold_char).collect()
}

/// Byte offset in `line` of the first occurrence of `needle`.
fn find_literal(line: &str, needle: &str, ignore_case: bool) -> Option<usize> {
    if !ignore_case {
        return line.find(needle);
    }

    let folded = fold_case(line);
    let folded_start = folded.find(needle)?;
    let char_index = folded[..folded_start].chars().count();

    // Folding keeps one char per char, but not necessarily its byte length.
    line.char_indices()
        .nth(char_index)
        .map(|(byte_offset, _)| byte_offset)
}
