//! Tree enumeration
//!
//! Produces candidate files lazily, filtered by a glob matched against the
//! file name. Entries inside each directory are visited in file-name order
//! so a fixed snapshot always yields the same sequence.
//!
//! Symbolic links to files are candidates; symbolic links to directories are
//! never descended. Linked directory trees are therefore not searched, and
//! link cycles cannot trap the walk.

use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};
use walkdir::{DirEntry, WalkDir};

use super::error::{Result, SearchError};
use super::types::{DEFAULT_FILE_PATTERN, WalkOptions};

/// Compile a name filter. An empty pattern matches every name.
///
/// Matching follows the platform's file-name case rules.
pub fn name_matcher(pattern: &str) -> Result<GlobMatcher> {
    let pattern = if pattern.trim().is_empty() {
        DEFAULT_FILE_PATTERN
    } else {
        pattern
    };

    GlobBuilder::new(pattern)
        .literal_separator(true)
        .case_insensitive(cfg!(windows))
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|source| SearchError::InvalidFilePattern {
            pattern: pattern.to_string(),
            source,
        })
}

/// Raw entries below `root`, excluding `root` itself, sorted per directory.
pub fn sorted_entries(root: &Path, recursive: bool) -> walkdir::IntoIter {
    let max_depth = if recursive { usize::MAX } else { 1 };
    WalkDir::new(root)
        .min_depth(1)
        .max_depth(max_depth)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
}

/// Fails with [`SearchError::NotFound`] unless `root` is an existing directory.
pub fn ensure_directory(root: &Path) -> Result<()> {
    if root.is_dir() {
        Ok(())
    } else {
        Err(SearchError::NotFound {
            path: root.to_path_buf(),
        })
    }
}

/// Regular files, or links resolving to one.
pub fn is_file_entry(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}

/// Lazy iterator over candidate file paths.
pub struct TreeWalker {
    matcher: GlobMatcher,
    entries: walkdir::IntoIter,
}

impl TreeWalker {
    pub fn new(options: &WalkOptions) -> Result<Self> {
        ensure_directory(&options.root)?;
        let matcher = name_matcher(&options.file_pattern)?;

        Ok(Self {
            matcher,
            entries: sorted_entries(&options.root, options.recursive),
        })
    }
}

impl Iterator for TreeWalker {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(e) => return Some(Err(SearchError::Unexpected(e))),
            };

            if is_file_entry(&entry) && self.matcher.is_match(entry.file_name()) {
                return Some(Ok(entry.into_path()));
            }
        }
    }
}
