//! Stateless recursive search over a directory tree
//!
//! Every call walks the tree afresh; nothing is indexed or cached:
//! - Name search filters files by a glob and reports metadata
//! - Content search scans each file's lines for literal text or a regex
//! - Both cap results globally and flag truncation

mod accumulator;
mod content;
pub mod error;
pub mod matcher;
mod names;
pub mod types;
pub mod walker;

pub use self::accumulator::ResultAccumulator;
pub use self::content::search_content;
pub use self::error::{SearchError, UnreadableFile};
pub use self::matcher::{LineHit, LineMatcher};
pub use self::names::search_names;
pub use self::types::{
    ContentSearchRequest, FileHit, LineMatch, NameSearchRequest, SearchMode, SearchResult,
    WalkOptions,
};
pub use self::walker::TreeWalker;
