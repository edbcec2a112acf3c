// fsmcp - Filesystem Access Tools over the Model Context Protocol
//!
//! fsmcp lets an agent read, write, inspect and search the local filesystem
//! through MCP tools. Searches are stateless tree walks with capped results.

pub mod config;
pub mod handler;
pub mod logging;
pub mod search;
pub mod tools;
pub mod utils;


// Re-export common types
pub use config::ServerConfig;
pub use handler::FileSystemServerHandler;
pub use search::{
    ContentSearchRequest, LineMatch, NameSearchRequest, SearchError, SearchMode, SearchResult,
    WalkOptions, search_content, search_names,
};
