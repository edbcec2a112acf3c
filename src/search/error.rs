use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a search call and replace any partial result.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Directory not found")]
    NotFound { path: PathBuf },

    #[error("Invalid regular expression: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Invalid file pattern '{pattern}': {source}")]
    InvalidFilePattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{0}")]
    Unexpected(#[from] walkdir::Error),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Why a single candidate could not be read as text.
///
/// Never escapes a search: the file loop logs it and moves on.
#[derive(Debug, Error)]
pub enum UnreadableFile {
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("binary content")]
    Binary,

    #[error("not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, SearchError>;
