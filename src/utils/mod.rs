// fsmcp Utilities Module
//
// Path, metadata and text-reading helpers shared by the search core and the tools.

/// File utilities
pub mod file_utils {
    use chrono::{DateTime, Local};
    use std::fs;
    use std::io;
    use std::path::Path;

    use crate::search::UnreadableFile;

    const UTF8_BOM: &str = "\u{feff}";

    /// Read a whole file as UTF-8 text.
    ///
    /// NUL bytes mark the content as binary. A leading byte-order mark is
    /// dropped so offsets line up with what an editor shows.
    pub fn read_text(path: &Path) -> Result<String, UnreadableFile> {
        let bytes = fs::read(path)?;
        if bytes.contains(&0) {
            return Err(UnreadableFile::Binary);
        }

        let text = String::from_utf8(bytes)?;
        match text.strip_prefix(UTF8_BOM) {
            Some(stripped) => Ok(stripped.to_string()),
            None => Ok(text),
        }
    }

    /// Final path component, or the whole path when there is none.
    pub fn file_name_of(path: &Path) -> String {
        path.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned())
    }

    pub fn parent_display(path: &Path) -> String {
        path.parent()
            .map(|parent| parent.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Extension with its leading dot, empty when there is none.
    pub fn dotted_extension(path: &Path) -> String {
        path.extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default()
    }

    pub fn modified_local(metadata: &fs::Metadata) -> Option<DateTime<Local>> {
        metadata.modified().ok().map(DateTime::<Local>::from)
    }

    pub fn created_local(metadata: &fs::Metadata) -> Option<DateTime<Local>> {
        metadata.created().ok().map(DateTime::<Local>::from)
    }

    pub fn accessed_local(metadata: &fs::Metadata) -> Option<DateTime<Local>> {
        metadata.accessed().ok().map(DateTime::<Local>::from)
    }

    /// Create the parent directory of `path` if it is missing.
    pub fn ensure_parent_dir(path: &Path) -> io::Result<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
                fs::create_dir_all(parent)
            }
            _ => Ok(()),
        }
    }

    /// Bytes to mebibytes, rounded to two decimals.
    pub fn bytes_to_mb(bytes: u64) -> f64 {
        (bytes as f64 / 1_048_576.0 * 100.0).round() / 100.0
    }
}
