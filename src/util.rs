//! Path helpers shared by the indexer and the renderer

use std::path::Path;

use crate::constants as C;

/// Converts Windows backslashes to forward slashes for consistent link output
pub fn display_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// File name without extension, used for title and label fallbacks
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| C::UNTITLED_TITLE.to_string())
}
