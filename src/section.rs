//! Marker-delimited section replacement
//!
//! The destination file is only ever touched between the two sentinel
//! markers; every byte outside the marker span is preserved verbatim.
//! Writes are skipped entirely when the result matches what is already
//! on disk, so repeated runs leave no spurious diffs.

use std::fs;
use std::io;
use std::path::Path;

/// Replace the text between the sentinel markers in `dest` with `new_body`.
///
/// Creates the file with a fresh marker block when it does not exist, and
/// appends the block after a blank line when no start-before-end pair is
/// present. With several marker pairs in the file, the span from the first
/// start marker to the next end marker is the one replaced; later pairs
/// are left alone. Returns whether the file was written.
pub fn replace_section(
    dest: &Path,
    new_body: &str,
    start_marker: &str,
    end_marker: &str,
) -> io::Result<bool> {
    let block = format!("{}\n{}\n{}", start_marker, new_body, end_marker);

    if !dest.exists() {
        fs::write(dest, format!("{}\n", block))?;
        return Ok(true);
    }

    let content = fs::read_to_string(dest)?;
    let new_content = match marker_span(&content, start_marker, end_marker) {
        Some((from, to)) => format!("{}{}{}", &content[..from], block, &content[to..]),
        None => format!("{}\n\n{}", content, block),
    };

    if new_content == content {
        return Ok(false);
    }
    fs::write(dest, new_content)?;
    Ok(true)
}

/// Byte span of the first start marker through the next end marker,
/// markers included
fn marker_span(content: &str, start_marker: &str, end_marker: &str) -> Option<(usize, usize)> {
    let from = content.find(start_marker)?;
    let search_from = from + start_marker.len();
    let end = content[search_from..].find(end_marker)?;
    Some((from, search_from + end + end_marker.len()))
}
