//! Note indexing
//!
//! Walks the source tree for markdown files and computes a date, a title,
//! and a repo-relative path for each. Dates come from a three-tier fallback:
//! a `YYYY-MM-DD` substring in the file name, a `date` field in the
//! frontmatter, and finally the file's modification time. Indexing never
//! fails on a malformed note; each tier degrades to the next.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use walkdir::WalkDir;

use crate::constants as C;
use crate::frontmatter;
use crate::util;

/// Frontmatter field consulted for the note date
const DATE_FIELD: &str = "date";

/// Matches the first calendar-date substring in a file name
static DATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{4}-\d{2}-\d{2}").unwrap());

/// One indexed note, recomputed from disk on every run
#[derive(Debug, Clone)]
pub struct NoteRecord {
    /// Path relative to the repo root, forward slashes
    pub path: String,
    /// Date used for ordering; never absent
    pub date: NaiveDateTime,
    /// First heading text, or the file stem
    pub title: String,
}

/// Recursively collect candidate markdown files under `root`
///
/// Skips ignored directory prefixes and anything sharing the destination's
/// base name. A missing or non-directory root yields an empty list rather
/// than an error; unreadable entries are silently dropped.
pub fn discover(root: &Path, dest_name: &str, ignored: &[String]) -> Vec<PathBuf> {
    if !root.is_dir() {
        return Vec::new();
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !entry.file_type().is_file() {
            continue;
        }
        if !path.extension().map_or(false, |ext| ext == C::MARKDOWN_EXTENSION) {
            continue;
        }
        // Exclusion looks at segments below the scan root, so a dotted
        // parent directory in the root's own path cannot blank the scan
        let below_root = path.strip_prefix(root).unwrap_or(path);
        if in_ignored_dir(below_root, ignored) || matches_dest(path, dest_name) {
            continue;
        }
        files.push(path.to_path_buf());
    }
    files
}

/// True if any path segment starts with one of the ignored prefixes
fn in_ignored_dir(path: &Path, ignored: &[String]) -> bool {
    path.components().any(|component| {
        let segment = component.as_os_str().to_string_lossy();
        ignored.iter().any(|prefix| segment.starts_with(prefix.as_str()))
    })
}

/// The destination must never index itself
///
/// Compares base names case-insensitively, so `--dest docs/README.md` still
/// excludes every `README.md` in the tree.
fn matches_dest(path: &Path, dest_name: &str) -> bool {
    let dest_base = Path::new(dest_name)
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| dest_name.to_string());

    path.file_name()
        .map(|name| name.to_string_lossy().eq_ignore_ascii_case(&dest_base))
        .unwrap_or(false)
}

/// Infer the note's date: file name, then frontmatter, then mtime
///
/// Each tier swallows its own parse failures and falls through; the
/// function always returns a usable date.
pub fn infer_date(path: &Path) -> NaiveDateTime {
    if let Some(date) = date_from_filename(path) {
        return date;
    }
    if let Some(date) = date_from_frontmatter(path) {
        return date;
    }
    modified_time(path)
}

/// Tier 1: first `YYYY-MM-DD` substring in the file name
fn date_from_filename(path: &Path) -> Option<NaiveDateTime> {
    let name = path.file_name()?.to_string_lossy();
    let matched = DATE_RE.find(&name)?;
    NaiveDate::parse_from_str(matched.as_str(), C::DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Tier 2: `date` field in the YAML frontmatter
fn date_from_frontmatter(path: &Path) -> Option<NaiveDateTime> {
    let content = fs::read_to_string(path).ok()?;
    let map = frontmatter::parse(&content)?;
    let raw = frontmatter::field_str(&map, DATE_FIELD)?;
    parse_date_value(raw.trim())
}

/// Parse a frontmatter date value: full timestamps first, date-only second
fn parse_date_value(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.naive_local());
    }
    for format in C::DATETIME_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(ts);
        }
    }
    NaiveDate::parse_from_str(raw, C::DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Tier 3: filesystem mtime as local naive time; Unix epoch when even the
/// metadata read fails, so such files sort last
fn modified_time(path: &Path) -> NaiveDateTime {
    let mtime = fs::metadata(path)
        .and_then(|meta| meta.modified())
        .unwrap_or(SystemTime::UNIX_EPOCH);
    DateTime::<Local>::from(mtime).naive_local()
}

/// First markdown heading in the file, or the file stem
///
/// Any line whose trimmed form begins with `#` counts as a heading; leading
/// markers and surrounding whitespace are stripped. Unreadable files,
/// heading-less files, and headings with no text fall back to the file name
/// without extension.
pub fn extract_title(path: &Path) -> String {
    if let Ok(content) = fs::read_to_string(path) {
        for line in content.lines() {
            let trimmed = line.trim();
            if trimmed.starts_with('#') {
                let text = trimmed.trim_start_matches('#').trim();
                if !text.is_empty() {
                    return text.to_string();
                }
                break;
            }
        }
    }
    util::file_stem(path)
}

/// Build the sorted index: relative paths deduplicated, newest first
///
/// The sort is stable, so notes sharing a date keep their discovery order.
/// The result is truncated to `count` records.
pub fn build_index(
    files: &[PathBuf],
    repo_root: &Path,
    dest_name: &str,
    ignored: &[String],
    count: usize,
) -> Vec<NoteRecord> {
    let mut seen = HashSet::new();
    let mut records = Vec::new();

    for file in files {
        let rel = relative_path(file, repo_root);
        {
            let rel_path = Path::new(&rel);
            if matches_dest(rel_path, dest_name) || in_ignored_dir(rel_path, ignored) {
                continue;
            }
        }
        if !seen.insert(rel.clone()) {
            continue;
        }

        records.push(NoteRecord {
            path: rel,
            date: infer_date(file),
            title: extract_title(file),
        });
    }

    records.sort_by(|a, b| b.date.cmp(&a.date));
    records.truncate(count);
    records
}

/// Path relative to the repo root, forward slashes; paths outside the root
/// are used as given
fn relative_path(file: &Path, repo_root: &Path) -> String {
    let rel = file.strip_prefix(repo_root).unwrap_or(file);
    util::display_path(rel)
}
