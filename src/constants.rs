//! Constants for note-digest
//!
//! Sentinel markers, format strings, and hardcoded values used throughout
//! the codebase.

// === Sentinel Markers ===

/// Opens the generated region in the destination file
pub const START_MARKER: &str = "<!-- DAILY_NOTES:START -->";

/// Closes the generated region in the destination file
pub const END_MARKER: &str = "<!-- DAILY_NOTES:END -->";

// === Scanning ===

/// File extension for candidate notes (without the dot)
pub const MARKDOWN_EXTENSION: &str = "md";

/// Directory prefixes excluded from every scan
pub const DEFAULT_IGNORED_PREFIXES: &[&str] = &[".git", ".github"];

// === Date Format Strings ===

/// Calendar-date format used in filenames, frontmatter, and labels: %Y-%m-%d
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Timestamp formats accepted in frontmatter `date` fields, tried in order
pub const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

// === Titles ===

/// Fallback title when even the file stem is unavailable
pub const UNTITLED_TITLE: &str = "Untitled";

// === Validation Limits ===

/// Maximum size of frontmatter to parse (prevents DoS on malformed files)
pub const MAX_FRONTMATTER_SIZE: usize = 64 * 1024; // 64KB
