//! Markdown list rendering
//!
//! Turns the sorted index into `- [label](path)` lines. Labels are escaped
//! so bracket characters in titles cannot corrupt the link syntax; paths
//! are percent-encoded per segment with slashes kept literal.

use std::path::Path;

use clap::ValueEnum;

use crate::constants as C;
use crate::index::NoteRecord;
use crate::util;

/// How each rendered list item is labelled
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelMode {
    /// File name without extension
    Filename,
    /// First heading in the note
    Title,
    /// Date and heading joined
    DateTitle,
    /// Repo-relative path
    Path,
}

/// Render the records as markdown list items joined by newlines
///
/// An empty index renders as the empty string.
pub fn render_list(records: &[NoteRecord], mode: LabelMode) -> String {
    records
        .iter()
        .map(|record| {
            format!(
                "- [{}]({})",
                escape_label(&label_for(record, mode)),
                encode_path(&record.path)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn label_for(record: &NoteRecord, mode: LabelMode) -> String {
    match mode {
        LabelMode::Filename => util::file_stem(Path::new(&record.path)),
        LabelMode::Title => record.title.clone(),
        LabelMode::DateTitle => {
            format!("{} — {}", record.date.format(C::DATE_FORMAT), record.title)
        }
        LabelMode::Path => record.path.clone(),
    }
}

/// Escape label text for use inside `[...]`; backslashes first so the
/// escapes themselves survive
fn escape_label(label: &str) -> String {
    label.replace('\\', "\\\\").replace('[', "\\[").replace(']', "\\]")
}

/// Percent-encode each path segment, keeping `/` separators literal
fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(path: &str, date: &str, title: &str) -> NoteRecord {
        NoteRecord {
            path: path.to_string(),
            date: NaiveDate::parse_from_str(date, C::DATE_FORMAT)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            title: title.to_string(),
        }
    }

    #[test]
    fn test_render_filename_mode() {
        let records = vec![record("notes/2024-03-01-standup.md", "2024-03-01", "Standup")];
        assert_eq!(
            render_list(&records, LabelMode::Filename),
            "- [2024-03-01-standup](notes/2024-03-01-standup.md)"
        );
    }

    #[test]
    fn test_render_title_mode() {
        let records = vec![
            record("a.md", "2024-03-01", "Alpha"),
            record("b.md", "2024-02-01", "Beta"),
        ];
        assert_eq!(
            render_list(&records, LabelMode::Title),
            "- [Alpha](a.md)\n- [Beta](b.md)"
        );
    }

    #[test]
    fn test_render_date_title_mode() {
        let records = vec![record("a.md", "2024-03-01", "Standup")];
        assert_eq!(
            render_list(&records, LabelMode::DateTitle),
            "- [2024-03-01 — Standup](a.md)"
        );
    }

    #[test]
    fn test_render_path_mode() {
        let records = vec![record("notes/a.md", "2024-03-01", "A")];
        assert_eq!(render_list(&records, LabelMode::Path), "- [notes/a.md](notes/a.md)");
    }

    #[test]
    fn test_render_empty_index() {
        assert_eq!(render_list(&[], LabelMode::Filename), "");
    }

    #[test]
    fn test_labels_escape_brackets_and_backslashes() {
        let records = vec![record("a.md", "2024-03-01", r"Not [a] link\end")];
        assert_eq!(
            render_list(&records, LabelMode::Title),
            r"- [Not \[a\] link\\end](a.md)"
        );
    }

    #[test]
    fn test_paths_percent_encode_spaces() {
        let records = vec![record("my notes/a b.md", "2024-03-01", "A")];
        assert_eq!(
            render_list(&records, LabelMode::Path),
            "- [my notes/a b.md](my%20notes/a%20b.md)"
        );
    }

    #[test]
    fn test_paths_percent_encode_unicode() {
        let records = vec![record("ノート.md", "2024-03-01", "A")];
        assert_eq!(
            render_list(&records, LabelMode::Path),
            "- [ノート.md](%E3%83%8E%E3%83%BC%E3%83%88.md)"
        );
    }

    #[test]
    fn test_paths_keep_unreserved_characters() {
        let records = vec![record("a_b-c.d~e.md", "2024-03-01", "A")];
        assert_eq!(
            render_list(&records, LabelMode::Path),
            "- [a_b-c.d~e.md](a_b-c.d~e.md)"
        );
    }
}
