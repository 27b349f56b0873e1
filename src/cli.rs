use clap::Parser;

use crate::constants as C;
use crate::render::LabelMode;

/// note-digest - keeps a README's latest-notes section up to date
///
/// Scans a directory tree for markdown notes, picks the most recent ones
/// by inferred date, and rewrites the list between the
/// `<!-- DAILY_NOTES:START -->` / `<!-- DAILY_NOTES:END -->` markers in
/// the destination file.
///
/// ```bash
/// note-digest                              # refresh ./README.md from .
/// note-digest --source notes -n 5          # five newest from notes/
/// note-digest --label date-title           # "2024-03-01 — Standup" labels
/// note-digest --ignore drafts --ignore tmp # skip more directories
/// ```
#[derive(Parser, Debug)]
#[command(name = "note-digest")]
#[command(version = "0.1.0")]
#[command(about = "Keeps a README's latest-notes section up to date")]
pub struct Cli {
    /// Root directory to scan for markdown notes
    #[arg(short, long, default_value = ".")]
    pub source: String,

    /// File whose marker section gets rewritten
    #[arg(short, long, default_value = "README.md")]
    pub dest: String,

    /// Maximum number of notes to list
    #[arg(short = 'n', long, default_value = "3")]
    pub count: usize,

    /// What to show as each link's label
    #[arg(short, long, value_enum, default_value = "filename")]
    pub label: LabelMode,

    /// Additional directory-name prefix to skip (repeatable)
    #[arg(long)]
    pub ignore: Vec<String>,
}

impl Cli {
    /// Built-in ignored prefixes plus any given on the command line
    pub fn ignored_prefixes(&self) -> Vec<String> {
        let mut prefixes: Vec<String> = C::DEFAULT_IGNORED_PREFIXES
            .iter()
            .map(|p| p.to_string())
            .collect();
        prefixes.extend(self.ignore.iter().cloned());
        prefixes
    }
}
