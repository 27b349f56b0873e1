use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use note_digest::constants as C;
use note_digest::{build_index, discover, render_list, replace_section, Cli};

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let ignored = cli.ignored_prefixes();

    let source_root = resolve_root(&cli.source);
    let files = discover(&source_root, &cli.dest, &ignored);
    if files.is_empty() {
        println!("No markdown files found in {}", cli.source);
        return Ok(());
    }

    let repo_root = resolve_root(".");
    let records = build_index(&files, &repo_root, &cli.dest, &ignored, cli.count);
    let body = render_list(&records, cli.label);

    let changed = replace_section(Path::new(&cli.dest), &body, C::START_MARKER, C::END_MARKER)?;
    if changed {
        println!("Updated {}", cli.dest);
    } else {
        println!("No change to README");
    }
    Ok(())
}

/// Canonical form of the path when it resolves, the path as given otherwise
fn resolve_root(path: &str) -> PathBuf {
    dunce::canonicalize(path).unwrap_or_else(|_| PathBuf::from(path))
}
