//! Workspace file discovery.
//!
//! Walks the workspace root collecting Markdown files, skipping hidden
//! directories and the usual VCS/build trees. Results are sorted so index
//! builds are deterministic.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Whether a path is a Markdown note (`.md`, case-insensitive).
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
}

/// Whether a directory entry should be skipped during the walk.
fn should_skip_dir(entry: &walkdir::DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    (name.starts_with('.') && name.len() > 1)
        || matches!(name.as_ref(), "node_modules" | "target")
}

/// Discover every Markdown file under `root`, sorted.
pub fn discover_markdown_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !should_skip_dir(entry))
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file() && is_markdown_file(entry.path()))
        .map(|entry| entry.into_path())
        .collect();
    files.sort();
    files
}
