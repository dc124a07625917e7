//! Full index build and per-document refresh.
//!
//! The build is two-pass: the file index must be complete before wikilink
//! targets can resolve into graph edges. Files that cannot be read are
//! skipped; the build itself never fails.

use crate::{FileIndex, LinkGraph, TagIndex};
use notes_markdown::{parse_tags, parse_wikilinks};
use std::path::{Path, PathBuf};

/// Rebuild all three indices from a discovered file list.
pub fn build_index(
    files: &[PathBuf],
    file_index: &mut FileIndex,
    tag_index: &mut TagIndex,
    link_graph: &mut LinkGraph,
) {
    file_index.clear();
    tag_index.clear();
    link_graph.clear();

    for path in files {
        file_index.add(path);
    }

    for path in files {
        let Ok(text) = std::fs::read_to_string(path) else {
            continue;
        };
        index_document(path, &text, file_index, tag_index, link_graph);
    }
}

/// Re-derive one document's tags and outgoing edges from `text`.
///
/// Used by the second build pass and by didChange refresh; the file index
/// is only read, never mutated.
pub fn index_document(
    path: &Path,
    text: &str,
    file_index: &FileIndex,
    tag_index: &mut TagIndex,
    link_graph: &mut LinkGraph,
) {
    let tags: Vec<String> = parse_tags(text).into_iter().map(|t| t.name).collect();
    tag_index.upsert_tags_for(path, &tags);
    link_graph.set_tags_for(path, tags);

    let targets = parse_wikilinks(text)
        .into_iter()
        .filter_map(|link| file_index.resolve(&link.target));
    link_graph.set_links_for(path, targets);
}
