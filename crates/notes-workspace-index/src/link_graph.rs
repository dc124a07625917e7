//! File-to-file reference graph plus tag membership.
//!
//! An edge A→B exists iff A contains a wikilink whose target resolved to B
//! through the file index at parse time. Edges are owned by their source
//! file: `set_links_for` drops and rebuilds a file's outgoing edges on
//! every reparse, keeping the reverse map in step.

use rustc_hash::{FxHashMap, FxHashSet};
use std::path::{Path, PathBuf};

/// Bidirectional reference graph.
#[derive(Debug, Default, Clone)]
pub struct LinkGraph {
    outgoing: FxHashMap<PathBuf, FxHashSet<PathBuf>>,
    incoming: FxHashMap<PathBuf, FxHashSet<PathBuf>>,
    tag_files: FxHashMap<String, FxHashSet<PathBuf>>,
}

impl LinkGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one resolved reference edge.
    pub fn add_link(&mut self, from: &Path, to: &Path) {
        self.outgoing.entry(from.to_path_buf()).or_default().insert(to.to_path_buf());
        self.incoming.entry(to.to_path_buf()).or_default().insert(from.to_path_buf());
    }

    /// Record that a file carries a tag.
    pub fn add_tag_usage(&mut self, file: &Path, tag: &str) {
        self.tag_files.entry(tag.to_string()).or_default().insert(file.to_path_buf());
    }

    /// Replace a file's outgoing edges.
    pub fn set_links_for(&mut self, from: &Path, targets: impl IntoIterator<Item = PathBuf>) {
        if let Some(old) = self.outgoing.remove(from) {
            for target in old {
                if let Some(sources) = self.incoming.get_mut(&target) {
                    sources.remove(from);
                    if sources.is_empty() {
                        self.incoming.remove(&target);
                    }
                }
            }
        }
        for target in targets {
            self.add_link(from, &target);
        }
    }

    /// Replace a file's tag usages.
    pub fn set_tags_for(&mut self, file: &Path, tags: impl IntoIterator<Item = String>) {
        self.tag_files.retain(|_, files| {
            files.remove(file);
            !files.is_empty()
        });
        for tag in tags {
            self.add_tag_usage(file, &tag);
        }
    }

    /// Drop a file's own contributions (outgoing edges and tag usages).
    ///
    /// Edges *to* the file from elsewhere stay: those belong to the files
    /// that still reference it.
    pub fn remove_file(&mut self, file: &Path) {
        self.set_links_for(file, std::iter::empty());
        self.set_tags_for(file, std::iter::empty());
    }

    /// Files with an edge pointing at `path`, sorted.
    pub fn files_referencing_file(&self, path: &Path) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> =
            self.incoming.get(path).map(|s| s.iter().cloned().collect()).unwrap_or_default();
        files.sort();
        files
    }

    /// Files carrying a tag, sorted.
    pub fn files_referencing_tag(&self, tag: &str) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> =
            self.tag_files.get(tag).map(|s| s.iter().cloned().collect()).unwrap_or_default();
        files.sort();
        files
    }

    /// Files `path` links out to, sorted.
    pub fn links_from(&self, path: &Path) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> =
            self.outgoing.get(path).map(|s| s.iter().cloned().collect()).unwrap_or_default();
        files.sort();
        files
    }

    /// Drop everything; the builder recomputes from scratch.
    pub fn clear(&mut self) {
        self.outgoing.clear();
        self.incoming.clear();
        self.tag_files.clear();
    }
}
