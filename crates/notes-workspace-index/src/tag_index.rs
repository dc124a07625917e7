//! Bidirectional tag ↔ files index.
//!
//! Invariant: for every `(tag, file)` in the forward map, `(file, tag)`
//! exists in the reverse map, and vice versa. A tag whose file set becomes
//! empty is deleted outright. Inner sets are `BTreeSet` so enumeration is
//! deterministic.

use rustc_hash::FxHashMap;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Tag ↔ files map.
#[derive(Debug, Default, Clone)]
pub struct TagIndex {
    tag_to_files: FxHashMap<String, BTreeSet<PathBuf>>,
    file_to_tags: FxHashMap<PathBuf, BTreeSet<String>>,
}

impl TagIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically replace the tag set of a file.
    pub fn upsert_tags_for(&mut self, path: &Path, tags: &[String]) {
        self.remove_file(path);
        if tags.is_empty() {
            return;
        }
        let entry = self.file_to_tags.entry(path.to_path_buf()).or_default();
        for tag in tags {
            entry.insert(tag.clone());
            self.tag_to_files.entry(tag.clone()).or_default().insert(path.to_path_buf());
        }
    }

    /// Purge both halves of the map for a file.
    pub fn remove_file(&mut self, path: &Path) {
        let Some(tags) = self.file_to_tags.remove(path) else {
            return;
        };
        for tag in tags {
            if let Some(files) = self.tag_to_files.get_mut(&tag) {
                files.remove(path);
                if files.is_empty() {
                    self.tag_to_files.remove(&tag);
                }
            }
        }
    }

    /// Tags starting with `prefix`, sorted.
    pub fn tags_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut tags: Vec<String> =
            self.tag_to_files.keys().filter(|t| t.starts_with(prefix)).cloned().collect();
        tags.sort();
        tags
    }

    /// Files carrying a tag, sorted.
    pub fn files_for(&self, tag: &str) -> Vec<PathBuf> {
        self.tag_to_files.get(tag).map(|s| s.iter().cloned().collect()).unwrap_or_default()
    }

    /// Number of files carrying a tag.
    pub fn tag_count(&self, tag: &str) -> usize {
        self.tag_to_files.get(tag).map_or(0, BTreeSet::len)
    }

    /// Every known tag, sorted.
    pub fn all_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self.tag_to_files.keys().cloned().collect();
        tags.sort();
        tags
    }

    /// Tags of one file, sorted.
    pub fn tags_for(&self, path: &Path) -> Vec<String> {
        self.file_to_tags.get(path).map(|s| s.iter().cloned().collect()).unwrap_or_default()
    }

    /// Drop everything.
    pub fn clear(&mut self) {
        self.tag_to_files.clear();
        self.file_to_tags.clear();
    }

    /// Check the bidirectional invariant; used by tests.
    #[cfg(test)]
    fn is_consistent(&self) -> bool {
        let forward_ok = self.tag_to_files.iter().all(|(tag, files)| {
            !files.is_empty()
                && files
                    .iter()
                    .all(|f| self.file_to_tags.get(f).is_some_and(|tags| tags.contains(tag)))
        });
        let reverse_ok = self.file_to_tags.iter().all(|(file, tags)| {
            tags.iter()
                .all(|t| self.tag_to_files.get(t).is_some_and(|files| files.contains(file)))
        });
        forward_ok && reverse_ok
    }
}
