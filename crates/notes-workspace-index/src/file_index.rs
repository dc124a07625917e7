//! File index: stem → canonical path.
//!
//! Lookup is case-insensitive and `.md`-extension-agnostic, so `[[Foo]]`,
//! `[[foo]]`, and `[[foo.md]]` all resolve to the same record. On stem
//! collisions the last writer wins the stem key, but every record stays
//! reachable by its canonical path.

use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Fold a link target or stem into the index lookup key: strip one trailing
/// `.md` (any case), then lowercase.
pub fn resolve_key(query: &str) -> String {
    let stripped = if query.len() >= 3 && query[query.len() - 3..].eq_ignore_ascii_case(".md") {
        &query[..query.len() - 3]
    } else {
        query
    };
    stripped.to_lowercase()
}

/// One indexed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Canonical on-disk path.
    pub path: PathBuf,
    /// Basename with extension, e.g. `alpha.md`.
    pub file_name: String,
    /// Display basename, extension stripped.
    pub stem: String,
    /// Lowercase-folded stem, the stem-map key.
    pub folded_stem: String,
    /// Last known modification time, when the file could be stat'ed.
    pub modified: Option<SystemTime>,
}

impl FileRecord {
    fn from_path(path: &Path, modified: Option<SystemTime>) -> Option<Self> {
        let file_name = path.file_name()?.to_str()?.to_string();
        let stem = path.file_stem()?.to_str()?.to_string();
        let folded_stem = stem.to_lowercase();
        Some(Self { path: path.to_path_buf(), file_name, stem, folded_stem, modified })
    }
}

/// Map from folded stem (and canonical path) to file records.
#[derive(Debug, Default, Clone)]
pub struct FileIndex {
    by_path: FxHashMap<PathBuf, FileRecord>,
    by_stem: FxHashMap<String, PathBuf>,
}

impl FileIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stat and insert a file. A file that cannot be stat'ed is simply
    /// omitted; returns whether a record was inserted.
    pub fn add(&mut self, path: &Path) -> bool {
        let Ok(metadata) = std::fs::metadata(path) else {
            return false;
        };
        self.insert_record(path, metadata.modified().ok())
    }

    fn insert_record(&mut self, path: &Path, modified: Option<SystemTime>) -> bool {
        let Some(record) = FileRecord::from_path(path, modified) else {
            return false;
        };
        self.by_stem.insert(record.folded_stem.clone(), record.path.clone());
        self.by_path.insert(record.path.clone(), record);
        true
    }

    /// Resolve a wikilink target to a canonical path.
    pub fn resolve(&self, target: &str) -> Option<PathBuf> {
        self.by_stem.get(&resolve_key(target.trim())).cloned()
    }

    /// Remove a file from both maps.
    pub fn remove(&mut self, path: &Path) {
        if let Some(record) = self.by_path.remove(path) {
            // Another record may have since claimed the stem key.
            if self.by_stem.get(&record.folded_stem) == Some(&record.path) {
                self.by_stem.remove(&record.folded_stem);
            }
        }
    }

    /// Move a record from `old` to `new`.
    ///
    /// The destination is stat'ed when possible; when it does not exist yet
    /// (the editor has not applied the rename edit) the old record's
    /// metadata is carried over so `resolve` sees the new name immediately.
    pub fn rename(&mut self, old: &Path, new: &Path) {
        let carried = self.by_path.get(old).and_then(|r| r.modified);
        self.remove(old);
        if !self.add(new) {
            self.insert_record(new, carried);
        }
    }

    /// Record for a canonical path.
    pub fn record(&self, path: &Path) -> Option<&FileRecord> {
        self.by_path.get(path)
    }

    /// All records, sorted by path for deterministic enumeration.
    pub fn records(&self) -> Vec<&FileRecord> {
        let mut records: Vec<&FileRecord> = self.by_path.values().collect();
        records.sort_by(|a, b| a.path.cmp(&b.path));
        records
    }

    /// All canonical paths, sorted.
    pub fn paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = self.by_path.keys().cloned().collect();
        paths.sort();
        paths
    }

    /// Number of indexed files.
    pub fn len(&self) -> usize {
        self.by_path.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.by_path.is_empty()
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        self.by_path.clear();
        self.by_stem.clear();
    }
}
