//! Poll-based workspace watcher.
//!
//! Runs inline between messages: at most once per interval it re-walks the
//! workspace and reports the new file list when the file count changed.
//! Same-count churn (one file deleted, another created inside a single
//! interval) is invisible to this heuristic; a platform-native watcher
//! could replace the trigger without touching the rebuild path.

use super::file_discovery::discover_markdown_files;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Coarse filesystem change detector.
#[derive(Debug)]
pub struct PollWatcher {
    interval: Duration,
    last_poll: Option<Instant>,
    last_count: Option<usize>,
}

impl PollWatcher {
    /// Create a watcher with the given minimum poll interval.
    pub fn new(interval: Duration) -> Self {
        Self { interval, last_poll: None, last_count: None }
    }

    /// Record the file count of a rebuild done elsewhere, resetting the
    /// poll clock.
    pub fn observe_count(&mut self, count: usize) {
        self.last_count = Some(count);
        self.last_poll = Some(Instant::now());
    }

    /// Re-walk the workspace if the interval elapsed; `Some(files)` when
    /// the file count differs from the last observation.
    pub fn poll(&mut self, root: &Path) -> Option<Vec<PathBuf>> {
        if let Some(last) = self.last_poll {
            if last.elapsed() < self.interval {
                return None;
            }
        }

        let files = discover_markdown_files(root);
        self.last_poll = Some(Instant::now());

        if self.last_count == Some(files.len()) {
            return None;
        }
        self.last_count = Some(files.len());
        Some(files)
    }
}
