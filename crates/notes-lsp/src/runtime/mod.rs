//! The LSP server runtime.
//!
//! [`LspServer`] owns the four indices and the document store; every
//! request is dispatched synchronously on the loop in [`LspServer::serve`].
//! The indices are behind `parking_lot` mutexes so handlers can run from
//! `&self`, but nothing here spawns a thread; a future thread pool would
//! have to keep serializing index writes through these same locks.

mod diagnostics;
mod dispatch;
pub mod file_discovery;
mod language;
mod lifecycle;
mod text_sync;
mod watcher;

pub use watcher::PollWatcher;

use crate::config::ServerConfig;
use crate::transport::{read_message, write_message, write_notification};
use notes_lsp_rename::ContentSource;
use notes_workspace_index::{
    DocumentStore, FileIndex, LinkGraph, TagIndex, build_index,
};
use parking_lot::Mutex;
use serde_json::Value;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The language server.
pub struct LspServer {
    /// Shadow copies of open editor buffers.
    pub(crate) documents: DocumentStore,
    /// Stem → canonical path.
    pub(crate) file_index: Mutex<FileIndex>,
    /// Tag ↔ files.
    pub(crate) tag_index: Mutex<TagIndex>,
    /// File reference graph.
    pub(crate) link_graph: Mutex<LinkGraph>,
    /// Runtime knobs.
    pub(crate) config: ServerConfig,
    /// Workspace root from `initialize`.
    pub(crate) root_path: Mutex<Option<PathBuf>>,
    /// Inline poll-based filesystem watcher.
    pub(crate) watcher: Mutex<PollWatcher>,
    /// Whether `initialize` completed.
    pub(crate) initialized: bool,
    /// Whether `shutdown` was received (decides the exit status).
    pub(crate) shutdown_received: bool,
    /// Set by the `exit` notification; ends the serve loop.
    pub(crate) exit_code: Option<i32>,
    /// Output writer for responses and notifications.
    output: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl LspServer {
    /// Create a server writing to stdout.
    pub fn new(config: ServerConfig) -> Self {
        let writer: Box<dyn Write + Send> = Box::new(io::stdout());
        Self::with_output(config, Arc::new(Mutex::new(writer)))
    }

    /// Create a server with a custom output writer (used by tests to
    /// capture published notifications).
    pub fn with_output(config: ServerConfig, output: Arc<Mutex<Box<dyn Write + Send>>>) -> Self {
        let watcher = PollWatcher::new(config.watch_interval);
        Self {
            documents: DocumentStore::new(),
            file_index: Mutex::new(FileIndex::new()),
            tag_index: Mutex::new(TagIndex::new()),
            link_graph: Mutex::new(LinkGraph::new()),
            config,
            root_path: Mutex::new(None),
            watcher: Mutex::new(watcher),
            initialized: false,
            shutdown_received: false,
            exit_code: None,
            output,
        }
    }

    /// Serve stdio until EOF or `exit`; returns the process exit code.
    pub fn run(&mut self) -> io::Result<i32> {
        eprintln!("notes-lsp started (stdio)");
        let stdin = io::stdin();
        let mut reader = BufReader::new(stdin.lock());
        self.serve(&mut reader)
    }

    /// Serve requests from an arbitrary reader.
    pub fn serve(&mut self, reader: &mut dyn BufRead) -> io::Result<i32> {
        loop {
            // The watcher runs inline between messages.
            self.poll_watcher();

            match read_message(reader)? {
                Some(request) => {
                    self.log(&format!("<- {}", request.method));
                    if let Some(response) = self.handle_request(request) {
                        let mut output = self.output.lock();
                        write_message(&mut *output, &response)?;
                    }
                    if let Some(code) = self.exit_code {
                        return Ok(code);
                    }
                }
                None => {
                    eprintln!("notes-lsp: EOF, shutting down");
                    return Ok(0);
                }
            }
        }
    }

    /// Send a notification to the client.
    pub(crate) fn notify(&self, method: &str, params: Value) -> io::Result<()> {
        let mut output = self.output.lock();
        write_notification(&mut *output, method, params)
    }

    /// Verbose trace line, gated by `--log`.
    pub(crate) fn log(&self, message: &str) {
        if self.config.verbose {
            eprintln!("notes-lsp: {message}");
        }
    }

    /// Workspace root, falling back to the current directory.
    pub(crate) fn workspace_root(&self) -> PathBuf {
        self.root_path
            .lock()
            .clone()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Filesystem path of a document URI, resolved against the root.
    pub(crate) fn doc_path(&self, uri: &str) -> Option<PathBuf> {
        let root = self.root_path.lock().clone();
        notes_uri::uri_to_workspace_path(uri, root.as_deref())
    }

    /// Discover and fully rebuild the indices, then revalidate open
    /// documents. Shared by initialization and the watcher.
    pub fn rebuild_workspace(&self) {
        let root = self.workspace_root();
        let files = file_discovery::discover_markdown_files(&root);
        self.watcher.lock().observe_count(files.len());
        self.rebuild_from(&files);
    }

    /// Rebuild the indices from a file list, then revalidate open
    /// documents.
    ///
    /// Indices reflect disk state only: an open buffer contributes to the
    /// shadow store and its own diagnostics, never to the workspace-wide
    /// tag set or link graph, so a half-typed `tags: [pr` cannot pollute
    /// completion candidates.
    pub(crate) fn rebuild_from(&self, files: &[PathBuf]) {
        {
            let mut file_index = self.file_index.lock();
            let mut tag_index = self.tag_index.lock();
            let mut link_graph = self.link_graph.lock();
            build_index(files, &mut file_index, &mut tag_index, &mut link_graph);
            eprintln!("notes-lsp: indexed {} files", file_index.len());
        }

        for doc in self.documents.all_documents() {
            self.publish_diagnostics(&doc.uri);
        }
    }

    fn poll_watcher(&self) {
        if !self.initialized {
            return;
        }
        let root = self.workspace_root();
        let changed = self.watcher.lock().poll(&root);
        if let Some(files) = changed {
            eprintln!("notes-lsp: workspace file count changed, rebuilding index");
            self.rebuild_from(&files);
        }
    }
}

/// Content lookup that prefers open-document shadow text over the disk.
pub(crate) struct StoreFirstSource<'a> {
    server: &'a LspServer,
}

impl<'a> StoreFirstSource<'a> {
    pub(crate) fn new(server: &'a LspServer) -> Self {
        Self { server }
    }
}

impl ContentSource for StoreFirstSource<'_> {
    fn content(&self, path: &Path) -> Option<String> {
        if let Ok(uri) = notes_uri::fs_path_to_uri(path) {
            if let Some(text) = self.server.documents.get_text(&uri) {
                return Some(text);
            }
        }
        std::fs::read_to_string(path).ok()
    }
}
