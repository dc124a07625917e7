//! Shadow store for open editor buffers.
//!
//! The store holds the last full text the client sent for each open
//! document, together with that text's parsed wikilinks, and never consults
//! the filesystem. Sync is full-replacement only.

use notes_markdown::{Wikilink, parse_wikilinks, wikilink_at};
use notes_position::Position;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// One open document.
#[derive(Debug, Clone)]
pub struct Document {
    /// The document URI as the client sent it.
    pub uri: String,
    /// Client-supplied version, monotonic per document.
    pub version: i32,
    /// Full text content.
    pub text: String,
    /// Wikilinks parsed from `text`.
    pub wikilinks: Vec<Wikilink>,
}

impl Document {
    fn new(uri: String, version: i32, text: String) -> Self {
        let wikilinks = parse_wikilinks(&text);
        Self { uri, version, text, wikilinks }
    }

    fn replace(&mut self, version: i32, text: String) {
        self.wikilinks = parse_wikilinks(&text);
        self.text = text;
        self.version = version;
    }
}

/// Store of open documents, keyed by normalized URI.
#[derive(Debug, Default, Clone)]
pub struct DocumentStore {
    documents: Arc<RwLock<FxHashMap<String, Document>>>,
}

impl DocumentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or reset) a document on didOpen.
    pub fn did_open(&self, uri: &str, version: i32, text: String) {
        let doc = Document::new(uri.to_string(), version, text);
        self.documents.write().insert(notes_uri::uri_key(uri), doc);
    }

    /// Replace a document's content on didChange. Unknown URIs are created,
    /// matching clients that skip didOpen after a crash recovery.
    pub fn did_change(&self, uri: &str, version: i32, text: String) {
        let key = notes_uri::uri_key(uri);
        let mut docs = self.documents.write();
        match docs.get_mut(&key) {
            Some(doc) => doc.replace(version, text),
            None => {
                docs.insert(key, Document::new(uri.to_string(), version, text));
            }
        }
    }

    /// Drop a document on didClose.
    pub fn did_close(&self, uri: &str) -> bool {
        self.documents.write().remove(&notes_uri::uri_key(uri)).is_some()
    }

    /// Snapshot of a document.
    pub fn get(&self, uri: &str) -> Option<Document> {
        self.documents.read().get(&notes_uri::uri_key(uri)).cloned()
    }

    /// Text of a document.
    pub fn get_text(&self, uri: &str) -> Option<String> {
        self.documents.read().get(&notes_uri::uri_key(uri)).map(|d| d.text.clone())
    }

    /// The wikilink under a position, by linear containment scan.
    pub fn wikilink_at(&self, uri: &str, pos: Position) -> Option<Wikilink> {
        let docs = self.documents.read();
        let doc = docs.get(&notes_uri::uri_key(uri))?;
        wikilink_at(&doc.wikilinks, pos).cloned()
    }

    /// Snapshot of every open document.
    pub fn all_documents(&self) -> Vec<Document> {
        let mut docs: Vec<Document> = self.documents.read().values().cloned().collect();
        docs.sort_by(|a, b| a.uri.cmp(&b.uri));
        docs
    }

    /// Whether a document is open.
    pub fn is_open(&self, uri: &str) -> bool {
        self.documents.read().contains_key(&notes_uri::uri_key(uri))
    }

    /// Number of open documents.
    pub fn count(&self) -> usize {
        self.documents.read().len()
    }
}
