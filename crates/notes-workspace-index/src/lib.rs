//! Workspace indices for notes-lsp.
//!
//! Four cross-referenced structures back every feature of the server:
//!
//! - [`FileIndex`]: stem → canonical path, case- and extension-insensitive
//! - [`TagIndex`]: bidirectional tag ↔ files map
//! - [`LinkGraph`]: file → file reference edges plus tag membership
//! - [`DocumentStore`]: shadow copies of open editor buffers
//!
//! Indices refer to each other only by canonical path, never by pointer, so
//! the file ↔ tags ↔ files cycle stays plain data. [`build_index`] populates
//! the first three from a discovered file list; it is shared between
//! initialization and the watcher rebuild.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod document_store;
mod file_index;
mod link_graph;
mod tag_index;

pub use builder::{build_index, index_document};
pub use document_store::{Document, DocumentStore};
pub use file_index::{FileIndex, FileRecord, resolve_key};
pub use link_graph::LinkGraph;
pub use tag_index::TagIndex;
