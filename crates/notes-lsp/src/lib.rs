//! notes-lsp: a language server for wikilink-flavored Markdown.
//!
//! Notes are plain Markdown files with YAML frontmatter carrying a `tags`
//! array and `[[target]]` / `[[target|alias]]` wikilinks. The server speaks
//! LSP over Content-Length framed JSON-RPC on stdio and provides
//! navigation, hover previews, completion, broken-link diagnostics,
//! reference search, document symbols, and atomic workspace-wide rename of
//! tags and wikilink targets.
//!
//! The whole server runs as a single-threaded cooperative loop: one framed
//! message is read, dispatched synchronously, and answered before the next
//! is taken; the poll-based workspace watcher runs inline between messages.

#![deny(unsafe_code)]

pub mod config;
pub mod runtime;
pub mod transport;

pub use config::ServerConfig;
pub use runtime::LspServer;

// Protocol types are re-exported so tests and embedders need only this crate.
pub use notes_lsp_protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
