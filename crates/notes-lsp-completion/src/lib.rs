//! Completion engine for notes-lsp.
//!
//! Two candidate sources, workspace filenames for `[[…]]` interiors and
//! known tags for `tags: [ … ]` arrays, ranked by the shared fuzzy
//! matcher and emitted as LSP completion payloads.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod completion;
pub mod fuzzy;

pub use completion::{
    CompletionItem, CompletionList, MAX_COMPLETION_ITEMS, TextEdit, tag_completions,
    wikilink_completions,
};
