//! Rename planner types and the workspace-edit descriptor.

use notes_position::Range;
use serde_json::{Value, json};
use std::path::Path;
use thiserror::Error;

/// Why a rename could not be planned.
#[derive(Debug, Error)]
pub enum RenameError {
    /// The new name is empty after trimming.
    #[error("new name must not be empty")]
    EmptyName,
    /// The new name cannot form a filename.
    #[error("'{0}' is not a valid file name")]
    InvalidFileName(String),
}

/// One text replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEditRec {
    /// Span to replace.
    pub range: Range,
    /// Replacement text.
    pub new_text: String,
}

/// All edits for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentEdits {
    /// Document URI.
    pub uri: String,
    /// Edits in document order.
    pub edits: Vec<TextEditRec>,
}

/// A file-rename resource operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRenameOp {
    /// URI of the file as it exists now.
    pub old_uri: String,
    /// URI it should be renamed to.
    pub new_uri: String,
}

/// The atomic descriptor a rename request returns.
///
/// Tag renames serialize as a `changes` map; wikilink renames serialize as
/// `documentChanges` so the file-rename operation travels in the same
/// bundle as the text edits, edits first so every edit still addresses an
/// existing URI when the client applies the list in order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WorkspaceEditPlan {
    /// Per-document text edits.
    pub documents: Vec<DocumentEdits>,
    /// At most one file rename.
    pub file_rename: Option<FileRenameOp>,
}

impl WorkspaceEditPlan {
    /// Total number of text edits across all documents.
    pub fn edit_count(&self) -> usize {
        self.documents.iter().map(|d| d.edits.len()).sum()
    }

    /// Serialize to the LSP `WorkspaceEdit` shape.
    pub fn to_json(&self) -> Value {
        let edit_json = |edit: &TextEditRec| {
            json!({ "range": edit.range, "newText": edit.new_text })
        };

        match &self.file_rename {
            None => {
                let mut changes = serde_json::Map::new();
                for doc in &self.documents {
                    let edits: Vec<Value> = doc.edits.iter().map(edit_json).collect();
                    changes.insert(doc.uri.clone(), Value::Array(edits));
                }
                json!({ "changes": changes })
            }
            Some(op) => {
                let mut document_changes: Vec<Value> = self
                    .documents
                    .iter()
                    .map(|doc| {
                        json!({
                            "textDocument": { "uri": doc.uri, "version": Value::Null },
                            "edits": doc.edits.iter().map(edit_json).collect::<Vec<Value>>()
                        })
                    })
                    .collect();
                document_changes.push(json!({
                    "kind": "rename",
                    "oldUri": op.old_uri,
                    "newUri": op.new_uri
                }));
                json!({ "documentChanges": document_changes })
            }
        }
    }
}

/// Source of file contents for planning.
///
/// The server answers from the open-document shadow store first and falls
/// back to disk; tests can substitute fixtures.
pub trait ContentSource {
    /// Full text of `path`, or `None` when it cannot be provided.
    fn content(&self, path: &Path) -> Option<String>;
}

/// Plain filesystem-backed content source.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsContentSource;

impl ContentSource for FsContentSource {
    fn content(&self, path: &Path) -> Option<String> {
        std::fs::read_to_string(path).ok()
    }
}
