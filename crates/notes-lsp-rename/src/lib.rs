//! Workspace rename planning for notes-lsp.
//!
//! Rename has two modes, chosen by what sits under the cursor: a tag in the
//! frontmatter array, or a wikilink target. Either way the planner emits a
//! single atomic workspace-edit descriptor (all text edits, plus at most
//! one file-rename resource operation) and performs no disk writes itself.
//! Applying the descriptor is entirely the editor's business.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod plan;
mod types;

pub use plan::{plan_tag_rename, plan_wikilink_rename};
pub use types::{
    ContentSource, DocumentEdits, FileRenameOp, FsContentSource, RenameError, TextEditRec,
    WorkspaceEditPlan,
};
