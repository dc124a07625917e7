//! Candidate collection and completion payload assembly.

use crate::fuzzy;
use notes_position::{Position, Range};
use notes_workspace_index::{FileIndex, TagIndex};
use serde::Serialize;
use std::path::Path;

/// Hard cap on returned items.
pub const MAX_COMPLETION_ITEMS: usize = 20;

/// CompletionItemKind.File.
const KIND_FILE: u32 = 17;
/// CompletionItemKind.Keyword, used for tags.
const KIND_KEYWORD: u32 = 14;

/// An LSP `TextEdit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextEdit {
    /// Span to replace.
    pub range: Range,
    /// Replacement text.
    pub new_text: String,
}

/// An LSP `CompletionItem`, limited to the fields this server emits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionItem {
    /// Display label.
    pub label: String,
    /// CompletionItemKind code.
    pub kind: u32,
    /// Short descriptive detail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Plain insertion text, when no edit is needed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_text: Option<String>,
    /// Replacement edit, when the typed query must be rewritten.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_edit: Option<TextEdit>,
    /// Override for client-side filtering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_text: Option<String>,
}

/// An LSP `CompletionList`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionList {
    /// Always false: the full candidate set is computed every time.
    pub is_incomplete: bool,
    /// Ranked items, at most [`MAX_COMPLETION_ITEMS`].
    pub items: Vec<CompletionItem>,
}

impl CompletionList {
    fn new(items: Vec<CompletionItem>) -> Self {
        Self { is_incomplete: false, items }
    }

    /// Empty list.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

/// Filename completions for a `[[…` interior.
///
/// Candidates are the basenames (with extension) of every indexed file
/// except the requesting document's own, deduplicated by basename with the
/// first (path-sorted) occurrence winning. Each item's edit replaces the
/// typed query (the span from just after `[[` through the cursor) with
/// the basename plus the closing `]]`.
pub fn wikilink_completions(
    file_index: &FileIndex,
    current_path: Option<&Path>,
    query: &str,
    query_start: Position,
    cursor: Position,
) -> CompletionList {
    let mut seen = std::collections::HashSet::new();
    let mut candidates: Vec<String> = Vec::new();
    for record in file_index.records() {
        if current_path.is_some_and(|p| p == record.path) {
            continue;
        }
        if seen.insert(record.file_name.clone()) {
            candidates.push(record.file_name.clone());
        }
    }

    let ranked = fuzzy::rank(query, candidates, String::as_str, MAX_COMPLETION_ITEMS);
    let replace_range = Range::new(query_start, cursor);
    let items = ranked
        .into_iter()
        .map(|file_name| CompletionItem {
            label: file_name.clone(),
            kind: KIND_FILE,
            detail: None,
            insert_text: None,
            text_edit: Some(TextEdit {
                range: replace_range,
                new_text: format!("{file_name}]]"),
            }),
            filter_text: None,
        })
        .collect();
    CompletionList::new(items)
}

/// Tag completions for a `tags: [ … ]` interior.
pub fn tag_completions(tag_index: &TagIndex, prefix: &str) -> CompletionList {
    let ranked = fuzzy::rank(prefix, tag_index.all_tags(), String::as_str, MAX_COMPLETION_ITEMS);
    let items = ranked
        .into_iter()
        .map(|tag| {
            let count = tag_index.tag_count(&tag);
            CompletionItem {
                label: tag.clone(),
                kind: KIND_KEYWORD,
                detail: Some(format!("Used in {count} files")),
                insert_text: Some(tag),
                text_edit: None,
                filter_text: None,
            }
        })
        .collect();
    CompletionList::new(items)
}
