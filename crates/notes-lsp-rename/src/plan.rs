//! The two rename planning modes.

use crate::types::{
    ContentSource, DocumentEdits, FileRenameOp, RenameError, TextEditRec, WorkspaceEditPlan,
};
use notes_markdown::{parse_tags, parse_wikilinks};
use notes_workspace_index::{FileIndex, TagIndex, resolve_key};
use std::path::{Path, PathBuf};

/// Plan a tag rename: one edit per occurrence of `old` across every file
/// carrying it, grouped by URI.
pub fn plan_tag_rename(
    tag_index: &TagIndex,
    source: &dyn ContentSource,
    old: &str,
    new: &str,
) -> Result<WorkspaceEditPlan, RenameError> {
    let new = new.trim();
    if new.is_empty() {
        return Err(RenameError::EmptyName);
    }

    let mut documents = Vec::new();
    for path in tag_index.files_for(old) {
        let Some(text) = source.content(&path) else {
            continue;
        };
        let edits: Vec<TextEditRec> = parse_tags(&text)
            .into_iter()
            .filter(|tag| tag.name == old)
            .map(|tag| TextEditRec { range: tag.range, new_text: new.to_string() })
            .collect();
        if edits.is_empty() {
            continue;
        }
        let Ok(uri) = notes_uri::fs_path_to_uri(&path) else {
            continue;
        };
        documents.push(DocumentEdits { uri, edits });
    }

    Ok(WorkspaceEditPlan { documents, file_rename: None })
}

/// Plan a wikilink-target rename.
///
/// Emits one file-rename resource operation (when the old target resolves)
/// plus, for every indexed file, a text edit per link whose target resolves
/// to the same note, each edit covering only the span between `[[` and the
/// `|` or closing `]]`. Afterwards the file index itself is renamed so
/// subsequent requests already see the new name; the descriptor still has
/// to be applied by the editor.
pub fn plan_wikilink_rename(
    file_index: &mut FileIndex,
    source: &dyn ContentSource,
    old_target: &str,
    new_target: &str,
) -> Result<WorkspaceEditPlan, RenameError> {
    let new_target = new_target.trim();
    if new_target.is_empty() {
        return Err(RenameError::EmptyName);
    }

    let old_key = resolve_key(old_target.trim());
    let old_path = file_index.resolve(old_target);
    let rename_paths = match &old_path {
        Some(old_path) => Some(destination_for(old_path, new_target)?),
        None => None,
    };

    let mut documents = Vec::new();
    for path in file_index.paths() {
        let Some(text) = source.content(&path) else {
            continue;
        };
        let edits: Vec<TextEditRec> = parse_wikilinks(&text)
            .into_iter()
            .filter(|link| resolve_key(&link.target) == old_key)
            .map(|link| TextEditRec {
                range: link.target_range,
                new_text: replacement_target(&link.target, new_target),
            })
            .collect();
        if edits.is_empty() {
            continue;
        }
        let Ok(uri) = notes_uri::fs_path_to_uri(&path) else {
            continue;
        };
        documents.push(DocumentEdits { uri, edits });
    }

    let mut file_rename = None;
    if let (Some(old_path), Some(new_path)) = (old_path, rename_paths) {
        if let (Ok(old_uri), Ok(new_uri)) =
            (notes_uri::fs_path_to_uri(&old_path), notes_uri::fs_path_to_uri(&new_path))
        {
            file_rename = Some(FileRenameOp { old_uri, new_uri });
        }
        file_index.rename(&old_path, &new_path);
    }

    Ok(WorkspaceEditPlan { documents, file_rename })
}

/// New on-disk path: the old directory, with the filename derived from the
/// new target (verbatim when it carries an extension, else with the old
/// file's extension appended).
fn destination_for(old_path: &Path, new_target: &str) -> Result<PathBuf, RenameError> {
    if Path::new(new_target).file_name().is_none() {
        return Err(RenameError::InvalidFileName(new_target.to_string()));
    }
    let file_name = if Path::new(new_target).extension().is_some() {
        new_target.to_string()
    } else {
        match old_path.extension().and_then(|e| e.to_str()) {
            Some(ext) => format!("{new_target}.{ext}"),
            None => new_target.to_string(),
        }
    };
    Ok(old_path.parent().unwrap_or_else(|| Path::new("")).join(file_name))
}

/// Replacement for one link's target span, preserving that occurrence's
/// has-extension form.
fn replacement_target(old_link_target: &str, new_target: &str) -> String {
    let old_has_ext = old_link_target.contains('.');
    let new_has_ext = new_target.contains('.');
    match (old_has_ext, new_has_ext) {
        // Forms agree: the new target is usable as written.
        (true, true) | (false, false) => new_target.to_string(),
        (true, false) => match Path::new(old_link_target).extension().and_then(|e| e.to_str()) {
            Some(ext) => format!("{new_target}.{ext}"),
            None => new_target.to_string(),
        },
        (false, true) => Path::new(new_target)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(new_target)
            .to_string(),
    }
}
