//! Broken-link diagnostics.
//!
//! One error diagnostic per wikilink whose target does not resolve in the
//! file index. Each publication is preceded by an empty set so clients
//! reliably clear stale squiggles.

use super::LspServer;
use notes_lsp_protocol::methods;
use notes_markdown::Wikilink;
use notes_workspace_index::FileIndex;
use serde_json::{Value, json};

/// Stable `source` tag on every diagnostic.
pub const DIAGNOSTIC_SOURCE: &str = "notes-lsp";

/// DiagnosticSeverity.Error.
const SEVERITY_ERROR: u32 = 1;

/// Diagnostics for one document's parsed wikilinks.
pub(crate) fn broken_link_diagnostics(links: &[Wikilink], file_index: &FileIndex) -> Vec<Value> {
    links
        .iter()
        .filter(|link| file_index.resolve(&link.target).is_none())
        .map(|link| {
            json!({
                "range": link.range,
                "severity": SEVERITY_ERROR,
                "source": DIAGNOSTIC_SOURCE,
                "message": format!("Broken wikilink: target file '{}' not found", link.target),
            })
        })
        .collect()
}

impl LspServer {
    /// Publish the current diagnostic set for an open document, preceded by
    /// an empty publish for client-side clearing.
    pub(crate) fn publish_diagnostics(&self, uri: &str) {
        let Some(doc) = self.documents.get(uri) else {
            return;
        };
        let diagnostics = broken_link_diagnostics(&doc.wikilinks, &self.file_index.lock());

        self.clear_diagnostics(uri);
        let _ = self.notify(
            methods::TEXT_DOCUMENT_PUBLISH_DIAGNOSTICS,
            json!({ "uri": uri, "diagnostics": diagnostics }),
        );
    }

    /// Publish an empty diagnostic set.
    pub(crate) fn clear_diagnostics(&self, uri: &str) {
        let _ = self.notify(
            methods::TEXT_DOCUMENT_PUBLISH_DIAGNOSTICS,
            json!({ "uri": uri, "diagnostics": [] }),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notes_markdown::parse_wikilinks;
    use std::fs;

    #[test]
    fn unresolvable_targets_become_errors() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("alpha.md"), "x").unwrap();
        let mut index = FileIndex::new();
        index.add(&dir.path().join("alpha.md"));

        let links = parse_wikilinks("ok [[alpha]] broken [[ghost]]");
        let diagnostics = broken_link_diagnostics(&links, &index);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0]["severity"], 1);
        assert_eq!(diagnostics[0]["source"], DIAGNOSTIC_SOURCE);
        assert_eq!(
            diagnostics[0]["message"],
            "Broken wikilink: target file 'ghost' not found"
        );
        // Range covers the whole [[ghost]].
        assert_eq!(diagnostics[0]["range"]["start"]["character"], 20);
        assert_eq!(diagnostics[0]["range"]["end"]["character"], 29);
    }

    #[test]
    fn resolvable_targets_are_clean() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("alpha.md"), "x").unwrap();
        let mut index = FileIndex::new();
        index.add(&dir.path().join("alpha.md"));

        let links = parse_wikilinks("[[Alpha]] [[alpha.md]]");
        assert!(broken_link_diagnostics(&links, &index).is_empty());
    }
}
