//! Go-to-definition and find-references.

use crate::runtime::{LspServer, StoreFirstSource};
use notes_lsp_protocol::{JsonRpcError, invalid_params, req_position, req_uri};
use notes_lsp_rename::ContentSource;
use notes_markdown::{parse_tags, parse_wikilinks, tag_at};
use notes_position::{Location, Position, Range};
use notes_workspace_index::resolve_key;
use serde_json::{Value, json};

impl LspServer {
    /// Handle `textDocument/definition`: a wikilink jumps to the start of
    /// its target file.
    pub(crate) fn handle_definition(
        &self,
        params: Option<Value>,
    ) -> Result<Option<Value>, JsonRpcError> {
        let params = params.ok_or_else(|| invalid_params("definition requires params"))?;
        let uri = req_uri(&params)?;
        let position = req_position(&params)?;

        let Some(link) = self.documents.wikilink_at(uri, position) else {
            return Ok(Some(Value::Null));
        };
        let Some(target_path) = self.file_index.lock().resolve(&link.target) else {
            return Ok(Some(Value::Null));
        };
        let Ok(target_uri) = notes_uri::fs_path_to_uri(&target_path) else {
            return Ok(Some(Value::Null));
        };

        let location = Location::new(target_uri, Range::empty(Position::new(0, 0)));
        Ok(Some(json!(location)))
    }

    /// Handle `textDocument/references`.
    ///
    /// On a wikilink: every link occurrence in the workspace resolving to
    /// the same file. Inside the tags array: every occurrence of that tag
    /// token across its carrier files. Open-document shadow text wins over
    /// the disk, as everywhere else.
    pub(crate) fn handle_references(
        &self,
        params: Option<Value>,
    ) -> Result<Option<Value>, JsonRpcError> {
        let params = params.ok_or_else(|| invalid_params("references requires params"))?;
        let uri = req_uri(&params)?;
        let position = req_position(&params)?;

        if let Some(link) = self.documents.wikilink_at(uri, position) {
            return Ok(Some(json!(self.wikilink_references(&link.target))));
        }
        if let Some(doc) = self.documents.get(uri) {
            if let Some(tag) = tag_at(&doc.text, position) {
                return Ok(Some(json!(self.tag_references(&tag.name))));
            }
        }
        Ok(Some(Value::Null))
    }

    fn wikilink_references(&self, target: &str) -> Vec<Location> {
        let key = resolve_key(target);
        let source = StoreFirstSource::new(self);

        // A resolved target narrows the scan to the graph's inbound edges;
        // a broken one can only be found by walking every indexed file.
        let resolved = self.file_index.lock().resolve(target);
        let mut paths = match &resolved {
            Some(path) => self.link_graph.lock().files_referencing_file(path),
            None => self.file_index.lock().paths(),
        };
        // Open buffers may link to the target without being indexed yet.
        for doc in self.documents.all_documents() {
            if let Some(path) = self.doc_path(&doc.uri) {
                paths.push(path);
            }
        }
        paths.sort();
        paths.dedup();

        let mut locations = Vec::new();
        for path in paths {
            let Some(text) = source.content(&path) else {
                continue;
            };
            let Ok(file_uri) = notes_uri::fs_path_to_uri(&path) else {
                continue;
            };
            for link in parse_wikilinks(&text) {
                if resolve_key(&link.target) == key {
                    locations.push(Location::new(file_uri.clone(), link.range));
                }
            }
        }
        locations
    }

    fn tag_references(&self, name: &str) -> Vec<Location> {
        let source = StoreFirstSource::new(self);
        let paths = self.link_graph.lock().files_referencing_tag(name);

        let mut locations = Vec::new();
        for path in paths {
            let Some(text) = source.content(&path) else {
                continue;
            };
            let Ok(file_uri) = notes_uri::fs_path_to_uri(&path) else {
                continue;
            };
            for tag in parse_tags(&text) {
                if tag.name == name {
                    locations.push(Location::new(file_uri.clone(), tag.range));
                }
            }
        }
        locations
    }
}
