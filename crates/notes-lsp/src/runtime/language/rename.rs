//! Rename handlers, delegating to the planner.

use crate::runtime::{LspServer, StoreFirstSource};
use notes_lsp_protocol::{
    JsonRpcError, invalid_params, req_new_name, req_position, req_uri,
};
use notes_lsp_rename::{plan_tag_rename, plan_wikilink_rename};
use notes_markdown::tag_at;
use serde_json::{Value, json};

impl LspServer {
    /// Handle `textDocument/prepareRename`: the wikilink target span or the
    /// tag token under the cursor, else null.
    pub(crate) fn handle_prepare_rename(
        &self,
        params: Option<Value>,
    ) -> Result<Option<Value>, JsonRpcError> {
        let params = params.ok_or_else(|| invalid_params("prepareRename requires params"))?;
        let uri = req_uri(&params)?;
        let position = req_position(&params)?;

        if let Some(link) = self.documents.wikilink_at(uri, position) {
            return Ok(Some(json!({
                "range": link.target_range,
                "placeholder": link.target,
            })));
        }
        if let Some(doc) = self.documents.get(uri) {
            if let Some(tag) = tag_at(&doc.text, position) {
                return Ok(Some(json!({
                    "range": tag.range,
                    "placeholder": tag.name,
                })));
            }
        }
        Ok(Some(Value::Null))
    }

    /// Handle `textDocument/rename`.
    ///
    /// The position context picks the mode; the planner returns the one
    /// atomic workspace-edit descriptor and the server never touches the
    /// files itself; applying the descriptor is the editor's job.
    pub(crate) fn handle_rename(
        &self,
        params: Option<Value>,
    ) -> Result<Option<Value>, JsonRpcError> {
        let params = params.ok_or_else(|| invalid_params("rename requires params"))?;
        let uri = req_uri(&params)?;
        let position = req_position(&params)?;
        let new_name = req_new_name(&params)?;

        if let Some(link) = self.documents.wikilink_at(uri, position) {
            let source = StoreFirstSource::new(self);
            let plan = {
                let mut file_index = self.file_index.lock();
                plan_wikilink_rename(&mut file_index, &source, &link.target, new_name)
                    .map_err(|e| invalid_params(e.to_string()))?
            };
            self.log(&format!(
                "wikilink rename '{}' -> '{}': {} edits",
                link.target,
                new_name,
                plan.edit_count()
            ));
            return Ok(Some(plan.to_json()));
        }

        if let Some(doc) = self.documents.get(uri) {
            if let Some(tag) = tag_at(&doc.text, position) {
                let source = StoreFirstSource::new(self);
                let plan = {
                    let tag_index = self.tag_index.lock();
                    plan_tag_rename(&tag_index, &source, &tag.name, new_name)
                        .map_err(|e| invalid_params(e.to_string()))?
                };
                self.log(&format!(
                    "tag rename '{}' -> '{}': {} edits",
                    tag.name,
                    new_name,
                    plan.edit_count()
                ));
                return Ok(Some(plan.to_json()));
            }
        }

        Ok(Some(Value::Null))
    }
}
