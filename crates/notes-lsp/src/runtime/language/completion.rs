//! Completion handler.

use crate::runtime::LspServer;
use notes_lsp_completion::{CompletionList, tag_completions, wikilink_completions};
use notes_lsp_protocol::{JsonRpcError, internal_error, invalid_params, req_position, req_uri};
use notes_markdown::{CursorContext, cursor_context};
use serde_json::Value;

impl LspServer {
    /// Handle `textDocument/completion`.
    ///
    /// The discriminator decides the candidate source: filenames inside
    /// `[[…`, tags inside `tags: [ … ]`, otherwise an empty list.
    pub(crate) fn handle_completion(
        &self,
        params: Option<Value>,
    ) -> Result<Option<Value>, JsonRpcError> {
        let params = params.ok_or_else(|| invalid_params("completion requires params"))?;
        let uri = req_uri(&params)?;
        let position = req_position(&params)?;

        let Some(doc) = self.documents.get(uri) else {
            return to_result(CompletionList::empty());
        };

        let list = match cursor_context(&doc.text, position) {
            CursorContext::Wikilink { query, query_start } => {
                let current_path = self.doc_path(uri);
                wikilink_completions(
                    &self.file_index.lock(),
                    current_path.as_deref(),
                    &query,
                    query_start,
                    position,
                )
            }
            CursorContext::TagArray { prefix } => {
                tag_completions(&self.tag_index.lock(), &prefix)
            }
            CursorContext::None => CompletionList::empty(),
        };

        to_result(list)
    }
}

fn to_result(list: CompletionList) -> Result<Option<Value>, JsonRpcError> {
    serde_json::to_value(list).map(Some).map_err(|e| internal_error(e.to_string()))
}
