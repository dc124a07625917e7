//! Text document synchronization.
//!
//! Sync is full-replacement only: each didChange carries the complete new
//! text, the shadow buffer is swapped, the document reparsed, the indices
//! refreshed, and diagnostics republished. Range-based change entries are
//! ignored.

use super::LspServer;
use notes_lsp_protocol::{JsonRpcError, invalid_params};
use serde_json::Value;

impl LspServer {
    /// Handle `textDocument/didOpen`.
    pub(crate) fn handle_did_open(
        &self,
        params: Option<Value>,
    ) -> Result<Option<Value>, JsonRpcError> {
        let params = params.ok_or_else(|| invalid_params("didOpen requires params"))?;
        let uri = req_text_document_uri(&params)?;
        let text = params
            .pointer("/textDocument/text")
            .and_then(Value::as_str)
            .ok_or_else(|| invalid_params("Missing required parameter: textDocument.text"))?;
        let version = req_version(&params);

        self.log(&format!("opened {uri} (version {version})"));
        self.documents.did_open(uri, version, text.to_string());
        self.publish_diagnostics(uri);
        Ok(None)
    }

    /// Handle `textDocument/didChange`, taking the last full-text entry.
    pub(crate) fn handle_did_change(
        &self,
        params: Option<Value>,
    ) -> Result<Option<Value>, JsonRpcError> {
        let params = params.ok_or_else(|| invalid_params("didChange requires params"))?;
        let uri = req_text_document_uri(&params)?;
        let version = req_version(&params);

        let full_text = params
            .get("contentChanges")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter(|change| change.get("range").is_none())
            .filter_map(|change| change.get("text").and_then(Value::as_str))
            .next_back();

        // Only full-text sync is supported; a change list consisting solely
        // of range edits leaves the shadow buffer as it was.
        let Some(text) = full_text else {
            self.log(&format!("ignored range-based change for {uri}"));
            return Ok(None);
        };

        self.log(&format!("changed {uri} (version {version})"));
        self.documents.did_change(uri, version, text.to_string());
        self.publish_diagnostics(uri);
        Ok(None)
    }

    /// Handle `textDocument/didClose`.
    pub(crate) fn handle_did_close(
        &self,
        params: Option<Value>,
    ) -> Result<Option<Value>, JsonRpcError> {
        let params = params.ok_or_else(|| invalid_params("didClose requires params"))?;
        let uri = req_text_document_uri(&params)?;

        self.log(&format!("closed {uri}"));
        self.documents.did_close(uri);
        self.clear_diagnostics(uri);
        Ok(None)
    }

    /// Handle `textDocument/didSave`; the save may carry the full text.
    pub(crate) fn handle_did_save(
        &self,
        params: Option<Value>,
    ) -> Result<Option<Value>, JsonRpcError> {
        let params = params.ok_or_else(|| invalid_params("didSave requires params"))?;
        let uri = req_text_document_uri(&params)?;

        if let Some(text) = params.get("text").and_then(Value::as_str) {
            let version = self.documents.get(uri).map_or(0, |doc| doc.version);
            self.documents.did_change(uri, version, text.to_string());
        }
        self.publish_diagnostics(uri);
        Ok(None)
    }
}

fn req_text_document_uri(params: &Value) -> Result<&str, JsonRpcError> {
    notes_lsp_protocol::req_uri(params)
}

fn req_version(params: &Value) -> i32 {
    params
        .pointer("/textDocument/version")
        .and_then(Value::as_i64)
        .and_then(|v| i32::try_from(v).ok())
        .unwrap_or(0)
}
