//! Lifecycle: initialize, shutdown, exit.

use super::LspServer;
use notes_lsp_protocol::{INVALID_REQUEST, JsonRpcError, server_capabilities};
use serde_json::{Value, json};
use std::path::PathBuf;

impl LspServer {
    /// Handle `initialize`: record the workspace root, walk it, build every
    /// index, and advertise capabilities.
    pub(crate) fn handle_initialize(
        &mut self,
        params: Option<Value>,
    ) -> Result<Option<Value>, JsonRpcError> {
        if self.initialized {
            return Err(JsonRpcError::new(INVALID_REQUEST, "initialize may only be sent once"));
        }

        let root = params.as_ref().and_then(extract_root);
        if let Some(root) = &root {
            eprintln!("notes-lsp: workspace root {}", root.display());
        }
        *self.root_path.lock() = root;

        self.rebuild_workspace();
        self.initialized = true;

        Ok(Some(json!({
            "capabilities": server_capabilities(),
            "serverInfo": {
                "name": "notes-lsp",
                "version": env!("CARGO_PKG_VERSION")
            }
        })))
    }

    /// Handle `shutdown`: arm a clean exit, keep serving until `exit`.
    pub(crate) fn handle_shutdown(&mut self) -> Result<Option<Value>, JsonRpcError> {
        self.shutdown_received = true;
        Ok(Some(Value::Null))
    }

    /// Handle `exit`: status 0 iff `shutdown` came first.
    pub(crate) fn handle_exit(&mut self) -> Result<Option<Value>, JsonRpcError> {
        self.exit_code = Some(if self.shutdown_received { 0 } else { 1 });
        Ok(None)
    }
}

/// Workspace root from initialize params: `rootUri`, then legacy
/// `rootPath`, then the first workspace folder.
fn extract_root(params: &Value) -> Option<PathBuf> {
    if let Some(uri) = params.get("rootUri").and_then(Value::as_str) {
        if let Some(path) = notes_uri::uri_to_fs_path(uri) {
            return Some(path);
        }
    }
    if let Some(path) = params.get("rootPath").and_then(Value::as_str) {
        return Some(PathBuf::from(path));
    }
    params
        .pointer("/workspaceFolders/0/uri")
        .and_then(Value::as_str)
        .and_then(notes_uri::uri_to_fs_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn root_prefers_root_uri() {
        let params = json!({
            "rootUri": "file:///vault",
            "rootPath": "/elsewhere",
            "workspaceFolders": [{ "uri": "file:///other" }]
        });
        assert_eq!(extract_root(&params), Some(PathBuf::from("/vault")));
    }

    #[test]
    fn root_falls_back_to_root_path_then_folders() {
        let params = json!({ "rootPath": "/legacy" });
        assert_eq!(extract_root(&params), Some(PathBuf::from("/legacy")));

        let params = json!({ "workspaceFolders": [{ "uri": "file:///folder" }] });
        assert_eq!(extract_root(&params), Some(PathBuf::from("/folder")));

        assert_eq!(extract_root(&json!({})), None);
    }
}
