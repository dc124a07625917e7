//! Request dispatch.
//!
//! Closed tagged dispatch on the method string. Every handler returns
//! `Result<Option<Value>, JsonRpcError>`: `Ok(Some)` becomes a success
//! response, `Ok(None)` means notification (no response), `Err` becomes an
//! error response. A handler failure never tears down the loop.

use super::LspServer;
use notes_lsp_protocol::{
    JsonRpcError, JsonRpcRequest, JsonRpcResponse, methods, method_not_found, not_initialized,
};

impl LspServer {
    /// Handle one decoded message; `None` means nothing to send back.
    pub fn handle_request(&mut self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        let id = request.id.clone();

        // Cancellation is accepted but meaningless: every request runs to
        // completion before the next is read.
        if request.method == methods::CANCEL_REQUEST {
            return None;
        }

        let result = match request.method.as_str() {
            methods::INITIALIZE => self.handle_initialize(request.params),
            methods::INITIALIZED => Ok(None),
            methods::SHUTDOWN => self.handle_shutdown(),
            methods::EXIT => self.handle_exit(),
            _ if !self.initialized => Err(not_initialized()),
            methods::TEXT_DOCUMENT_DID_OPEN => self.handle_did_open(request.params),
            methods::TEXT_DOCUMENT_DID_CHANGE => self.handle_did_change(request.params),
            methods::TEXT_DOCUMENT_DID_CLOSE => self.handle_did_close(request.params),
            methods::TEXT_DOCUMENT_DID_SAVE => self.handle_did_save(request.params),
            methods::TEXT_DOCUMENT_COMPLETION => self.handle_completion(request.params),
            methods::TEXT_DOCUMENT_HOVER => self.handle_hover(request.params),
            methods::TEXT_DOCUMENT_DEFINITION => self.handle_definition(request.params),
            methods::TEXT_DOCUMENT_REFERENCES => self.handle_references(request.params),
            methods::TEXT_DOCUMENT_DOCUMENT_SYMBOL => {
                self.handle_document_symbol(request.params)
            }
            methods::TEXT_DOCUMENT_PREPARE_RENAME => self.handle_prepare_rename(request.params),
            methods::TEXT_DOCUMENT_RENAME => self.handle_rename(request.params),
            _ => Err(method_not_found(&request.method)),
        };

        self.finish(id, &request.method, result)
    }

    fn finish(
        &self,
        id: Option<serde_json::Value>,
        method: &str,
        result: Result<Option<serde_json::Value>, JsonRpcError>,
    ) -> Option<JsonRpcResponse> {
        match result {
            Ok(Some(value)) => Some(JsonRpcResponse::success(id, value)),
            Ok(None) => None,
            Err(error) => {
                eprintln!("notes-lsp: {method} failed: {error}");
                // Notifications never get responses, not even errors.
                id.map(|id| JsonRpcResponse::error(Some(id), error))
            }
        }
    }
}
