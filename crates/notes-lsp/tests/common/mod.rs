//! Shared test harness: a server with a captured output channel plus
//! helpers for building requests and draining published notifications.

#![allow(dead_code)]

use notes_lsp::transport::read_message;
use notes_lsp::{JsonRpcRequest, JsonRpcResponse, LspServer, ServerConfig};
use parking_lot::Mutex;
use serde_json::{Value, json};
use std::io::{BufReader, Write};
use std::path::Path;
use std::sync::Arc;

/// Writer half of the captured output channel.
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// A server whose notifications land in an inspectable buffer.
pub fn new_server() -> (LspServer, Arc<Mutex<Vec<u8>>>) {
    let buffer: Arc<Mutex<Vec<u8>>> = Arc::new(Mutex::new(Vec::new()));
    let writer: Box<dyn Write + Send> = Box::new(SharedBuf(buffer.clone()));
    let server = LspServer::with_output(ServerConfig::default(), Arc::new(Mutex::new(writer)));
    (server, buffer)
}

/// Build a request message.
pub fn request(method: &str, params: Value) -> JsonRpcRequest {
    serde_json::from_value(json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": method,
        "params": params
    }))
    .unwrap()
}

/// Build a notification message.
pub fn notification(method: &str, params: Value) -> JsonRpcRequest {
    serde_json::from_value(json!({
        "jsonrpc": "2.0",
        "method": method,
        "params": params
    }))
    .unwrap()
}

/// Dispatch a request and unwrap its success result.
pub fn request_ok(server: &mut LspServer, method: &str, params: Value) -> Value {
    let response = server.handle_request(request(method, params)).unwrap();
    assert!(response.error.is_none(), "unexpected error from {method}: {:?}", response.error);
    response.result.unwrap()
}

/// Dispatch a request, expecting an error response.
pub fn request_err(server: &mut LspServer, method: &str, params: Value) -> JsonRpcResponse {
    server.handle_request(request(method, params)).unwrap()
}

/// Initialize against a workspace root.
pub fn initialize(server: &mut LspServer, root: &Path) -> Value {
    let root_uri = notes_uri::fs_path_to_uri(root).unwrap();
    request_ok(server, "initialize", json!({ "rootUri": root_uri }))
}

/// Open a document buffer.
pub fn did_open(server: &mut LspServer, uri: &str, version: i32, text: &str) {
    let message = notification(
        "textDocument/didOpen",
        json!({
            "textDocument": { "uri": uri, "version": version, "text": text }
        }),
    );
    assert!(server.handle_request(message).is_none());
}

/// Drain and decode every notification published so far.
pub fn drain_notifications(buffer: &Arc<Mutex<Vec<u8>>>) -> Vec<(String, Value)> {
    let bytes = std::mem::take(&mut *buffer.lock());
    let mut reader = BufReader::new(bytes.as_slice());
    let mut decoded = Vec::new();
    while let Ok(Some(message)) = read_message(&mut reader) {
        if message.is_notification() {
            decoded.push((message.method, message.params.unwrap_or(Value::Null)));
        } else {
            break;
        }
    }
    decoded
}

/// The `publishDiagnostics` payloads for one URI, in publication order.
pub fn diagnostics_for(buffer: &Arc<Mutex<Vec<u8>>>, uri: &str) -> Vec<Value> {
    drain_notifications(buffer)
        .into_iter()
        .filter(|(method, params)| {
            method == "textDocument/publishDiagnostics" && params["uri"] == uri
        })
        .map(|(_, params)| params["diagnostics"].clone())
        .collect()
}
