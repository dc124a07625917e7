//! JSON-RPC error codes and shared parameter extraction.

use crate::JsonRpcError;
use notes_position::Position;
use serde_json::Value;

/// Body was not valid JSON.
pub const PARSE_ERROR: i32 = -32700;
/// Message was not a valid request object.
pub const INVALID_REQUEST: i32 = -32600;
/// Method is not handled by this server.
pub const METHOD_NOT_FOUND: i32 = -32601;
/// Parameters are missing or of the wrong shape.
pub const INVALID_PARAMS: i32 = -32602;
/// Internal server failure.
pub const INTERNAL_ERROR: i32 = -32603;
/// Request arrived before `initialize` (LSP-specific).
pub const SERVER_NOT_INITIALIZED: i32 = -32002;

/// Invalid-params error.
pub fn invalid_params(message: impl Into<String>) -> JsonRpcError {
    JsonRpcError::new(INVALID_PARAMS, message)
}

/// Method-not-found error naming the method.
pub fn method_not_found(method: &str) -> JsonRpcError {
    JsonRpcError::new(METHOD_NOT_FOUND, format!("Method '{method}' not found"))
}

/// Internal error.
pub fn internal_error(message: impl Into<String>) -> JsonRpcError {
    JsonRpcError::new(INTERNAL_ERROR, message)
}

/// Server-not-initialized error.
pub fn not_initialized() -> JsonRpcError {
    JsonRpcError::new(SERVER_NOT_INITIALIZED, "Server not initialized")
}

/// Extract `textDocument.uri` from request params.
pub fn req_uri(params: &Value) -> Result<&str, JsonRpcError> {
    params
        .pointer("/textDocument/uri")
        .and_then(Value::as_str)
        .ok_or_else(|| invalid_params("Missing required parameter: textDocument.uri"))
}

/// Extract `position` from request params.
pub fn req_position(params: &Value) -> Result<Position, JsonRpcError> {
    let line = params.pointer("/position/line").and_then(Value::as_u64);
    let character = params.pointer("/position/character").and_then(Value::as_u64);
    match (line, character) {
        (Some(line), Some(character)) => Ok(Position::new(line as u32, character as u32)),
        _ => Err(invalid_params("Missing required parameter: position")),
    }
}

/// Extract `newName` from rename request params.
pub fn req_new_name(params: &Value) -> Result<&str, JsonRpcError> {
    params
        .get("newName")
        .and_then(Value::as_str)
        .ok_or_else(|| invalid_params("Missing required parameter: newName"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_uri_and_position() {
        let params = json!({
            "textDocument": { "uri": "file:///v/a.md" },
            "position": { "line": 3, "character": 14 }
        });
        assert_eq!(req_uri(&params).unwrap(), "file:///v/a.md");
        assert_eq!(req_position(&params).unwrap(), Position::new(3, 14));
    }

    #[test]
    fn missing_fields_are_invalid_params() {
        let params = json!({ "textDocument": {} });
        assert_eq!(req_uri(&params).unwrap_err().code, INVALID_PARAMS);
        assert_eq!(req_position(&params).unwrap_err().code, INVALID_PARAMS);
        assert_eq!(req_new_name(&params).unwrap_err().code, INVALID_PARAMS);
    }
}
