//! JSON-RPC 2.0 message types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An incoming JSON-RPC request or notification.
///
/// Notifications carry no `id` and must not be answered.
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version, always "2.0".
    #[serde(rename = "jsonrpc")]
    pub _jsonrpc: String,

    /// Request identifier; `None` marks a notification.
    pub id: Option<Value>,

    /// Method name.
    pub method: String,

    /// Method parameters.
    pub params: Option<Value>,
}

impl JsonRpcRequest {
    /// Whether this message is a notification.
    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

/// An outgoing JSON-RPC response.
///
/// Exactly one of `result` and `error` is serialized.
#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    /// Protocol version, always "2.0".
    pub jsonrpc: String,

    /// Mirror of the request id.
    pub id: Option<Value>,

    /// Success payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,

    /// Failure payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    /// Successful response.
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self { jsonrpc: "2.0".to_string(), id, result: Some(result), error: None }
    }

    /// Error response.
    pub fn error(id: Option<Value>, error: JsonRpcError) -> Self {
        Self { jsonrpc: "2.0".to_string(), id, result: None, error: Some(error) }
    }

    /// `null` result, for requests that legitimately produce nothing.
    pub fn null(id: Option<Value>) -> Self {
        Self::success(id, Value::Null)
    }
}

/// A JSON-RPC error object.
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcError {
    /// Error code; the standard codes are re-exported at the crate root.
    pub code: i32,

    /// Human-readable message.
    pub message: String,

    /// Optional structured detail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcError {
    /// Create an error without detail data.
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into(), data: None }
    }
}

impl std::fmt::Display for JsonRpcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for JsonRpcError {}
