//! Protocol layer for notes-lsp.
//!
//! JSON-RPC 2.0 message types, standard error codes with constructor
//! helpers, LSP method name constants, the advertised server capabilities,
//! and the parameter extraction helpers every handler shares.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod capabilities;
mod errors;
mod jsonrpc;
pub mod methods;

pub use capabilities::server_capabilities;
pub use errors::{
    INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST, METHOD_NOT_FOUND, PARSE_ERROR,
    SERVER_NOT_INITIALIZED, internal_error, invalid_params, method_not_found, not_initialized,
    req_new_name, req_position, req_uri,
};
pub use jsonrpc::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
