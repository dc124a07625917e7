//! Advertised server capabilities.

use serde_json::{Value, json};

/// Capabilities object for the `initialize` response.
///
/// Sync is full-text only (change kind 1): the scanner reparses whole
/// documents, so range-based sync would buy nothing.
pub fn server_capabilities() -> Value {
    json!({
        "positionEncoding": "utf-16",
        "textDocumentSync": {
            "openClose": true,
            "change": 1,
            "save": { "includeText": true }
        },
        "hoverProvider": true,
        "definitionProvider": true,
        "referencesProvider": true,
        "documentSymbolProvider": true,
        "completionProvider": {
            "triggerCharacters": ["[", ","],
            "resolveProvider": false
        },
        "renameProvider": {
            "prepareProvider": true
        }
    })
}
