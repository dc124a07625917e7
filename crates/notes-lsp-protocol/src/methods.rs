//! LSP method name constants.
//!
//! One source of truth for the method strings used by dispatch, capability
//! registration, and tests.

// Lifecycle

/// First request from client to server.
pub const INITIALIZE: &str = "initialize";
/// Notification following the initialize response.
pub const INITIALIZED: &str = "initialized";
/// Graceful shutdown request.
pub const SHUTDOWN: &str = "shutdown";
/// Process termination notification.
pub const EXIT: &str = "exit";

// Text document synchronization

/// Document opened.
pub const TEXT_DOCUMENT_DID_OPEN: &str = "textDocument/didOpen";
/// Document changed.
pub const TEXT_DOCUMENT_DID_CHANGE: &str = "textDocument/didChange";
/// Document closed.
pub const TEXT_DOCUMENT_DID_CLOSE: &str = "textDocument/didClose";
/// Document saved.
pub const TEXT_DOCUMENT_DID_SAVE: &str = "textDocument/didSave";

// Language features

/// Completion request.
pub const TEXT_DOCUMENT_COMPLETION: &str = "textDocument/completion";
/// Hover request.
pub const TEXT_DOCUMENT_HOVER: &str = "textDocument/hover";
/// Go-to-definition request.
pub const TEXT_DOCUMENT_DEFINITION: &str = "textDocument/definition";
/// Find-references request.
pub const TEXT_DOCUMENT_REFERENCES: &str = "textDocument/references";
/// Document symbols request.
pub const TEXT_DOCUMENT_DOCUMENT_SYMBOL: &str = "textDocument/documentSymbol";
/// Rename validity probe.
pub const TEXT_DOCUMENT_PREPARE_RENAME: &str = "textDocument/prepareRename";
/// Workspace-wide rename request.
pub const TEXT_DOCUMENT_RENAME: &str = "textDocument/rename";

// Server-to-client notifications

/// Push diagnostics to the client.
pub const TEXT_DOCUMENT_PUBLISH_DIAGNOSTICS: &str = "textDocument/publishDiagnostics";

// Misc

/// Request cancellation notification; accepted and ignored.
pub const CANCEL_REQUEST: &str = "$/cancelRequest";
