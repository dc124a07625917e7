//! Message framing for the LSP base protocol.
//!
//! Messages are an ASCII header block (`Content-Length` is the one header
//! that matters) terminated by a blank line, followed by that many bytes of
//! UTF-8 JSON. A frame whose body is not valid JSON-RPC is logged and
//! skipped; only EOF ends the read side.

use notes_lsp_protocol::{JsonRpcRequest, JsonRpcResponse};
use serde_json::json;
use std::io::{self, BufRead, Write};

/// Read the next well-formed message, skipping malformed frames.
///
/// Returns `Ok(None)` on EOF (including EOF in the middle of a frame);
/// `Err` only for real I/O failures.
pub fn read_message<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<Option<JsonRpcRequest>> {
    loop {
        let mut content_length: Option<usize> = None;

        // Header block, terminated by an empty line.
        loop {
            let mut line = String::new();
            if reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let line = line.trim_end();
            if line.is_empty() {
                break;
            }
            if let Some((key, value)) = line.split_once(':') {
                if key.trim().eq_ignore_ascii_case("Content-Length") {
                    content_length = value.trim().parse().ok();
                }
            }
        }

        let Some(length) = content_length else {
            eprintln!("notes-lsp: frame without Content-Length, skipping");
            continue;
        };

        let mut content = vec![0u8; length];
        if let Err(err) = reader.read_exact(&mut content) {
            return if err.kind() == io::ErrorKind::UnexpectedEof { Ok(None) } else { Err(err) };
        }

        match serde_json::from_slice(&content) {
            Ok(request) => return Ok(Some(request)),
            Err(err) => {
                eprintln!("notes-lsp: malformed frame body ({err}), skipping");
            }
        }
    }
}

/// Write a framed response.
pub fn write_message<W: Write>(writer: &mut W, response: &JsonRpcResponse) -> io::Result<()> {
    let content = serde_json::to_string(response)?;
    write!(writer, "Content-Length: {}\r\n\r\n{}", content.len(), content)?;
    writer.flush()
}

/// Write a framed notification.
pub fn write_notification<W: Write>(
    writer: &mut W,
    method: &str,
    params: serde_json::Value,
) -> io::Result<()> {
    let notification = json!({
        "jsonrpc": "2.0",
        "method": method,
        "params": params
    });
    let content = serde_json::to_string(&notification)?;
    write!(writer, "Content-Length: {}\r\n\r\n{}", content.len(), content)?;
    writer.flush()
}
