//! Hover previews.

use crate::runtime::LspServer;
use notes_lsp_protocol::{JsonRpcError, invalid_params, req_position, req_uri};
use serde_json::{Value, json};

impl LspServer {
    /// Handle `textDocument/hover`: preview the target file of the
    /// wikilink under the cursor.
    pub(crate) fn handle_hover(
        &self,
        params: Option<Value>,
    ) -> Result<Option<Value>, JsonRpcError> {
        let params = params.ok_or_else(|| invalid_params("hover requires params"))?;
        let uri = req_uri(&params)?;
        let position = req_position(&params)?;

        let Some(link) = self.documents.wikilink_at(uri, position) else {
            return Ok(Some(Value::Null));
        };
        let Some(target_path) = self.file_index.lock().resolve(&link.target) else {
            return Ok(Some(Value::Null));
        };
        let Ok(content) = std::fs::read_to_string(&target_path) else {
            return Ok(Some(Value::Null));
        };

        let title = self
            .file_index
            .lock()
            .record(&target_path)
            .map(|r| r.stem.clone())
            .unwrap_or_else(|| link.target.clone());

        let cap = self.config.hover_preview_bytes;
        let (preview, truncated) = truncate_at_char_boundary(&content, cap);

        let mut value = format!("**{title}**\n\n");
        if truncated {
            value.push_str(&format!("*Preview truncated to {cap} bytes*\n\n"));
        }
        value.push_str("---\n\n");
        value.push_str(preview);

        Ok(Some(json!({
            "contents": {
                "kind": "markdown",
                "value": value,
            }
        })))
    }
}

/// Cut `s` to at most `max` bytes without splitting a character.
fn truncate_at_char_boundary(s: &str, max: usize) -> (&str, bool) {
    if s.len() <= max {
        return (s, false);
    }
    let mut end = max;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    (&s[..end], true)
}
