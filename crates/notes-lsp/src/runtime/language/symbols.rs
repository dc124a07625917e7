//! Document symbols: wikilinks and frontmatter tags as a flat outline.

use crate::runtime::LspServer;
use notes_lsp_protocol::{JsonRpcError, invalid_params, req_uri};
use notes_markdown::parse_tags;
use serde_json::{Value, json};

/// SymbolKind.File, used for wikilink targets.
const SYMBOL_KIND_FILE: u32 = 1;
/// SymbolKind.String, used for tags.
const SYMBOL_KIND_STRING: u32 = 15;

impl LspServer {
    /// Handle `textDocument/documentSymbol` with a flat
    /// `SymbolInformation` list.
    pub(crate) fn handle_document_symbol(
        &self,
        params: Option<Value>,
    ) -> Result<Option<Value>, JsonRpcError> {
        let params = params.ok_or_else(|| invalid_params("documentSymbol requires params"))?;
        let uri = req_uri(&params)?;

        let Some(doc) = self.documents.get(uri) else {
            return Ok(Some(Value::Null));
        };

        let mut symbols = Vec::new();
        for tag in parse_tags(&doc.text) {
            symbols.push(json!({
                "name": tag.name,
                "kind": SYMBOL_KIND_STRING,
                "location": { "uri": uri, "range": tag.range },
            }));
        }
        for link in &doc.wikilinks {
            symbols.push(json!({
                "name": link.target,
                "kind": SYMBOL_KIND_FILE,
                "location": { "uri": uri, "range": link.range },
            }));
        }

        Ok(Some(Value::Array(symbols)))
    }
}
