//! Wikilink scanning.
//!
//! A wikilink is `[[target]]` or `[[target|alias]]` on a single line. The
//! scanner walks each line with a small open/close state machine: `[[`
//! opens a link, `]]` closes it, the first `|` splits target from alias,
//! and a newline abandons whatever is open. Nothing inside the frontmatter
//! block is scanned.

use crate::frontmatter::body_start_line;
use notes_position::{Position, Range};

/// One parsed wikilink occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wikilink {
    /// Link target, whitespace-trimmed, as written (no case folding).
    pub target: String,
    /// Display alias after the first `|`, whitespace-trimmed.
    pub alias: Option<String>,
    /// Range of the whole link including both bracket pairs.
    pub range: Range,
    /// Range of the raw target span: between `[[` and the first `|` or the
    /// closing `]]`. Rename edits replace exactly this span.
    pub target_range: Range,
}

/// Scan `text` for wikilinks, in document order.
///
/// Ranges are non-overlapping and the result is deterministic for a given
/// input. An unmatched `[[` is discarded; a second `[[` before the close
/// discards the earlier opener and restarts; an empty target produces no
/// record.
pub fn parse_wikilinks(text: &str) -> Vec<Wikilink> {
    let skip = body_start_line(text);
    let mut links = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        if (line_no as u32) < skip {
            continue;
        }
        scan_line(line_no as u32, line, &mut links);
    }
    links
}

/// Find the link whose range contains `pos` (end-inclusive).
pub fn wikilink_at(links: &[Wikilink], pos: Position) -> Option<&Wikilink> {
    links.iter().find(|link| link.range.contains(pos))
}

fn scan_line(line_no: u32, line: &str, out: &mut Vec<Wikilink>) {
    // Per-character byte offsets plus a parallel prefix-sum of UTF-16
    // columns, so range construction is O(1) per link.
    let chars: Vec<(usize, char)> = line.char_indices().collect();
    let mut cols: Vec<u32> = Vec::with_capacity(chars.len() + 1);
    cols.push(0);
    for (_, ch) in &chars {
        let prev = cols[cols.len() - 1];
        cols.push(prev + ch.len_utf16() as u32);
    }

    let byte_at = |idx: usize| chars.get(idx).map_or(line.len(), |&(b, _)| b);

    let mut open: Option<usize> = None; // char index of the first '[' of '[['
    let mut i = 0usize;
    while i < chars.len() {
        let ch = chars[i].1;
        let next = chars.get(i + 1).map(|&(_, c)| c);

        if ch == '[' && next == Some('[') {
            // A nested '[[' restarts the link; the earlier opener is dropped.
            open = Some(i);
            i += 2;
            continue;
        }

        if ch == ']' && next == Some(']') {
            if let Some(open_idx) = open.take() {
                emit_link(line_no, line, &chars, &cols, byte_at(open_idx + 2), open_idx, i, out);
            }
            i += 2;
            continue;
        }

        i += 1;
    }
}

#[allow(clippy::too_many_arguments)]
fn emit_link(
    line_no: u32,
    line: &str,
    chars: &[(usize, char)],
    cols: &[u32],
    body_start_byte: usize,
    open_idx: usize,
    close_idx: usize,
    out: &mut Vec<Wikilink>,
) {
    let body_end_byte = chars[close_idx].0;
    if body_start_byte > body_end_byte {
        return;
    }
    let body = &line[body_start_byte..body_end_byte];

    let (target_raw, alias_raw) = match body.split_once('|') {
        Some((t, a)) => (t, Some(a)),
        None => (body, None),
    };

    let target = target_raw.trim();
    if target.is_empty() {
        return;
    }
    let alias = alias_raw.map(str::trim).filter(|a| !a.is_empty()).map(str::to_string);

    let range = Range::new(
        Position::new(line_no, cols[open_idx]),
        Position::new(line_no, cols[close_idx] + 2),
    );
    // The raw target span runs from just past '[[' to the pipe (or close).
    let target_end_col = cols[open_idx + 2] + target_raw.chars().map(char::len_utf16).sum::<usize>() as u32;
    let target_range = Range::new(
        Position::new(line_no, cols[open_idx + 2]),
        Position::new(line_no, target_end_col),
    );

    out.push(Wikilink { target: target.to_string(), alias, range, target_range });
}
