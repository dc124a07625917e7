//! Cursor context discrimination.
//!
//! Completion and rename behave differently depending on where the cursor
//! sits: inside an (possibly still unclosed) wikilink, inside the
//! frontmatter `tags` array, or neither. The discriminator works on the
//! cursor's line only, since a wikilink never spans lines.

use crate::frontmatter::find_tags_line_info;
use notes_position::{Position, utf16_col_to_byte};

/// What the cursor position means for completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CursorContext {
    /// Inside `[[…`, before any closing `]]`.
    Wikilink {
        /// Text between `[[` and the cursor, truncated at the first `|`.
        query: String,
        /// Position of the first character after `[[`, the start of the
        /// span a completion edit replaces.
        query_start: Position,
    },
    /// Inside the frontmatter `tags: [ … ]` array.
    TagArray {
        /// Trimmed text between the last `,` (or the `[`) and the cursor.
        prefix: String,
    },
    /// Anywhere else.
    None,
}

/// Classify a cursor position.
///
/// The wikilink test scans the line backward from the cursor: if the
/// nearest `[[` is not followed by a `]]` before the cursor, the cursor is
/// link-interior. A cursor sitting on the closing bracket(s) is still
/// inside, because the brackets after the cursor are not part of the
/// backward scan.
pub fn cursor_context(text: &str, position: Position) -> CursorContext {
    let Some(line) = text.lines().nth(position.line as usize) else {
        return CursorContext::None;
    };
    let cursor_byte = utf16_col_to_byte(line, position.character);
    let before = &line[..cursor_byte];

    if let Some(open_idx) = before.rfind("[[") {
        let closed = before[open_idx + 2..].contains("]]");
        if !closed {
            let mut query = &before[open_idx + 2..];
            if let Some(pipe) = query.find('|') {
                query = &query[..pipe];
            }
            return CursorContext::Wikilink {
                query: query.to_string(),
                query_start: Position::new(
                    position.line,
                    col_of_byte(line, open_idx + 2),
                ),
            };
        }
    }

    if let Some(info) = find_tags_line_info(text, position) {
        let bracket_byte = utf16_col_to_byte(&info.line_content, info.array_start_column);
        let close_byte = info.line_content[bracket_byte..].find(']').map(|i| bracket_byte + i);
        let inside = cursor_byte > bracket_byte
            && close_byte.is_none_or(|close| cursor_byte <= close);
        if inside {
            let prefix_start = before[bracket_byte..]
                .rfind([',', '['])
                .map_or(bracket_byte + 1, |i| bracket_byte + i + 1);
            let prefix = before.get(prefix_start..).unwrap_or("").trim();
            return CursorContext::TagArray { prefix: prefix.to_string() };
        }
    }

    CursorContext::None
}

fn col_of_byte(line: &str, byte_idx: usize) -> u32 {
    line[..byte_idx].chars().map(|c| c.len_utf16() as u32).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ctx(text: &str, line: u32, character: u32) -> CursorContext {
        cursor_context(text, Position::new(line, character))
    }

    #[test]
    fn wikilink_interior_with_query() {
        assert_eq!(
            ctx("see [[al", 0, 8),
            CursorContext::Wikilink { query: "al".into(), query_start: Position::new(0, 6) }
        );
    }

    #[test]
    fn wikilink_immediately_after_open_has_empty_query() {
        assert_eq!(
            ctx("see [[", 0, 6),
            CursorContext::Wikilink { query: String::new(), query_start: Position::new(0, 6) }
        );
    }

    #[test]
    fn query_truncates_at_pipe() {
        assert_eq!(
            ctx("[[alpha|the st", 0, 14),
            CursorContext::Wikilink { query: "alpha".into(), query_start: Position::new(0, 2) }
        );
    }

    #[test]
    fn closed_link_before_cursor_is_none() {
        assert_eq!(ctx("see [[alpha]] done", 0, 18), CursorContext::None);
    }

    #[test]
    fn cursor_on_closing_brackets_is_still_inside() {
        // Between the two ']' characters the backward scan sees only one.
        assert_eq!(
            ctx("[[alpha]]", 0, 8),
            CursorContext::Wikilink { query: "alpha]".into(), query_start: Position::new(0, 2) }
        );
    }

    #[test]
    fn second_link_on_same_line() {
        assert_eq!(
            ctx("[[one]] and [[tw", 0, 16),
            CursorContext::Wikilink { query: "tw".into(), query_start: Position::new(0, 14) }
        );
    }

    #[test]
    fn tag_array_prefix() {
        let text = "---\ntags: [project, pr\n---\n";
        assert_eq!(ctx(text, 1, 18), CursorContext::TagArray { prefix: "pr".into() });
    }

    #[test]
    fn tag_prefix_empty_right_after_comma_or_bracket() {
        let text = "---\ntags: [a, \n---\n";
        assert_eq!(ctx(text, 1, 10), CursorContext::TagArray { prefix: String::new() });
        let text = "---\ntags: [\n---\n";
        assert_eq!(ctx(text, 1, 7), CursorContext::TagArray { prefix: String::new() });
    }

    #[test]
    fn cursor_on_tag_list_close_is_still_inside() {
        let text = "---\ntags: [alpha]\n---\n";
        assert_eq!(ctx(text, 1, 12), CursorContext::TagArray { prefix: "alpha".into() });
        assert_eq!(ctx(text, 1, 13), CursorContext::None);
    }

    #[test]
    fn before_bracket_is_none() {
        let text = "---\ntags: [a]\n---\n";
        assert_eq!(ctx(text, 1, 4), CursorContext::None);
        assert_eq!(ctx(text, 1, 6), CursorContext::None);
    }

    #[test]
    fn plain_text_is_none() {
        assert_eq!(ctx("nothing here", 0, 5), CursorContext::None);
        assert_eq!(ctx("short", 5, 0), CursorContext::None);
    }
}
