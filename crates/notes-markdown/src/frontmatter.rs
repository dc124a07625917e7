//! Frontmatter and tag-array scanning.
//!
//! A document carries frontmatter iff line 0 is exactly `---` and some
//! later line is `---` again. The block is line-oriented `key: value`
//! pairs; the only construct extracted from it is the `tags: [ … ]` array.
//! Malformed lines are skipped, never reported.

use notes_position::{Position, Range};
use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a `tags:` key opening a bracketed array, capturing up to `[`.
static TAGS_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    // Compile-time constant pattern; construction cannot fail.
    #[allow(clippy::unwrap_used)]
    let re = Regex::new(r"^\s*tags\s*:\s*\[").unwrap();
    re
});

/// Parsed frontmatter block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontmatter {
    /// `key: value` pairs in document order, both sides trimmed. Lines
    /// without a colon are dropped.
    pub fields: Vec<(String, String)>,
    /// Line index of the closing `---` delimiter.
    pub end_line: u32,
}

/// One tag token from the frontmatter `tags` array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    /// Tag name without a leading `#`; may contain `/` for nesting.
    pub name: String,
    /// Range of the trimmed token only.
    pub range: Range,
}

/// The `tags:` line a cursor sits on, for completion context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagsLineInfo {
    /// Line index of the `tags:` line.
    pub line: u32,
    /// Full content of that line.
    pub line_content: String,
    /// UTF-16 column of the `[` opening the array.
    pub array_start_column: u32,
}

/// Parse the frontmatter block, if the document has one.
pub fn parse_frontmatter(text: &str) -> Option<Frontmatter> {
    let mut lines = text.lines().enumerate();
    let (_, first) = lines.next()?;
    if first.trim_end() != "---" {
        return None;
    }

    let mut fields = Vec::new();
    for (line_no, line) in lines {
        if line.trim_end() == "---" {
            return Some(Frontmatter { fields, end_line: line_no as u32 });
        }
        if let Some((key, value)) = line.split_once(':') {
            fields.push((key.trim().to_string(), value.trim().to_string()));
        }
    }
    None
}

/// First body line: zero when there is no frontmatter.
pub(crate) fn body_start_line(text: &str) -> u32 {
    parse_frontmatter(text).map_or(0, |fm| fm.end_line + 1)
}

/// Extract the tags array, empty when there is no frontmatter or no
/// bracketed `tags:` key. The first `tags:` line wins.
pub fn parse_tags(text: &str) -> Vec<Tag> {
    match locate_tags_line(text, true) {
        Some((line_no, line)) => tags_on_line(line_no, line),
        None => Vec::new(),
    }
}

/// Locate the `tags:` line the cursor is on, if any.
///
/// Lenient about the closing delimiter: while the user is still typing the
/// block, line 0 being `---` is enough for the search to run to the end of
/// the buffer.
pub fn find_tags_line_info(text: &str, position: Position) -> Option<TagsLineInfo> {
    let (line_no, line) = locate_tags_line(text, false)?;
    if line_no != position.line {
        return None;
    }
    let bracket_byte = line.find('[')?;
    Some(TagsLineInfo {
        line: line_no,
        line_content: line.to_string(),
        array_start_column: utf16_col(line, bracket_byte),
    })
}

/// Find the tag token whose range contains `pos` (end-inclusive).
pub fn tag_at(text: &str, pos: Position) -> Option<Tag> {
    parse_tags(text).into_iter().find(|tag| tag.range.contains(pos))
}

/// Find the first `^\s*tags\s*:\s*\[` line inside the frontmatter region.
///
/// With `require_closed`, the block must be properly terminated by `---`;
/// otherwise an unterminated block extends to the end of the buffer.
fn locate_tags_line(text: &str, require_closed: bool) -> Option<(u32, &str)> {
    let mut lines = text.lines().enumerate();
    let (_, first) = lines.next()?;
    if first.trim_end() != "---" {
        return None;
    }
    let closed_at = parse_frontmatter(text).map(|fm| fm.end_line);
    if require_closed {
        closed_at?;
    }

    for (line_no, line) in lines {
        if let Some(end) = closed_at {
            if line_no as u32 >= end {
                break;
            }
        }
        if TAGS_LINE_RE.is_match(line) {
            return Some((line_no as u32, line));
        }
    }
    None
}

/// Split the bracket interior on commas, producing trimmed tokens with
/// precise column ranges. Empty tokens are skipped.
fn tags_on_line(line_no: u32, line: &str) -> Vec<Tag> {
    let Some(bracket) = line.find('[') else {
        return Vec::new();
    };
    let interior_start = bracket + 1;
    let interior_end = line[interior_start..].find(']').map_or(line.len(), |i| interior_start + i);
    let interior = &line[interior_start..interior_end];

    let mut tags = Vec::new();
    let mut offset = interior_start;
    for segment in interior.split(',') {
        let trimmed = segment.trim();
        if !trimmed.is_empty() {
            let leading = segment.len() - segment.trim_start().len();
            let start_byte = offset + leading;
            let end_byte = start_byte + trimmed.len();
            tags.push(Tag {
                name: trimmed.to_string(),
                range: Range::new(
                    Position::new(line_no, utf16_col(line, start_byte)),
                    Position::new(line_no, utf16_col(line, end_byte)),
                ),
            });
        }
        offset += segment.len() + 1;
    }
    tags
}

/// UTF-16 column of a byte index within a line.
fn utf16_col(line: &str, byte_idx: usize) -> u32 {
    line[..byte_idx].chars().map(|c| c.len_utf16() as u32).sum()
}
