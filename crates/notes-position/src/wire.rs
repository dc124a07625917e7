//! Wire types for Position, Range, and Location.

use crate::{offset_to_utf16_line_col, utf16_line_col_to_offset};
use serde::{Deserialize, Serialize};

/// A zero-based (line, UTF-16 column) document position.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default, Hash,
)]
pub struct Position {
    /// Zero-based line number.
    pub line: u32,
    /// Zero-based column in UTF-16 code units.
    pub character: u32,
}

impl Position {
    /// Create a position.
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }

    /// Position of the given byte offset in `source`.
    pub fn from_byte_offset(source: &str, byte_offset: usize) -> Self {
        let (line, character) = offset_to_utf16_line_col(source, byte_offset);
        Self { line, character }
    }

    /// Byte offset of this position in `source`, clamped into bounds.
    pub fn to_byte_offset(&self, source: &str) -> usize {
        utf16_line_col_to_offset(source, self.line, self.character)
    }
}

/// A span between two positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, Hash)]
pub struct Range {
    /// Inclusive start position.
    pub start: Position,
    /// End position (see [`Range::contains`] for the containment rule).
    pub end: Position,
}

impl Range {
    /// Create a range.
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Range covering the bytes `start_byte..end_byte` of `source`.
    pub fn from_byte_offsets(source: &str, start_byte: usize, end_byte: usize) -> Self {
        Self {
            start: Position::from_byte_offset(source, start_byte),
            end: Position::from_byte_offset(source, end_byte),
        }
    }

    /// Zero-width range at `pos`.
    pub fn empty(pos: Position) -> Self {
        Self { start: pos, end: pos }
    }

    /// End-inclusive containment test.
    ///
    /// A cursor sitting on the closing bracket of a token still counts as
    /// inside it, so lookups use `start <= pos <= end`.
    pub fn contains(&self, pos: Position) -> bool {
        self.start <= pos && pos <= self.end
    }
}

/// A document location: URI plus range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Document URI.
    pub uri: String,
    /// Range within the document.
    pub range: Range,
}

impl Location {
    /// Create a location.
    pub fn new(uri: String, range: Range) -> Self {
        Self { uri, range }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_ordering_is_line_major() {
        assert!(Position::new(0, 10) < Position::new(1, 0));
        assert!(Position::new(2, 3) < Position::new(2, 4));
        assert_eq!(Position::new(1, 1), Position::new(1, 1));
    }

    #[test]
    fn range_contains_is_end_inclusive() {
        let range = Range::new(Position::new(0, 4), Position::new(0, 9));
        assert!(range.contains(Position::new(0, 4)));
        assert!(range.contains(Position::new(0, 7)));
        assert!(range.contains(Position::new(0, 9)));
        assert!(!range.contains(Position::new(0, 3)));
        assert!(!range.contains(Position::new(0, 10)));
        assert!(!range.contains(Position::new(1, 5)));
    }

    #[test]
    fn serializes_to_lsp_shape() {
        let loc = Location::new(
            "file:///tmp/a.md".to_string(),
            Range::new(Position::new(1, 2), Position::new(1, 8)),
        );
        let value = serde_json::to_value(&loc).unwrap();
        assert_eq!(value["uri"], "file:///tmp/a.md");
        assert_eq!(value["range"]["start"]["line"], 1);
        assert_eq!(value["range"]["start"]["character"], 2);
        assert_eq!(value["range"]["end"]["character"], 8);
    }
}
