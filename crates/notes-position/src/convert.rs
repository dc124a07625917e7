//! Byte offset ↔ UTF-16 line/column conversion.
//!
//! All conversions clamp out-of-range input to the nearest valid location
//! instead of failing; editors routinely send positions one past the end of
//! a line or of the document.

/// Convert a byte offset into a zero-based (line, UTF-16 column) pair.
///
/// Offsets past the end of the document map to the position after the last
/// character. Offsets inside a multi-byte character map to the column
/// following that character.
pub fn offset_to_utf16_line_col(source: &str, byte_offset: usize) -> (u32, u32) {
    let mut line: u32 = 0;
    let mut col: u32 = 0;

    for (idx, ch) in source.char_indices() {
        if idx >= byte_offset {
            return (line, col);
        }
        if ch == '\n' {
            line += 1;
            col = 0;
        } else {
            col += ch.len_utf16() as u32;
        }
    }

    (line, col)
}

/// Convert a zero-based (line, UTF-16 column) pair into a byte offset.
///
/// Columns past the end of a line clamp to the line end (before the
/// newline); lines past the end of the document clamp to `source.len()`.
pub fn utf16_line_col_to_offset(source: &str, line: u32, character: u32) -> usize {
    let mut start = 0usize;
    for _ in 0..line {
        match source[start..].find('\n') {
            Some(nl) => start += nl + 1,
            None => return source.len(),
        }
    }

    let line_end = source[start..].find('\n').map_or(source.len(), |nl| start + nl);
    start + utf16_col_to_byte(&source[start..line_end], character)
}

/// Byte index of the given UTF-16 column within a single line (no newline).
///
/// Clamps to the end of the line. A column landing in the middle of a
/// surrogate pair resolves to the start of that character.
pub fn utf16_col_to_byte(line: &str, character: u32) -> usize {
    let mut col: u32 = 0;
    for (idx, ch) in line.char_indices() {
        if col >= character {
            return idx;
        }
        col += ch.len_utf16() as u32;
    }
    line.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_round_trip() {
        let text = "alpha\nbeta\ngamma";
        assert_eq!(offset_to_utf16_line_col(text, 0), (0, 0));
        assert_eq!(offset_to_utf16_line_col(text, 6), (1, 0));
        assert_eq!(offset_to_utf16_line_col(text, 8), (1, 2));
        assert_eq!(utf16_line_col_to_offset(text, 1, 2), 8);
        assert_eq!(utf16_line_col_to_offset(text, 2, 5), text.len());
    }

    #[test]
    fn multibyte_counts_utf16_units() {
        // 'é' is 2 bytes / 1 UTF-16 unit; '𝄞' is 4 bytes / 2 UTF-16 units.
        let text = "é𝄞x";
        assert_eq!(offset_to_utf16_line_col(text, 2), (0, 1));
        assert_eq!(offset_to_utf16_line_col(text, 6), (0, 3));
        assert_eq!(utf16_line_col_to_offset(text, 0, 1), 2);
        assert_eq!(utf16_line_col_to_offset(text, 0, 3), 6);
    }

    #[test]
    fn clamps_out_of_range() {
        let text = "one\ntwo";
        assert_eq!(utf16_line_col_to_offset(text, 0, 99), 3);
        assert_eq!(utf16_line_col_to_offset(text, 9, 0), text.len());
        assert_eq!(offset_to_utf16_line_col(text, 999), (1, 3));
    }

    #[test]
    fn column_inside_surrogate_pair_resolves_to_char_start() {
        let text = "𝄞z";
        assert_eq!(utf16_col_to_byte(text, 1), 0);
        assert_eq!(utf16_col_to_byte(text, 2), 4);
    }
}
