//! LSP wire positions for notes-lsp.
//!
//! The protocol addresses text by zero-based line and UTF-16 code unit
//! column, while the scanner and the indices work in byte offsets. This
//! crate owns the wire-facing `Position`/`Range`/`Location` types and the
//! conversion helpers between the two coordinate systems.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod convert;
mod wire;

pub use convert::{offset_to_utf16_line_col, utf16_col_to_byte, utf16_line_col_to_offset};
pub use wire::{Location, Position, Range};
