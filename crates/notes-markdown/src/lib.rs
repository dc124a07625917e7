//! Markdown scanner for wikilink-flavored notes.
//!
//! This crate locates the constructs the server cares about
//! (`[[target]]` / `[[target|alias]]` wikilinks, the YAML frontmatter
//! block, and the frontmatter `tags: [ … ]` array) and reports each with
//! precise LSP wire ranges. It also classifies a cursor position into the context
//! the completion and rename machinery discriminate on.
//!
//! Scanning is total: malformed input degrades to "no result", never to an
//! error.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod context;
mod frontmatter;
mod wikilink;

pub use context::{CursorContext, cursor_context};
pub use frontmatter::{
    Frontmatter, Tag, TagsLineInfo, find_tags_line_info, parse_frontmatter, parse_tags, tag_at,
};
pub use wikilink::{Wikilink, parse_wikilinks, wikilink_at};
