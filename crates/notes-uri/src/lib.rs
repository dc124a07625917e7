//! URI ↔ filesystem path conversion and normalization.
//!
//! The server only speaks `file://` URIs. This crate converts between those
//! and filesystem paths, honoring percent-encoding, and produces the
//! normalized key under which the document store indexes open buffers.

#![deny(unsafe_code)]
#![warn(missing_docs)]

use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

/// Failure to convert a path into a `file://` URI.
#[derive(Debug, Error)]
pub enum UriError {
    /// The path is relative and no base was available to absolutize it.
    #[error("cannot convert relative path to URI: {0}")]
    RelativePath(PathBuf),
    /// The path is not representable as a `file://` URI.
    #[error("path is not representable as a file URI: {0}")]
    Unrepresentable(PathBuf),
}

/// Convert a `file://` URI into a filesystem path.
///
/// Percent-encoding is decoded. Returns `None` for non-`file` schemes and
/// for strings that are not URIs at all.
pub fn uri_to_fs_path(uri: &str) -> Option<PathBuf> {
    let url = Url::parse(uri).ok()?;
    if url.scheme() != "file" {
        return None;
    }
    url.to_file_path().ok()
}

/// Convert a `file://` URI into a path, resolving relative results against
/// `root` (or the current directory when no root is known).
///
/// Some clients hand out `file://` URIs whose path component is not
/// absolute; those resolve against the workspace root from `initialize`.
pub fn uri_to_workspace_path(uri: &str, root: Option<&Path>) -> Option<PathBuf> {
    let path = uri_to_fs_path(uri).or_else(|| {
        // Not URL-parseable (for example a bare `file://notes/a.md` with a
        // relative path component): strip the scheme and take the remainder
        // as a raw path.
        uri.strip_prefix("file://").map(PathBuf::from)
    })?;

    if path.is_absolute() {
        return Some(path);
    }
    match root {
        Some(root) => Some(root.join(path)),
        None => std::env::current_dir().ok().map(|cwd| cwd.join(path)),
    }
}

/// Convert a filesystem path into a `file://` URI.
///
/// Spaces and non-ASCII characters are percent-encoded.
pub fn fs_path_to_uri<P: AsRef<Path>>(path: P) -> Result<String, UriError> {
    let path = path.as_ref();
    if !path.is_absolute() {
        return Err(UriError::RelativePath(path.to_path_buf()));
    }
    Url::from_file_path(path)
        .map(|url| url.to_string())
        .map_err(|()| UriError::Unrepresentable(path.to_path_buf()))
}

/// Normalize a URI into a stable lookup key.
///
/// Round-trips `file://` URIs through their decoded path so that differently
/// percent-encoded spellings of the same document collapse to one key.
/// Non-`file` or unparseable URIs key by their raw string.
pub fn uri_key(uri: &str) -> String {
    match uri_to_fs_path(uri) {
        Some(path) => fs_path_to_uri(&path).unwrap_or_else(|_| uri.to_string()),
        None => uri.to_string(),
    }
}
