//! Decoding of `file://` URIs into native paths.
//!
//! Drag-and-drop payloads and open dialogs hand paths over in URI form;
//! [`uri_to_path`] turns them back into something the rest of the crate
//! accepts. The decoder is deliberately narrow: only the space escape is
//! rewritten, nothing else.

use std::path::PathBuf;

/// Returns true if `uri` carries the `file://` scheme.
pub fn is_file_uri(uri: &str) -> bool {
    uri.starts_with("file://")
}

/// Converts a `file://` URI into a native path.
///
/// Drops the `file://` prefix and rewrites every `%20` to a space. No
/// other percent-escape is decoded; a URI containing e.g. `%23` keeps
/// that sequence verbatim. Total: any input yields a definitive result.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use horizon_paths::uri_to_path;
///
/// assert_eq!(uri_to_path("file:///a%20b"), PathBuf::from("/a b"));
/// ```
pub fn uri_to_path(uri: &str) -> PathBuf {
    PathBuf::from(uri.replace("file://", "").replace("%20", " "))
}
