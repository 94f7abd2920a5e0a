//! Filesystem existence and type queries.
//!
//! Each function is a single metadata lookup against the real filesystem.
//! A missing or inaccessible path is an ordinary `false`, never an error,
//! and results are valid only at the instant of the call.

use std::fs;
use std::path::Path;

/// Returns true if something exists at `path`.
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

/// Returns true if something exists at `path`.
///
/// Like [`file_exists`], this is a mere-existence test; it does not check
/// that the entry is a directory. Use [`is_dir`] for that.
pub fn dir_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

/// Returns true if `path` exists and is a directory.
pub fn is_dir(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_dir()
}

/// Creates a single directory level, reporting the OS result.
///
/// Returns true immediately when the path already exists, so repeated
/// calls are idempotent. Parent directories are not created; a missing
/// parent makes the call return false.
pub fn create_dir(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    if dir_exists(path) {
        return true;
    }
    fs::create_dir(path).is_ok()
}
