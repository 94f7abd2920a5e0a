//! Lexical path decomposition.
//!
//! Everything here operates on the path value alone; nothing needs to exist
//! on disk except where noted ([`real_path`]). Inputs are accepted as
//! `impl AsRef<Path>` and results come back as owned values.

use std::path::{Path, PathBuf};

/// Returns the final component of a path, empty when there is none.
///
/// # Examples
///
/// ```
/// use horizon_paths::file_name;
///
/// assert_eq!(file_name("tests/utils.cpp"), "utils.cpp");
/// assert_eq!(file_name("/"), "");
/// ```
pub fn file_name(path: impl AsRef<Path>) -> String {
    path.as_ref()
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Returns the lexical parent of a path, empty when there is none.
///
/// The root directory has no parent here; [`up_dir`] is the variant that
/// treats "up from the root" as a no-op.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use horizon_paths::dir_name;
///
/// assert_eq!(dir_name("tests/utils.cpp"), PathBuf::from("tests"));
/// ```
pub fn dir_name(path: impl AsRef<Path>) -> PathBuf {
    path.as_ref()
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default()
}

/// Returns the extension of the final component, including the leading
/// separator, or an empty string when there is none.
///
/// # Examples
///
/// ```
/// use horizon_paths::extension;
///
/// assert_eq!(extension("tests/utils.cpp"), ".cpp");
/// assert_eq!(extension("Makefile"), "");
/// ```
pub fn extension(path: impl AsRef<Path>) -> String {
    path.as_ref()
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}

/// Returns the path with the extension of its final component removed.
pub fn strip_extension(path: impl AsRef<Path>) -> PathBuf {
    path.as_ref().with_extension("")
}

/// Joins two fragments with the platform-native separator.
///
/// No `.`/`..` normalization and no separator collapsing happens beyond
/// what [`Path::join`] itself provides.
pub fn join(a: impl AsRef<Path>, b: impl AsRef<Path>) -> PathBuf {
    a.as_ref().join(b)
}

/// Returns the canonical (symlink-resolved, absolute) form of a path.
///
/// Canonicalization is only attempted for paths that exist; an empty or
/// missing path yields an empty result rather than an error.
pub fn real_path(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    if path.as_os_str().is_empty() || !path.exists() {
        return PathBuf::new();
    }
    std::fs::canonicalize(path).unwrap_or_default()
}

/// Returns the process's current working directory at call time, empty if
/// the OS query fails.
pub fn current_path() -> PathBuf {
    std::env::current_dir().unwrap_or_default()
}

/// Returns the directory one level up from `path`.
///
/// Going up from the filesystem root stays at the root. On Windows an
/// argument classified as the root by [`is_root_dir`](crate::is_root_dir)
/// yields an empty path instead, a signal for the caller to present a
/// drive list rather than navigate further.
pub fn up_dir(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();

    #[cfg(windows)]
    {
        if crate::platform::is_root_dir(path) {
            return PathBuf::new();
        }
    }

    match path.parent() {
        Some(parent) => parent.to_path_buf(),
        None => path.to_path_buf(),
    }
}
