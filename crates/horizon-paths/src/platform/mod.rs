//! Per-platform resolution of user directories and filename rules.
//!
//! Everything with genuinely divergent per-OS behavior lives behind the
//! [`Platform`] trait: the user configuration root, the root-directory
//! predicate, and the set of characters a filename may not contain. One
//! concrete strategy exists per supported OS and the right one is selected
//! once at compile time as [`Native`]; callers never branch on the OS at
//! runtime.
//!
//! # Platform Behavior
//!
//! - **Linux/FreeBSD**: `$XDG_CONFIG_HOME` if set and non-empty, else
//!   `$HOME/.config`
//! - **macOS**: the home directory from the user database, plus
//!   `Library/Application Support`
//! - **Windows**: the roaming application data known folder, created on
//!   demand
//!
//! Resolution re-queries the environment/OS on every call; nothing is
//! cached, so tests that mutate environment variables observe the change.

use std::path::{Component, Path, PathBuf};

use thiserror::Error;

use crate::diag::{DiagnosticSink, TracingSink};

#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "windows")]
mod windows;
#[cfg(any(target_os = "linux", target_os = "freebsd"))]
mod xdg;

#[cfg(target_os = "macos")]
pub use macos::MacOs as Native;
#[cfg(target_os = "windows")]
pub use windows::Windows as Native;
#[cfg(any(target_os = "linux", target_os = "freebsd"))]
pub use xdg::Xdg as Native;

/// The strategy for the platform this crate was built for.
pub const NATIVE: Native = Native;

/// Why a per-user directory could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// `$HOME` is unset or empty.
    #[error("cannot fetch the HOME environment variable")]
    MissingHome,
    /// The OS known-folder lookup failed.
    #[error("unable to fetch the roaming application data folder")]
    KnownFolder,
    /// The current user has no record in the user database.
    #[error("unable to fetch the current user record")]
    UserLookup,
}

/// OS-specific policy: directory resolution and filename rules.
pub trait Platform {
    /// Characters that may not appear in a filename on this platform.
    fn forbidden_chars(&self) -> &'static [char];

    /// Resolves the per-user configuration root.
    ///
    /// Re-queries the environment/OS on every call.
    fn config_dir(&self) -> Result<PathBuf, ResolveError>;

    /// Returns true if `path` equals the root-directory token of the
    /// current working directory's filesystem.
    ///
    /// The token is the bare separator (`/`, or `\` on Windows): a
    /// drive-qualified spelling such as `C:\` does not match, and a root
    /// on another drive is never recognized. Callers of this predicate
    /// inherit that asymmetry.
    fn is_root(&self, path: &Path) -> bool {
        match cwd_root_token() {
            Some(token) => token.as_path() == path,
            None => false,
        }
    }
}

/// The root-directory component of the current working directory.
fn cwd_root_token() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    cwd.components().find_map(|component| match component {
        Component::RootDir => Some(PathBuf::from(component.as_os_str())),
        _ => None,
    })
}

/// Returns the per-user configuration root, or an empty path when it
/// cannot be resolved.
///
/// Failures are reported through `tracing` at WARN level; use
/// [`config_dir_path_with`] to capture them elsewhere. An empty result is
/// an expected outcome the caller must handle, a typical fallback being
/// the current directory.
pub fn config_dir_path() -> PathBuf {
    config_dir_path_with(&TracingSink)
}

/// Like [`config_dir_path`], reporting failures to the given sink.
pub fn config_dir_path_with(diag: &dyn DiagnosticSink) -> PathBuf {
    match NATIVE.config_dir() {
        Ok(path) => path,
        Err(err) => {
            diag.diagnostic(&err.to_string());
            PathBuf::new()
        }
    }
}

/// Returns true if `path` is the root directory of the current working
/// directory's filesystem.
pub fn is_root_dir(path: impl AsRef<Path>) -> bool {
    NATIVE.is_root(path.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSink(std::sync::Mutex<Vec<String>>);

    impl DiagnosticSink for RecordingSink {
        fn diagnostic(&self, message: &str) {
            self.0.lock().unwrap().push(message.to_owned());
        }
    }

    #[test]
    #[cfg(unix)]
    fn test_is_root_dir() {
        assert!(is_root_dir("/"));
        assert!(!is_root_dir("/path/to/something"));
        assert!(!is_root_dir(""));
    }

    #[test]
    #[cfg(windows)]
    fn test_is_root_dir() {
        // Only the bare separator matches the cwd's root token; the
        // drive-qualified spelling does not.
        assert!(is_root_dir("\\"));
        assert!(!is_root_dir("C:\\path\\to\\something"));
        assert!(!is_root_dir(""));
    }

    #[test]
    fn test_forbidden_chars_cover_the_native_separator() {
        assert!(NATIVE.forbidden_chars().contains(&'/'));
    }

    #[cfg(any(target_os = "linux", target_os = "freebsd"))]
    #[test]
    fn test_config_dir_follows_the_environment() {
        // SAFETY: this test is the only reader and writer of these
        // variables in the test binary.
        fn set(name: &str, value: &str) {
            unsafe { std::env::set_var(name, value) }
        }
        fn clear(name: &str) {
            unsafe { std::env::remove_var(name) }
        }
        fn restore(name: &str, saved: Option<std::ffi::OsString>) {
            match saved {
                Some(value) => unsafe { std::env::set_var(name, value) },
                None => clear(name),
            }
        }

        let saved_xdg = std::env::var_os("XDG_CONFIG_HOME");
        let saved_home = std::env::var_os("HOME");

        set("XDG_CONFIG_HOME", "/custom/config");
        assert_eq!(config_dir_path(), PathBuf::from("/custom/config"));

        // An empty value counts as unset.
        set("XDG_CONFIG_HOME", "");
        set("HOME", "/home/somebody");
        assert_eq!(config_dir_path(), PathBuf::from("/home/somebody/.config"));

        // With no usable variable left the resolver reports one
        // diagnostic and hands back an empty path.
        clear("XDG_CONFIG_HOME");
        clear("HOME");
        let sink = RecordingSink::default();
        assert_eq!(config_dir_path_with(&sink), PathBuf::new());
        {
            let recorded = sink.0.lock().unwrap();
            assert_eq!(recorded.len(), 1);
            assert!(recorded[0].contains("HOME"));
        }

        restore("XDG_CONFIG_HOME", saved_xdg);
        restore("HOME", saved_home);
    }
}
