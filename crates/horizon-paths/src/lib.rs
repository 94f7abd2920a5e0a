//! Platform-normalized filesystem paths for desktop applications.
//!
//! This crate resolves, validates, and decomposes filesystem paths the same
//! way on Windows, Linux, macOS, and FreeBSD. Four small facets make up the
//! public surface:
//!
//! - existence and type queries ([`file_exists`], [`is_dir`], [`create_dir`])
//!   that consult the real filesystem,
//! - purely lexical decomposition ([`file_name`], [`dir_name`],
//!   [`extension`], [`up_dir`], [`join`]),
//! - the per-platform resolver for the user configuration directory
//!   ([`config_dir_path`]) and the root predicate ([`is_root_dir`]),
//! - checks for user-supplied strings ([`is_valid_file_name`],
//!   [`uri_to_path`]) meant to run before the other facets ever see them.
//!
//! "Not found" and "cannot resolve" are ordinary results here, reported as
//! `false` or an empty path; no call raises an error across the crate
//! boundary. Queries reflect the filesystem at the instant of the call:
//! nothing is cached, and a race with concurrent filesystem mutation is the
//! caller's to tolerate.
//!
//! # Example
//!
//! ```
//! use horizon_paths::{extension, file_name, join};
//!
//! let path = join("sessions", "take-1.wav");
//! assert_eq!(file_name(&path), "take-1.wav");
//! assert_eq!(extension(&path), ".wav");
//! ```

mod decompose;
mod diag;
pub mod platform;
mod query;
mod uri;
mod validate;

pub use decompose::{
    current_path, dir_name, extension, file_name, join, real_path, strip_extension, up_dir,
};
pub use diag::{DiagnosticSink, TracingSink};
pub use platform::{config_dir_path, config_dir_path_with, is_root_dir, Platform, ResolveError};
pub use query::{create_dir, dir_exists, file_exists, is_dir};
pub use uri::{is_file_uri, uri_to_path};
pub use validate::is_valid_file_name;
