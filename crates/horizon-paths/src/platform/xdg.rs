//! XDG base-directory strategy, shared by Linux and FreeBSD.

use std::path::PathBuf;

use super::{Platform, ResolveError};

/// Strategy for desktops following the XDG base-directory convention.
pub struct Xdg;

impl Platform for Xdg {
    fn forbidden_chars(&self) -> &'static [char] {
        // ':' is also rejected so that a name accepted here stays usable
        // on macOS volumes.
        &['/', ':']
    }

    fn config_dir(&self) -> Result<PathBuf, ResolveError> {
        if let Some(xdg) = env_var("XDG_CONFIG_HOME") {
            return Ok(PathBuf::from(xdg));
        }
        match env_var("HOME") {
            Some(home) => Ok(PathBuf::from(home).join(".config")),
            None => Err(ResolveError::MissingHome),
        }
    }
}

/// An environment variable's value, with unset and empty treated alike.
fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}
