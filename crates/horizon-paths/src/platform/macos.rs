//! macOS strategy: home directory from the user database.

use std::ffi::CStr;
use std::path::PathBuf;

use super::{Platform, ResolveError};

/// Strategy for macOS.
pub struct MacOs;

impl Platform for MacOs {
    fn forbidden_chars(&self) -> &'static [char] {
        &['/', ':']
    }

    fn config_dir(&self) -> Result<PathBuf, ResolveError> {
        // SAFETY: getpwuid returns a pointer into static storage owned by
        // the C library; the record is read out immediately and never
        // retained across calls.
        let home = unsafe {
            let record = libc::getpwuid(libc::getuid());
            if record.is_null() || (*record).pw_dir.is_null() {
                return Err(ResolveError::UserLookup);
            }
            CStr::from_ptr((*record).pw_dir)
                .to_string_lossy()
                .into_owned()
        };
        Ok(PathBuf::from(home).join("Library/Application Support"))
    }
}
