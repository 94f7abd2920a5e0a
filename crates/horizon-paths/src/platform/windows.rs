//! Windows strategy: roaming application data via the known-folder API.

use std::path::PathBuf;

use windows::Win32::System::Com::CoTaskMemFree;
use windows::Win32::UI::Shell::{FOLDERID_RoamingAppData, KF_FLAG_CREATE, SHGetKnownFolderPath};

use super::{Platform, ResolveError};

/// Strategy for Windows.
pub struct Windows;

impl Platform for Windows {
    fn forbidden_chars(&self) -> &'static [char] {
        &['<', '>', ':', '"', '/', '\\', '|', '?', '*']
    }

    fn config_dir(&self) -> Result<PathBuf, ResolveError> {
        // KF_FLAG_CREATE makes the shell create the folder if the profile
        // does not have one yet.
        let raw = unsafe { SHGetKnownFolderPath(&FOLDERID_RoamingAppData, KF_FLAG_CREATE, None) }
            .map_err(|_| ResolveError::KnownFolder)?;

        // The returned buffer must be released with CoTaskMemFree, also
        // when the UTF-16 conversion fails.
        let path = unsafe { raw.to_string() };
        unsafe { CoTaskMemFree(Some(raw.0 as *const _)) };

        path.map(PathBuf::from)
            .map_err(|_| ResolveError::KnownFolder)
    }
}
