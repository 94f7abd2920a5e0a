//! Filename validation against platform character rules.

use crate::platform::{Platform, NATIVE};

/// Returns true if `name` contains no character forbidden in filenames on
/// this platform.
///
/// This is a pure membership test over [`Platform::forbidden_chars`]; it
/// does not check length limits or reserved device names.
///
/// # Examples
///
/// ```
/// use horizon_paths::is_valid_file_name;
///
/// assert!(is_valid_file_name("session.wav"));
/// assert!(!is_valid_file_name("a/b"));
/// ```
pub fn is_valid_file_name(name: &str) -> bool {
    !name.contains(NATIVE.forbidden_chars())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_names() {
        assert!(is_valid_file_name("session.wav"));
        assert!(is_valid_file_name("take 1 (final)"));
        assert!(is_valid_file_name(""));
    }

    #[test]
    fn test_rejects_the_path_separator_everywhere() {
        assert!(!is_valid_file_name("a/b"));
        assert!(!is_valid_file_name("/leading"));
    }

    #[test]
    #[cfg(unix)]
    fn test_unix_rules() {
        assert!(!is_valid_file_name("clock: 12"));
        // Windows-only characters pass on Unix-like platforms.
        assert!(is_valid_file_name("a*b?c"));
        assert!(is_valid_file_name("<quoted>"));
    }

    #[test]
    #[cfg(windows)]
    fn test_windows_rules() {
        for name in [
            "a<b", "a>b", "a:b", "a\"b", "a/b", "a\\b", "a|b", "a?b", "a*b",
        ] {
            assert!(!is_valid_file_name(name), "{name} should be rejected");
        }
        assert!(is_valid_file_name("plain name.txt"));
    }
}
