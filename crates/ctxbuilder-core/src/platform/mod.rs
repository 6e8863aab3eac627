//! Platform checks.
//!
//! The build relies on `makecab.exe`, which only ships with Windows.

/// `true` when compiled for the only platform makecab ships with.
pub fn is_supported() -> bool {
    cfg!(target_os = "windows")
}

/// Warning shown to users on other platforms.
pub fn unsupported_notice() -> Option<&'static str> {
    if is_supported() {
        None
    } else {
        Some(
            "This program is designed for Windows (uses makecab.exe). \
             It may not work correctly on your current platform.",
        )
    }
}
