// Lumo Viewer platform abstraction
// Resolves the per-user directories for settings and the webview profile.
//
// Uses `cfg(target_os)` to select the platform implementation at compile time.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Directory name used on Linux, where paths are lowercase by convention.
pub const APP_DIR_UNIX: &str = "lumo-viewer";
/// Directory name used on macOS and Windows.
pub const APP_DIR: &str = "LumoViewer";

/// Returns the platform-specific configuration directory.
///
/// - **Linux**: `$XDG_CONFIG_HOME/lumo-viewer` or `~/.config/lumo-viewer`
/// - **macOS**: `~/Library/Application Support/LumoViewer`
/// - **Windows**: `%APPDATA%/LumoViewer`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
}

/// Returns the platform-specific data directory.
///
/// - **Linux**: `$XDG_DATA_HOME/lumo-viewer` or `~/.local/share/lumo-viewer`
/// - **macOS**: `~/Library/Application Support/LumoViewer`
/// - **Windows**: `%LOCALAPPDATA%/LumoViewer`
pub fn get_data_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_data_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_data_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_data_dir()
    }
}

/// Directory holding the webview's cookies and local storage.
pub fn get_profile_dir() -> PathBuf {
    get_data_dir().join("webview")
}
