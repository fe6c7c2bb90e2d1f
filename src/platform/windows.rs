// Windows: roaming profile for settings, local profile for webview data.
// Config: %APPDATA%/LumoViewer
// Data:   %LOCALAPPDATA%/LumoViewer

use std::env;
use std::path::PathBuf;

use super::APP_DIR;

pub fn get_config_dir() -> PathBuf {
    let appdata = env::var("APPDATA")
        .unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join(APP_DIR)
}

/// WebView2 user data does not roam, so it goes under `%LOCALAPPDATA%`.
pub fn get_data_dir() -> PathBuf {
    let local_appdata = env::var("LOCALAPPDATA")
        .unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Local"));
    PathBuf::from(local_appdata).join(APP_DIR)
}
