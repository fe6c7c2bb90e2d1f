// macOS keeps settings and profile data together.
// Config: ~/Library/Application Support/LumoViewer
// Data:   ~/Library/Application Support/LumoViewer

use std::env;
use std::path::PathBuf;

use super::APP_DIR;

fn application_support() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
        .join("Library")
        .join("Application Support")
}

pub fn get_config_dir() -> PathBuf {
    application_support().join(APP_DIR)
}

pub fn get_data_dir() -> PathBuf {
    application_support().join(APP_DIR)
}
