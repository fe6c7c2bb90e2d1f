// Linux paths follow the XDG base directory spec.
// Config: ~/.config/lumo-viewer
// Data:   ~/.local/share/lumo-viewer

use std::env;
use std::path::PathBuf;

use super::APP_DIR_UNIX;

fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// `$XDG_CONFIG_HOME/lumo-viewer` if set, otherwise `~/.config/lumo-viewer`.
pub fn get_config_dir() -> PathBuf {
    match env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join(APP_DIR_UNIX),
        _ => home_dir().join(".config").join(APP_DIR_UNIX),
    }
}

/// `$XDG_DATA_HOME/lumo-viewer` if set, otherwise `~/.local/share/lumo-viewer`.
pub fn get_data_dir() -> PathBuf {
    match env::var("XDG_DATA_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join(APP_DIR_UNIX),
        _ => home_dir().join(".local").join("share").join(APP_DIR_UNIX),
    }
}
