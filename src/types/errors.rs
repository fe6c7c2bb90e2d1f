use std::path::PathBuf;

use thiserror::Error;

// === SettingsError ===

/// Errors related to loading, saving and editing shell settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    #[error("Settings I/O error: {0}")]
    IoError(String),
    /// Failed to serialize or deserialize settings.
    #[error("Settings serialization error: {0}")]
    SerializationError(String),
    /// The provided settings key is invalid.
    #[error("Invalid settings key: {0}")]
    InvalidKey(String),
    /// The provided settings value is invalid.
    #[error("Invalid settings value: {0}")]
    InvalidValue(String),
    /// The navigation section does not describe a usable gate.
    #[error(transparent)]
    Gate(#[from] GateConfigError),
}

// === GateConfigError ===

/// Errors raised while validating the navigation allow-list.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GateConfigError {
    /// The base URL could not be parsed.
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    /// The target URL could not be parsed.
    #[error("Invalid target URL '{url}': {reason}")]
    InvalidTargetUrl { url: String, reason: String },
    /// The trusted suffix is empty or is not a host name.
    #[error("Invalid trusted suffix: '{0}'")]
    InvalidSuffix(String),
}

// === ShortcutError ===

/// Errors related to keyboard shortcut management.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShortcutError {
    /// The shortcut keys conflict with an existing binding.
    #[error("Shortcut conflict: {0}")]
    Conflict(String),
    /// The provided key combination is invalid.
    #[error("Invalid shortcut keys: {0}")]
    InvalidKeys(String),
    /// The action name does not map to a shell action.
    #[error("Unknown shell action: {0}")]
    UnknownAction(String),
}

// === ShellError ===

/// Errors raised while building the window shell.
#[derive(Debug, Error)]
pub enum ShellError {
    /// The native window could not be created.
    #[error("Window creation failed: {0}")]
    Window(String),
    /// The embedded webview could not be created.
    #[error("WebView creation failed: {0}")]
    WebView(String),
    /// The native menu could not be built or attached.
    #[error("Menu initialization failed: {0}")]
    Menu(String),
    /// The webview profile directory could not be prepared.
    #[error("Profile directory unavailable: {}", .path.display())]
    ProfileDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
