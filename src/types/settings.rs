use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::navigation::SuffixMatch;

/// Page loaded on launch.
pub const DEFAULT_TARGET_URL: &str = "https://lumo.proton.me/u/18/";
/// Fully trusted URL prefix.
pub const DEFAULT_ALLOWED_BASE: &str = "https://lumo.proton.me/";
/// Host suffix trusted for any subdomain.
pub const DEFAULT_TRUSTED_SUFFIX: &str = "proton.me";

/// Top-level shell settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShellSettings {
    pub navigation: NavigationSettings,
    pub window: WindowSettings,
    pub zoom: ZoomSettings,
    /// Action id -> key combination, e.g. `"reload" -> "Ctrl+R"`.
    pub shortcuts: BTreeMap<String, String>,
    pub devtools: bool,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            navigation: NavigationSettings::default(),
            window: WindowSettings::default(),
            zoom: ZoomSettings::default(),
            shortcuts: Self::default_shortcuts(),
            devtools: true,
        }
    }
}

impl ShellSettings {
    /// Returns the default keyboard shortcuts.
    pub fn default_shortcuts() -> BTreeMap<String, String> {
        [
            ("reload", "Ctrl+R"),
            ("quit", "Ctrl+Q"),
            ("fullscreen", "F11"),
            ("dev_tools", "Ctrl+Shift+I"),
            ("copy_url", "Ctrl+L"),
            ("zoom_in", "Ctrl+Plus"),
            ("zoom_out", "Ctrl+Minus"),
            ("zoom_reset", "Ctrl+0"),
        ]
        .into_iter()
        .map(|(a, k)| (a.to_string(), k.to_string()))
        .collect()
    }
}

/// Navigation allow-list and start page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NavigationSettings {
    pub target_url: String,
    pub allowed_base: String,
    pub trusted_suffix: String,
    pub suffix_match: SuffixMatch,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            target_url: DEFAULT_TARGET_URL.to_string(),
            allowed_base: DEFAULT_ALLOWED_BASE.to_string(),
            trusted_suffix: DEFAULT_TRUSTED_SUFFIX.to_string(),
            suffix_match: SuffixMatch::default(),
        }
    }
}

/// Main window geometry and title.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Lumo Viewer".to_string(),
            width: 1024,
            height: 768,
        }
    }
}

/// Zoom stepping for the page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ZoomSettings {
    pub step: f64,
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self {
            step: 0.1,
            min: 0.1,
            max: 5.0,
            default: 1.0,
        }
    }
}
