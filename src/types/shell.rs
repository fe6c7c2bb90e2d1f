use std::fmt;
use std::str::FromStr;

use super::errors::ShortcutError;

/// Window chrome actions reachable from the menu and keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShellAction {
    Reload,
    Quit,
    ToggleFullscreen,
    OpenDevtools,
    CopyUrl,
    ZoomIn,
    ZoomOut,
    ZoomReset,
}

impl ShellAction {
    pub const ALL: [ShellAction; 8] = [
        ShellAction::Reload,
        ShellAction::Quit,
        ShellAction::ToggleFullscreen,
        ShellAction::OpenDevtools,
        ShellAction::CopyUrl,
        ShellAction::ZoomIn,
        ShellAction::ZoomOut,
        ShellAction::ZoomReset,
    ];

    /// Stable identifier used in settings files and menu ids.
    pub fn id(self) -> &'static str {
        match self {
            ShellAction::Reload => "reload",
            ShellAction::Quit => "quit",
            ShellAction::ToggleFullscreen => "fullscreen",
            ShellAction::OpenDevtools => "dev_tools",
            ShellAction::CopyUrl => "copy_url",
            ShellAction::ZoomIn => "zoom_in",
            ShellAction::ZoomOut => "zoom_out",
            ShellAction::ZoomReset => "zoom_reset",
        }
    }

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            ShellAction::Reload => "Reload",
            ShellAction::Quit => "Quit",
            ShellAction::ToggleFullscreen => "Fullscreen",
            ShellAction::OpenDevtools => "Developer Tools",
            ShellAction::CopyUrl => "Copy URL",
            ShellAction::ZoomIn => "Zoom In",
            ShellAction::ZoomOut => "Zoom Out",
            ShellAction::ZoomReset => "Actual Size",
        }
    }
}

impl fmt::Display for ShellAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ShellAction {
    type Err = ShortcutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShellAction::ALL
            .into_iter()
            .find(|a| a.id() == s)
            .ok_or_else(|| ShortcutError::UnknownAction(s.to_string()))
    }
}
