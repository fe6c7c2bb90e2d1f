// Lumo Viewer state managers
// Managers hold the shell's mutable state: key bindings and page zoom.

pub mod shortcut_manager;
pub mod zoom_manager;
