//! Native menu bar built with `muda`.
//!
//! Menu item ids are the [`ShellAction`] ids, so a menu event maps straight
//! back to the action it stands for. Key shortcuts are handled by the page
//! bridge rather than menu accelerators, which never see keys while the
//! webview has focus.

use muda::{Menu, MenuEvent, MenuItem, PredefinedMenuItem, Submenu};
use tao::window::Window;

use crate::types::errors::ShellError;
use crate::types::shell::ShellAction;

fn menu_err(e: muda::Error) -> ShellError {
    ShellError::Menu(e.to_string())
}

fn item(action: ShellAction) -> MenuItem {
    MenuItem::with_id(action.id(), action.label(), true, None)
}

/// Builds the "File" and "View" menus.
pub fn build_menu() -> Result<Menu, ShellError> {
    let menu = Menu::new();

    let file = Submenu::new("File", true);
    file.append(&item(ShellAction::Reload)).map_err(menu_err)?;
    file.append(&PredefinedMenuItem::separator()).map_err(menu_err)?;
    file.append(&item(ShellAction::Quit)).map_err(menu_err)?;

    let view = Submenu::new("View", true);
    for action in [
        ShellAction::ToggleFullscreen,
        ShellAction::OpenDevtools,
        ShellAction::CopyUrl,
    ] {
        view.append(&item(action)).map_err(menu_err)?;
    }
    view.append(&PredefinedMenuItem::separator()).map_err(menu_err)?;
    for action in [ShellAction::ZoomIn, ShellAction::ZoomOut, ShellAction::ZoomReset] {
        view.append(&item(action)).map_err(menu_err)?;
    }

    menu.append(&file).map_err(menu_err)?;
    menu.append(&view).map_err(menu_err)?;
    Ok(menu)
}

/// Attaches the menu to the window using the platform's menu host.
pub fn attach_menu(menu: &Menu, window: &Window) -> Result<(), ShellError> {
    #[cfg(target_os = "linux")]
    {
        use tao::platform::unix::WindowExtUnix;
        menu.init_for_gtk_window(window.gtk_window(), window.default_vbox())
            .map_err(menu_err)?;
    }
    #[cfg(target_os = "windows")]
    {
        use tao::platform::windows::WindowExtWindows;
        unsafe { menu.init_for_hwnd(window.hwnd() as _) }.map_err(menu_err)?;
    }
    #[cfg(target_os = "macos")]
    {
        let _ = window;
        menu.init_for_nsapp();
    }
    Ok(())
}

/// Maps a menu event to the action it was built for.
pub fn action_for(event: &MenuEvent) -> Option<ShellAction> {
    event.id.0.parse().ok()
}
