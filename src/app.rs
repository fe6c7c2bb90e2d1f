//! App Core for Lumo Viewer.
//!
//! Holds the settings, the navigation gate and the shell state, and turns
//! shell actions into calls on a [`ShellSurface`]. The GUI layer implements
//! the surface over the real window and webview.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::bridge;
use crate::managers::shortcut_manager::{ShortcutManager, ShortcutManagerTrait};
use crate::managers::zoom_manager::ZoomManager;
use crate::services::navigation_gate::{NavigationGate, NavigationGateTrait};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::services::theme_engine::ThemeEngine;
use crate::types::errors::SettingsError;
use crate::types::navigation::NavigationRequest;
use crate::types::settings::ShellSettings;
use crate::types::shell::ShellAction;

/// Operations the window shell exposes to the app core.
pub trait ShellSurface {
    fn reload(&mut self);
    fn quit(&mut self);
    fn is_fullscreen(&self) -> bool;
    fn set_fullscreen(&mut self, fullscreen: bool);
    fn open_devtools(&mut self);
    /// URL currently shown in the webview, if known.
    fn current_url(&self) -> Option<String>;
    /// Runs a script in the loaded page.
    fn evaluate_script(&mut self, script: &str);
    fn set_zoom(&mut self, level: f64);
}

/// Decision for a page's request to open a new window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewWindowOutcome {
    /// Load the URL in the existing webview.
    LoadInPlace(String),
    Blocked,
}

/// Central application struct.
pub struct App {
    pub settings_engine: SettingsEngine,
    pub gate: Arc<NavigationGate>,
    pub shortcut_manager: ShortcutManager,
    pub zoom: ZoomManager,
    pub theme_engine: ThemeEngine,
}

impl App {
    /// Loads settings from `config_path` (or the platform default) and builds
    /// the gate and shortcut table from them.
    pub fn new(config_path: Option<String>) -> Result<Self, SettingsError> {
        let mut settings_engine = SettingsEngine::new(config_path);
        settings_engine.load()?;
        Self::from_engine(settings_engine)
    }

    /// Builds an app over default settings without touching the disk.
    pub fn with_defaults() -> Result<Self, SettingsError> {
        Self::from_engine(SettingsEngine::new(None))
    }

    fn from_engine(settings_engine: SettingsEngine) -> Result<Self, SettingsError> {
        let settings = settings_engine.get_settings();
        let gate = Arc::new(NavigationGate::new(settings_engine.gate_config()?));
        let shortcut_manager = ShortcutManager::from_settings(&settings.shortcuts)
            .map_err(|e| SettingsError::InvalidValue(format!("shortcuts: {}", e)))?;
        let zoom = ZoomManager::new(settings.zoom.clone());

        Ok(Self {
            settings_engine,
            gate,
            shortcut_manager,
            zoom,
            theme_engine: ThemeEngine::new(),
        })
    }

    pub fn settings(&self) -> &ShellSettings {
        self.settings_engine.get_settings()
    }

    /// Startup logging: where settings came from and what the gate allows.
    pub fn startup(&self) {
        let cfg = self.gate.config();
        info!(
            config = self.settings_engine.get_config_path(),
            target = %self.settings().navigation.target_url,
            base = cfg.allowed_base(),
            suffix = cfg.trusted_suffix(),
            mode = ?cfg.suffix_match(),
            "starting lumo-viewer"
        );
        let target = NavigationRequest::top_level(self.settings().navigation.target_url.as_str());
        if !self.gate.decide(&target).is_allowed() {
            warn!("target URL is outside the allow-list; the first load will be blocked");
        }
    }

    /// Decides what to do with a request to open a new window. Allowed
    /// targets replace the current page; the new window itself never opens.
    pub fn handle_new_window(&self, url: &str) -> NewWindowOutcome {
        if self.gate.decide(&NavigationRequest::top_level(url)).is_allowed() {
            NewWindowOutcome::LoadInPlace(url.to_string())
        } else {
            warn!(url = %url, "[BLOCKED] new window");
            NewWindowOutcome::Blocked
        }
    }

    /// Resolves an IPC message from the page to a shell action.
    ///
    /// Messages are only honoured when the sending page is itself inside the
    /// allow-list, so a page that slipped past the gate cannot drive the shell.
    pub fn handle_ipc(&self, origin: &str, message: &str) -> Option<ShellAction> {
        if !self.gate.decide(&NavigationRequest::top_level(origin)).is_allowed() {
            warn!(origin = %origin, "ignoring IPC from untrusted page");
            return None;
        }
        match bridge::parse_message(message)? {
            bridge::BridgeMessage::Shortcut { keys } => {
                let action = self.shortcut_manager.resolve(&keys);
                if action.is_none() {
                    debug!(keys = %keys, "unbound shortcut");
                }
                action
            }
        }
    }

    /// Performs a shell action against the surface.
    pub fn perform(&mut self, action: ShellAction, surface: &mut dyn ShellSurface) {
        info!(action = %action, "shell action");
        match action {
            ShellAction::Reload => surface.reload(),
            ShellAction::Quit => surface.quit(),
            ShellAction::ToggleFullscreen => {
                let next = !surface.is_fullscreen();
                surface.set_fullscreen(next);
            }
            ShellAction::OpenDevtools => {
                if self.settings().devtools {
                    surface.open_devtools();
                } else {
                    warn!("developer tools are disabled in settings");
                }
            }
            ShellAction::CopyUrl => match surface.current_url() {
                Some(url) => {
                    let script = bridge::copy_url_script(&url, &self.theme_engine);
                    surface.evaluate_script(&script);
                }
                None => warn!("no current URL to copy"),
            },
            ShellAction::ZoomIn => {
                let level = self.zoom.zoom_in();
                surface.set_zoom(level);
            }
            ShellAction::ZoomOut => {
                let level = self.zoom.zoom_out();
                surface.set_zoom(level);
            }
            ShellAction::ZoomReset => {
                let level = self.zoom.reset();
                surface.set_zoom(level);
            }
        }
    }
}
