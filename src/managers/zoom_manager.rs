//! Page zoom state for the single webview.

use crate::types::settings::ZoomSettings;

/// Tracks the current zoom factor within the configured bounds.
#[derive(Debug, Clone)]
pub struct ZoomManager {
    level: f64,
    settings: ZoomSettings,
}

impl ZoomManager {
    pub fn new(settings: ZoomSettings) -> Self {
        Self {
            level: settings.default,
            settings,
        }
    }

    pub fn level(&self) -> f64 {
        self.level
    }

    pub fn zoom_in(&mut self) -> f64 {
        self.set_level(self.level + self.settings.step)
    }

    pub fn zoom_out(&mut self) -> f64 {
        self.set_level(self.level - self.settings.step)
    }

    pub fn reset(&mut self) -> f64 {
        self.set_level(self.settings.default)
    }

    /// Clamps to `[min, max]` and rounds to two decimals so repeated steps
    /// do not drift.
    pub fn set_level(&mut self, level: f64) -> f64 {
        let clamped = level.clamp(self.settings.min, self.settings.max);
        self.level = (clamped * 100.0).round() / 100.0;
        self.level
    }
}

impl Default for ZoomManager {
    fn default() -> Self {
        Self::new(ZoomSettings::default())
    }
}
