//! Shortcut Manager for Lumo Viewer.
//!
//! Maps key combinations to shell actions, with conflict detection and
//! platform-specific modifier adaptation. Key strings are normalized so that
//! `ctrl+shift+i`, `Shift+Ctrl+I` and `Ctrl+Shift+I` name the same binding.

use std::collections::{BTreeMap, HashMap};

use crate::types::errors::ShortcutError;
use crate::types::settings::ShellSettings;
use crate::types::shell::ShellAction;

/// Trait defining shortcut management operations.
pub trait ShortcutManagerTrait {
    fn register_shortcut(&mut self, action: &str, keys: &str) -> Result<(), ShortcutError>;
    fn get_shortcut(&self, action: &str) -> Option<&str>;
    fn has_conflict(&self, keys: &str, exclude_action: Option<&str>) -> Option<String>;
    fn get_default_shortcuts(&self) -> HashMap<String, String>;
    fn resolve(&self, keys: &str) -> Option<ShellAction>;
}

const MODIFIER_ORDER: [&str; 4] = ["Ctrl", "Cmd", "Alt", "Shift"];

/// Normalizes a key combination into `Mod+Mod+Key` form.
///
/// Modifiers are ordered Ctrl, Cmd, Alt, Shift. Single characters are
/// uppercased, `=`/`+` become `Plus` and `-` becomes `Minus`. Shift is dropped
/// from `Plus` since most layouts need it to type `+`.
pub fn normalize_keys(keys: &str) -> Result<String, ShortcutError> {
    let trimmed = keys.trim();
    if trimmed.is_empty() {
        return Err(ShortcutError::InvalidKeys("Keys cannot be empty".to_string()));
    }

    // "Ctrl++" names the plus key
    let (head, plus_key) = match trimmed.strip_suffix("++") {
        Some(head) => (head, true),
        None => (trimmed, false),
    };

    let mut modifiers: Vec<&str> = Vec::new();
    let mut key: Option<String> = plus_key.then(|| "Plus".to_string());

    for part in head.split('+').map(str::trim) {
        if part.is_empty() {
            return Err(ShortcutError::InvalidKeys(keys.to_string()));
        }
        let modifier = match part.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => Some("Ctrl"),
            "cmd" | "meta" | "super" | "command" => Some("Cmd"),
            "alt" | "option" => Some("Alt"),
            "shift" => Some("Shift"),
            _ => None,
        };
        match modifier {
            Some(m) => {
                if !modifiers.contains(&m) {
                    modifiers.push(m);
                }
            }
            None => {
                if key.is_some() {
                    return Err(ShortcutError::InvalidKeys(keys.to_string()));
                }
                key = Some(canonical_key(part));
            }
        }
    }

    let key = key.ok_or_else(|| ShortcutError::InvalidKeys(keys.to_string()))?;
    if key == "Plus" {
        modifiers.retain(|m| *m != "Shift");
    }
    modifiers.sort_by_key(|m| MODIFIER_ORDER.iter().position(|o| o == m));

    let mut out = modifiers.join("+");
    if !out.is_empty() {
        out.push('+');
    }
    out.push_str(&key);
    Ok(out)
}

fn canonical_key(part: &str) -> String {
    match part.to_ascii_lowercase().as_str() {
        "=" | "plus" | "equal" | "add" => "Plus".to_string(),
        "-" | "minus" | "subtract" => "Minus".to_string(),
        "esc" | "escape" => "Escape".to_string(),
        _ if part.chars().count() == 1 => part.to_uppercase(),
        lower => {
            // F11, Tab, Home...
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

/// Shortcut manager with in-memory storage and platform adaptation.
pub struct ShortcutManager {
    shortcuts: HashMap<String, String>,
}

impl ShortcutManager {
    pub fn new() -> Self {
        let mut mgr = Self {
            shortcuts: HashMap::new(),
        };
        mgr.shortcuts = mgr.get_default_shortcuts();
        mgr
    }

    /// Builds a manager from the settings' shortcut table. Unknown actions and
    /// unparseable keys are rejected.
    pub fn from_settings(bindings: &BTreeMap<String, String>) -> Result<Self, ShortcutError> {
        let mut mgr = Self {
            shortcuts: HashMap::new(),
        };
        for (action, keys) in bindings {
            mgr.register_shortcut(action, keys)?;
        }
        Ok(mgr)
    }

    /// Adapts modifier keys for the current platform.
    fn adapt_for_platform(keys: &str) -> String {
        if cfg!(target_os = "macos") {
            keys.replace("Ctrl+", "Cmd+")
        } else {
            keys.to_string()
        }
    }

    fn prepare(keys: &str) -> Result<String, ShortcutError> {
        normalize_keys(keys).map(|k| Self::adapt_for_platform(&k))
    }

    /// Action/keys pairs for every bound shell action, in action order.
    pub fn bindings(&self) -> Vec<(ShellAction, &str)> {
        ShellAction::ALL
            .into_iter()
            .filter_map(|a| self.get_shortcut(a.id()).map(|k| (a, k)))
            .collect()
    }
}

impl Default for ShortcutManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ShortcutManagerTrait for ShortcutManager {
    fn register_shortcut(&mut self, action: &str, keys: &str) -> Result<(), ShortcutError> {
        action.parse::<ShellAction>()?;
        let adapted = Self::prepare(keys)?;

        if let Some(conflicting_action) = self.has_conflict(&adapted, Some(action)) {
            return Err(ShortcutError::Conflict(format!(
                "'{}' is already bound to '{}'",
                keys, conflicting_action
            )));
        }

        self.shortcuts.insert(action.to_string(), adapted);
        Ok(())
    }

    fn get_shortcut(&self, action: &str) -> Option<&str> {
        self.shortcuts.get(action).map(|s| s.as_str())
    }

    fn has_conflict(&self, keys: &str, exclude_action: Option<&str>) -> Option<String> {
        let adapted = Self::prepare(keys).ok()?;
        self.shortcuts
            .iter()
            .find(|(action, bound)| **bound == adapted && Some(action.as_str()) != exclude_action)
            .map(|(action, _)| action.clone())
    }

    fn get_default_shortcuts(&self) -> HashMap<String, String> {
        ShellSettings::default_shortcuts()
            .into_iter()
            .filter_map(|(a, k)| Self::prepare(&k).ok().map(|k| (a, k)))
            .collect()
    }

    fn resolve(&self, keys: &str) -> Option<ShellAction> {
        let adapted = Self::prepare(keys).ok()?;
        self.shortcuts
            .iter()
            .find(|(_, bound)| **bound == adapted)
            .and_then(|(action, _)| action.parse().ok())
    }
}
