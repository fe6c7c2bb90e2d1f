//! Unit tests for the ShortcutManager.
//!
//! Default bindings, resolution of key strings to shell actions, and conflict
//! handling.

use lumo_viewer::managers::shortcut_manager::{ShortcutManager, ShortcutManagerTrait};
use lumo_viewer::types::errors::ShortcutError;
use lumo_viewer::types::settings::ShellSettings;
use lumo_viewer::types::shell::ShellAction;
use rstest::rstest;

#[rstest]
#[case("Ctrl+R", ShellAction::Reload)]
#[case("Ctrl+Q", ShellAction::Quit)]
#[case("F11", ShellAction::ToggleFullscreen)]
#[case("Ctrl+Shift+I", ShellAction::OpenDevtools)]
#[case("Ctrl+L", ShellAction::CopyUrl)]
#[case("Ctrl++", ShellAction::ZoomIn)]
#[case("Ctrl+=", ShellAction::ZoomIn)]
#[case("Ctrl+-", ShellAction::ZoomOut)]
#[case("Ctrl+0", ShellAction::ZoomReset)]
fn test_default_bindings_resolve(#[case] keys: &str, #[case] action: ShellAction) {
    let mgr = ShortcutManager::new();
    assert_eq!(mgr.resolve(keys), Some(action));
}

#[test]
fn test_resolution_ignores_case_and_modifier_order() {
    let mgr = ShortcutManager::new();
    assert_eq!(mgr.resolve("shift+ctrl+i"), Some(ShellAction::OpenDevtools));
    assert_eq!(mgr.resolve("Ctrl+Shift+Plus"), Some(ShellAction::ZoomIn));
}

#[test]
fn test_unbound_keys_resolve_to_none() {
    let mgr = ShortcutManager::new();
    assert_eq!(mgr.resolve("Ctrl+T"), None);
    assert_eq!(mgr.resolve(""), None);
}

#[test]
fn test_every_action_has_a_default_binding() {
    let mgr = ShortcutManager::new();
    assert_eq!(mgr.bindings().len(), ShellAction::ALL.len());
}

#[test]
fn test_platform_modifier() {
    let mgr = ShortcutManager::new();
    let expected = if cfg!(target_os = "macos") { "Cmd+R" } else { "Ctrl+R" };
    assert_eq!(mgr.get_shortcut("reload"), Some(expected));
    assert_eq!(mgr.get_shortcut("fullscreen"), Some("F11"));
}

#[test]
fn test_register_rejects_conflict() {
    let mut mgr = ShortcutManager::new();
    let err = mgr.register_shortcut("copy_url", "Ctrl+R").unwrap_err();
    assert!(matches!(err, ShortcutError::Conflict(_)));
    // Rebinding an action to its own keys is fine
    assert!(mgr.register_shortcut("reload", "Ctrl+R").is_ok());
}

#[test]
fn test_register_rejects_unknown_action() {
    let mut mgr = ShortcutManager::new();
    assert_eq!(
        mgr.register_shortcut("new_tab", "Ctrl+T"),
        Err(ShortcutError::UnknownAction("new_tab".to_string()))
    );
}

#[test]
fn test_rebind() {
    let mut mgr = ShortcutManager::new();
    mgr.register_shortcut("reload", "F5").unwrap();
    assert_eq!(mgr.resolve("F5"), Some(ShellAction::Reload));
    assert_eq!(mgr.resolve("Ctrl+R"), None);
}

#[test]
fn test_from_settings_leaves_missing_actions_unbound() {
    let mut bindings = ShellSettings::default_shortcuts();
    bindings.remove("quit");
    let mgr = ShortcutManager::from_settings(&bindings).unwrap();
    assert_eq!(mgr.get_shortcut("quit"), None);
    assert_eq!(mgr.resolve("Ctrl+Q"), None);
    assert_eq!(mgr.resolve("Ctrl+R"), Some(ShellAction::Reload));
}

#[test]
fn test_from_settings_matches_defaults() {
    let mgr = ShortcutManager::from_settings(&ShellSettings::default_shortcuts()).unwrap();
    assert_eq!(mgr.bindings(), ShortcutManager::new().bindings());
}

#[test]
fn test_from_settings_rejects_duplicate_keys() {
    let mut bindings = ShellSettings::default_shortcuts();
    bindings.insert("copy_url".to_string(), "Ctrl+Q".to_string());
    assert!(matches!(
        ShortcutManager::from_settings(&bindings),
        Err(ShortcutError::Conflict(_))
    ));
}
