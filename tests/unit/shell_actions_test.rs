//! Tests for the app core against a recording shell surface.
//!
//! Covers action dispatch (reload, quit, fullscreen, devtools, copy URL,
//! zoom), IPC routing and new-window handling without creating a window.

use std::io::Write;
use std::sync::{Arc, Mutex};

use lumo_viewer::app::{App, NewWindowOutcome, ShellSurface};
use lumo_viewer::services::navigation_gate::NavigationGateTrait;
use lumo_viewer::types::navigation::{FrameKind, NavigationRequest};
use lumo_viewer::types::shell::ShellAction;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Default)]
struct RecordingSurface {
    reloads: usize,
    quit: bool,
    fullscreen: bool,
    devtools_opened: usize,
    url: Option<String>,
    scripts: Vec<String>,
    zoom: Option<f64>,
}

impl ShellSurface for RecordingSurface {
    fn reload(&mut self) {
        self.reloads += 1;
    }
    fn quit(&mut self) {
        self.quit = true;
    }
    fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }
    fn set_fullscreen(&mut self, fullscreen: bool) {
        self.fullscreen = fullscreen;
    }
    fn open_devtools(&mut self) {
        self.devtools_opened += 1;
    }
    fn current_url(&self) -> Option<String> {
        self.url.clone()
    }
    fn evaluate_script(&mut self, script: &str) {
        self.scripts.push(script.to_string());
    }
    fn set_zoom(&mut self, level: f64) {
        self.zoom = Some(level);
    }
}

fn app() -> App {
    App::with_defaults().unwrap()
}

const LUMO: &str = "https://lumo.proton.me/u/18/";

// ─── Actions ───

#[test]
fn test_reload_and_quit() {
    let mut app = app();
    let mut surface = RecordingSurface::default();
    app.perform(ShellAction::Reload, &mut surface);
    app.perform(ShellAction::Reload, &mut surface);
    assert_eq!(surface.reloads, 2);
    assert!(!surface.quit);
    app.perform(ShellAction::Quit, &mut surface);
    assert!(surface.quit);
}

#[test]
fn test_fullscreen_toggles() {
    let mut app = app();
    let mut surface = RecordingSurface::default();
    app.perform(ShellAction::ToggleFullscreen, &mut surface);
    assert!(surface.fullscreen);
    app.perform(ShellAction::ToggleFullscreen, &mut surface);
    assert!(!surface.fullscreen);
}

#[test]
fn test_devtools_respects_setting() {
    let mut app = app();
    let mut surface = RecordingSurface::default();
    app.perform(ShellAction::OpenDevtools, &mut surface);
    assert_eq!(surface.devtools_opened, 1);

    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    let mut settings = lumo_viewer::types::settings::ShellSettings::default();
    settings.devtools = false;
    std::fs::write(&path, serde_json::to_string(&settings).unwrap()).unwrap();
    let mut locked = App::new(Some(path.to_string_lossy().to_string())).unwrap();
    locked.perform(ShellAction::OpenDevtools, &mut surface);
    assert_eq!(surface.devtools_opened, 1);
}

#[test]
fn test_copy_url_injects_clipboard_script() {
    let mut app = app();
    let mut surface = RecordingSurface {
        url: Some(LUMO.to_string()),
        ..Default::default()
    };
    app.perform(ShellAction::CopyUrl, &mut surface);
    assert_eq!(surface.scripts.len(), 1);
    assert!(surface.scripts[0].contains("\"https://lumo.proton.me/u/18/\""));
    assert!(surface.scripts[0].contains("writeText"));
}

#[test]
fn test_copy_url_without_url_does_nothing() {
    let mut app = app();
    let mut surface = RecordingSurface::default();
    app.perform(ShellAction::CopyUrl, &mut surface);
    assert!(surface.scripts.is_empty());
}

#[test]
fn test_zoom_sequence() {
    let mut app = app();
    let mut surface = RecordingSurface::default();
    app.perform(ShellAction::ZoomIn, &mut surface);
    app.perform(ShellAction::ZoomIn, &mut surface);
    assert_eq!(surface.zoom, Some(1.2));
    app.perform(ShellAction::ZoomOut, &mut surface);
    assert_eq!(surface.zoom, Some(1.1));
    app.perform(ShellAction::ZoomReset, &mut surface);
    assert_eq!(surface.zoom, Some(1.0));
}

// ─── IPC ───

#[test]
fn test_ipc_shortcut_from_trusted_page() {
    let app = app();
    assert_eq!(
        app.handle_ipc(LUMO, r#"{"cmd":"shortcut","keys":"F11"}"#),
        Some(ShellAction::ToggleFullscreen)
    );
    assert_eq!(
        app.handle_ipc("https://account.proton.me/login", r#"{"cmd":"shortcut","keys":"Ctrl+R"}"#),
        Some(ShellAction::Reload)
    );
}

#[test]
fn test_ipc_from_untrusted_page_ignored() {
    let app = app();
    assert_eq!(
        app.handle_ipc("https://evil.com/", r#"{"cmd":"shortcut","keys":"Ctrl+Q"}"#),
        None
    );
}

#[test]
fn test_ipc_garbage_ignored() {
    let app = app();
    assert_eq!(app.handle_ipc(LUMO, "hello"), None);
    assert_eq!(app.handle_ipc(LUMO, r#"{"cmd":"shortcut","keys":"Ctrl+T"}"#), None);
}

// ─── New windows ───

#[test]
fn test_new_window_requests_are_gated() {
    let app = app();
    assert_eq!(
        app.handle_new_window("https://mail.proton.me/inbox"),
        NewWindowOutcome::LoadInPlace("https://mail.proton.me/inbox".to_string())
    );
    assert_eq!(app.handle_new_window("https://evil.com/"), NewWindowOutcome::Blocked);
    assert_eq!(app.handle_new_window("https://notproton.me/"), NewWindowOutcome::Blocked);
}

// ─── Log output ───

/// Collects formatted log lines in memory.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture_logs(f: impl FnOnce()) -> String {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = logs.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn test_untrusted_ipc_is_not_logged_as_navigation_block() {
    let app = app();
    let out = capture_logs(|| {
        app.handle_ipc("https://evil.com/", r#"{"cmd":"shortcut","keys":"Ctrl+Q"}"#);
    });
    assert!(out.contains("ignoring IPC from untrusted page"), "{}", out);
    assert!(!out.contains("[BLOCKED] navigation"), "{}", out);
}

#[test]
fn test_blocked_new_window_logs_its_own_message() {
    let app = app();
    let out = capture_logs(|| {
        app.handle_new_window("https://evil.com/");
    });
    assert!(out.contains("[BLOCKED] new window"), "{}", out);
    assert!(!out.contains("[BLOCKED] navigation"), "{}", out);
}

#[test]
fn test_startup_check_does_not_log_navigation() {
    let app = app();
    let out = capture_logs(|| app.startup());
    assert!(out.contains("starting lumo-viewer"), "{}", out);
    assert!(!out.contains("navigation allowed"), "{}", out);
    assert!(!out.contains("[BLOCKED]"), "{}", out);
}

#[test]
fn test_webview_navigation_block_is_logged() {
    let app = app();
    let out = capture_logs(|| {
        assert!(!app.gate.is_allowed(&NavigationRequest::top_level("https://evil.com/")));
    });
    assert!(out.contains("[BLOCKED] navigation"), "{}", out);
    assert!(out.contains("https://evil.com/"), "{}", out);
}

#[test]
fn test_sub_frame_block_logs_frame_kind() {
    let app = app();
    let out = capture_logs(|| {
        let req = NavigationRequest::new("https://ads.example.com/frame", FrameKind::SubFrame);
        assert!(!app.gate.is_allowed(&req));
    });
    assert!(out.contains("[BLOCKED] navigation"), "{}", out);
    assert!(out.contains("SubFrame"), "{}", out);
}
