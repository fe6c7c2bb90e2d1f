//! Lumo Viewer window shell.
//!
//! Uses `wry` for the system webview:
//! - Windows: WebView2
//! - Linux: WebKitGTK
//! - macOS: WKWebView
//!
//! `tao` provides the window and event loop, `muda` the native menu bar.

pub mod menu;
pub mod webview_app;
