//! Window shell using `wry` + `tao`.
//!
//! Architecture:
//! - One `tao` window with a `muda` menu bar and one `wry` webview.
//! - Every navigation the webview reports goes through the navigation gate
//!   via `with_navigation_handler`. On Windows, iframe navigations are hooked
//!   separately and reach the gate as sub-frame requests. New-window requests
//!   are gated too; allowed targets load in place and no second window is
//!   ever created.
//! - The bridge script is injected with `with_initialization_script`; it
//!   posts bound key presses over IPC, which become [`UserEvent::Action`].
//! - Cookies and local storage persist in the profile directory through a
//!   `WebContext`.

use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::Context;
use muda::MenuEvent;
use tao::dpi::LogicalSize;
use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder};
use tao::window::{Fullscreen, Theme, Window, WindowBuilder};
use tracing::{debug, error, info, warn};
use wry::{WebContext, WebView, WebViewBuilder};

use crate::app::{App, NewWindowOutcome, ShellSurface};
use crate::bridge;
use crate::platform;
#[cfg(target_os = "windows")]
use crate::services::navigation_gate::NavigationGate;
use crate::services::navigation_gate::NavigationGateTrait;
use crate::services::theme_engine::ThemeEngineTrait;
use crate::types::errors::ShellError;
#[cfg(target_os = "windows")]
use crate::types::navigation::FrameKind;
use crate::types::navigation::NavigationRequest;
use crate::types::shell::ShellAction;
use crate::ui::menu;

#[derive(Debug)]
enum UserEvent {
    Action(ShellAction),
    /// An allowed new-window target, loaded in the existing webview.
    LoadUrl(String),
}

fn lock_app(app: &Mutex<App>) -> MutexGuard<'_, App> {
    app.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// [`ShellSurface`] over the live window and webview for one event.
struct WindowSurface<'a> {
    window: &'a Window,
    webview: &'a WebView,
    quit_requested: bool,
}

impl ShellSurface for WindowSurface<'_> {
    fn reload(&mut self) {
        if let Err(e) = self.webview.reload() {
            warn!(error = %e, "reload failed");
        }
    }

    fn quit(&mut self) {
        self.quit_requested = true;
    }

    fn is_fullscreen(&self) -> bool {
        self.window.fullscreen().is_some()
    }

    fn set_fullscreen(&mut self, fullscreen: bool) {
        self.window
            .set_fullscreen(fullscreen.then_some(Fullscreen::Borderless(None)));
    }

    fn open_devtools(&mut self) {
        self.webview.open_devtools();
    }

    fn current_url(&self) -> Option<String> {
        self.webview.url().ok()
    }

    fn evaluate_script(&mut self, script: &str) {
        if let Err(e) = self.webview.evaluate_script(script) {
            warn!(error = %e, "script evaluation failed");
        }
    }

    fn set_zoom(&mut self, level: f64) {
        debug!(level, "zoom");
        if let Err(e) = self.webview.zoom(level) {
            warn!(error = %e, "zoom failed");
        }
    }
}

fn build_window(app: &App, event_loop: &EventLoop<UserEvent>) -> Result<Window, ShellError> {
    let settings = &app.settings().window;
    WindowBuilder::new()
        .with_title(&settings.title)
        .with_inner_size(LogicalSize::new(settings.width as f64, settings.height as f64))
        .with_theme(Some(Theme::Dark))
        .build(event_loop)
        .map_err(|e| ShellError::Window(e.to_string()))
}

fn build_webview(
    state: &Arc<Mutex<App>>,
    window: &Window,
    web_context: &mut WebContext,
    proxy: tao::event_loop::EventLoopProxy<UserEvent>,
) -> Result<WebView, ShellError> {
    let (gate, target_url, init_script, background, devtools) = {
        let app = lock_app(state);
        (
            Arc::clone(&app.gate),
            app.settings().navigation.target_url.clone(),
            bridge::init_script(&app.shortcut_manager),
            app.theme_engine.background_rgba(),
            app.settings().devtools,
        )
    };

    #[cfg(target_os = "windows")]
    let frame_gate = Arc::clone(&gate);
    let ipc_state = Arc::clone(state);
    let ipc_proxy = proxy.clone();
    let nw_state = Arc::clone(state);
    let nw_proxy = proxy;

    let builder = WebViewBuilder::new_with_web_context(web_context)
        .with_url(target_url)
        .with_background_color(background)
        .with_initialization_script(init_script)
        .with_devtools(devtools)
        .with_navigation_handler(move |url: String| {
            // WebKitGTK and WKWebView also report iframe loads here without
            // saying which frame they target; WebView2 reports main-frame only
            gate.is_allowed(&NavigationRequest::top_level(url))
        })
        .with_new_window_req_handler(move |url: String, _features| {
            if let NewWindowOutcome::LoadInPlace(url) = lock_app(&nw_state).handle_new_window(&url) {
                let _ = nw_proxy.send_event(UserEvent::LoadUrl(url));
            }
            wry::NewWindowResponse::Deny
        })
        .with_ipc_handler(move |request: wry::http::Request<String>| {
            let origin = request.uri().to_string();
            let action = lock_app(&ipc_state).handle_ipc(&origin, request.body());
            if let Some(action) = action {
                let _ = ipc_proxy.send_event(UserEvent::Action(action));
            }
        });

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window
            .default_vbox()
            .ok_or_else(|| ShellError::WebView("GTK vbox unavailable".to_string()))?;
        builder.build_gtk(vbox)
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder.build(window);

    let webview = webview.map_err(|e| ShellError::WebView(e.to_string()))?;

    #[cfg(target_os = "windows")]
    gate_sub_frames(&webview, frame_gate)?;

    Ok(webview)
}

/// Routes WebView2 iframe navigations through the gate.
///
/// wry only hooks `NavigationStarting`, which WebView2 raises for the main
/// frame alone.
#[cfg(target_os = "windows")]
fn gate_sub_frames(webview: &WebView, gate: Arc<NavigationGate>) -> Result<(), ShellError> {
    use webview2_com::{take_pwstr, NavigationStartingEventHandler};
    use windows::core::PWSTR;
    use wry::WebViewExtWindows;

    let handler = NavigationStartingEventHandler::create(Box::new(move |_, args| {
        let Some(args) = args else {
            return Ok(());
        };
        let uri = unsafe {
            let mut uri = PWSTR::null();
            args.Uri(&mut uri)?;
            take_pwstr(uri)
        };
        let allow = gate.is_allowed(&NavigationRequest::new(uri, FrameKind::SubFrame));
        unsafe { args.SetCancel(!allow) }
    }));

    let mut token = 0i64;
    unsafe { webview.webview().add_FrameNavigationStarting(&handler, &mut token) }
        .map_err(|e| ShellError::WebView(format!("sub-frame navigation hook: {}", e)))
}

// ─── Main entry point ───

/// Builds the window shell around `app` and runs the event loop until quit.
pub fn run(app: App) -> anyhow::Result<()> {
    app.startup();

    let profile_dir = platform::get_profile_dir();
    std::fs::create_dir_all(&profile_dir).map_err(|source| ShellError::ProfileDir {
        path: profile_dir.clone(),
        source,
    })?;
    let mut web_context = WebContext::new(Some(profile_dir));

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = build_window(&app, &event_loop)?;
    let menu_bar = menu::build_menu()?;
    if let Err(e) = menu::attach_menu(&menu_bar, &window) {
        // The shortcuts still work without a menu bar
        error!(error = %e, "menu unavailable");
    }

    let menu_proxy = proxy.clone();
    MenuEvent::set_event_handler(Some(move |event: MenuEvent| {
        if let Some(action) = menu::action_for(&event) {
            let _ = menu_proxy.send_event(UserEvent::Action(action));
        }
    }));

    let state = Arc::new(Mutex::new(app));
    let webview = build_webview(&state, &window, &mut web_context, proxy)
        .context("failed to create the embedded browser")?;
    info!("window shell ready");

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        // The profile and menu must live as long as the webview
        let _ = (&web_context, &menu_bar);

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("window closed");
                *control_flow = ControlFlow::Exit;
            }

            Event::UserEvent(UserEvent::Action(action)) => {
                let mut surface = WindowSurface {
                    window: &window,
                    webview: &webview,
                    quit_requested: false,
                };
                lock_app(&state).perform(action, &mut surface);
                if surface.quit_requested {
                    *control_flow = ControlFlow::Exit;
                }
            }

            Event::UserEvent(UserEvent::LoadUrl(url)) => {
                info!(url = %url, "opening new-window target in place");
                if let Err(e) = webview.load_url(&url) {
                    warn!(error = %e, "load failed");
                }
            }

            _ => {}
        }
    });
}
