//! Lumo Viewer: a single-site desktop shell for the Lumo chat service.
//!
//! Entry point: loads settings and opens the window shell. When built without
//! the `gui` feature, checks the URLs given as arguments against the
//! navigation gate instead.

use lumo_viewer::app::App;
use lumo_viewer::logging;

#[cfg(feature = "gui")]
fn main() -> anyhow::Result<()> {
    logging::init_logging();
    let app = App::new(None)?;
    lumo_viewer::ui::webview_app::run(app)
}

#[cfg(not(feature = "gui"))]
fn main() -> anyhow::Result<()> {
    use lumo_viewer::services::navigation_gate::NavigationGateTrait;
    use lumo_viewer::types::navigation::NavigationRequest;

    logging::init_logging();
    let app = App::new(None)?;
    app.startup();

    let urls: Vec<String> = std::env::args().skip(1).collect();
    if urls.is_empty() {
        println!("usage: lumo-viewer <url>...   (built without the `gui` feature)");
        return Ok(());
    }

    let mut blocked = 0usize;
    for url in &urls {
        let decision = app.gate.decide(&NavigationRequest::top_level(url.as_str()));
        println!("{:<16} {}", format!("{:?}", decision), url);
        if !decision.is_allowed() {
            blocked += 1;
        }
    }

    if blocked > 0 {
        std::process::exit(1);
    }
    Ok(())
}
