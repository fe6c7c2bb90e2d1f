use tracing_subscriber::EnvFilter;

/// Environment variable consulted before `RUST_LOG`.
pub const LOG_ENV: &str = "LUMO_VIEWER_LOG";

/// Builds the log filter from `LUMO_VIEWER_LOG`, then `RUST_LOG`, falling back
/// to `info`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize structured logging to stderr. Safe to call more than once;
/// later calls are ignored.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    tracing::debug!("lumo-viewer logging initialized");
}
