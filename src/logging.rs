use std::sync::OnceLock;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "info";

static INSTALLED: OnceLock<()> = OnceLock::new();

/// Installs the global subscriber, honouring `RUST_LOG`. Later calls are no-ops.
pub fn init() {
    INSTALLED.get_or_init(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        if let Err(e) = fmt().with_env_filter(filter).try_init() {
            eprintln!("Failed to install tracing subscriber: {}", e);
        }
    });
}
