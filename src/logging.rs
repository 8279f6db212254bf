use tracing_subscriber::{fmt, EnvFilter};

/// Installs a stderr fmt subscriber. `RUST_LOG` wins over `level`.
/// Returns false if a subscriber was already installed.
pub fn init(level: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("oop_patterns={}", level.to_ascii_lowercase())));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
