use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Sends diagnostics to stderr, filtered by `RUST_LOG` (default `warn`), so
/// they never mix with the generated output or the progress line.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    // A subscriber can only be installed once per process.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}
