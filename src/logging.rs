//! Logging setup for the command-line tool.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs a stderr subscriber.
///
/// `RUST_LOG` wins when set; otherwise only warnings are shown, or
/// everything down to `debug` with `verbose`.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
