use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset.
///
/// Verbose raises only this crate to `debug` (per-character and GPIO
/// lifecycle events). Dependencies stay at `warn` either way.
pub fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "warn,morse_sender=debug"
    } else {
        "warn,morse_sender=info"
    }
}

/// Logs go to stderr: stdout carries the status lines and the debug
/// transmitter's symbol stream.
pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time()
                .compact(),
        )
        .init();
}
