//! Diagnostic logging to stderr.

use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

/// Install the global subscriber. `RUST_LOG` overrides the default `info`
/// level; `verbose` forces `debug`.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr);

    let subscriber = tracing_subscriber::registry().with(filter).with(fmt_layer);
    // A second init (tests) keeps the first subscriber
    let _ = tracing::subscriber::set_global_default(subscriber);
}
