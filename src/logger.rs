
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global tracing subscriber for the command-line tools
///
/// `RUST_LOG` takes precedence when it's set.  Otherwise the level comes from how many times
/// `-v` was passed: `warn` by default, then `info`, then `debug`.  Output goes to stderr so it
/// never interleaves with results on stdout.
pub fn init(verbosity: u8) {

    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
