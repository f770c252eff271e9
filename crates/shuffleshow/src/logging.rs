//! Console logging with tracing

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default log level for our own events, from the -v / -q flags.
pub fn level_for(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "warn";
    }
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Initialize logging to stderr. `RUST_LOG` overrides the flags.
pub fn init(verbose: u8, quiet: bool, color: bool) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("warn,shuffleshow={}", level_for(verbose, quiet)))
    });

    let result = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(color)
                .with_writer(std::io::stderr),
        )
        .try_init();

    if result.is_ok() {
        tracing::trace!("Logging initialized");
    }
}
