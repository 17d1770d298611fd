//! Log subscriber setup for the command-line binary.
//!
//! The library only emits `tracing` events; nothing is printed unless a
//! subscriber is installed. Output goes to stderr so the record table on
//! stdout stays clean.
//!
//! Level priority: `RUST_LOG` > `-v` count > `warn`.

use tracing_subscriber::EnvFilter;

/// Level used when neither `RUST_LOG` nor `-v` is given.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Maps the `-v` count to a filter directive.
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => DEFAULT_LOG_LEVEL,
        1 => "debug",
        _ => "trace",
    }
}

/// Installs the global stderr subscriber. Call once, from `main`.
pub fn init(verbose: u8) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(level_for_verbosity(verbose))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "Logging initialised");
}
