//! Diagnostic logging setup.
//!
//! User-facing progress is printed directly by the commands; `tracing` output
//! goes to stderr and is filtered by `RUST_LOG`, falling back to warnings only
//! (or debug with `--verbose`).

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default filter directive for this crate.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "ffl_avg_rank=debug"
    } else {
        "ffl_avg_rank=warn"
    }
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn setup_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::Layer::new()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(filter),
        )
        .try_init();
}
