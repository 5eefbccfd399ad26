//! Tracing setup shared by both runners.

use std::io::stderr;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default filter directive, overridable with `RUST_LOG`.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "espn_rosters=debug"
    } else {
        "espn_rosters=info"
    }
}

/// Install a stderr subscriber. Progress and summary output stays on stdout.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::Layer::new()
                .with_writer(stderr)
                .with_target(false)
                .with_filter(filter),
        )
        .try_init();
}
