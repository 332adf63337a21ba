//! Tracing subscriber setup.
//!
//! `RUST_LOG` wins over the directives passed in by the caller, so the
//! server and the CLI can pick different defaults.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub const SERVER_DIRECTIVES: &str = "fancam=info";
pub const CLI_DIRECTIVES: &str = "fancam=warn";

pub fn init_logging(default_directives: &str) {
    let filter = std::env::var("RUST_LOG")
        .ok()
        .map(EnvFilter::new)
        .unwrap_or_else(|| EnvFilter::new(default_directives));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    // a second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
