//! Tracing setup for binaries embedding padlevel.
//!
//! The filter is read from `PADLEVEL_LOG`, then `RUST_LOG`. Nothing is
//! installed when neither is set, unless `verbose` forces `debug`.

use std::sync::Once;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static TRACING_INIT: Once = Once::new();

pub const LOG_ENV: &str = "PADLEVEL_LOG";

pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let filter = if verbose {
            EnvFilter::new("padlevel=debug")
        } else if let Ok(directives) = std::env::var(LOG_ENV) {
            EnvFilter::new(directives)
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    });
}
