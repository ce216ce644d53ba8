//! Logging setup.
//!
//! Diagnostics are written with `tracing` and routed to stderr so that
//! stdout carries nothing but program output.
//!
//! ## Usage
//!
//! ```ignore
//! use fibseq::observability::init_tracing;
//!
//! fn main() -> anyhow::Result<()> {
//!     init_tracing(0)?;
//!     // ... rest of application
//! }
//! ```
//!
//! `RUST_LOG` takes precedence over the verbosity count.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive for a `-v` count.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_tracing(verbosity: u8) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()
}
