//! Tracing setup for the command line tool.
//!
//! Library code only emits `tracing` events; embedding applications wire
//! their own subscriber or call [`init_default_tracing`].

/// Install a compact stderr subscriber filtered by `RUST_LOG` (default `warn`).
///
/// Returns `false` if a global subscriber was already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}
