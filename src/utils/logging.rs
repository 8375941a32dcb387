//! Log output for hosts, demos and benchmarks.
//!
//! The library only emits `tracing` events; nothing is printed until a
//! subscriber is installed. Enable with `--features logging`.

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "rolling_number=info";

/// Install a formatting subscriber filtered by `RUST_LOG`.
///
/// Returns false when a global subscriber was already set, so tests can
/// call it freely.
#[cfg(feature = "logging")]
pub fn init_logging() -> bool {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_names(true)
                .with_file(false)
                .with_line_number(false)
                .with_timer(fmt::time::uptime()),
        )
        .with(filter)
        .try_init()
        .is_ok()
}

#[cfg(not(feature = "logging"))]
pub const fn init_logging() -> bool {
    false
}
