//! Logging setup for the `solidarity` binary.

/// Filters and output format.
pub mod tracing;

pub use crate::tracing::LogFormat;

/// Install the process-wide subscriber. `default_level` applies when
/// `RUST_LOG` is unset. Later calls are no-ops.
pub fn init_with(format: LogFormat, default_level: &str) {
    tracing::init(format, default_level);
}
