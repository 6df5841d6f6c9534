//! Logging utilities and structured logging support
//!
//! The library itself only emits `trace!`/`debug!` records; hosts decide
//! whether anything is printed by installing a logger.

pub use log::{debug, info, warn, error, trace, LevelFilter};

/// Initialize the logging system
///
/// Reads the filter from `RUST_LOG`. Calling it twice is harmless.
pub fn init() {
    let _ = env_logger::builder().is_test(cfg!(test)).try_init();
}

/// Initialize logging with a default level, still overridable by `RUST_LOG`
pub fn init_with_level(level: LevelFilter) {
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}
