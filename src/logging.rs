//! Logger setup for native and WASM builds.

use crate::config::LogLevel;

/// Install the platform logger at `level`.
///
/// On WASM this also installs the panic hook so panics reach the console.
/// A second call leaves the first logger in place.
#[cfg(target_arch = "wasm32")]
pub fn init_logging(level: LogLevel) {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(level.to_level()).is_err() {
        log::debug!("Logger already initialized");
    }
}

/// Install the platform logger at `level`.
///
/// `RUST_LOG` takes precedence over `level` when set.
/// A second call leaves the first logger in place.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging(level: LogLevel) {
    let result = env_logger::Builder::new()
        .filter_level(level.to_level_filter())
        .parse_default_env()
        .try_init();
    if result.is_err() {
        log::debug!("Logger already initialized");
    }
}
