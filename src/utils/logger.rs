use env_logger::{Builder, Env};

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Install the global logger. Diagnostics go to stderr so stdout only carries status lines.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let result = Builder::from_env(Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .format_timestamp_millis()
        .format_target(false)
        .try_init();

    if result.is_err() {
        log::debug!("Logger already initialized");
    }
}
