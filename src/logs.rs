use env_logger::{Builder, Env};

/// Installs the process logger, reading filters from `RUST_LOG`.
/// Later calls are no-ops, so embedding apps and tests can both call it.
pub fn init() {
    let result = Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init();
    if result.is_ok() {
        debug!("logger initialized");
    }
}
