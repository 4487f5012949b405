use env_logger::Env;
use log::debug;

/// Installs the global logger. `RUST_LOG` wins over the default filter.
/// Returns false when a logger was already installed; that one stays active.
pub fn init_logging(verbose: bool) -> bool {
    let default_filter = if verbose { "debug" } else { "info" };
    let installed = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp_millis()
        .try_init();
    if installed.is_err() {
        debug!("logger already installed, keeping it");
        return false;
    }
    true
}
