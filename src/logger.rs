use log::LevelFilter;

/// Initializes the global logger.
///
/// Warnings are always shown so that soft failures reach the operator; `verbose`
/// enables the per-step debug output. `RUST_LOG` overrides both.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose { LevelFilter::Debug } else { LevelFilter::Warn })
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
