use log::LevelFilter;
use nvim_theme_core::ClientConfig;

/// Picks the log level: `--verbose` wins, then the config file, then `warn`.
pub fn log_level(verbose: bool, config: &ClientConfig) -> LevelFilter {
    if verbose {
        return LevelFilter::Debug;
    }

    config
        .log_level
        .as_deref()
        .map(|level| match level.to_lowercase().as_str() {
            "trace" => LevelFilter::Trace,
            "debug" => LevelFilter::Debug,
            "info" => LevelFilter::Info,
            "warn" => LevelFilter::Warn,
            "error" => LevelFilter::Error,
            "off" => LevelFilter::Off,
            _ => LevelFilter::Warn,
        })
        .unwrap_or(LevelFilter::Warn)
}

/// Initializes env_logger on standard error. `RUST_LOG` still overrides.
pub fn init_logging(level: LevelFilter) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level.to_string()))
        .format_timestamp(None)
        .init();
}
