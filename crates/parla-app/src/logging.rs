use std::fs::OpenOptions;
use std::sync::Mutex;

use parla_config::logging::LoggingConfig;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Install the global subscriber: console output plus an optional
/// append-only error log. Problems opening the log file are reported on
/// stderr and otherwise ignored.
pub fn init(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

    let ansi = atty::is(atty::Stream::Stderr);
    let console = if config.json {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        fmt::layer()
            .with_ansi(ansi)
            .with_target(false)
            .with_writer(std::io::stderr)
            .boxed()
    };

    let error_log = config.error_log.as_ref().and_then(|path| {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .with_filter(LevelFilter::WARN),
            ),
            Err(e) => {
                eprintln!("Cannot open error log {}: {e}", path.display());
                None
            }
        }
    });

    if let Err(e) = tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(error_log)
        .try_init()
    {
        eprintln!("Logging already initialized: {e}");
    }
}
