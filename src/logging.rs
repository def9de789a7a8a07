use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LOG_DIR: &str = "logs";
const LOG_FILE_PREFIX: &str = "osm_ports.log";
const DEFAULT_DIRECTIVE: &str = "osm_ports=info";

/// Initializes logging with console output and a daily-rotated JSON file.
///
/// `RUST_LOG` overrides the default `osm_ports=info` filter. The returned
/// guard flushes the file writer when dropped; keep it alive for the whole
/// run.
pub fn init_logging(quiet: bool) -> WorkerGuard {
    // Ensure logs directory exists
    let _ = fs::create_dir_all(LOG_DIR);

    let file_appender = tracing_appender::rolling::daily(LOG_DIR, LOG_FILE_PREFIX);
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer().json().with_writer(non_blocking_writer);

    // Console goes to stderr; stdout carries the report
    let console_layer = (!quiet).then(|| fmt::layer().with_writer(std::io::stderr));

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    guard
}
