use std::env;
use std::io;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn parse_log_level(value: &str) -> LevelFilter {
    match value.trim().to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" | "warning" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        "off" => LevelFilter::OFF,
        // Quiet by default: this tool runs inside a pipeline.
        _ => LevelFilter::WARN,
    }
}

/// All diagnostics go to stderr; stdout carries exactly one JSON line.
pub fn init_logging() {
    let level = parse_log_level(&env::var("LOG_LEVEL").unwrap_or_default());
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}
