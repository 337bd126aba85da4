//! Logging setup
//!
//! Everything goes to stderr; stdout carries only the rendered header list.
//! `RUST_LOG`, when set, replaces the configured level filter.

use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: Level,
    /// One JSON object per event instead of human-readable lines
    pub use_json: bool,
}

/// Parses a log level, case-insensitively
///
/// Unknown values fall back to `Level::INFO` with a note on stderr.
///
/// ```
/// use pubheaders::util::logging::parse_level;
/// use tracing::Level;
///
/// assert_eq!(parse_level("debug"), Level::DEBUG);
/// assert_eq!(parse_level("WARN"), Level::WARN);
/// ```
pub fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to INFO. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::INFO
        }
    }
}

/// Reads `PUBHEADERS_LOG_JSON`; anything but `true`/`false` counts as false
pub fn json_from_env() -> bool {
    env::var("PUBHEADERS_LOG_JSON")
        .ok()
        .and_then(|v| v.trim().parse::<bool>().ok())
        .unwrap_or(false)
}

fn filter_for(level: Level) -> EnvFilter {
    match env::var("RUST_LOG") {
        Ok(_) => EnvFilter::from_default_env(),
        Err(_) => EnvFilter::new(format!("pubheaders={}", level)),
    }
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let (json, plain) = if config.use_json {
            (Some(fmt::layer().json().with_writer(std::io::stderr)), None)
        } else {
            (None, Some(fmt::layer().with_writer(std::io::stderr)))
        };

        tracing_subscriber::registry()
            .with(filter_for(config.level))
            .with(json)
            .with(plain)
            .init();
    });
}
