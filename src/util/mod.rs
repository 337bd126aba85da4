//! Utility modules for pubheaders

pub mod logging;

pub use logging::{init_logging, json_from_env, parse_level, LoggingConfig};
