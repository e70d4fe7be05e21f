//! Configuration for the Warp developer tools.

mod config;
mod errors;

pub use config::{DatatoolConfig, LoggingConfig, NETWORK_ENVVAR};
pub use errors::ConfigError;
