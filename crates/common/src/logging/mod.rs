//! Logging subsystem.

pub mod manager;
pub mod types;


pub use manager::{build_filter, init};
pub use tracing_subscriber::fmt::format::FmtSpan;
pub use types::{LoggerConfig, StdoutConfig};
