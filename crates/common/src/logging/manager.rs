//! Logging initialization.

use std::{env, io};

use tracing::*;
use tracing_subscriber::{
    EnvFilter, Layer, filter::LevelFilter, fmt::layer, layer::SubscriberExt,
    util::SubscriberInitExt,
};

use super::types::LoggerConfig;

/// Builds the event filter.
///
/// `RUST_LOG` wins when set, then the configured directives, then `INFO`.
/// Invalid directives are skipped rather than failing startup.
pub fn build_filter(env_directives: Option<&str>, config_directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(env_directives.or(config_directives).unwrap_or_default())
}

/// Initializes the logging subsystem with the provided config.
///
/// Events go to stderr so that command output on stdout stays parseable.
pub fn init(config: LoggerConfig) {
    let env_directives = env::var(EnvFilter::DEFAULT_ENV).ok();
    let filt = build_filter(env_directives.as_deref(), config.filter.as_deref());

    let stdout_sub = if config.stdout_config.json_format {
        layer()
            .json()
            .with_writer(io::stderr)
            .with_span_events(config.stdout_config.fmt_span)
            .with_filter(filt)
            .boxed()
    } else {
        layer()
            .compact()
            .with_writer(io::stderr)
            .with_span_events(config.stdout_config.fmt_span)
            .with_filter(filt)
            .boxed()
    };

    tracing_subscriber::registry().with(stdout_sub).init();

    debug!(service_name = %config.service_name, "logging initialized");
}
