use std::{io, path::PathBuf};

use thiserror::Error;
use warp_envelope::UnknownNetwork;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid network in {var}: {source}")]
    Env {
        var: &'static str,
        #[source]
        source: UnknownNetwork,
    },
}
