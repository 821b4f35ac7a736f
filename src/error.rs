use std::path::PathBuf;

use thiserror::Error;

/// Run-stopping failures. Per-domain update failures are not represented
/// here; the dispatcher logs them and moves on.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read config file {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to serialize config")]
    ConfigSerialize(#[source] serde_yaml::Error),

    #[error("Failed to write config file {path}")]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not retrieve IP address from any provider")]
    NoIpAddress,
}
