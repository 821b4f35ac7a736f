use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Default config file name, resolved against the working directory.
pub const CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub domains: Vec<DomainEntry>,
}

/// One dynamic-DNS credential set. Duplicates are permitted; each entry is
/// updated independently in file order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainEntry {
    pub host: String,
    pub domain: String,
    pub password: String,
}

/// Loads and persists the YAML config. The path is injectable so tests can
/// point it at a temp directory.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self::with_path(CONFIG_FILE)
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file is an empty config, not an error.
    pub fn read(&self) -> Result<Config, Error> {
        if !self.path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|source| Error::ConfigRead {
            path: self.path.clone(),
            source,
        })?;

        serde_yaml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: self.path.clone(),
            source,
        })
    }

    /// Serializes the full config and overwrites the file in place.
    pub fn write(&self, config: &Config) -> Result<(), Error> {
        let content = serde_yaml::to_string(config).map_err(Error::ConfigSerialize)?;

        fs::write(&self.path, content).map_err(|source| Error::ConfigWrite {
            path: self.path.clone(),
            source,
        })
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}
