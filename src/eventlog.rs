use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;

/// Default log file name, resolved against the working directory.
pub const LOG_FILE: &str = "namecheapdns.log";

/// Operator-facing event log: every message goes to stdout and is appended
/// as a timestamped line to the log file. The file is opened and closed per
/// write; there is no rotation and nothing ever reads it back.
#[derive(Debug, Clone)]
pub struct EventLog {
    path: PathBuf,
}

impl EventLog {
    pub fn new() -> Self {
        Self::with_path(LOG_FILE)
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn log(&self, message: &str) -> Result<()> {
        println!("{}", message);

        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.6f");
        let line = format!("{} -  {}\n", timestamp, message);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open log file: {}", self.path.display()))?;

        file.write_all(line.as_bytes())
            .with_context(|| format!("Failed to append to log file: {}", self.path.display()))?;

        Ok(())
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}
