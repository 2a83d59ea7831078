//! Configuration for the log manager

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::record::Severity;

/// Severity used when construction receives an unrecognized name
const FALLBACK_SEVERITY: Severity = Severity::Info;

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Root directory; log files go to a `logs` subdirectory underneath it
    pub root_dir: PathBuf,

    /// Minimum severity a record needs to reach any sink
    pub min_severity: Severity,

    /// Whether records are also written to a timestamped log file
    pub write_to_file: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_dir: default_root_dir(),
            min_severity: Severity::Error,
            write_to_file: false,
        }
    }
}

impl Config {
    /// Create a configuration, resolving the severity by name
    ///
    /// Unrecognized severity names fall back to `info`.
    pub fn new(root_dir: impl Into<PathBuf>, min_severity: &str, write_to_file: bool) -> Self {
        Self {
            root_dir: root_dir.into(),
            min_severity: Severity::resolve(min_severity).unwrap_or(FALLBACK_SEVERITY),
            write_to_file,
        }
    }

    /// Directory log files are written to
    pub fn logs_dir(&self) -> PathBuf {
        self.root_dir.join("logs")
    }

    /// Load a configuration from a TOML file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).context("Failed to read config file")?;
        toml::from_str(&content).context("Failed to parse config file")
    }

    /// Save the configuration to a TOML file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content).context("Failed to write config file")?;
        Ok(())
    }
}

/// Partial configuration change; unset fields keep their current value
#[derive(Debug, Clone, Default)]
pub struct ConfigUpdate {
    root_dir: Option<PathBuf>,
    min_severity: Option<String>,
    write_to_file: Option<bool>,
}

impl ConfigUpdate {
    /// Create an empty update
    pub fn new() -> Self {
        Self::default()
    }

    /// Change the root directory
    pub fn with_root_dir(mut self, root_dir: impl Into<PathBuf>) -> Self {
        self.root_dir = Some(root_dir.into());
        self
    }

    /// Change the minimum severity by name
    ///
    /// Unrecognized names leave the current severity unchanged.
    pub fn with_min_severity(mut self, name: impl Into<String>) -> Self {
        self.min_severity = Some(name.into());
        self
    }

    /// Toggle file logging
    pub fn with_write_to_file(mut self, write_to_file: bool) -> Self {
        self.write_to_file = Some(write_to_file);
        self
    }

    /// Apply this update to a configuration
    pub(crate) fn apply(self, config: &mut Config) {
        if let Some(root_dir) = self.root_dir {
            config.root_dir = root_dir;
        }
        if let Some(name) = self.min_severity {
            if let Some(severity) = Severity::resolve(&name) {
                config.min_severity = severity;
            }
        }
        if let Some(write_to_file) = self.write_to_file {
            config.write_to_file = write_to_file;
        }
    }
}

/// Get the default root directory (`~/.logbook`)
/// Falls back to ./.logbook if the home directory cannot be determined
pub fn default_root_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".logbook"))
        .unwrap_or_else(|| PathBuf::from(".logbook"))
}
