//! The log manager
//!
//! Owns the configuration and the installed sink set. Every configuration
//! change tears down the previous sinks and installs a fresh set, so repeated
//! reconfiguration never accumulates duplicate outputs.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, RwLock};

use anyhow::Result;

use crate::config::{Config, ConfigUpdate};
use crate::logger::Logger;
use crate::record::Severity;
use crate::sink::{ConsoleSink, FileSink, Sink};

/// State shared between a manager and the logger handles it hands out
pub(crate) struct Shared {
    pub(crate) inner: RwLock<Inner>,
}

pub(crate) struct Inner {
    pub(crate) min_severity: Severity,
    pub(crate) sinks: Vec<Box<dyn Sink>>,
}

/// Manages logging configuration and the installed sinks
pub struct LogManager {
    config: Config,
    console: Arc<Mutex<Box<dyn Write + Send>>>,
    shared: Arc<Shared>,
    log_file: Option<PathBuf>,
}

impl LogManager {
    /// Create a manager with the given configuration, logging to stderr
    pub fn new(config: Config) -> Result<Self> {
        Self::with_console_writer(config, Box::new(io::stderr()))
    }

    /// Create a manager whose console sink writes to the given writer
    pub fn with_console_writer(config: Config, writer: Box<dyn Write + Send>) -> Result<Self> {
        let min_severity = config.min_severity;
        let mut manager = Self {
            config,
            console: Arc::new(Mutex::new(writer)),
            shared: Arc::new(Shared {
                inner: RwLock::new(Inner {
                    min_severity,
                    sinks: Vec::new(),
                }),
            }),
            log_file: None,
        };
        manager.install_sinks()?;
        Ok(manager)
    }

    /// Apply a partial configuration change and reinstall the sinks
    ///
    /// Sinks are reinstalled even when the update is empty.
    pub fn update(&mut self, update: ConfigUpdate) -> Result<()> {
        update.apply(&mut self.config);
        self.install_sinks()
    }

    /// Current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Path of the log file records are currently written to, if any
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    /// Get a logger handle scoped to `name`
    pub fn logger(&self, name: impl Into<String>) -> Logger {
        Logger::new(name.into(), Arc::clone(&self.shared))
    }

    /// Replace the installed sink set with one matching the current configuration
    fn install_sinks(&mut self) -> Result<()> {
        let mut sinks: Vec<Box<dyn Sink>> =
            vec![Box::new(ConsoleSink::from_shared(Arc::clone(&self.console)))];

        let mut log_file = None;
        if self.config.write_to_file {
            let file_sink = FileSink::create(&self.config.logs_dir())?;
            log_file = Some(file_sink.path().to_path_buf());
            sinks.push(Box::new(file_sink));
        }

        if let Ok(mut inner) = self.shared.inner.write() {
            inner.min_severity = self.config.min_severity;
            inner.sinks = sinks;
        }
        self.log_file = log_file;

        Ok(())
    }
}
