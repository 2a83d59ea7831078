//! Logbook - reconfigurable console and file logging
//!
//! Provides a [`LogManager`] that owns the logging configuration, installs a
//! colorized console sink plus an optional timestamped log file, and hands out
//! named [`Logger`] handles. Reconfiguring the manager tears down the previous
//! sinks and installs a fresh set, so outputs never duplicate.
//!
//! Managers are explicitly constructed and independent of each other; there is
//! no ambient global state.
//!
//! ```rust,no_run
//! use logbook::{Config, ConfigUpdate, LogManager};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut manager = LogManager::new(Config::new("/tmp/demo", "warning", true))?;
//!
//! let log = manager.logger("demo");
//! log.warning("about to retry");
//! log.info("not shown");
//!
//! manager.update(ConfigUpdate::new().with_min_severity("debug"))?;
//! log.debug("now visible");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod logger;
pub mod manager;
pub mod record;
pub mod retention;
pub mod sink;

pub use config::{default_root_dir, Config, ConfigUpdate};
pub use logger::Logger;
pub use manager::LogManager;
pub use record::{Record, Severity};
pub use retention::{cleanup_old_logs, cleanup_old_logs_with_retention, DEFAULT_RETENTION_DAYS};
pub use sink::{log_file_path, ConsoleSink, FileSink, Sink};
