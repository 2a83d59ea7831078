//! Output sinks for log records
//!
//! A sink is a destination for formatted records: the console (colorized) or
//! a timestamped log file (plain text).

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use chrono::Local;

use crate::record::Record;

/// An output destination for formatted log records
pub trait Sink: Send + Sync {
    /// Write one record to the destination
    fn emit(&self, record: &Record) -> io::Result<()>;
}

/// Console sink; colorizes the severity label
pub struct ConsoleSink {
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl ConsoleSink {
    /// Create a console sink writing to stderr
    pub fn new() -> Self {
        Self::with_writer(Box::new(io::stderr()))
    }

    /// Create a console sink writing to the given writer
    pub fn with_writer(writer: Box<dyn Write + Send>) -> Self {
        Self {
            writer: Arc::new(Mutex::new(writer)),
        }
    }

    pub(crate) fn from_shared(writer: Arc<Mutex<Box<dyn Write + Send>>>) -> Self {
        Self { writer }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn emit(&self, record: &Record) -> io::Result<()> {
        if let Ok(mut writer) = self.writer.lock() {
            writeln!(writer, "{}", record.console_line())?;
            writer.flush()?;
        }
        Ok(())
    }
}

/// File sink; writes uncolored lines to a timestamped log file
pub struct FileSink {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileSink {
    /// Create the logs directory if needed and open a fresh timestamped log file
    pub fn create(logs_dir: &Path) -> Result<Self> {
        fs::create_dir_all(logs_dir).context("Failed to create logs directory")?;

        let path = log_file_path(logs_dir);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .context("Failed to open log file")?;

        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    /// Full path to the log file this sink writes to
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn emit(&self, record: &Record) -> io::Result<()> {
        if let Ok(mut file) = self.file.lock() {
            writeln!(file, "{}", record.plain_line())?;
            file.flush()?;
        }
        Ok(())
    }
}

/// Generate a timestamped log file path under `logs_dir`
pub fn log_file_path(logs_dir: &Path) -> PathBuf {
    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    logs_dir.join(format!("log_{}.txt", timestamp))
}

/// Check whether a file name matches the log file naming scheme
pub(crate) fn is_log_file_name(name: &str) -> bool {
    name.starts_with("log_") && name.ends_with(".txt")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Severity;
    use tempfile::TempDir;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_log_file_path_naming() {
        let logs_dir = PathBuf::from("/tmp/logbook/logs");
        let path = log_file_path(&logs_dir);

        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("log_"));
        assert!(name.ends_with(".txt"));
        assert_eq!(path.parent().unwrap(), logs_dir);
    }

    #[test]
    fn test_is_log_file_name() {
        assert!(is_log_file_name("log_2026-08-06_10-00-00.txt"));
        assert!(!is_log_file_name("other_2026-08-06_10-00-00.txt"));
        assert!(!is_log_file_name("log_2026-08-06_10-00-00.log"));
        assert!(!is_log_file_name("notes.txt.bak"));
    }

    #[test]
    fn test_file_sink_creates_directory_and_file() {
        let temp_dir = TempDir::new().unwrap();
        let logs_dir = temp_dir.path().join("deep").join("logs");

        let sink = FileSink::create(&logs_dir).unwrap();

        assert!(logs_dir.is_dir());
        assert!(sink.path().is_file());
        assert!(is_log_file_name(
            sink.path().file_name().unwrap().to_str().unwrap()
        ));
    }

    #[test]
    fn test_file_sink_appends_plain_lines() {
        let temp_dir = TempDir::new().unwrap();
        let sink = FileSink::create(temp_dir.path()).unwrap();

        let record = Record::new(Severity::Warning, "mod", "main.rs:3", "careful");
        sink.emit(&record).unwrap();

        let content = fs::read_to_string(sink.path()).unwrap();
        assert_eq!(content, format!("{}\n", record.plain_line()));
        assert!(!content.contains('\x1b'));
    }

    #[test]
    fn test_console_sink_writes_colored_line() {
        colored::control::set_override(true);

        let buf = SharedBuf::default();
        let sink = ConsoleSink::with_writer(Box::new(buf.clone()));

        let record = Record::new(Severity::Error, "mod", "main.rs:3", "boom");
        sink.emit(&record).unwrap();

        let output = buf.contents();
        assert!(output.contains("\x1b[91mERROR\x1b[0m"));
        assert!(output.ends_with("mod.main.rs:3: boom\n"));
    }
}
