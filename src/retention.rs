//! Log file retention
//!
//! Handles cleanup of old log files based on age.

use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};

use anyhow::Result;

use crate::sink::is_log_file_name;

/// Default retention period in days
pub const DEFAULT_RETENTION_DAYS: u64 = 7;

/// Delete log files older than the default retention period
///
/// Returns the number of files deleted.
pub fn cleanup_old_logs(logs_dir: &Path) -> Result<usize> {
    cleanup_old_logs_with_retention(logs_dir, DEFAULT_RETENTION_DAYS)
}

/// Delete log files older than the given number of days
///
/// Only files matching the `log_*.txt` naming scheme are considered.
/// Returns the number of files deleted.
pub fn cleanup_old_logs_with_retention(logs_dir: &Path, retention_days: u64) -> Result<usize> {
    if !logs_dir.exists() {
        return Ok(0);
    }

    let retention = Duration::from_secs(retention_days * 24 * 60 * 60);
    let cutoff = SystemTime::now()
        .checked_sub(retention)
        .unwrap_or(SystemTime::UNIX_EPOCH);

    let mut deleted = 0;

    for entry in fs::read_dir(logs_dir)? {
        let entry = entry?;
        let path = entry.path();

        match path.file_name().and_then(|n| n.to_str()) {
            Some(name) if is_log_file_name(name) => {}
            _ => continue,
        }

        if let Ok(metadata) = entry.metadata() {
            if let Ok(modified) = metadata.modified() {
                if modified < cutoff && fs::remove_file(&path).is_ok() {
                    deleted += 1;
                }
            }
        }
    }

    Ok(deleted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_cleanup_empty_dir() {
        let temp_dir = TempDir::new().unwrap();
        let count = cleanup_old_logs(temp_dir.path()).unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_cleanup_nonexistent_dir() {
        let path = Path::new("/nonexistent/path/for/testing");
        let count = cleanup_old_logs(path).unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_cleanup_ignores_foreign_files() {
        let temp_dir = TempDir::new().unwrap();

        let other_file = temp_dir.path().join("notes.txt.bak");
        File::create(&other_file)
            .unwrap()
            .write_all(b"test")
            .unwrap();

        let wrong_prefix = temp_dir.path().join("trace_2026-01-01_00-00-00.txt");
        File::create(&wrong_prefix)
            .unwrap()
            .write_all(b"test")
            .unwrap();

        let count = cleanup_old_logs_with_retention(temp_dir.path(), 0).unwrap();
        assert_eq!(count, 0);

        assert!(other_file.exists());
        assert!(wrong_prefix.exists());
    }

    #[test]
    fn test_cleanup_keeps_recent_files() {
        let temp_dir = TempDir::new().unwrap();

        let log_file = temp_dir.path().join("log_2026-08-06_10-00-00.txt");
        File::create(&log_file)
            .unwrap()
            .write_all(b"recent log content")
            .unwrap();

        let count = cleanup_old_logs(temp_dir.path()).unwrap();
        assert_eq!(count, 0);

        assert!(log_file.exists());
    }

    #[test]
    fn test_cleanup_counts_deleted_files() {
        let temp_dir = TempDir::new().unwrap();

        let log_file = temp_dir.path().join("log_2026-08-06_10-00-00.txt");
        File::create(&log_file)
            .unwrap()
            .write_all(b"old log content")
            .unwrap();

        // Zero retention makes every existing file eligible
        let count = cleanup_old_logs_with_retention(temp_dir.path(), 0).unwrap();
        assert_eq!(count, 1);
        assert!(!log_file.exists());
    }
}
