//! Log severities and records
//!
//! Defines the ordered severity scale and the record type that flows to the
//! installed sinks, along with the shared line rendering.

use chrono::{DateTime, Local};
use colored::{Color, Colorize};
use serde::{Deserialize, Serialize};

/// Timestamp format used on every rendered line
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Ordered log severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl Severity {
    /// Get the display label for this severity
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
        }
    }

    /// Resolve a severity from its name, case-insensitively
    ///
    /// Returns `None` for unrecognized names; callers decide whether that
    /// means a fallback or keeping the previous value.
    pub fn resolve(name: &str) -> Option<Severity> {
        match name.to_ascii_lowercase().as_str() {
            "debug" => Some(Severity::Debug),
            "info" => Some(Severity::Info),
            "warning" => Some(Severity::Warning),
            "error" => Some(Severity::Error),
            "critical" => Some(Severity::Critical),
            _ => None,
        }
    }

    /// Console color used for this severity's label
    pub fn color(&self) -> Color {
        match self {
            Severity::Critical | Severity::Error => Color::BrightRed,
            Severity::Warning => Color::BrightYellow,
            Severity::Info => Color::BrightGreen,
            Severity::Debug => Color::BrightBlue,
        }
    }
}

/// A single log record on its way to the sinks
#[derive(Debug, Clone)]
pub struct Record {
    /// Timestamp when the record was created
    pub timestamp: DateTime<Local>,
    /// Record severity
    pub severity: Severity,
    /// Name of the logger that produced the record
    pub logger: String,
    /// Call site, rendered as `file:line`
    pub call_site: String,
    /// Log message
    pub message: String,
}

impl Record {
    /// Create a new record stamped with the current local time
    pub fn new(
        severity: Severity,
        logger: impl Into<String>,
        call_site: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Local::now(),
            severity,
            logger: logger.into(),
            call_site: call_site.into(),
            message: message.into(),
        }
    }

    /// Render the record without color, as written to log files
    pub fn plain_line(&self) -> String {
        self.line_with_label(self.severity.as_str())
    }

    /// Render the record with the severity label colorized for the console
    pub fn console_line(&self) -> String {
        let label = self.severity.as_str().color(self.severity.color());
        self.line_with_label(&label.to_string())
    }

    fn line_with_label(&self, label: &str) -> String {
        format!(
            "{} [{}] {}.{}: {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            label,
            self.logger,
            self.call_site,
            self.message
        )
    }
}
