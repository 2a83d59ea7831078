//! Named logger handles

use std::fmt;
use std::panic::Location;
use std::path::Path;
use std::sync::Arc;

use crate::manager::Shared;
use crate::record::{Record, Severity};

/// A named handle for emitting log records
///
/// Handles are cheap to clone and stay valid across reconfiguration; every
/// call observes the currently installed sinks and severity filter.
#[derive(Clone)]
pub struct Logger {
    name: String,
    shared: Arc<Shared>,
}

impl Logger {
    pub(crate) fn new(name: String, shared: Arc<Shared>) -> Self {
        Self { name, shared }
    }

    /// Name this handle is scoped to
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Emit a record at the given severity
    ///
    /// Records below the minimum severity are dropped before rendering.
    /// Sink write failures are swallowed; logging never fails the caller.
    #[track_caller]
    pub fn log(&self, severity: Severity, message: impl fmt::Display) {
        let caller = Location::caller();

        if let Ok(inner) = self.shared.inner.read() {
            if severity < inner.min_severity {
                return;
            }

            let call_site = format!("{}:{}", short_file(caller.file()), caller.line());
            let record = Record::new(severity, self.name.clone(), call_site, message.to_string());

            for sink in &inner.sinks {
                let _ = sink.emit(&record);
            }
        }
    }

    /// Emit a record at `DEBUG` severity
    #[track_caller]
    pub fn debug(&self, message: impl fmt::Display) {
        self.log(Severity::Debug, message)
    }

    /// Emit a record at `INFO` severity
    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) {
        self.log(Severity::Info, message)
    }

    /// Emit a record at `WARNING` severity
    #[track_caller]
    pub fn warning(&self, message: impl fmt::Display) {
        self.log(Severity::Warning, message)
    }

    /// Emit a record at `ERROR` severity
    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) {
        self.log(Severity::Error, message)
    }

    /// Emit a record at `CRITICAL` severity
    #[track_caller]
    pub fn critical(&self, message: impl fmt::Display) {
        self.log(Severity::Critical, message)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").field("name", &self.name).finish()
    }
}

/// Strip the directory part from a source file path
fn short_file(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(path)
}
