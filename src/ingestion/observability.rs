//! Load events and the sinks that record them.
//!
//! [`super::load_customers`] emits exactly one [`LoadEvent`] per call to every configured
//! [`LoadObserver`]. Both built-in sinks share the event's `Display` form, so stderr and the
//! log file read the same.

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::AuditError;

/// How serious a failed load is.
///
/// A missing input is an expected outcome of a run, so it ranks below data and I/O failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LoadSeverity {
    /// The input file does not exist.
    Warning,
    /// The file was readable but its contents were not (bad UTF-8, bad config).
    Error,
    /// I/O failed while opening or reading the file.
    Critical,
}

impl LoadSeverity {
    /// Classify a loader error.
    pub fn for_error(e: &AuditError) -> Self {
        match e {
            AuditError::NotFound { .. } => Self::Warning,
            AuditError::Io(_) => Self::Critical,
            AuditError::Csv(err) => match err.kind() {
                ::csv::ErrorKind::Io(_) => Self::Critical,
                _ => Self::Error,
            },
            AuditError::InvalidConfig { .. } => Self::Error,
        }
    }
}

/// Which file was loaded and how.
#[derive(Debug, Clone)]
pub struct LoadContext {
    pub path: PathBuf,
    pub delimiter: u8,
}

/// Shape of a successful load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Data rows read (header excluded).
    pub rows: usize,
    /// Columns named by the header.
    pub columns: usize,
    /// Records with fewer cells than the header; their trailing columns count as missing.
    pub short_records: usize,
}

/// Outcome of one load.
#[derive(Debug)]
pub enum LoadEvent<'a> {
    Loaded {
        ctx: &'a LoadContext,
        stats: LoadStats,
    },
    Failed {
        ctx: &'a LoadContext,
        severity: LoadSeverity,
        error: &'a AuditError,
        /// Severity met the configured alert threshold.
        alert: bool,
    },
}

impl fmt::Display for LoadEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadEvent::Loaded { ctx, stats } => write!(
                f,
                "loaded path={} delimiter={:?} rows={} columns={} short_records={}",
                ctx.path.display(),
                char::from(ctx.delimiter),
                stats.rows,
                stats.columns,
                stats.short_records
            ),
            LoadEvent::Failed {
                ctx,
                severity,
                error,
                alert,
            } => {
                if *alert {
                    write!(f, "ALERT ")?;
                }
                write!(
                    f,
                    "failed severity={:?} path={} delimiter={:?} err={}",
                    severity,
                    ctx.path.display(),
                    char::from(ctx.delimiter),
                    error
                )
            }
        }
    }
}

/// Observer hook for load events.
pub trait LoadObserver: Send + Sync {
    fn on_event(&self, event: &LoadEvent<'_>);
}

/// Logs load events to stderr, keeping stdout free for the report.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl LoadObserver for StdErrObserver {
    fn on_event(&self, event: &LoadEvent<'_>) {
        eprintln!("[customer-audit] {event}");
    }
}

/// Appends timestamped load events to a log file.
///
/// Writes are best-effort; a log file that cannot be opened is skipped silently.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }
}

impl LoadObserver for FileObserver {
    fn on_event(&self, event: &LoadEvent<'_>) {
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{ts} {event}");
        }
    }
}
