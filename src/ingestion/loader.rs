//! Path-based loading entrypoint.
//!
//! Most callers should use [`load_customers`], which loads a CSV file into an ordered list of
//! [`crate::types::Row`]s and reports the outcome to any configured [`LoadObserver`]s.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::AuditResult;
use crate::types::Row;

use super::csv;
use super::observability::{LoadContext, LoadEvent, LoadObserver, LoadSeverity};

/// Options controlling [`load_customers`].
///
/// Use [`Default`] for comma-delimited input with no observers.
#[derive(Clone)]
pub struct LoadOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Sinks that receive one [`LoadEvent`] per load.
    pub observers: Vec<Arc<dyn LoadObserver>>,
    /// Failures at or above this severity are flagged as alerts.
    pub alert_at_or_above: LoadSeverity,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("delimiter", &char::from(self.delimiter))
            .field("observers_len", &self.observers.len())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            observers: Vec::new(),
            alert_at_or_above: LoadSeverity::Critical,
        }
    }
}

/// Load customer rows from `path`.
///
/// Returns [`crate::AuditError::NotFound`] if the file does not exist, which callers can tell
/// apart from a successful load that produced no rows.
///
/// Every observer receives [`LoadEvent::Loaded`] with the row/column counts on success, or
/// [`LoadEvent::Failed`] with a computed severity on failure; `alert` is set when that severity
/// is >= `options.alert_at_or_above`.
///
/// ```no_run
/// use std::sync::Arc;
///
/// use customer_audit::ingestion::{load_customers, LoadOptions, StdErrObserver};
///
/// # fn main() -> Result<(), customer_audit::AuditError> {
/// let opts = LoadOptions {
///     observers: vec![Arc::new(StdErrObserver)],
///     ..Default::default()
/// };
/// let rows = load_customers("data/customers.csv", &opts)?;
/// println!("rows={}", rows.len());
/// # Ok(())
/// # }
/// ```
pub fn load_customers(path: impl AsRef<Path>, options: &LoadOptions) -> AuditResult<Vec<Row>> {
    let path = path.as_ref();
    let result = csv::load_path_with_stats(path, options.delimiter);

    if !options.observers.is_empty() {
        let ctx = LoadContext {
            path: path.to_path_buf(),
            delimiter: options.delimiter,
        };
        let event = match &result {
            Ok((_, stats)) => LoadEvent::Loaded { ctx: &ctx, stats: *stats },
            Err(error) => {
                let severity = LoadSeverity::for_error(error);
                LoadEvent::Failed {
                    ctx: &ctx,
                    severity,
                    error,
                    alert: severity >= options.alert_at_or_above,
                }
            }
        };
        for obs in &options.observers {
            obs.on_event(&event);
        }
    }

    result.map(|(rows, _)| rows)
}
