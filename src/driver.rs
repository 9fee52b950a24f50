//! Wires loading, analysis and reporting together for one run.

use std::io::Write;

use crate::config::AuditConfig;
use crate::error::{AuditError, AuditResult};
use crate::ingestion::load_customers;
use crate::processing::analyze;
use crate::report::write_report;
use crate::types::Summary;

/// How a run ended. All three are successful outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The input file does not exist; a one-line notice was written.
    NotFound,
    /// The input had no data rows; a one-line notice was written.
    Empty,
    /// The report for this summary was written.
    Reported(Summary),
}

/// Run one audit, writing all user-facing text to `out`.
///
/// A missing input file and an empty dataset are reported as text and are not errors. Only
/// failures while reading an existing file, or while writing to `out`, are returned as `Err`.
pub fn run<W: Write>(config: &AuditConfig, out: &mut W) -> AuditResult<Outcome> {
    let rows = match load_customers(&config.input_path, &config.load_options()) {
        Ok(rows) => rows,
        Err(AuditError::NotFound { path }) => {
            writeln!(out, "CSV file not found: {}", path.display())?;
            return Ok(Outcome::NotFound);
        }
        Err(e) => return Err(e),
    };

    if rows.is_empty() {
        writeln!(out, "No rows found in CSV file.")?;
        return Ok(Outcome::Empty);
    }

    let summary = analyze(&rows);
    write_report(&summary, out)?;
    out.flush()?;
    Ok(Outcome::Reported(summary))
}
