//! CSV loading implementation.

use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{AuditError, AuditResult};
use crate::types::Row;

use super::observability::LoadStats;

/// Load a CSV file into an ordered list of [`Row`]s.
///
/// Rules:
///
/// - The first record is the header and names the columns.
/// - Records are matched to header names by position; short records leave the remaining
///   columns absent, surplus cells without a header are dropped.
/// - A header-only or zero-byte file yields an empty list.
/// - A path that does not exist yields [`AuditError::NotFound`].
pub fn load_rows_from_path(path: impl AsRef<Path>, delimiter: u8) -> AuditResult<Vec<Row>> {
    load_path_with_stats(path.as_ref(), delimiter).map(|(rows, _)| rows)
}

/// Load rows from an existing CSV reader.
///
/// The reader should be built with `has_headers(true)`; build it with `flexible(true)` to
/// tolerate ragged records.
pub fn load_rows_from_reader<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> AuditResult<Vec<Row>> {
    load_with_stats(rdr).map(|(rows, _)| rows)
}

/// Path-based load that also reports the shape of what was read.
pub(crate) fn load_path_with_stats(path: &Path, delimiter: u8) -> AuditResult<(Vec<Row>, LoadStats)> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => AuditError::NotFound {
            path: path.to_path_buf(),
        },
        _ => AuditError::Io(e),
    })?;

    // The reader owns the file handle; it is closed on every return path below.
    let mut rdr = reader_builder(delimiter).from_reader(file);
    load_with_stats(&mut rdr)
}

fn load_with_stats<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> AuditResult<(Vec<Row>, LoadStats)> {
    let headers = rdr.headers()?.clone();
    let mut stats = LoadStats {
        columns: headers.len(),
        ..Default::default()
    };

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        if record.len() < headers.len() {
            stats.short_records += 1;
        }
        let mut row = Row::new();
        for (column, value) in headers.iter().zip(record.iter()) {
            row.set(column, value);
        }
        rows.push(row);
    }

    stats.rows = rows.len();
    Ok((rows, stats))
}

/// Reader configuration shared by path-based loading and tests.
pub fn reader_builder(delimiter: u8) -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(true).flexible(true).delimiter(delimiter);
    builder
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_str(input: &str) -> Vec<Row> {
        let mut rdr = reader_builder(b',').from_reader(input.as_bytes());
        load_rows_from_reader(&mut rdr).unwrap()
    }

    #[test]
    fn maps_columns_by_header_name() {
        let rows = load_str("email,customer_id,name,city\na@b.com,1,Ada,London\n");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].customer_id.as_deref(), Some("1"));
        assert_eq!(rows[0].name.as_deref(), Some("Ada"));
        assert_eq!(rows[0].email.as_deref(), Some("a@b.com"));
        assert_eq!(rows[0].get("city"), Some("London"));
    }

    #[test]
    fn short_records_leave_columns_absent() {
        let rows = load_str("customer_id,name,email\n1,Ada\n2\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name.as_deref(), Some("Ada"));
        assert_eq!(rows[0].email, None);
        assert_eq!(rows[1].customer_id.as_deref(), Some("2"));
        assert_eq!(rows[1].name, None);
    }

    #[test]
    fn values_are_kept_untrimmed() {
        let rows = load_str("name,email\n  Ada ,\" a@b.com \"\n");
        assert_eq!(rows[0].name.as_deref(), Some("  Ada "));
        assert_eq!(rows[0].email.as_deref(), Some(" a@b.com "));
    }

    #[test]
    fn quoted_fields_may_contain_commas_and_newlines() {
        let rows = load_str("customer_id,name,email\n1,\"Lovelace, Ada\nCountess\",a@b.com\n");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name.as_deref(), Some("Lovelace, Ada\nCountess"));
    }

    #[test]
    fn empty_and_header_only_inputs_yield_no_rows() {
        assert!(load_str("").is_empty());
        assert!(load_str("customer_id,name,email\n").is_empty());
    }

    #[test]
    fn custom_delimiter_is_honored() {
        let mut rdr = reader_builder(b';').from_reader("name;email\nAda;a@b.com\n".as_bytes());
        let rows = load_rows_from_reader(&mut rdr).unwrap();
        assert_eq!(rows[0].email.as_deref(), Some("a@b.com"));
    }

    #[test]
    fn stats_count_columns_and_short_records() {
        let input = "customer_id,name,email\n1,Ada,a@b.com\n2,Bob\n3\n";
        let mut rdr = reader_builder(b',').from_reader(input.as_bytes());
        let (rows, stats) = load_with_stats(&mut rdr).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(
            stats,
            LoadStats {
                rows: 3,
                columns: 3,
                short_records: 2,
            }
        );
    }
}
