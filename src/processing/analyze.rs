//! Single-pass data-quality analysis over loaded [`Row`]s.

use crate::predicates::{is_missing, is_valid_email};
use crate::types::{Row, Summary};

/// Build a [`Summary`] by walking `rows` once, in order.
///
/// Per row:
///
/// - `total_rows` is incremented.
/// - a missing `name` increments `missing_name`.
/// - independently, a missing `email` increments `missing_email`; otherwise an email that fails
///   [`is_valid_email`] is counted as invalid and the row is recorded.
///
/// A row contributes to at most one of `missing_email` / `invalid_email`.
pub fn analyze(rows: &[Row]) -> Summary {
    rows.iter().fold(Summary::default(), |mut acc, row| {
        acc.total_rows += 1;

        if is_missing(row.name.as_deref()) {
            acc.missing_name += 1;
        }

        let email = row.email.as_deref();
        if is_missing(email) {
            acc.missing_email += 1;
        } else if !is_valid_email(email) {
            acc.invalid_rows.push(row.clone());
        }

        acc
    })
}
