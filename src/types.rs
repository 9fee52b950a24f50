//! Core data model: loaded [`Row`]s and the aggregate [`Summary`].

use std::collections::BTreeMap;

/// Column holding the customer identifier.
pub const CUSTOMER_ID: &str = "customer_id";
/// Column holding the customer name.
pub const NAME: &str = "name";
/// Column holding the customer email.
pub const EMAIL: &str = "email";

/// A single customer record, keyed by the header-declared column names.
///
/// Known columns get their own fields; `None` means the column was absent for this record
/// (missing from the header, or the record was too short). Values are kept exactly as read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub customer_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    /// Any other columns, by name.
    pub extra: BTreeMap<String, String>,
}

impl Row {
    /// Create an empty row (all columns absent).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for `customer_id`.
    pub fn with_customer_id(mut self, value: impl Into<String>) -> Self {
        self.customer_id = Some(value.into());
        self
    }

    /// Builder-style setter for `name`.
    pub fn with_name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    /// Builder-style setter for `email`.
    pub fn with_email(mut self, value: impl Into<String>) -> Self {
        self.email = Some(value.into());
        self
    }

    /// Store `value` under `column`, routing known column names to their fields.
    pub fn set(&mut self, column: &str, value: impl Into<String>) {
        let value = value.into();
        match column {
            CUSTOMER_ID => self.customer_id = Some(value),
            NAME => self.name = Some(value),
            EMAIL => self.email = Some(value),
            _ => {
                self.extra.insert(column.to_owned(), value);
            }
        }
    }

    /// Look up a column by name.
    pub fn get(&self, column: &str) -> Option<&str> {
        match column {
            CUSTOMER_ID => self.customer_id.as_deref(),
            NAME => self.name.as_deref(),
            EMAIL => self.email.as_deref(),
            _ => self.extra.get(column).map(String::as_str),
        }
    }
}

/// Aggregate data-quality result over one sequence of rows.
///
/// Built by [`crate::processing::analyze`]; read-only afterwards.
/// `invalid_email_rows().len() == invalid_email()` always holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub(crate) total_rows: usize,
    pub(crate) missing_name: usize,
    pub(crate) missing_email: usize,
    pub(crate) invalid_rows: Vec<Row>,
}

impl Summary {
    /// Number of rows processed.
    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    /// Rows whose `name` is absent or blank.
    pub fn missing_name(&self) -> usize {
        self.missing_name
    }

    /// Rows whose `email` is absent or blank.
    pub fn missing_email(&self) -> usize {
        self.missing_email
    }

    /// Rows whose `email` is present but not shape-valid.
    pub fn invalid_email(&self) -> usize {
        self.invalid_rows.len()
    }

    /// The rows counted by [`Self::invalid_email`], in input order.
    pub fn invalid_email_rows(&self) -> &[Row] {
        &self.invalid_rows
    }
}
