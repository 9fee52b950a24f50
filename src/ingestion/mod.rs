//! Loading entrypoints and implementations.
//!
//! Most callers should use [`load_customers`] (from [`loader`]) which:
//!
//! - reads a header-tagged CSV file into ordered [`crate::types::Row`]s
//! - reports a missing file as [`crate::AuditError::NotFound`]
//! - emits a [`LoadEvent`] to each configured [`LoadObserver`]
//!
//! Reader-level functions live under [`csv`].

pub mod csv;
pub mod loader;
pub mod observability;

pub use loader::{load_customers, LoadOptions};
pub use observability::{
    FileObserver, LoadContext, LoadEvent, LoadObserver, LoadSeverity, LoadStats, StdErrObserver,
};
