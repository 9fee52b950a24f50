//! In-memory analysis of loaded rows.
//!
//! The processing layer operates on the [`crate::types::Row`]s produced by ingestion and is
//! purely in-memory.
//!
//! ## Example
//!
//! ```rust
//! use customer_audit::processing::analyze;
//! use customer_audit::types::Row;
//!
//! let rows = vec![
//!     Row::new().with_customer_id("1").with_name("Alice").with_email("a@b.com"),
//!     Row::new().with_customer_id("2").with_name("").with_email("bad"),
//!     Row::new().with_customer_id("3").with_name("Bob").with_email(""),
//! ];
//!
//! let summary = analyze(&rows);
//! assert_eq!(summary.total_rows(), 3);
//! assert_eq!(summary.missing_name(), 1);
//! assert_eq!(summary.missing_email(), 1);
//! assert_eq!(summary.invalid_email(), 1);
//! ```

pub mod analyze;

pub use analyze::analyze;
