//! `customer-audit` runs a one-pass data-quality audit over a customer CSV file.
//!
//! The pipeline is linear: load rows, check `name` and `email` on each row, aggregate counts,
//! print a report. The primary entrypoint is [`driver::run`], which takes an explicit
//! [`config::AuditConfig`] and writes the report to any [`std::io::Write`].
//!
//! ## What gets checked
//!
//! - **Missing name**: the `name` column is absent or blank.
//! - **Missing email**: the `email` column is absent or blank.
//! - **Invalid email**: the `email` is present but fails a simple shape check (see
//!   [`predicates::is_valid_email`]). Missing and invalid are mutually exclusive per row.
//!
//! Ragged rows and absent columns are tolerated: a cell that is not there counts as missing.
//!
//! ## Quick example: audit a file
//!
//! ```no_run
//! use customer_audit::config::AuditConfig;
//! use customer_audit::driver::{run, Outcome};
//!
//! # fn main() -> Result<(), customer_audit::AuditError> {
//! let cfg = AuditConfig::for_path("data/customers.csv");
//! let outcome = run(&cfg, &mut std::io::stdout())?;
//! if let Outcome::Reported(summary) = outcome {
//!     eprintln!("invalid={}", summary.invalid_email());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Using the stages directly
//!
//! ```rust
//! use customer_audit::ingestion::csv::{load_rows_from_reader, reader_builder};
//! use customer_audit::processing::analyze;
//! use customer_audit::report::render_report;
//!
//! let input = "customer_id,name,email\n1,Alice,a@b.com\n2,,bad\n3,Bob,\n";
//! let mut rdr = reader_builder(b',').from_reader(input.as_bytes());
//! let rows = load_rows_from_reader(&mut rdr).unwrap();
//!
//! let summary = analyze(&rows);
//! assert_eq!(summary.invalid_email(), 1);
//! assert!(render_report(&summary).contains("customer_id='2', email='bad'"));
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: CSV loading and load observers
//! - [`predicates`]: field checks
//! - [`processing`]: the single-pass analyzer
//! - [`report`]: text rendering
//! - [`config`]: run configuration and CLI arguments
//! - [`driver`]: end-to-end orchestration
//! - [`types`]: row and summary types
//! - [`error`]: the crate error type

pub mod config;
pub mod driver;
pub mod error;
pub mod ingestion;
pub mod predicates;
pub mod processing;
pub mod report;
pub mod types;

pub use error::{AuditError, AuditResult};
