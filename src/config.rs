//! Run configuration.
//!
//! [`AuditConfig`] is the only configuration the driver sees. The binary builds it from
//! [`CliArgs`]; library callers and tests construct it directly.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use crate::error::{AuditError, AuditResult};
use crate::ingestion::{FileObserver, LoadObserver, LoadOptions, LoadSeverity, StdErrObserver};

/// Input path used when nothing else is configured.
pub const DEFAULT_INPUT_PATH: &str = "data/customers.csv";

/// Environment variable that overrides [`DEFAULT_INPUT_PATH`].
pub const INPUT_PATH_ENV: &str = "CUSTOMER_AUDIT_CSV";

/// Everything a single audit run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditConfig {
    /// CSV file to audit.
    pub input_path: PathBuf,
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Log load events to stderr.
    pub verbose: bool,
    /// Append load events to this file.
    pub log_file: Option<PathBuf>,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            delimiter: b',',
            verbose: false,
            log_file: None,
        }
    }
}

impl AuditConfig {
    /// Config for `path` with every other setting at its default.
    pub fn for_path(path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: path.into(),
            ..Default::default()
        }
    }

    /// Loader options matching this config, with observers attached as requested.
    pub fn load_options(&self) -> LoadOptions {
        let mut observers: Vec<Arc<dyn LoadObserver>> = Vec::new();
        if self.verbose {
            observers.push(Arc::new(StdErrObserver));
        }
        if let Some(path) = &self.log_file {
            observers.push(Arc::new(FileObserver::new(path)));
        }

        LoadOptions {
            delimiter: self.delimiter,
            observers,
            alert_at_or_above: LoadSeverity::Critical,
        }
    }
}

/// Command-line arguments for the `customer-audit` binary.
#[derive(Debug, Parser)]
#[command(name = "customer-audit")]
#[command(version)]
#[command(about = "Audit a customer CSV for missing names and missing or malformed emails", long_about = None)]
pub struct CliArgs {
    /// CSV file to audit
    #[arg(value_name = "PATH", env = INPUT_PATH_ENV, default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,

    /// Field delimiter (a single ASCII character)
    #[arg(long, short = 'd', default_value_t = ',')]
    pub delimiter: char,

    /// Log load events to stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Append load events to this file
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl TryFrom<CliArgs> for AuditConfig {
    type Error = AuditError;

    fn try_from(args: CliArgs) -> AuditResult<Self> {
        Ok(Self {
            input_path: args.input,
            delimiter: delimiter_byte(args.delimiter)?,
            verbose: args.verbose,
            log_file: args.log_file,
        })
    }
}

fn delimiter_byte(c: char) -> AuditResult<u8> {
    if c.is_ascii() && c != '"' && c != '\n' && c != '\r' {
        Ok(c as u8)
    } else {
        Err(AuditError::InvalidConfig {
            message: format!("delimiter must be a single ASCII character other than a quote or newline, got {c:?}"),
        })
    }
}
