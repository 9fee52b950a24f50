use std::io;
use std::process::ExitCode;

use clap::Parser;

use customer_audit::config::{AuditConfig, CliArgs};
use customer_audit::{driver, AuditResult};

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> AuditResult<()> {
    let config = AuditConfig::try_from(CliArgs::parse())?;
    let stdout = io::stdout();
    driver::run(&config, &mut stdout.lock())?;
    Ok(())
}
