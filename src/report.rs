//! Human-readable rendering of a [`Summary`].

use std::fmt::Write as _;
use std::io::{self, Write};

use crate::types::{Row, Summary};

/// Render `summary` as report text.
///
/// Output is deterministic: a title, the four counters, then either the offending rows
/// (`customer_id` and `email`, trimmed and quoted) or a line saying none were found.
pub fn render_report(summary: &Summary) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_report_fmt(summary, &mut out);
    out
}

/// Write the rendered report to `w`.
pub fn write_report<W: Write>(summary: &Summary, w: &mut W) -> io::Result<()> {
    w.write_all(render_report(summary).as_bytes())
}

fn write_report_fmt(summary: &Summary, out: &mut String) -> std::fmt::Result {
    writeln!(out, "=== CSV Data Quality Report ===")?;
    writeln!(out)?;
    writeln!(out, "Total rows        : {}", summary.total_rows())?;
    writeln!(out, "Missing 'name'    : {}", summary.missing_name())?;
    writeln!(out, "Missing 'email'   : {}", summary.missing_email())?;
    writeln!(out, "Invalid 'email'   : {}", summary.invalid_email())?;
    writeln!(out)?;

    if summary.invalid_email_rows().is_empty() {
        writeln!(out, "No invalid email addresses found.")?;
    } else {
        writeln!(out, "Rows with invalid email:")?;
        for row in summary.invalid_email_rows() {
            writeln!(out, "  - {}", describe_row(row))?;
        }
    }

    writeln!(out)
}

fn describe_row(row: &Row) -> String {
    let cid = row.customer_id.as_deref().unwrap_or("").trim();
    let email = row.email.as_deref().unwrap_or("").trim();
    format!("customer_id={}, email={}", quote(cid), quote(email))
}

/// Single-quoted literal with backslash escapes for quotes, backslashes and control chars.
///
/// The quote character is always `'`, even when the value contains one (`o'neil` renders as
/// `'o\'neil'`).
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}
