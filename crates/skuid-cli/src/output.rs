//! Terminal output for command results.
//!
//! Records and JSON go to stdout, status lines to stderr.

use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use skuid_core::Record;

/// Report a file materialized by a retrieve.
pub fn wrote(path: &Path) {
    println!("{} {}", "wrote".green(), path.display());
}

/// One listing line: category, basename and body size.
pub fn record_line(category: &str, record: &Record) {
    println!(
        "{} {} {}",
        format!("{:<12}", category).cyan(),
        record.basename(),
        format!("({} bytes)", record.body.len()).dimmed()
    );
}

/// Closing status line.
pub fn done(msg: &str) {
    eprintln!("{} {}", "done".green().bold(), msg);
}

pub fn note(msg: &str) {
    eprintln!("{}", msg.dimmed());
}

/// Print `value` as a single JSON line, or indented when `pretty`.
pub fn json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{text}");
    Ok(())
}
