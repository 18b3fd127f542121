use std::io::Write;

use colored::Colorize;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Pretty JSON on stdout, one document per call.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Shows the error recorded on the calculator state after a failed fetch.
pub fn print_fetch_error(msg: &str) {
    eprintln!("    {} {}", "fetch failed:".red().bold(), msg);
}
