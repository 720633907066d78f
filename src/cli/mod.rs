//! Command-line surface and error presentation.
//!
//! Uses clap derive macros for argument definitions.

pub mod args;

use std::io::Write;

/// Print a top-level error to stderr.
pub fn print_error(err: &anyhow::Error) {
    let stderr = std::io::stderr();
    let _ = write_error(&mut stderr.lock(), err);
}

/// Render `Error: <context chain>` on one line.
///
/// Uses anyhow's alternate formatting so the whole context chain is shown.
fn write_error<W: Write>(out: &mut W, err: &anyhow::Error) -> std::io::Result<()> {
    use colored::Colorize;
    writeln!(out, "{} {err:#}", "Error:".red().bold())
}
