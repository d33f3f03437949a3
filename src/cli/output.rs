//! Output formatting utilities for CLI commands

use std::io::{self, IsTerminal, Write};

use super::parser::OutputFormat;
use crate::output::rows_to_string;
use crate::OutputRow;

/// Wrap `text` in an ANSI color when stderr is a terminal.
pub fn color(code: &str, text: &str) -> String {
    if io::stderr().is_terminal() {
        format!("\x1b[{}m{}\x1b[0m", code, text)
    } else {
        text.to_string()
    }
}

/// Progress and timing messages. Shown with `-v`, hidden by default.
pub fn log_info(msg: &str) {
    log::info!("{}", msg);
}

/// Write output to file or stdout
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), String> {
    if let Some(path) = path {
        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write to {}: {}", path, e))?;
    } else {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(|e| format!("Failed to write to stdout: {}", e))?;
    }
    Ok(())
}

/// Render rows in the requested format.
pub fn format_rows(rows: &[OutputRow], format: OutputFormat) -> Result<String, String> {
    match format.as_rows_format() {
        Some(f) => rows_to_string(rows, f).map_err(|e| format!("Failed to serialize rows: {}", e)),
        None => Ok(format_human(rows)),
    }
}

/// One line per row: the name (or code), then the text it came from.
pub fn format_human(rows: &[OutputRow]) -> String {
    let width = rows.iter().map(|r| r.name.chars().count()).max().unwrap_or(0);
    let mut out = String::new();
    for row in rows {
        let name = if row.name.is_empty() { "-" } else { row.name.as_str() };
        let pad = width.saturating_sub(name.chars().count());
        out.push_str(&format!("{}{}  {}\n", name, " ".repeat(pad), row.text));
    }
    out
}
