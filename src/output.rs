//! Batch output: serializing rows.

use crate::rows::OutputRow;
use crate::{Error, Result};
use std::io::Write;
use std::str::FromStr;

/// Row serialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON array of `{text, name}` objects.
    #[default]
    Json,
    /// One JSON object per line.
    Jsonl,
    /// Tab-separated, header row, tabs and newlines escaped.
    Tsv,
    /// Comma-separated, header row, RFC 4180 quoting.
    Csv,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            "tsv" => Ok(OutputFormat::Tsv),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(Error::invalid_input(format!("unknown output format '{}'", other))),
        }
    }
}

/// Column headers, in output order.
pub const HEADERS: [&str; 2] = ["Обращение", "ФИО или Номер"];

/// Write `rows` to `out`.
pub fn write_rows<W: Write>(rows: &[OutputRow], format: OutputFormat, mut out: W) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, rows)?;
            writeln!(out)?;
        }
        OutputFormat::Jsonl => {
            for row in rows {
                serde_json::to_writer(&mut out, row)?;
                writeln!(out)?;
            }
        }
        OutputFormat::Tsv => {
            writeln!(out, "{}", HEADERS.join("\t"))?;
            for row in rows {
                writeln!(out, "{}\t{}", escape_tsv(&row.text), escape_tsv(&row.name))?;
            }
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut out);
            writer.write_record(HEADERS)?;
            for row in rows {
                writer.write_record([row.text.as_str(), row.name.as_str()])?;
            }
            writer.flush()?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Render `rows` into a string.
pub fn rows_to_string(rows: &[OutputRow], format: OutputFormat) -> Result<String> {
    let mut buf = Vec::new();
    write_rows(rows, format, &mut buf)?;
    String::from_utf8(buf).map_err(|e| Error::parse(e.to_string()))
}

fn escape_tsv(field: &str) -> String {
    field
        .replace('\\', "\\\\")
        .replace('\t', "\\t")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}
