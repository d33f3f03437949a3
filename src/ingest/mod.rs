//! Batch ingestion: turning submitted records into texts.
//!
//! Records are tabular: each has named fields, and the text to analyse is the
//! `text` field if any record has one, otherwise the first field of the first
//! record. Non-string values are coerced to strings rather than rejected.
//!
//! Accepted shapes:
//!
//! | Format | Shape |
//! |--------|-------|
//! | JSON   | `[{"text": ...}, ...]`, `["...", ...]`, or columns `{"text": [...]}` |
//! | JSONL  | one object or string per line |
//! | CSV    | header row, one record per line |

use crate::{Error, Result};
use serde_json::{Map, Value};
use std::io::Read;
use std::str::FromStr;

/// Name of the preferred text field.
pub const TEXT_FIELD: &str = "text";

/// Input serialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputFormat {
    /// A JSON document.
    #[default]
    Json,
    /// Newline-delimited JSON.
    Jsonl,
    /// Comma-separated values with a header row.
    Csv,
}

impl InputFormat {
    /// Guess the format from a file extension.
    #[must_use]
    pub fn from_extension(path: &str) -> Option<Self> {
        let ext = path.rsplit('.').next()?.to_lowercase();
        match ext.as_str() {
            "json" => Some(InputFormat::Json),
            "jsonl" | "ndjson" => Some(InputFormat::Jsonl),
            "csv" => Some(InputFormat::Csv),
            _ => None,
        }
    }
}

impl FromStr for InputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(InputFormat::Json),
            "jsonl" | "ndjson" => Ok(InputFormat::Jsonl),
            "csv" => Ok(InputFormat::Csv),
            other => Err(Error::invalid_input(format!("unknown input format '{}'", other))),
        }
    }
}

/// String form of any JSON value: strings as-is, `null` as empty,
/// everything else as compact JSON.
#[must_use]
pub fn coerce(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Texts from `input` in the given format.
///
/// Fails with [`Error::InputEmpty`] when there are no records.
pub fn parse_texts(input: &str, format: InputFormat) -> Result<Vec<String>> {
    let texts = match format {
        InputFormat::Json => {
            let value: Value =
                serde_json::from_str(input).map_err(|e| Error::parse(format!("invalid JSON: {}", e)))?;
            texts_from_value(value)?
        }
        InputFormat::Jsonl => texts_from_jsonl(input)?,
        InputFormat::Csv => texts_from_csv(input.as_bytes())?,
    };
    if texts.is_empty() {
        return Err(Error::InputEmpty);
    }
    log::debug!("ingested {} records", texts.len());
    Ok(texts)
}

/// Read all of `reader` and parse it.
pub fn read_texts<R: Read>(mut reader: R, format: InputFormat) -> Result<Vec<String>> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_texts(&input, format)
}

/// Texts from an already-parsed JSON document.
///
/// An empty array, empty object or `null` yields no texts.
pub fn texts_from_value(value: Value) -> Result<Vec<String>> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => Ok(texts_from_records(&items)),
        Value::Object(columns) => texts_from_columns(columns),
        other => Err(Error::invalid_input(format!(
            "expected an array of records, got {}",
            json_kind(&other)
        ))),
    }
}

fn texts_from_jsonl(input: &str) -> Result<Vec<String>> {
    let mut items = Vec::new();
    for (line_num, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let value: Value = serde_json::from_str(line)
            .map_err(|e| Error::parse(format!("line {}: invalid JSON: {}", line_num + 1, e)))?;
        items.push(value);
    }
    Ok(texts_from_records(&items))
}

fn texts_from_csv<R: Read>(reader: R) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let column = headers.iter().position(|h| h == TEXT_FIELD).unwrap_or(0);

    let mut texts = Vec::new();
    for record in reader.records() {
        let record = record?;
        texts.push(record.get(column).unwrap_or_default().to_string());
    }
    Ok(texts)
}

/// Row-oriented records. Bare scalars are their own text.
fn texts_from_records(items: &[Value]) -> Vec<String> {
    let field = text_field(items);
    items
        .iter()
        .map(|item| match item {
            Value::Object(fields) => field
                .as_deref()
                .and_then(|f| fields.get(f))
                .map(coerce)
                .unwrap_or_default(),
            scalar => coerce(scalar),
        })
        .collect()
}

/// `text` if any record has it, else the first key of the first non-empty record.
fn text_field(items: &[Value]) -> Option<String> {
    let objects = || items.iter().filter_map(Value::as_object);
    if objects().any(|o| o.contains_key(TEXT_FIELD)) {
        return Some(TEXT_FIELD.to_string());
    }
    objects().find_map(|o| o.keys().next().cloned())
}

/// Column-oriented records: `{"text": ["a", "b"], "id": [1, 2]}`.
fn texts_from_columns(columns: Map<String, Value>) -> Result<Vec<String>> {
    let column = match columns.get(TEXT_FIELD) {
        Some(c) => c,
        None => match columns.values().next() {
            Some(c) => c,
            None => return Ok(Vec::new()),
        },
    };
    match column {
        Value::Array(values) => Ok(values.iter().map(coerce).collect()),
        Value::Object(by_index) => Ok(by_index.values().map(coerce).collect()),
        other => Err(Error::invalid_input(format!(
            "expected a column of values, got {}",
            json_kind(other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
