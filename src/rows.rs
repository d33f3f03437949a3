//! Flattening records into `(text, name)` rows.

use crate::record::SubmissionRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One output row: an original text and one name or code found in it.
///
/// Serialized field names match the column headers consumers of the batch
/// output already expect.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutputRow {
    /// The original text.
    #[serde(rename = "Обращение")]
    pub text: String,
    /// A name or fallback code; empty when nothing was found.
    #[serde(rename = "ФИО или Номер")]
    pub name: String,
}

impl OutputRow {
    /// Create a row.
    pub fn new(text: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            name: name.into(),
        }
    }
}

/// One row per name or code, one empty row for records with nothing;
/// exact duplicate rows removed, first occurrence kept.
#[must_use]
pub fn expand(records: &[SubmissionRecord]) -> Vec<OutputRow> {
    let mut rows = Vec::new();
    for record in records {
        let before = rows.len();
        rows.extend(
            record
                .items()
                .into_iter()
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(|item| OutputRow::new(record.text.as_str(), item)),
        );
        if rows.len() == before {
            rows.push(OutputRow::new(record.text.as_str(), ""));
        }
    }
    dedup_rows(rows)
}

/// Remove exact duplicate rows, keeping the first occurrence in order.
#[must_use]
pub fn dedup_rows(rows: Vec<OutputRow>) -> Vec<OutputRow> {
    let mut seen = HashSet::new();
    rows.into_iter()
        .filter(|row| seen.insert((row.text.clone(), row.name.clone())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Resolution;

    fn codes(text: &str, items: &[&str]) -> SubmissionRecord {
        SubmissionRecord::new(text, Resolution::codes(items.iter().map(|s| s.to_string()).collect()))
    }

    #[test]
    fn test_one_row_per_item() {
        let rows = expand(&[codes("a", &["4001", "4002"])]);
        assert_eq!(rows, vec![OutputRow::new("a", "4001"), OutputRow::new("a", "4002")]);
    }

    #[test]
    fn test_empty_record_keeps_text() {
        let rows = expand(&[SubmissionRecord::new("ничего", Resolution::Empty)]);
        assert_eq!(rows, vec![OutputRow::new("ничего", "")]);
    }

    #[test]
    fn test_whitespace_items_trimmed_or_skipped() {
        let rows = expand(&[codes("a", &[" 4001 ", "  "])]);
        assert_eq!(rows, vec![OutputRow::new("a", "4001")]);

        let rows = expand(&[codes("b", &["  ", "\t"])]);
        assert_eq!(rows, vec![OutputRow::new("b", "")]);
    }

    #[test]
    fn test_duplicates_across_batch_removed() {
        let rows = expand(&[
            codes("a", &["4001"]),
            SubmissionRecord::new("пусто", Resolution::Empty),
            codes("a", &["4001", "4002"]),
            SubmissionRecord::new("пусто", Resolution::Empty),
        ]);
        assert_eq!(
            rows,
            vec![
                OutputRow::new("a", "4001"),
                OutputRow::new("пусто", ""),
                OutputRow::new("a", "4002"),
            ]
        );
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_string(&OutputRow::new("текст", "4521")).unwrap();
        assert_eq!(json, r#"{"Обращение":"текст","ФИО или Номер":"4521"}"#);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::record::Resolution;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn every_text_gets_max_one_or_items_rows(
            items in prop::collection::vec("[ 4][0-9 ]{0,4}", 0..5),
        ) {
            let record = SubmissionRecord::new("текст", Resolution::codes(items.clone()));
            let rows = expand(std::slice::from_ref(&record));

            let mut distinct: Vec<&str> = Vec::new();
            for item in items.iter().map(|s| s.trim()).filter(|s| !s.is_empty()) {
                if !distinct.contains(&item) {
                    distinct.push(item);
                }
            }
            prop_assert_eq!(rows.len(), distinct.len().max(1));
            prop_assert!(rows.iter().all(|r| r.text == "текст"));
        }

        #[test]
        fn empty_records_survive_dedup(n in 1usize..6) {
            let records: Vec<_> = (0..n)
                .map(|i| SubmissionRecord::new(format!("текст {i}"), Resolution::Empty))
                .collect();
            let rows = expand(&records);
            prop_assert_eq!(rows.len(), n);
        }
    }
}
