//! Second-chance search for `Surname I I`.
//!
//! Runs after reconciliation when no strict full name (three capitalized
//! words, no initials) was found. It looks for the first surname followed by
//! two bare initials and adds it to the record.

use crate::junk::JunkFilter;
use crate::phrase::NamePhrase;
use crate::record::{Resolution, SubmissionRecord};
use once_cell::sync::Lazy;
use regex::Regex;

static SURNAME_INITIALS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b([А-ЯЁ][а-яё]+)\s+([А-ЯЁ])\s+([А-ЯЁ])\b")
        .expect("SURNAME_INITIALS regex is invalid")
});

/// Whether `resolution` already holds a name like `Иванов Иван Иванович`.
#[must_use]
pub fn has_strict_full_name(resolution: &Resolution) -> bool {
    resolution.name_phrases().iter().any(NamePhrase::is_strict_full)
}

/// The first valid `Surname I I` in `text`, if any.
#[must_use]
pub fn find_surname_initials(text: &str, filter: &JunkFilter<'_>) -> Option<NamePhrase> {
    let caps = SURNAME_INITIALS.captures(text)?;
    let joined = format!("{} {} {}", &caps[1], &caps[2], &caps[3]);
    NamePhrase::parse(&joined, filter)
}

/// Return `record`, augmented with a `Surname I I` name when it lacks a
/// strict full name.
///
/// A record holding fallback codes keeps them; the recovered name is listed
/// after the codes.
#[must_use]
pub fn recover(record: SubmissionRecord, filter: &JunkFilter<'_>) -> SubmissionRecord {
    if has_strict_full_name(&record.resolution) {
        return record;
    }
    let Some(found) = find_surname_initials(&record.text, filter) else {
        return record;
    };

    let resolution = match record.resolution {
        Resolution::Names(mut names) => {
            if !names.contains(&found) {
                log::debug!("recovered '{}'", found);
                names.push(found);
            }
            Resolution::Names(names)
        }
        Resolution::Codes(codes) => {
            log::debug!("recovered '{}' after codes {:?}", found, codes);
            Resolution::Recovered { codes, name: found }
        }
        recovered @ Resolution::Recovered { .. } => recovered,
        Resolution::Empty => {
            log::debug!("recovered '{}'", found);
            Resolution::Names(vec![found])
        }
    };

    SubmissionRecord {
        text: record.text,
        resolution,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExtractorConfig;

    fn run(record: SubmissionRecord) -> SubmissionRecord {
        let sw = ExtractorConfig::default().stop_words();
        recover(record, &JunkFilter::new(&sw))
    }

    fn names(list: &[&str]) -> Resolution {
        let sw = ExtractorConfig::default().stop_words();
        let filter = JunkFilter::new(&sw);
        Resolution::names(
            list.iter()
                .map(|s| NamePhrase::parse(s, &filter).expect("valid phrase"))
                .collect(),
        )
    }

    #[test]
    fn test_empty_record_gains_name() {
        let rec = SubmissionRecord::new("звонил клиент Петров П П насчет доставки", Resolution::Empty);
        assert_eq!(run(rec).items(), vec!["Петров П П"]);
    }

    #[test]
    fn test_appends_to_non_strict_names() {
        let rec = SubmissionRecord::new("Звонил Петров П П", names(&["Звонил Петров П"]));
        assert_eq!(run(rec).items(), vec!["Звонил Петров П", "Петров П П"]);
    }

    #[test]
    fn test_no_duplicate_append() {
        let rec = SubmissionRecord::new("клиент Петров П П", names(&["Петров П П"]));
        assert_eq!(run(rec).items(), vec!["Петров П П"]);
    }

    #[test]
    fn test_strict_full_name_skips_search() {
        let text = "Иванов Иван Иванович и Петров П П";
        let rec = SubmissionRecord::new(text, names(&["Иванов Иван Иванович"]));
        assert_eq!(run(rec).items(), vec!["Иванов Иван Иванович"]);
    }

    #[test]
    fn test_recovered_name_appended_after_codes() {
        let text = "Здравствуйте Петров П П, код 4521";
        let rec = SubmissionRecord::new(text, Resolution::codes(vec!["4521".into()]));
        let out = run(rec);
        assert_eq!(out.items(), vec!["4521", "Петров П П"]);
        assert_eq!(out.resolution.name_phrases(), names(&["Петров П П"]).name_phrases());
    }

    #[test]
    fn test_recovery_runs_once() {
        let once = run(SubmissionRecord::new(
            "Здравствуйте Петров П П, код 4521",
            Resolution::codes(vec!["4521".into()]),
        ));
        assert_eq!(run(once.clone()), once);
    }

    #[test]
    fn test_only_first_occurrence() {
        let rec = SubmissionRecord::new("Петров П П и Сидоров С С", Resolution::Empty);
        assert_eq!(run(rec).items(), vec!["Петров П П"]);
    }

    #[test]
    fn test_periods_and_lowercase_initials_not_recovered() {
        for text in ["Петров П. П.", "Петров п п", "Петров ПП"] {
            let rec = SubmissionRecord::new(text, Resolution::Empty);
            assert!(run(rec).resolution.is_empty(), "{text}");
        }
    }

    #[test]
    fn test_junk_surname_rejected() {
        let rec = SubmissionRecord::new("Оператор П П", Resolution::Empty);
        assert!(run(rec).resolution.is_empty());
    }
}
