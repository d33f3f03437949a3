//! Collapsing partial name forms into full ones.
//!
//! A full name (surname, name, patronymic) is strictly more informative than
//! a two-word fragment sharing two of its components, so such fragments are
//! dropped:
//!
//! ```text
//! full:     Иванов  Иван  Иванович
//! partial:          Иван  Иванович    (name + patronymic)  → dropped
//! partial:  Иванов  Иван              (surname + name)     → dropped
//! partial:  Иванов        Иванович    (skips the middle)   → kept
//! partial:  Петров  Петр              (different person)   → kept
//! ```
//!
//! A fragment matching the head or tail of a full name is dropped even when
//! it could name a different person with the same name and patronymic.

use crate::phrase::NamePhrase;
use std::collections::HashSet;

/// Drop partial candidates subsumed by a full one.
///
/// Output keeps the first-seen order of `candidates` and removes exact
/// duplicates. Phrases that are neither full nor partial are dropped.
#[must_use]
pub fn reconcile(candidates: &[NamePhrase]) -> Vec<NamePhrase> {
    let full: Vec<Vec<&str>> = candidates
        .iter()
        .filter(|p| p.component_count() == 3)
        .map(NamePhrase::parts)
        .collect();

    let subsumed = |parts: &[&str]| {
        full.iter().any(|f| {
            let (surname, name, patronymic) = (f[0], f[1], f[2]);
            (parts[0] == name && parts[1] == patronymic) || (parts[0] == surname && parts[1] == name)
        })
    };

    let mut retained: HashSet<&str> = HashSet::new();
    for phrase in candidates {
        match phrase.component_count() {
            3 => {
                retained.insert(phrase.as_str());
            }
            2 if !subsumed(phrase.parts().as_slice()) => {
                retained.insert(phrase.as_str());
            }
            2 => log::debug!("dropping '{}': subsumed by a full name", phrase),
            _ => {}
        }
    }

    let mut seen = HashSet::new();
    candidates
        .iter()
        .filter(|p| retained.contains(p.as_str()) && seen.insert(p.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExtractorConfig;
    use crate::junk::JunkFilter;

    fn phrases(list: &[&str]) -> Vec<NamePhrase> {
        let sw = ExtractorConfig::default().stop_words();
        let filter = JunkFilter::new(&sw);
        list.iter()
            .map(|s| NamePhrase::parse(s, &filter).expect("valid phrase"))
            .collect()
    }

    fn run(list: &[&str]) -> Vec<String> {
        reconcile(&phrases(list)).iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_name_patronymic_subsumed() {
        assert_eq!(
            run(&["Иванов Иван Иванович", "Иван Иванович"]),
            vec!["Иванов Иван Иванович"]
        );
        // Order of the seed does not matter for what survives.
        assert_eq!(
            run(&["Иван Иванович", "Иванов Иван Иванович"]),
            vec!["Иванов Иван Иванович"]
        );
    }

    #[test]
    fn test_surname_name_subsumed() {
        assert_eq!(
            run(&["Иванов Иван", "Иванов Иван Иванович"]),
            vec!["Иванов Иван Иванович"]
        );
    }

    #[test]
    fn test_unrelated_partials_kept() {
        assert_eq!(
            run(&["Иванов Иван Иванович", "Петров Петр", "Иванов Иванович"]),
            vec!["Иванов Иван Иванович", "Петров Петр", "Иванов Иванович"]
        );
    }

    #[test]
    fn test_partials_without_full_kept() {
        assert_eq!(run(&["Иван Иванович", "Иванов Иван"]), vec!["Иван Иванович", "Иванов Иван"]);
    }

    #[test]
    fn test_duplicates_removed_first_wins() {
        assert_eq!(
            run(&["Петров Петр", "Иванов Иван Иванович", "Петров Петр"]),
            vec!["Петров Петр", "Иванов Иван Иванович"]
        );
    }

    #[test]
    fn test_two_full_names_both_kept() {
        assert_eq!(
            run(&["Иванов Иван Иванович", "Сидорова Анна Петровна", "Анна Петровна"]),
            vec!["Иванов Иван Иванович", "Сидорова Анна Петровна"]
        );
    }

    #[test]
    fn test_empty() {
        assert!(reconcile(&[]).is_empty());
    }
}
