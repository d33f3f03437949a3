//! Junk-word classification for name components.
//!
//! A token is a plausible name component only if it is a run of Cyrillic
//! letters that is not a configured stop word, or a bare uppercase Cyrillic
//! initial. Everything else (digits, Latin, punctuation, filler) is junk.

use crate::config::StopWords;

/// Uppercase Cyrillic letter, including `Ё`.
pub(crate) fn is_upper_cyrillic(c: char) -> bool {
    matches!(c, 'А'..='Я' | 'Ё')
}

/// Lowercase Cyrillic letter, including `ё`.
pub(crate) fn is_lower_cyrillic(c: char) -> bool {
    matches!(c, 'а'..='я' | 'ё')
}

/// Classifies single tokens as noise or name components.
#[derive(Debug, Clone, Copy)]
pub struct JunkFilter<'a> {
    stop_words: &'a StopWords,
}

impl<'a> JunkFilter<'a> {
    /// Create a filter over a stop-set.
    #[must_use]
    pub fn new(stop_words: &'a StopWords) -> Self {
        Self { stop_words }
    }

    /// The stop-set this filter consults.
    #[must_use]
    pub fn stop_words(&self) -> &'a StopWords {
        self.stop_words
    }

    /// Whether `token` is not a plausible name component.
    #[must_use]
    pub fn is_junk(&self, token: &str) -> bool {
        let cleaned = token.trim_matches('.').trim();

        let mut chars = cleaned.chars();
        if let (Some(only), None) = (chars.next(), chars.next()) {
            return !is_upper_cyrillic(only);
        }

        let lowered = cleaned.to_lowercase();
        if self.stop_words.contains(&lowered) {
            return true;
        }
        if lowered.chars().any(|c| c.is_ascii_digit()) {
            return true;
        }
        lowered.is_empty() || !lowered.chars().all(is_lower_cyrillic)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn tokens_with_digits_are_junk(prefix in "[А-Яа-я]{0,6}", d in 0u8..10, suffix in "[а-я]{0,6}") {
            let sw = StopWords::empty();
            let token = format!("{prefix}{d}{suffix}");
            prop_assert!(JunkFilter::new(&sw).is_junk(&token));
        }

        #[test]
        fn latin_words_are_junk(word in "[A-Za-z]{2,12}") {
            let sw = StopWords::empty();
            prop_assert!(JunkFilter::new(&sw).is_junk(&word));
        }

        #[test]
        fn cyrillic_words_pass_without_stop_words(head in "[А-Я]", tail in "[а-я]{1,12}") {
            let sw = StopWords::empty();
            let word = format!("{head}{tail}");
            prop_assert!(!JunkFilter::new(&sw).is_junk(&word));
        }
    }
}
