//! Pattern-based FIO detection.
//!
//! Recall-oriented: finds every name-shaped run of capitalized Cyrillic
//! words. It over-generates ("Звонил Петров П" is a match) and relies on
//! phrase validation downstream to narrow the output.
//!
//! Shapes covered:
//! - `Иванов Иван Иванович`, `Иванов Иван`
//! - `Иванов И. И.`, `Иванов И.И.`, `Иванов И И`

use crate::{Entity, EntityType};
use once_cell::sync::Lazy;
use regex::Regex;

// Surname, then either two (possibly abbreviated) capitalized words,
// or one to two full capitalized words.
static FIO: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"\b",
        r"[А-ЯЁ][а-яё]+",
        r"(?:\s+[А-ЯЁ][а-яё]*\.?\s*[А-ЯЁ][а-яё]*\.?|(?:\s+[А-ЯЁ][а-яё]+){1,2})",
        r"\b",
    ))
    .expect("FIO regex is invalid")
});

/// Finds name-shaped substrings with a positional character-class grammar.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternMatcher;

impl PatternMatcher {
    /// Create a new matcher.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Every non-overlapping match, left to right, as person spans.
    #[must_use]
    pub fn find_candidates(&self, text: &str) -> Vec<Entity> {
        FIO.find_iter(text)
            .map(|m| Entity::new(m.as_str(), EntityType::Person, m.start(), m.end()))
            .collect()
    }
}
