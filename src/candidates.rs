//! Candidate extraction: tagger spans ∪ pattern matches.

use crate::backends::PatternMatcher;
use crate::junk::JunkFilter;
use crate::phrase::NamePhrase;
use crate::Entity;
use std::collections::HashSet;

/// Duplicate-free candidate phrases for one text, in discovery order.
///
/// Discovery order is stable (tagger spans first, then pattern matches) so
/// reconciliation downstream is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    phrases: Vec<NamePhrase>,
    seen: HashSet<String>,
}

impl CandidateSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a phrase; returns `false` if an equal phrase is already present.
    pub fn insert(&mut self, phrase: NamePhrase) -> bool {
        if !self.seen.insert(phrase.as_str().to_string()) {
            return false;
        }
        self.phrases.push(phrase);
        true
    }

    /// Whether an equal phrase is present.
    #[must_use]
    pub fn contains(&self, phrase: &str) -> bool {
        self.seen.contains(phrase)
    }

    /// Phrases in discovery order.
    #[must_use]
    pub fn as_slice(&self) -> &[NamePhrase] {
        &self.phrases
    }

    /// Number of phrases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

impl IntoIterator for CandidateSet {
    type Item = NamePhrase;
    type IntoIter = std::vec::IntoIter<NamePhrase>;

    fn into_iter(self) -> Self::IntoIter {
        self.phrases.into_iter()
    }
}

/// Merges tagger output with pattern matches into a [`CandidateSet`].
#[derive(Debug, Clone, Copy)]
pub struct CandidateExtractor<'a> {
    filter: JunkFilter<'a>,
    matcher: PatternMatcher,
}

impl<'a> CandidateExtractor<'a> {
    /// Create an extractor validating phrases with `filter`.
    #[must_use]
    pub fn new(filter: JunkFilter<'a>) -> Self {
        Self {
            filter,
            matcher: PatternMatcher::new(),
        }
    }

    /// Valid person spans, then valid pattern matches, deduplicated by text.
    ///
    /// Spans not typed as persons are ignored.
    #[must_use]
    pub fn extract(&self, text: &str, spans: &[Entity]) -> CandidateSet {
        let mut set = CandidateSet::new();

        let from_tagger = spans.iter().filter(|s| s.is_person());
        let from_pattern = self.matcher.find_candidates(text);

        for span in from_tagger.chain(from_pattern.iter()) {
            if let Some(phrase) = NamePhrase::parse(&span.text, &self.filter) {
                set.insert(phrase);
            }
        }

        log::debug!(
            "{} person spans, {} pattern matches -> {} candidates",
            spans.iter().filter(|s| s.is_person()).count(),
            from_pattern.len(),
            set.len()
        );
        set
    }
}
