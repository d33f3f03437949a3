//! Name phrases: two or three validated name components.

use crate::junk::{is_lower_cyrillic, is_upper_cyrillic, JunkFilter};
use serde::{Serialize, Serializer};
use std::fmt;

/// One whitespace-delimited component of a phrase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    raw: String,
}

impl Token {
    fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
        }
    }

    /// The token as it appeared in the text.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The token without trailing periods (`"И."` → `"И"`).
    #[must_use]
    pub fn trimmed(&self) -> &str {
        self.raw.trim_end_matches('.')
    }

    /// A capitalized word of Cyrillic letters only, at least two letters long.
    #[must_use]
    pub fn is_capitalized_word(&self) -> bool {
        let mut chars = self.raw.chars();
        match chars.next() {
            Some(first) if is_upper_cyrillic(first) => {
                let rest = chars.as_str();
                !rest.is_empty() && rest.chars().all(is_lower_cyrillic)
            }
            _ => false,
        }
    }
}

/// A candidate surname / given name / patronymic combination.
///
/// Always 2 or 3 tokens, none of them junk. Two phrases are equal when their
/// space-joined text is equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamePhrase {
    text: String,
    tokens: Vec<Token>,
}

impl NamePhrase {
    /// Validate a phrase and build it.
    ///
    /// Returns `None` unless the phrase has 2 or 3 whitespace-separated words
    /// and none of them is junk.
    #[must_use]
    pub fn parse(phrase: &str, filter: &JunkFilter<'_>) -> Option<Self> {
        if !is_valid_phrase(phrase, filter) {
            return None;
        }
        let tokens: Vec<Token> = phrase.split_whitespace().map(Token::new).collect();
        let text = tokens
            .iter()
            .map(Token::raw)
            .collect::<Vec<_>>()
            .join(" ");
        Some(Self { text, tokens })
    }

    /// Joined phrase text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Components in order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// 2 (partial) or 3 (full).
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.tokens.len()
    }

    /// Surname, name and patronymic.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.component_count() == 3
    }

    /// Three capitalized Cyrillic words with no initials or periods.
    #[must_use]
    pub fn is_strict_full(&self) -> bool {
        self.is_full() && self.tokens.iter().all(Token::is_capitalized_word)
    }

    /// Raw component texts.
    pub(crate) fn parts(&self) -> Vec<&str> {
        self.tokens.iter().map(Token::raw).collect()
    }
}

impl fmt::Display for NamePhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for NamePhrase {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl Serialize for NamePhrase {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

/// A phrase of 2–3 words, none of them junk.
#[must_use]
pub fn is_valid_phrase(phrase: &str, filter: &JunkFilter<'_>) -> bool {
    let words: Vec<&str> = phrase.split_whitespace().collect();
    if !(2..=3).contains(&words.len()) {
        return false;
    }
    !words.iter().any(|w| filter.is_junk(w))
}
