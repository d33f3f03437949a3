//! Per-text results.

use crate::phrase::NamePhrase;
use serde::Serialize;

/// What a text resolved to.
///
/// Codes are only looked up when no name survived. The recovery pass may
/// still find a `Surname I I` afterwards; it is reported after the codes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "items", rename_all = "lowercase")]
pub enum Resolution {
    /// Nothing found.
    #[default]
    Empty,
    /// Reconciled names, never empty.
    Names(Vec<NamePhrase>),
    /// Fallback codes, never empty.
    Codes(Vec<String>),
    /// Fallback codes followed by a name found on the recovery pass.
    Recovered {
        /// Fallback codes, never empty.
        codes: Vec<String>,
        /// The recovered `Surname I I`.
        name: NamePhrase,
    },
}

impl Resolution {
    /// Names if any, otherwise [`Resolution::Empty`].
    #[must_use]
    pub fn names(names: Vec<NamePhrase>) -> Self {
        if names.is_empty() {
            Resolution::Empty
        } else {
            Resolution::Names(names)
        }
    }

    /// Codes if any, otherwise [`Resolution::Empty`].
    #[must_use]
    pub fn codes(codes: Vec<String>) -> Self {
        if codes.is_empty() {
            Resolution::Empty
        } else {
            Resolution::Codes(codes)
        }
    }

    /// Result items as strings, in order.
    #[must_use]
    pub fn items(&self) -> Vec<&str> {
        match self {
            Resolution::Empty => Vec::new(),
            Resolution::Names(names) => names.iter().map(NamePhrase::as_str).collect(),
            Resolution::Codes(codes) => codes.iter().map(String::as_str).collect(),
            Resolution::Recovered { codes, name } => codes
                .iter()
                .map(String::as_str)
                .chain(std::iter::once(name.as_str()))
                .collect(),
        }
    }

    /// Name phrases, without any codes.
    #[must_use]
    pub fn name_phrases(&self) -> &[NamePhrase] {
        match self {
            Resolution::Names(names) => names,
            Resolution::Recovered { name, .. } => std::slice::from_ref(name),
            _ => &[],
        }
    }

    /// Whether nothing was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Resolution::Empty)
    }
}

/// One input text and what it resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionRecord {
    /// The original text, unchanged.
    pub text: String,
    /// Names, codes, both after recovery, or nothing.
    pub resolution: Resolution,
}

impl SubmissionRecord {
    /// Create a record.
    pub fn new(text: impl Into<String>, resolution: Resolution) -> Self {
        Self {
            text: text.into(),
            resolution,
        }
    }

    /// Result items as strings, in order.
    #[must_use]
    pub fn items(&self) -> Vec<&str> {
        self.resolution.items()
    }
}
