//! # fio-extract
//!
//! Full-name (FIO: surname, given name, patronymic) extraction for Russian
//! customer-service text.
//!
//! - **Detection**: an injected person tagger plus a Cyrillic name pattern
//! - **Validation**: junk-word filtering with a configurable stop-set
//! - **Reconciliation**: partial forms dropped when a full name covers them
//! - **Fallback**: `4xxx` codes when no name survives, `Surname I I` recovery
//! - **Batch I/O**: JSON / JSONL / CSV in, JSON / JSONL / TSV / CSV rows out
//!
//! ## Quick Start
//!
//! ```rust
//! use fio_extract::{ExtractorConfig, Pipeline};
//!
//! let pipeline = Pipeline::builder().config(ExtractorConfig::default()).build();
//! let rows = pipeline.run(&["Иванов Иван Иванович обратился по вопросу"]).unwrap();
//!
//! assert_eq!(rows.len(), 1);
//! assert_eq!(rows[0].name, "Иванов Иван Иванович");
//! ```
//!
//! ## Plugging in a tagger
//!
//! Statistical taggers live outside this crate. Anything that can return
//! person spans for a text implements [`PersonTagger`]:
//!
//! ```rust
//! use fio_extract::{Entity, PersonTagger, Pipeline, Result};
//! use std::sync::Arc;
//!
//! struct Remote;
//!
//! impl PersonTagger for Remote {
//!     fn tag(&self, text: &str) -> Result<Vec<Entity>> {
//!         Ok(vec![Entity::person_in(text, "Анна Сергеевна")])
//!     }
//! }
//!
//! let pipeline = Pipeline::builder().tagger(Arc::new(Remote)).build();
//! let rows = pipeline.run(&["звонила Анна Сергеевна"]).unwrap();
//! assert_eq!(rows[0].name, "Анна Сергеевна");
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod backends;
pub mod candidates;
pub mod config;
mod entity;
mod error;
pub mod fallback;
pub mod ingest;
pub mod junk;
pub mod output;
pub mod phrase;
pub mod pipeline;
pub mod reconcile;
pub mod record;
pub mod recovery;
pub mod rows;

#[cfg(feature = "cli")]
pub mod cli;

use std::collections::{HashMap, HashSet};
use std::time::Duration;

// Re-exports
pub use backends::{PatternMatcher, TimeoutTagger};
pub use candidates::{CandidateExtractor, CandidateSet};
pub use config::{ExtractorConfig, FailurePolicy, StopWords, DEFAULT_STOP_WORDS};
pub use entity::{Entity, EntityType};
pub use error::{Error, Result};
pub use ingest::InputFormat;
pub use junk::JunkFilter;
pub use output::OutputFormat;
pub use phrase::{is_valid_phrase, NamePhrase, Token};
pub use pipeline::{Pipeline, PipelineBuilder};
pub use reconcile::reconcile;
pub use record::{Resolution, SubmissionRecord};
pub use rows::{expand, OutputRow};

/// Source of person spans for a text.
///
/// Implementations are typically heavyweight models loaded once and shared
/// across threads, so the trait requires `Send + Sync` and takes `&self`.
/// Spans of any type may be returned; only [`EntityType::Person`] spans are
/// used.
pub trait PersonTagger: Send + Sync {
    /// Tag `text`, returning typed spans.
    fn tag(&self, text: &str) -> Result<Vec<Entity>>;

    /// Tagger name for logs.
    fn name(&self) -> &'static str {
        "unknown"
    }

    /// Whether the tagger is loaded and ready.
    fn is_available(&self) -> bool {
        true
    }
}

/// A tagger that never finds anything; leaves detection to the pattern.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTagger;

impl PersonTagger for NullTagger {
    fn tag(&self, _text: &str) -> Result<Vec<Entity>> {
        Ok(Vec::new())
    }

    fn name(&self) -> &'static str {
        "null"
    }
}

/// A canned tagger for tests.
///
/// ```rust
/// use fio_extract::{MockTagger, PersonTagger};
///
/// let mock = MockTagger::new("test-mock")
///     .with_spans("пишет Анна Сергеевна", &["Анна Сергеевна"]);
///
/// let spans = mock.tag("пишет Анна Сергеевна").unwrap();
/// assert_eq!(spans[0].text, "Анна Сергеевна");
/// assert!(mock.tag("другой текст").unwrap().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockTagger {
    name: &'static str,
    spans: HashMap<String, Vec<Entity>>,
    failing: HashSet<String>,
    delay: Option<Duration>,
}

impl MockTagger {
    /// Create a mock that returns no spans.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }

    /// Return person spans for `text`, located by substring search.
    #[must_use]
    pub fn with_spans(mut self, text: &str, persons: &[&str]) -> Self {
        let entities = persons.iter().map(|p| Entity::person_in(text, p)).collect();
        self.spans.insert(text.to_string(), entities);
        self
    }

    /// Return arbitrary entities for `text`.
    #[must_use]
    pub fn with_entities(mut self, text: &str, entities: Vec<Entity>) -> Self {
        self.spans.insert(text.to_string(), entities);
        self
    }

    /// Fail with [`Error::Tagger`] for `text`.
    #[must_use]
    pub fn failing_on(mut self, text: &str) -> Self {
        self.failing.insert(text.to_string());
        self
    }

    /// Sleep before answering.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

impl PersonTagger for MockTagger {
    fn tag(&self, text: &str) -> Result<Vec<Entity>> {
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }
        if self.failing.contains(text) {
            return Err(Error::tagger(format!("{}: refused text", self.name)));
        }
        Ok(self.spans.get(text).cloned().unwrap_or_default())
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

pub mod prelude {
    //! Commonly used items, re-exported for convenience.
    //!
    //! ```rust
    //! use fio_extract::prelude::*;
    //!
    //! let rows = Pipeline::builder().build().run(&["код 4521"]).unwrap();
    //! assert_eq!(rows[0].name, "4521");
    //! ```
    pub use crate::config::{ExtractorConfig, FailurePolicy};
    pub use crate::error::{Error, Result};
    pub use crate::pipeline::Pipeline;
    pub use crate::record::{Resolution, SubmissionRecord};
    pub use crate::rows::OutputRow;
    pub use crate::{Entity, EntityType, MockTagger, NullTagger, PersonTagger};
}
