//! Batch orchestration.
//!
//! ```text
//! text ─┬─ PersonTagger ──┐
//!       └─ PatternMatcher ┴─► CandidateSet ─► reconcile ─┬─ names ───────┐
//!                                                        └─ none ─► codes┴─► recover ─► record
//! records ─► expand ─► rows
//! ```
//!
//! Texts are independent. With the `parallel` feature they are fanned out
//! over rayon's pool; results are collected by index, so output order always
//! follows input order.

use crate::backends::TimeoutTagger;
use crate::candidates::CandidateExtractor;
use crate::config::{ExtractorConfig, FailurePolicy, StopWords};
use crate::fallback::extract_codes;
use crate::junk::JunkFilter;
use crate::reconcile::reconcile;
use crate::record::{Resolution, SubmissionRecord};
use crate::recovery::recover;
use crate::rows::{expand, OutputRow};
use crate::{Entity, Error, NullTagger, PersonTagger, Result};
use std::sync::Arc;

/// Builder for [`Pipeline`].
#[derive(Default)]
pub struct PipelineBuilder {
    tagger: Option<Arc<dyn PersonTagger>>,
    config: ExtractorConfig,
}

impl PipelineBuilder {
    /// Use `tagger` for person spans. Defaults to [`NullTagger`].
    #[must_use]
    pub fn tagger(mut self, tagger: Arc<dyn PersonTagger>) -> Self {
        self.tagger = Some(tagger);
        self
    }

    /// Use `config`. Defaults to [`ExtractorConfig::default`].
    #[must_use]
    pub fn config(mut self, config: ExtractorConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the pipeline, wrapping the tagger in a deadline if configured.
    #[must_use]
    pub fn build(self) -> Pipeline {
        let tagger = self.tagger.unwrap_or_else(|| Arc::new(NullTagger));
        let tagger: Arc<dyn PersonTagger> = match self.config.tagger_timeout() {
            Some(timeout) => Arc::new(TimeoutTagger::new(tagger, timeout)),
            None => tagger,
        };
        Pipeline {
            stop_words: self.config.stop_words(),
            config: self.config,
            tagger,
        }
    }
}

/// Extracts names (or fallback codes) from a batch of texts.
pub struct Pipeline {
    config: ExtractorConfig,
    stop_words: StopWords,
    tagger: Arc<dyn PersonTagger>,
}

impl Pipeline {
    /// Start building a pipeline.
    #[must_use]
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::default()
    }

    /// The configuration in effect.
    #[must_use]
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Name of the tagger in use.
    #[must_use]
    pub fn tagger_name(&self) -> &'static str {
        self.tagger.name()
    }

    /// Resolve a single text.
    ///
    /// Fails only when the tagger fails and the policy is
    /// [`FailurePolicy::Abort`].
    pub fn resolve(&self, text: &str) -> Result<SubmissionRecord> {
        let filter = JunkFilter::new(&self.stop_words);
        let spans = self.tag_persons(text)?;

        let candidates = CandidateExtractor::new(filter).extract(text, &spans);
        let names = reconcile(candidates.as_slice());

        let resolution = if names.is_empty() {
            Resolution::codes(extract_codes(text))
        } else {
            Resolution::Names(names)
        };

        Ok(recover(SubmissionRecord::new(text, resolution), &filter))
    }

    /// Resolve every text, preserving input order.
    pub fn process<S>(&self, texts: &[S]) -> Result<Vec<SubmissionRecord>>
    where
        S: AsRef<str> + Sync,
    {
        if texts.is_empty() {
            return Err(Error::InputEmpty);
        }
        log::info!(
            "processing {} texts (tagger: {}, parallel: {})",
            texts.len(),
            self.tagger.name(),
            self.runs_parallel()
        );

        #[cfg(feature = "parallel")]
        {
            if self.runs_parallel() {
                use rayon::prelude::*;
                return texts.par_iter().map(|t| self.resolve(t.as_ref())).collect();
            }
        }

        texts.iter().map(|t| self.resolve(t.as_ref())).collect()
    }

    /// Resolve every text and flatten into deduplicated rows.
    pub fn run<S>(&self, texts: &[S]) -> Result<Vec<OutputRow>>
    where
        S: AsRef<str> + Sync,
    {
        let records = self.process(texts)?;
        let rows = expand(&records);
        log::info!("{} texts -> {} rows", records.len(), rows.len());
        Ok(rows)
    }

    fn runs_parallel(&self) -> bool {
        cfg!(feature = "parallel") && self.config.parallel
    }

    fn tag_persons(&self, text: &str) -> Result<Vec<Entity>> {
        match self.tagger.tag(text) {
            Ok(spans) => Ok(spans),
            Err(e) if e.is_collaborator_failure()
                && self.config.on_tagger_failure == FailurePolicy::Degrade =>
            {
                log::warn!(
                    "tagger '{}' failed, continuing without person spans: {}",
                    self.tagger.name(),
                    e
                );
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }
}
