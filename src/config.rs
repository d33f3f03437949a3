//! Extractor configuration.
//!
//! The stop-set and the tagger policy are plain values loaded once (from TOML
//! or defaults) and passed by reference into the pipeline. Nothing here is a
//! process-wide global.
//!
//! ```toml
//! extra_stop_words = ["менеджер"]
//! tagger_timeout_ms = 2000
//! on_tagger_failure = "degrade"
//! parallel = true
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

/// Words that are never name components: greetings, filler, UI jargon.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "там", "нет", "зачем", "здравствуйте", "фото", "вы", "день", "ночь", "утро", "вечер",
    "здесь", "благодарю", "зафиксировала", "господи", "антоновкой", "позвать", "горячей",
    "линии", "обращение", "оформил", "оформила", "изображение", "мне", "вранье", "скидка",
    "везде", "картах", "куратор", "ооочень", "вам", "вообще", "полбагодарила", "ui", "ux",
    "подскажите", "пожалуйста", "спасибо", "хорошего", "всего", "добрый", "доброе", "привет",
    "увы", "но", "поняла", "еще", "сообщила", "на гд", "на гл", "вот", "ага", "ох", "ах",
    "ваша", "поддержка", "оператор",
];

/// A lower-cased set of stop words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Create a stop-set from a word list (lower-cased on insert).
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    /// Create an empty stop-set.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check membership of an already lower-cased word.
    #[must_use]
    pub fn contains(&self, lowered: &str) -> bool {
        self.words.contains(lowered)
    }

    /// Number of distinct stop words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// What to do when the tagger fails or times out for one text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Log the failure and continue as if the tagger found no persons.
    #[default]
    Degrade,
    /// Fail the whole batch.
    Abort,
}

/// Configuration for a [`Pipeline`](crate::Pipeline).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Base stop-set. Defaults to [`DEFAULT_STOP_WORDS`].
    pub stop_words: Vec<String>,
    /// Words added on top of `stop_words`.
    pub extra_stop_words: Vec<String>,
    /// Per-text tagger timeout in milliseconds. `None` waits indefinitely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagger_timeout_ms: Option<u64>,
    /// Policy for tagger failures.
    pub on_tagger_failure: FailurePolicy,
    /// Process texts concurrently (needs the `parallel` feature).
    pub parallel: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            stop_words: DEFAULT_STOP_WORDS.iter().map(|w| (*w).to_string()).collect(),
            extra_stop_words: Vec::new(),
            tagger_timeout_ms: None,
            on_tagger_failure: FailurePolicy::Degrade,
            parallel: true,
        }
    }
}

impl ExtractorConfig {
    /// Parse a config from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| Error::config(e.to_string()))
    }

    /// Load a config from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("failed to read {}: {}", path.display(), e)))?;
        let config = Self::from_toml_str(&content)?;
        log::debug!(
            "loaded config from {} ({} stop words)",
            path.display(),
            config.stop_words.len() + config.extra_stop_words.len()
        );
        Ok(config)
    }

    /// Render as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Build the effective stop-set.
    #[must_use]
    pub fn stop_words(&self) -> StopWords {
        StopWords::new(self.stop_words.iter().chain(&self.extra_stop_words))
    }

    /// Tagger timeout, if configured.
    #[must_use]
    pub fn tagger_timeout(&self) -> Option<Duration> {
        self.tagger_timeout_ms.map(Duration::from_millis)
    }

    /// Set the tagger timeout.
    #[must_use]
    pub fn with_tagger_timeout(mut self, timeout: Duration) -> Self {
        self.tagger_timeout_ms = Some(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX));
        self
    }

    /// Set the tagger failure policy.
    #[must_use]
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.on_tagger_failure = policy;
        self
    }

    /// Enable or disable concurrent processing.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Add stop words on top of the configured ones.
    #[must_use]
    pub fn with_extra_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_stop_words.extend(words.into_iter().map(Into::into));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stop_words_are_lowercase_set() {
        let sw = ExtractorConfig::default().stop_words();
        assert!(sw.contains("здравствуйте"));
        assert!(sw.contains("ui"));
        assert!(!sw.contains("иванов"));
        assert!(sw.len() <= DEFAULT_STOP_WORDS.len());
    }

    #[test]
    fn test_stop_words_lowercase_on_insert() {
        let sw = StopWords::new(["Менеджер", "КЛИЕНТ"]);
        assert!(sw.contains("менеджер"));
        assert!(sw.contains("клиент"));
        assert!(!sw.contains("КЛИЕНТ"));
    }

    #[test]
    fn test_toml_partial_uses_defaults() {
        let config = ExtractorConfig::from_toml_str(
            r#"
            extra_stop_words = ["менеджер"]
            tagger_timeout_ms = 1500
            on_tagger_failure = "abort"
            "#,
        )
        .unwrap();

        assert_eq!(config.tagger_timeout(), Some(Duration::from_millis(1500)));
        assert_eq!(config.on_tagger_failure, FailurePolicy::Abort);
        assert!(config.parallel);
        let sw = config.stop_words();
        assert!(sw.contains("менеджер"));
        assert!(sw.contains("спасибо"));
    }

    #[test]
    fn test_toml_replaces_base_list() {
        let config = ExtractorConfig::from_toml_str(r#"stop_words = ["только"]"#).unwrap();
        let sw = config.stop_words();
        assert_eq!(sw.len(), 1);
        assert!(!sw.contains("спасибо"));
    }

    #[test]
    fn test_toml_rejects_unknown_policy() {
        let err = ExtractorConfig::from_toml_str(r#"on_tagger_failure = "retry""#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_toml_roundtrip_through_file() {
        let config = ExtractorConfig::default()
            .with_tagger_timeout(Duration::from_secs(3))
            .with_parallel(false);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fio.toml");
        std::fs::write(&path, config.to_toml_string().unwrap()).unwrap();

        let loaded = ExtractorConfig::from_toml_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_oversized_timeout_saturates() {
        let config = ExtractorConfig::default().with_tagger_timeout(Duration::MAX);
        assert_eq!(config.tagger_timeout_ms, Some(u64::MAX));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = ExtractorConfig::from_toml_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
