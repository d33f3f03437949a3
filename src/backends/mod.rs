//! Name detectors.
//!
//! Two independent detectors feed candidate extraction:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │ PersonTagger (injected, e.g. a statistical NER model)│
//! │   PER spans with segmentation-aware boundaries       │
//! │   optionally wrapped in TimeoutTagger                │
//! ├──────────────────────────────────────────────────────┤
//! │ PatternMatcher (always available)                    │
//! │   capitalized Cyrillic runs, initials allowed        │
//! └──────────────────────────────────────────────────────┘
//!                 │ union, tagger first
//!                 ▼
//!           CandidateSet
//! ```

pub mod pattern;
pub mod timeout;

pub use pattern::PatternMatcher;
pub use timeout::TimeoutTagger;
