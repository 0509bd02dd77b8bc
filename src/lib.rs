//! Memoized ingestion of a large multilingual sentence corpus.
//!
//! The corpus ships as three flat tab-separated exports: sentence-to-origin
//! ("base") links, sentence-to-sentence translation links, and raw sentence
//! text keyed by id and language. The raw files are tens of millions of lines
//! and re-parsing them on every run is expensive, so every derived structure
//! is persisted in an on-disk artifact cache and reloaded in preference to
//! recomputation.
//!
//! On top of the derived mappings, [`ngrams`] computes, per language, the
//! exact frequency of every contiguous word subsequence across every sentence
//! of that language's partition.

pub mod cache;
pub mod config;
pub mod errors;
pub mod languages;
pub mod links;
pub mod ngrams;
pub mod origins;
pub mod pipeline;
pub mod progress;
pub mod sentences;
pub mod top;
pub mod tsv;

/// Use anyhow for Result type erasure
pub use anyhow::Result;

/// Opaque sentence identifier, unique within the raw sentence file
///
/// Used as a key across every derived mapping. Kept as an opaque string
/// rather than an integer: the data provider owns the format and nothing
/// here needs arithmetic on it.
pub type SentenceId = Box<str>;
