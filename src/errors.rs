//! Error types for corpus ingestion.
//!
//! Three failure classes exist, all fatal for the build step that raises
//! them: data-integrity violations in a raw export, producers that run to
//! completion but come out empty, and caller contract violations. Cache
//! misses are deliberately not represented here: a miss is ordinary control
//! flow, modeled as a value by [`crate::cache::Lookup`].

use crate::SentenceId;
use std::path::PathBuf;
use thiserror::Error;

/// Failure modes of the ingestion pipeline
///
/// Every variant aborts the build step that raises it; the expensive
/// regeneration path is never retried, so a failure surfaces to the top
/// level rather than silently producing partial derived data.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// A line of a raw export had the wrong number of tab-separated fields
    #[error("{path}:{line}: expected {expected} tab-separated fields, got {found}", path = .path.display())]
    MalformedRecord {
        /// Export being parsed
        path: PathBuf,
        /// 1-based line of the offending record
        line: u64,
        /// Field count the export is defined to have
        expected: usize,
        /// Field count actually found
        found: usize,
    },

    /// A sentence id was defined twice where a single definition is required
    ///
    /// First-occurrence-wins would mask corrupt input, so duplication is
    /// detected and reported instead.
    #[error("{path}: sentence id {id:?} is defined more than once", path = .path.display())]
    DuplicateSentenceId {
        /// Export being parsed
        path: PathBuf,
        /// The twice-defined id
        id: SentenceId,
    },

    /// A producer ran to completion but yielded an empty structure
    ///
    /// Distinguishes "the raw input or the parser is broken" from a cache
    /// miss: after a full parse, every producer must have something to show.
    #[error("{0} came out empty after a full rebuild")]
    EmptyBuild(&'static str),

    /// A language code outside the configured allow-list was requested
    #[error("unknown language code {0:?}")]
    UnknownLanguage(Box<str>),

    /// A restricted language was requested for n-gram statistics
    #[error("language {0:?} is excluded from n-gram statistics")]
    RestrictedLanguage(Box<str>),
}
