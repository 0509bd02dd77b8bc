//! Exact n-gram frequency statistics, per language
//!
//! For every sentence of a language's partition, every contiguous token span
//! is counted: single words, the full sentence, and everything in between
//! all flow through the same span enumeration. Counts are exact over the
//! whole partition; there is no sampling or streaming estimation.

use crate::{
    cache::{Artifact, Lookup, Store},
    config::Config,
    errors::CorpusError,
    progress::ProgressReport,
    sentences, Result,
};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Exact n-gram usage counts for one language
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct FrequencyTable {
    /// Occurrence count per n-gram
    ///
    /// Keys are the span's lowercased tokens re-joined with single spaces.
    pub counts: HashMap<Box<str>, u64>,

    /// Grand total of counted n-gram occurrences
    pub tuple_count: u64,
}
//
impl FrequencyTable {
    /// Count every contiguous token span of one sentence
    ///
    /// A sentence of `n` tokens contributes exactly `n * (n + 1) / 2`
    /// occurrences, quadratic in sentence length. Tokens come from splitting
    /// the lowercased text on single spaces, so runs of spaces produce empty
    /// tokens, and punctuation stays attached to its word. That is the whole
    /// normalization; anything smarter (punctuation stripping in particular)
    /// would change which keys exist.
    fn add_sentence(&mut self, text: &str) {
        let text = text.to_lowercase();
        let tokens = text.split(' ').collect::<Vec<_>>();
        for start in 0..tokens.len() {
            for end in start + 1..=tokens.len() {
                let key = tokens[start..end].join(" ");
                match self.counts.get_mut(key.as_str()) {
                    Some(count) => *count += 1,
                    None => {
                        self.counts.insert(key.into(), 1);
                    }
                }
                self.tuple_count += 1;
            }
        }
    }
}

/// Load a language's frequency table from cache, or rebuild it
///
/// The language must be allow-listed and not restricted; both checks happen
/// before the cache is consulted, so a restricted request can never be
/// answered from a stale artifact. An eligible language whose partition is
/// empty fails the build: an empty frequency table is never a legitimate
/// output.
pub fn build(
    config: &Config,
    store: &Store,
    report: &ProgressReport,
    code: &str,
) -> Result<FrequencyTable> {
    let language = config
        .language(code)
        .ok_or_else(|| CorpusError::UnknownLanguage(code.into()))?;
    anyhow::ensure!(
        !language.restricted,
        CorpusError::RestrictedLanguage(code.into())
    );
    if let Lookup::Hit(table) = store.load(Artifact::Frequencies(language.code)) {
        log::info!("loaded the {code} frequency table from cache");
        return Ok(table);
    }
    log::info!("no usable {code} frequency table in cache, rebuilding");

    let partition = sentences::load_language(config, store, report, code)
        .with_context(|| format!("loading the {code} sentence partition"))?;
    let tracker = report.start(format!("Counting {code} n-grams"));
    let mut table = FrequencyTable::default();
    for text in partition.values() {
        table.add_sentence(text);
        tracker.make_progress(1);
    }
    tracker.finish();
    anyhow::ensure!(
        table.tuple_count > 0 && !table.counts.is_empty(),
        CorpusError::EmptyBuild("frequency table")
    );

    store
        .store(Artifact::Frequencies(language.code), &table)
        .with_context(|| format!("persisting the {code} frequency table"))?;
    Ok(table)
}
