//! One full corpus ingestion run
//!
//! Build steps run to completion one after the other; nothing is consumed
//! while still under construction. The cache store is the only shared
//! mutable resource, and a single-process run needs no locking. Anyone
//! adding multi-process access must fence each artifact's load-then-store
//! sequence: two processes could both miss and both regenerate it.

use crate::{
    cache::Store,
    config::Config,
    languages::Language,
    links::{self, TranslationGraph},
    ngrams::{self, FrequencyTable},
    origins::{self, OriginMap},
    progress::ProgressReport,
    sentences, Result,
};
use anyhow::Context;

/// Everything one run derives from the raw exports
#[derive(Debug)]
pub struct Corpus {
    /// Sentence id to origin
    pub origins: OriginMap,

    /// Sentence id to known translations
    pub links: TranslationGraph,

    /// One exact frequency table per eligible language, in registry order
    pub frequencies: Vec<(Language, FrequencyTable)>,
}

/// Run the full ingestion pipeline
///
/// Optionally purges the cache (explicit opt-in through the configuration),
/// then builds or reloads the origin map, the translation graph, and the
/// sentence partitions, then builds or reloads one frequency table per
/// eligible language. Any failure aborts the run: there is no partial
/// success, and the expensive regeneration path is never retried.
pub fn run(config: &Config) -> Result<Corpus> {
    let store = Store::open(config)?;
    if config.clear_cache {
        store.clear(true).context("purging the artifact cache")?;
    }
    let report = if config.quiet {
        ProgressReport::hidden()
    } else {
        ProgressReport::new()
    };

    let origins = origins::build(config, &store, &report).context("building the origin map")?;
    let links = links::build(config, &store, &report).context("building the translation graph")?;
    sentences::build(config, &store, &report).context("partitioning the sentence corpus")?;

    let mut frequencies = Vec::new();
    for language in config.eligible() {
        let table = ngrams::build(config, &store, &report, language.code)
            .with_context(|| format!("building the {} frequency table", language.code))?;
        frequencies.push((*language, table));
    }
    Ok(Corpus {
        origins,
        links,
        frequencies,
    })
}
