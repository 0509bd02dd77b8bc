//! Origin of every sentence: written directly, or translated from another
//!
//! The base export has one record per sentence: its id, then an origin
//! marker that is either the literal `0` (the sentence is an original) or
//! the id of the sentence it was translated from.

use crate::{
    cache::{Artifact, Lookup, Store},
    config::Config,
    errors::CorpusError,
    progress::ProgressReport,
    tsv, Result, SentenceId,
};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::{hash_map, HashMap};

/// Where a sentence came from
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Origin {
    /// The sentence was written directly in its own language
    Original,

    /// The sentence was translated from another sentence
    TranslatedFrom(SentenceId),
}
//
impl Origin {
    /// Decode the origin marker field of the base export
    fn parse(marker: &str) -> Self {
        if marker == "0" {
            Self::Original
        } else {
            Self::TranslatedFrom(marker.into())
        }
    }
}

/// Sentence id to origin, for every sentence of the base export
pub type OriginMap = HashMap<SentenceId, Origin>;

/// Load the origin map from cache, or rebuild it from the base export
///
/// A sentence id defined twice in the export signals corrupt input and fails
/// the build; so does an export that parses to nothing.
pub fn build(config: &Config, store: &Store, report: &ProgressReport) -> Result<OriginMap> {
    if let Lookup::Hit(origins) = store.load(Artifact::Origins) {
        log::info!("loaded the origin map from cache");
        return Ok(origins);
    }
    let path = config.origins_file();
    log::info!(
        "no usable origin map in cache, rebuilding from {}",
        path.display()
    );

    let tracker = report.start("Resolving sentence origins");
    let mut origins = OriginMap::new();
    for record in tsv::open(&path, 2)? {
        let record = record?;
        match origins.entry(record[0].into()) {
            hash_map::Entry::Occupied(o) => {
                return Err(CorpusError::DuplicateSentenceId {
                    path,
                    id: o.key().clone(),
                }
                .into());
            }
            hash_map::Entry::Vacant(v) => {
                v.insert(Origin::parse(&record[1]));
            }
        }
        tracker.make_progress(1);
    }
    tracker.finish();
    anyhow::ensure!(!origins.is_empty(), CorpusError::EmptyBuild("origin map"));

    store
        .store(Artifact::Origins, &origins)
        .context("persisting the origin map")?;
    Ok(origins)
}
