//! Translation graph: sentence id to the ids of its known translations
//!
//! The link export has one record per directed link. One id may map to many
//! translations, so each key accumulates a list. The graph is not required
//! to be symmetric.

use crate::{
    cache::{Artifact, Lookup, Store},
    config::Config,
    errors::CorpusError,
    progress::ProgressReport,
    tsv, Result, SentenceId,
};
use anyhow::Context;
use std::collections::HashMap;

/// Sentence id to ids of its known translations, in export order
pub type TranslationGraph = HashMap<SentenceId, Vec<SentenceId>>;

/// Load the translation graph from cache, or rebuild it from the link export
///
/// Repeated source ids accumulate targets in file order; a pair repeated in
/// the export stays repeated in the list.
pub fn build(config: &Config, store: &Store, report: &ProgressReport) -> Result<TranslationGraph> {
    if let Lookup::Hit(graph) = store.load(Artifact::Links) {
        log::info!("loaded the translation graph from cache");
        return Ok(graph);
    }
    let path = config.links_file();
    log::info!(
        "no usable translation graph in cache, rebuilding from {}",
        path.display()
    );

    let tracker = report.start("Linking translations");
    let mut graph = TranslationGraph::new();
    for record in tsv::open(&path, 2)? {
        let record = record?;
        graph
            .entry(record[0].into())
            .or_default()
            .push(record[1].into());
        tracker.make_progress(1);
    }
    tracker.finish();
    anyhow::ensure!(!graph.is_empty(), CorpusError::EmptyBuild("translation graph"));

    store
        .store(Artifact::Links, &graph)
        .context("persisting the translation graph")?;
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn fixture(link_file: &str) -> (tempfile::TempDir, Config, Store) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("links.csv"), link_file).unwrap();
        let config = Config::new(dir.path());
        let store = Store::open(&config).unwrap();
        (dir, config, store)
    }

    #[test]
    fn targets_accumulate_in_file_order() {
        let (_dir, config, store) = fixture("1\t2\n1\t3\n2\t1\n");
        let graph = build(&config, &store, &ProgressReport::hidden()).unwrap();
        assert_eq!(graph.len(), 2);
        let expected: Vec<SentenceId> = vec!["2".into(), "3".into()];
        assert_eq!(graph["1"], expected);
        let expected: Vec<SentenceId> = vec!["1".into()];
        assert_eq!(graph["2"], expected);
    }

    #[test]
    fn repeated_pairs_are_kept() {
        let (_dir, config, store) = fixture("1\t2\n1\t2\n");
        let graph = build(&config, &store, &ProgressReport::hidden()).unwrap();
        assert_eq!(graph["1"].len(), 2);
    }

    #[test]
    fn rebuilt_graph_round_trips_through_the_cache() {
        let (_dir, config, store) = fixture("1\t2\n1\t3\n");
        let report = ProgressReport::hidden();
        let cold = build(&config, &store, &report).unwrap();
        fs::remove_file(config.links_file()).unwrap();
        let warm = build(&config, &store, &report).unwrap();
        assert_eq!(cold, warm);
    }

    #[test]
    fn empty_export_fails_the_build() {
        let (_dir, config, store) = fixture("");
        let err = build(&config, &store, &ProgressReport::hidden()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CorpusError>(),
            Some(CorpusError::EmptyBuild(_))
        ));
    }
}
