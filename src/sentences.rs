//! Per-language partitions of the raw sentence corpus
//!
//! The sentence export is by far the largest input, and consumers rarely
//! need more than one language at a time. It is therefore parsed once and
//! split into per-language artifacts that can be reloaded independently; a
//! deliberately empty marker artifact records that the partitioning pass
//! already ran, so real data retrieval always goes through the per-language
//! names.

use crate::{
    cache::{Artifact, Lookup, Store},
    config::Config,
    errors::CorpusError,
    progress::ProgressReport,
    tsv, Result, SentenceId,
};
use anyhow::Context;
use std::collections::HashMap;

/// Sentence id to sentence text, for one language
pub type LanguageMap = HashMap<SentenceId, Box<str>>;

/// Ensure the sentence export has been partitioned by language
///
/// On a cold cache this parses the export once, persisting one artifact per
/// language that appears in it plus the completion marker. On a warm cache
/// it is a no-op.
pub fn build(config: &Config, store: &Store, report: &ProgressReport) -> Result<()> {
    if let Lookup::Hit(_) = store.load::<LanguageMap>(Artifact::Sentences) {
        log::info!("sentence partitions already built");
        return Ok(());
    }
    let path = config.sentences_file();
    log::info!(
        "no usable sentence partitions in cache, rebuilding from {}",
        path.display()
    );

    let tracker = report.start("Partitioning sentences by language");
    let mut partitions: HashMap<&str, LanguageMap> = HashMap::new();
    for record in tsv::open(&path, 3)? {
        let record = record?;
        tracker.make_progress(1);
        // Sentences outside the allow-list are discarded during parsing
        let Some(language) = config.language(&record[1]) else {
            continue;
        };
        partitions
            .entry(language.code)
            .or_default()
            .insert(record[0].into(), record[2].into());
    }
    tracker.finish();
    anyhow::ensure!(
        !partitions.is_empty(),
        CorpusError::EmptyBuild("sentence partitions")
    );

    // The marker is written last: its presence promises that every partition
    // produced by the pass is already on disk.
    for (&code, partition) in &partitions {
        store
            .store(Artifact::Partition(code), partition)
            .with_context(|| format!("persisting the {code} sentence partition"))?;
    }
    store
        .store(Artifact::Sentences, &LanguageMap::new())
        .context("persisting the partitioning marker")?;
    Ok(())
}

/// Load one language's partition, partitioning the corpus first if needed
///
/// Requesting a language outside the allow-list is a caller error. An
/// allow-listed language that simply never appears in the corpus yields an
/// empty map.
pub fn load_language(
    config: &Config,
    store: &Store,
    report: &ProgressReport,
    code: &str,
) -> Result<LanguageMap> {
    let language = config
        .language(code)
        .ok_or_else(|| CorpusError::UnknownLanguage(code.into()))?;
    if let Lookup::Hit(partition) = store.load(Artifact::Partition(language.code)) {
        return Ok(partition);
    }
    build(config, store, report)?;
    match store.load(Artifact::Partition(language.code)) {
        Lookup::Hit(partition) => Ok(partition),
        Lookup::Miss => {
            log::warn!("the corpus has no {} ({code}) sentences", language.name);
            Ok(LanguageMap::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::languages::Language;

    const FIXTURE: &str = "10\teng\tHello world\n\
                           11\tfra\tBonjour\n\
                           12\teng\tHello again\n\
                           13\txyz\tNot retained\n";

    fn fixture(sentence_file: &str) -> (tempfile::TempDir, Config, Store) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("raw_sentences.csv"), sentence_file).unwrap();
        let mut config = Config::new(dir.path());
        config.languages = Box::new([
            Language {
                code: "eng",
                name: "English",
                restricted: false,
            },
            Language {
                code: "fra",
                name: "French",
                restricted: false,
            },
            Language {
                code: "deu",
                name: "German",
                restricted: false,
            },
        ]);
        let store = Store::open(&config).unwrap();
        (dir, config, store)
    }

    #[test]
    fn partitions_are_keyed_by_language() {
        let (_dir, config, store) = fixture(FIXTURE);
        let report = ProgressReport::hidden();
        let eng = load_language(&config, &store, &report, "eng").unwrap();
        assert_eq!(eng.len(), 2);
        assert_eq!(&*eng["10"], "Hello world");
        assert_eq!(&*eng["12"], "Hello again");
        let fra = load_language(&config, &store, &report, "fra").unwrap();
        assert_eq!(fra.len(), 1);
        assert!(fra.get("10").is_none());
    }

    #[test]
    fn languages_outside_the_allow_list_are_discarded() {
        let (_dir, config, store) = fixture(FIXTURE);
        let report = ProgressReport::hidden();
        build(&config, &store, &report).unwrap();
        assert_eq!(
            store.load::<LanguageMap>(Artifact::Partition("xyz")),
            Lookup::Miss
        );
    }

    #[test]
    fn unknown_language_is_a_caller_error() {
        let (_dir, config, store) = fixture(FIXTURE);
        let err =
            load_language(&config, &store, &ProgressReport::hidden(), "xyz").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CorpusError>(),
            Some(CorpusError::UnknownLanguage(code)) if &**code == "xyz"
        ));
    }

    #[test]
    fn absent_allow_listed_language_is_empty() {
        let (_dir, config, store) = fixture(FIXTURE);
        let deu = load_language(&config, &store, &ProgressReport::hidden(), "deu").unwrap();
        assert!(deu.is_empty());
    }

    #[test]
    fn marker_makes_the_pass_idempotent() {
        let (_dir, config, store) = fixture(FIXTURE);
        let report = ProgressReport::hidden();
        build(&config, &store, &report).unwrap();
        // A second pass must not reparse: the export is gone, yet data stays
        std::fs::remove_file(config.sentences_file()).unwrap();
        build(&config, &store, &report).unwrap();
        let eng = load_language(&config, &store, &report, "eng").unwrap();
        assert_eq!(eng.len(), 2);
    }

    #[test]
    fn no_retained_sentence_fails_the_build() {
        let (_dir, config, store) = fixture("13\txyz\tNot retained\n");
        let err = build(&config, &store, &ProgressReport::hidden()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CorpusError>(),
            Some(CorpusError::EmptyBuild(_))
        ));
    }
}
