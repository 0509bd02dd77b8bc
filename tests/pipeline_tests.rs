//! End-to-end pipeline tests over a small fixture corpus

use corpora::{
    config::Config, errors::CorpusError, languages::Language, origins::Origin, pipeline,
};
use std::fs;

/// Write the three raw exports and build a matching configuration
fn fixture_config(dir: &std::path::Path) -> Config {
    fs::write(
        dir.join("base_sentences.csv"),
        "10\t0\n11\t10\n12\t0\n20\t0\n",
    )
    .unwrap();
    fs::write(dir.join("links.csv"), "1\t2\n1\t3\n2\t1\n").unwrap();
    fs::write(
        dir.join("raw_sentences.csv"),
        "10\teng\tHello world\n\
         11\tfra\tBonjour\n\
         12\teng\tHello again\n\
         20\tjpn\tこんにちは\n\
         30\txyz\tNot retained\n",
    )
    .unwrap();
    let mut config = Config::new(dir);
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
            code: "jpn",
            name: "Japanese",
            restricted: true,
        },
    ]);
    config.quiet = true;
    config
}

#[test]
fn full_run_derives_every_structure() {
    let dir = tempfile::tempdir().unwrap();
    let config = fixture_config(dir.path());
    let corpus = pipeline::run(&config).unwrap();

    // Origins: "0" markers decode to originals, anything else to a source id
    assert_eq!(corpus.origins.len(), 4);
    assert_eq!(corpus.origins["10"], Origin::Original);
    assert_eq!(corpus.origins["11"], Origin::TranslatedFrom("10".into()));

    // Translation graph: targets accumulate in file order
    let targets: Vec<&str> = corpus.links["1"].iter().map(|id| &**id).collect();
    assert_eq!(targets, ["2", "3"]);

    // Frequency tables: one per eligible language, restricted ones excluded
    assert_eq!(corpus.frequencies.len(), 2);
    assert!(corpus
        .frequencies
        .iter()
        .all(|(language, _table)| !language.restricted));
    let (_eng, table) = corpus
        .frequencies
        .iter()
        .find(|(language, _table)| language.code == "eng")
        .unwrap();
    assert_eq!(table.counts["hello"], 2);
    assert_eq!(table.counts["hello world"], 1);
    // "Hello world" and "Hello again" hold 3 n-gram occurrences each
    assert_eq!(table.tuple_count, 6);
}

#[test]
fn warm_cache_reproduces_the_cold_run() {
    let dir = tempfile::tempdir().unwrap();
    let config = fixture_config(dir.path());
    let cold = pipeline::run(&config).unwrap();

    // Remove the raw exports: the warm run can only read the cache
    for file in [
        config.origins_file(),
        config.links_file(),
        config.sentences_file(),
    ] {
        fs::remove_file(file).unwrap();
    }
    let warm = pipeline::run(&config).unwrap();
    assert_eq!(warm.origins, cold.origins);
    assert_eq!(warm.links, cold.links);
    assert_eq!(warm.frequencies, cold.frequencies);
}

#[test]
fn cached_artifacts_win_until_explicitly_cleared() {
    let dir = tempfile::tempdir().unwrap();
    let config = fixture_config(dir.path());
    pipeline::run(&config).unwrap();

    // Grow the corpus: without a purge, the stale artifacts keep winning
    fs::write(
        dir.path().join("raw_sentences.csv"),
        "10\teng\tHello world\n12\teng\tHello again\n13\teng\tHello once more\n",
    )
    .unwrap();
    let stale = pipeline::run(&config).unwrap();
    let (_eng, table) = stale
        .frequencies
        .iter()
        .find(|(language, _table)| language.code == "eng")
        .unwrap();
    assert_eq!(table.counts["hello"], 2);

    // An explicit purge forces regeneration from the grown corpus
    let mut config = config;
    config.clear_cache = true;
    let err = pipeline::run(&config).unwrap_err();
    // The grown corpus has no fra sentences left, so the fra table is empty
    assert!(matches!(
        err.downcast_ref::<CorpusError>(),
        Some(CorpusError::EmptyBuild(_))
    ));

    config.languages = Box::new([Language {
        code: "eng",
        name: "English",
        restricted: false,
    }]);
    let fresh = pipeline::run(&config).unwrap();
    let (_eng, table) = fresh
        .frequencies
        .iter()
        .find(|(language, _table)| language.code == "eng")
        .unwrap();
    assert_eq!(table.counts["hello"], 3);
}

#[test]
fn corrupt_input_aborts_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let config = fixture_config(dir.path());
    fs::write(dir.path().join("base_sentences.csv"), "10\t0\n10\t3\n").unwrap();
    let err = pipeline::run(&config).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<CorpusError>(),
        Some(CorpusError::DuplicateSentenceId { id, .. }) if &**id == "10"
    ));
}
