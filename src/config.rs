//! Processing pipeline configuration

use crate::languages::{self, Language};
use std::path::{Path, PathBuf};

/// Final process configuration
///
/// This is the result of combining digested CLI arguments with the fixed
/// language registry. There is no process-wide mutable state: components
/// receive this by reference, so tests can substitute small fixture
/// configurations (in particular, a short language list).
#[derive(Clone, Debug)]
pub struct Config {
    /// Directory holding the three raw corpus exports
    pub corpus_dir: Box<Path>,

    /// Directory where derived artifacts are persisted
    pub cache_dir: Box<Path>,

    /// Languages retained during corpus partitioning
    pub languages: Box<[Language]>,

    /// Purge every cached artifact before building
    ///
    /// Off by default; regeneration from the raw exports is expensive.
    pub clear_cache: bool,

    /// Max number of n-grams to display per language
    pub top: usize,

    /// Occurrence count below which n-grams are not displayed
    pub min_count: u64,

    /// Hide progress bars
    pub quiet: bool,
}
//
impl Config {
    /// Configuration with the default registry, tuning, and cache location
    pub fn new(corpus_dir: impl Into<PathBuf>) -> Self {
        let corpus_dir: PathBuf = corpus_dir.into();
        let cache_dir = corpus_dir.join("cache");
        Self {
            corpus_dir: corpus_dir.into(),
            cache_dir: cache_dir.into(),
            languages: languages::all().into(),
            clear_cache: false,
            top: 20,
            min_count: 2,
            quiet: false,
        }
    }

    /// Path of the sentence-to-origin export
    pub fn origins_file(&self) -> PathBuf {
        self.corpus_dir.join("base_sentences.csv")
    }

    /// Path of the translation link export
    pub fn links_file(&self) -> PathBuf {
        self.corpus_dir.join("links.csv")
    }

    /// Path of the raw sentence export
    pub fn sentences_file(&self) -> PathBuf {
        self.corpus_dir.join("raw_sentences.csv")
    }

    /// Look up an allow-listed language by code
    pub fn language(&self, code: &str) -> Option<&Language> {
        self.languages
            .iter()
            .find(|language| language.code == code)
    }

    /// Languages eligible for n-gram statistics
    pub fn eligible(&self) -> impl Iterator<Item = &Language> {
        self.languages.iter().filter(|language| !language.restricted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_paths_live_under_the_corpus_dir() {
        let config = Config::new("/data/corpus");
        assert_eq!(
            config.origins_file(),
            Path::new("/data/corpus/base_sentences.csv")
        );
        assert_eq!(config.links_file(), Path::new("/data/corpus/links.csv"));
        assert_eq!(
            config.sentences_file(),
            Path::new("/data/corpus/raw_sentences.csv")
        );
        assert_eq!(&*config.cache_dir, Path::new("/data/corpus/cache"));
    }

    #[test]
    fn eligible_excludes_restricted_languages() {
        let config = Config::new("corpus");
        assert!(config.eligible().all(|language| !language.restricted));
        assert_eq!(config.eligible().count(), 13);
        assert!(config.language("jpn").is_some_and(|l| l.restricted));
        assert!(config.language("und").is_none());
    }
}
