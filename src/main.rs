//! Command-line entry point
//!
//! Parses the three raw corpus exports into reusable in-memory mappings
//! (memoized through the on-disk artifact cache), computes exact n-gram
//! frequency tables for every eligible language, and prints the most
//! frequent n-grams of each.

use anyhow::Context;
use clap::Parser;
use corpora::{config::Config, pipeline, top, Result};
use log::LevelFilter;
use std::{
    io::{BufWriter, Write},
    path::PathBuf,
};

/// Derive reusable structures from the raw sentence corpus exports
///
/// Expects a corpus directory holding `base_sentences.csv`, `links.csv` and
/// `raw_sentences.csv` (tab-separated, UTF-8). Every derived structure is
/// cached on disk, so only the first run over a given corpus pays the full
/// parsing cost.
#[derive(Parser, Debug)]
#[command(version, author)]
struct Args {
    /// Directory holding the three raw corpus exports
    #[arg(short, long, default_value = "corpora")]
    corpus_dir: PathBuf,

    /// Directory where derived artifacts are cached
    ///
    /// Defaults to a "cache" directory below the corpus directory.
    #[arg(long, default_value = None)]
    cache_dir: Option<PathBuf>,

    /// Delete every cached artifact before building
    ///
    /// Regeneration parses the raw exports in full and is time consuming.
    /// This switch is the only way any cached artifact gets deleted.
    #[arg(long, default_value_t = false)]
    clear_cache: bool,

    /// Max number of n-grams to display per language
    #[arg(short = 'o', long, default_value = "20")]
    top: usize,

    /// Only display n-grams seen at least this many times
    #[arg(short = 'm', long, default_value = "2")]
    min_count: u64,

    /// Hide progress bars
    #[arg(short, long, default_value_t = false)]
    quiet: bool,
}
//
impl Args {
    /// Decode and validate CLI arguments
    fn parse_and_check() -> Result<Self> {
        let args = Args::parse();
        anyhow::ensure!(
            args.corpus_dir.is_dir(),
            "corpus directory {} does not exist",
            args.corpus_dir.display()
        );
        Ok(args)
    }

    /// Turn decoded arguments into the process configuration
    fn into_config(self) -> Config {
        let Args {
            corpus_dir,
            cache_dir,
            clear_cache,
            top,
            min_count,
            quiet,
        } = self;
        let mut config = Config::new(corpus_dir);
        if let Some(cache_dir) = cache_dir {
            config.cache_dir = cache_dir.into();
        }
        config.clear_cache = clear_cache;
        config.top = top;
        config.min_count = min_count;
        config.quiet = quiet;
        config
    }
}

fn main() -> Result<()> {
    // Set up logging
    setup_logging().map_err(|e| anyhow::format_err!("{e}"))?;

    // Decode CLI arguments and derive the process configuration
    let config = Args::parse_and_check()?.into_config();

    // Build or reload every derived structure
    let corpus = pipeline::run(&config)?;
    log::info!(
        "corpus ready: {} origin entries, {} translation sources, {} frequency tables",
        corpus.origins.len(),
        corpus.links.len(),
        corpus.frequencies.len(),
    );

    // Display the most frequent n-grams of every eligible language
    {
        let stdout = std::io::stdout().lock();
        let mut stdout = BufWriter::new(stdout);
        top::write_top_ngrams(&config, &corpus, &mut stdout)?;
        stdout.flush().context("flushing the n-gram summary")?;
    }
    Ok(())
}

/// Set up logging
fn setup_logging() -> syslog::Result<()> {
    syslog::init(
        syslog::Facility::LOG_USER,
        if cfg!(feature = "log-trace") {
            LevelFilter::Trace
        } else if cfg!(debug_assertions) {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        },
        None,
    )
}
