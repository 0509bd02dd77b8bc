//! Display of the most frequent n-grams per language
//!
//! The downstream consumer of a finished [`Corpus`](crate::pipeline::Corpus):
//! for each eligible language, ranks the frequency table by decreasing count
//! and prints the head of the ranking.

use crate::{config::Config, pipeline::Corpus, Result};
use std::io::Write;

/// Write the most frequent n-grams of every eligible language
///
/// Only n-grams seen at least `min_count` times are shown, at most `top` per
/// language, most frequent first. Ties break alphabetically so the output is
/// deterministic.
pub fn write_top_ngrams(config: &Config, corpus: &Corpus, out: &mut impl Write) -> Result<()> {
    for (language, table) in &corpus.frequencies {
        let mut ranked = table
            .counts
            .iter()
            .filter(|(_ngram, count)| **count >= config.min_count)
            .collect::<Vec<_>>();
        ranked.sort_unstable_by(|(ngram1, count1), (ngram2, count2)| {
            count2.cmp(count1).then_with(|| ngram1.cmp(ngram2))
        });

        writeln!(
            out,
            "# {} ({}): {} n-gram occurrences",
            language.name, language.code, table.tuple_count
        )?;
        for (ngram, count) in ranked.into_iter().take(config.top) {
            writeln!(out, "{count}\t{ngram}")?;
        }
    }
    Ok(())
}
