//! Aggregate statistics over a produced chunk sequence.

use serde::{Deserialize, Serialize};

/// Summary statistics for a chunk sequence.
///
/// Character counts are Unicode scalar counts, word counts are
/// whitespace-token counts. An empty sequence yields the all-zero record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChunkStats {
    pub count: usize,
    pub total_chars: usize,
    pub min_chars: usize,
    pub max_chars: usize,
    pub avg_chars: f64,
    pub stddev_chars: f64,
    pub total_words: usize,
    pub min_words: usize,
    pub max_words: usize,
    pub avg_words: f64,
    pub stddev_words: f64,
}

/// Compute [`ChunkStats`] for `chunks`. Never fails; `&[]` yields zeros.
pub fn chunk_info(chunks: &[String]) -> ChunkStats {
    if chunks.is_empty() {
        return ChunkStats::default();
    }

    let char_counts: Vec<usize> = chunks.iter().map(|c| c.chars().count()).collect();
    let word_counts: Vec<usize> = chunks.iter().map(|c| c.split_whitespace().count()).collect();

    let (total_chars, min_chars, max_chars, avg_chars, stddev_chars) = describe(&char_counts);
    let (total_words, min_words, max_words, avg_words, stddev_words) = describe(&word_counts);

    ChunkStats {
        count: chunks.len(),
        total_chars,
        min_chars,
        max_chars,
        avg_chars,
        stddev_chars,
        total_words,
        min_words,
        max_words,
        avg_words,
        stddev_words,
    }
}

/// Total, min, max, mean, and population standard deviation of `counts`.
fn describe(counts: &[usize]) -> (usize, usize, usize, f64, f64) {
    let total: usize = counts.iter().sum();
    let min = counts.iter().copied().min().unwrap_or(0);
    let max = counts.iter().copied().max().unwrap_or(0);
    let mean = total as f64 / counts.len() as f64;
    let variance = counts
        .iter()
        .map(|&c| {
            let d = c as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / counts.len() as f64;

    (total, min, max, mean, variance.sqrt())
}
