//! Statistical topic-boundary detection.
//!
//! Compares rolling statistics of the sentences before and after each
//! candidate split point, without any embedding model. A large relative
//! shift in average sentence length or vocabulary diversity marks a
//! boundary.

use std::collections::HashSet;

use tracing::debug;

use super::boundary::{join_sentences, split_sentences};
use super::error::ChunkError;

/// Relative change above which a candidate index becomes a boundary
const BOUNDARY_THRESHOLD: f64 = 0.3;

/// Floor for the sentence-length denominator
const LENGTH_EPSILON: f64 = 1.0;

/// Floor for the vocabulary-diversity denominator
const DIVERSITY_EPSILON: f64 = 0.01;

/// Per-sentence features feeding the window comparison
struct SentenceStats {
    word_count: f64,
    /// Unique lowercased words over total words
    diversity: f64,
}

/// Detect topic shifts by vocabulary drift and split sentences there.
///
/// The text is sentence-split; for each candidate index the mean word count
/// and mean vocabulary diversity of the `window_size` sentences before and
/// after are compared, and a relative change above 30% in either marks a
/// boundary. Chunks are the period-joined sentence groups between
/// boundaries.
///
/// This is heuristic segmentation for topic-shift detection, not size
/// control, so chunk sizes can be very uneven. Texts with no more sentences
/// than `window_size` come back as a single chunk.
pub fn chunk_by_statistical_boundaries(
    text: &str,
    window_size: usize,
) -> Result<Vec<String>, ChunkError> {
    if window_size == 0 {
        return Err(ChunkError::ZeroGroupSize);
    }

    let sentences = split_sentences(text);
    if sentences.is_empty() {
        return Ok(Vec::new());
    }

    // Too short to measure drift: keep the document whole.
    if sentences.len() <= window_size {
        return Ok(vec![text.trim().to_string()]);
    }

    // 1. Per-sentence features
    let stats: Vec<SentenceStats> = sentences.iter().map(|s| sentence_stats(s)).collect();

    // 2. Scan candidate split points
    let mut boundaries = vec![0];
    for i in window_size..sentences.len() - window_size {
        let before = window_mean(&stats[i - window_size..i]);
        let after = window_mean(&stats[i..i + window_size]);

        let length_shift = relative_change(before.word_count, after.word_count, LENGTH_EPSILON);
        let diversity_shift = relative_change(before.diversity, after.diversity, DIVERSITY_EPSILON);

        if length_shift > BOUNDARY_THRESHOLD || diversity_shift > BOUNDARY_THRESHOLD {
            boundaries.push(i);
        }
    }
    boundaries.push(sentences.len());

    debug!(
        sentences = sentences.len(),
        boundaries = boundaries.len() - 2,
        "statistical boundary scan complete"
    );

    // 3. Re-group sentences between consecutive boundaries
    let chunks = boundaries
        .windows(2)
        .filter(|pair| pair[1] > pair[0])
        .map(|pair| join_sentences(&sentences[pair[0]..pair[1]]))
        .collect();

    Ok(chunks)
}

fn sentence_stats(sentence: &str) -> SentenceStats {
    let words: Vec<String> = sentence
        .split_whitespace()
        .map(|w| w.to_lowercase())
        .collect();
    let total = words.len() as f64;
    let unique = words.iter().collect::<HashSet<_>>().len() as f64;

    SentenceStats {
        word_count: total,
        diversity: if words.is_empty() { 0.0 } else { unique / total },
    }
}

fn window_mean(window: &[SentenceStats]) -> SentenceStats {
    let n = window.len() as f64;
    SentenceStats {
        word_count: window.iter().map(|s| s.word_count).sum::<f64>() / n,
        diversity: window.iter().map(|s| s.diversity).sum::<f64>() / n,
    }
}

/// `|before - after|` relative to the larger of the two, floored by `epsilon`
/// so constant-zero windows never divide by zero.
fn relative_change(before: f64, after: f64, epsilon: f64) -> f64 {
    (before - after).abs() / before.max(after).max(epsilon)
}
