//! Structure-driven strategies: sentence groups and paragraphs.

use super::boundary::{join_sentences, split_paragraphs, split_sentences};
use super::error::ChunkError;

/// Group consecutive sentences into chunks of `sentences_per_chunk`.
///
/// Sentences are rejoined with `". "` plus a trailing period, so the
/// original terminator kind (`!`, `?`) is normalized away. Fewer sentences
/// than one full group produce a single chunk holding them all.
pub fn chunk_by_sentences(
    text: &str,
    sentences_per_chunk: usize,
) -> Result<Vec<String>, ChunkError> {
    if sentences_per_chunk == 0 {
        return Err(ChunkError::ZeroGroupSize);
    }

    let sentences = split_sentences(text);
    Ok(sentences
        .chunks(sentences_per_chunk)
        .map(join_sentences)
        .collect())
}

/// Split `text` into its paragraphs at blank-line boundaries.
///
/// Purely structural: no size control and no configuration. Paragraphs are
/// trimmed; empty ones are dropped.
pub fn chunk_by_paragraphs(text: &str) -> Vec<String> {
    split_paragraphs(text)
}
