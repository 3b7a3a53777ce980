mod boundary;
mod error;
mod statistical;
mod stats;
mod structural;
mod types;
mod window;

#[cfg(test)]
mod tests;

pub use boundary::{split_paragraphs, split_sentences};
pub use error::ChunkError;
pub use statistical::chunk_by_statistical_boundaries;
pub use stats::{chunk_info, ChunkStats};
pub use structural::{chunk_by_paragraphs, chunk_by_sentences};
pub use types::{ChunkMethod, ChunkerConfig};
pub use window::{chunk_by_characters, chunk_by_words, chunk_fixed_overlap, chunk_sliding_window};

/// Default target chunk size in characters
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Default overlap carried into the next chunk
pub const DEFAULT_OVERLAP: usize = 200;

/// Furthest a character window end may move back to land on whitespace
pub const WORD_LOOKBACK: usize = 30;

/// Furthest a character window end may move back to land on a sentence end
pub const SENTENCE_LOOKBACK: usize = 50;

/// Extra words a word window may take to finish a sentence
pub const SENTENCE_LOOKAHEAD_WORDS: usize = 5;

/// Divisor for the sliding window's minimum viable tail: trailing fragments
/// of `chunk_size / MIN_TAIL_DIVISOR` characters or fewer are dropped
pub const MIN_TAIL_DIVISOR: usize = 4;
