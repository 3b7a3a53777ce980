use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ChunkError;
use super::{DEFAULT_CHUNK_SIZE, DEFAULT_OVERLAP};

/// Configuration shared by the window-based chunking strategies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkerConfig {
    /// Target chunk size, in characters or words depending on the strategy
    pub chunk_size: usize,
    /// Trailing content repeated at the start of the next chunk
    pub overlap: usize,
    /// Snap character windows back to a word boundary when one is in reach
    pub preserve_words: bool,
    /// Prefer ending a chunk at a sentence terminator
    pub preserve_sentences: bool,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            overlap: DEFAULT_OVERLAP,
            preserve_words: false,
            preserve_sentences: false,
        }
    }
}

impl ChunkerConfig {
    /// Reject degenerate configurations before any chunk is produced
    pub fn validate(&self) -> Result<(), ChunkError> {
        if self.chunk_size == 0 {
            return Err(ChunkError::ZeroChunkSize);
        }
        if self.overlap >= self.chunk_size {
            return Err(ChunkError::OverlapExceedsChunkSize {
                overlap: self.overlap,
                chunk_size: self.chunk_size,
            });
        }
        Ok(())
    }
}

/// Unit the fixed-overlap chunker counts in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkMethod {
    Character,
    Word,
}

impl FromStr for ChunkMethod {
    type Err = ChunkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "character" => Ok(ChunkMethod::Character),
            "word" => Ok(ChunkMethod::Word),
            other => Err(ChunkError::UnknownMethod(other.to_string())),
        }
    }
}
