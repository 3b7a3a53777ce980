// Public API exports
pub mod chunker;
pub mod ingest;

// Re-export main types for convenience
pub use chunker::{
    chunk_by_characters, chunk_by_paragraphs, chunk_by_sentences,
    chunk_by_statistical_boundaries, chunk_by_words, chunk_fixed_overlap, chunk_info,
    chunk_sliding_window, split_paragraphs, split_sentences, ChunkError, ChunkMethod,
    ChunkStats, ChunkerConfig, DEFAULT_CHUNK_SIZE, DEFAULT_OVERLAP,
};

pub use ingest::{
    chunk_document, collect_documents, ingest_directory, DocumentChunk, DocumentInfo,
    IngestReport,
};
