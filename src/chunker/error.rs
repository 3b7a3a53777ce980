use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChunkError {
    #[error("chunk_size must be greater than zero")]
    ZeroChunkSize,

    #[error("overlap ({overlap}) must be smaller than chunk_size ({chunk_size})")]
    OverlapExceedsChunkSize { overlap: usize, chunk_size: usize },

    #[error("step_size must be greater than zero")]
    ZeroStep,

    #[error("group size must be greater than zero")]
    ZeroGroupSize,

    #[error("unknown chunk method: {0:?} (expected \"character\" or \"word\")")]
    UnknownMethod(String),
}
