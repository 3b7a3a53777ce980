use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use chunkmill::{
    chunk_by_characters, chunk_by_paragraphs, chunk_by_sentences,
    chunk_by_statistical_boundaries, chunk_by_words, chunk_fixed_overlap, chunk_info,
    chunk_sliding_window, ingest_directory, ChunkMethod, ChunkerConfig, DEFAULT_CHUNK_SIZE,
    DEFAULT_OVERLAP,
};

#[derive(Parser)]
#[command(
    name = "chunkmill",
    version,
    about = "Boundary-aware text chunking for retrieval pipelines"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Chunk a single document and print the chunks
    Chunk {
        /// Path to the document
        file: PathBuf,

        /// Chunking strategy to apply
        #[arg(long, value_enum, default_value_t = Strategy::Characters)]
        strategy: Strategy,

        /// Target chunk size (characters or words, depending on strategy)
        #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
        size: usize,

        /// Overlap carried into the next chunk
        #[arg(long, default_value_t = DEFAULT_OVERLAP)]
        overlap: usize,

        /// Avoid cutting words at character-window edges
        #[arg(long)]
        preserve_words: bool,

        /// Prefer ending chunks at sentence terminators
        #[arg(long)]
        preserve_sentences: bool,

        /// Explicit step for the sliding strategy (default: size - overlap)
        #[arg(long)]
        step: Option<usize>,

        /// Sentences per chunk for the sentences strategy
        #[arg(long, default_value_t = 3)]
        group: usize,

        /// Rolling window for the statistical strategy
        #[arg(long, default_value_t = 5)]
        window: usize,

        /// Unit for the fixed strategy: "character" or "word"
        #[arg(long, default_value = "character")]
        method: String,

        /// Emit chunks and statistics as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Walk a directory, chunk every supported document, emit records
    Ingest {
        /// Root directory to scan
        dir: PathBuf,

        /// Target chunk size in characters
        #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
        size: usize,

        /// Overlap carried into the next chunk
        #[arg(long, default_value_t = DEFAULT_OVERLAP)]
        overlap: usize,

        /// Avoid cutting words at window edges
        #[arg(long)]
        preserve_words: bool,

        /// Prefer ending chunks at sentence terminators
        #[arg(long)]
        preserve_sentences: bool,

        /// Write one JSON chunk record per line to this file
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Strategy {
    /// Fixed character windows, boundary-aware, lossless tail
    Characters,
    /// Fixed word windows with sentence look-ahead
    Words,
    /// Constant-step sliding window (drops sub-minimum tails)
    Sliding,
    /// Exact mechanical overlap, no boundary adjustment
    Fixed,
    /// Groups of whole sentences
    Sentences,
    /// Blank-line separated paragraphs
    Paragraphs,
    /// Topic-shift detection via vocabulary drift
    Statistical,
}

#[derive(Serialize)]
struct ChunkOutput {
    chunks: Vec<String>,
    stats: chunkmill::ChunkStats,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Chunk {
            file,
            strategy,
            size,
            overlap,
            preserve_words,
            preserve_sentences,
            step,
            group,
            window,
            method,
            json,
        } => run_chunk(
            file,
            strategy,
            ChunkerConfig {
                chunk_size: size,
                overlap,
                preserve_words,
                preserve_sentences,
            },
            step,
            group,
            window,
            &method,
            json,
        ),
        Command::Ingest {
            dir,
            size,
            overlap,
            preserve_words,
            preserve_sentences,
            output,
        } => run_ingest(
            dir,
            ChunkerConfig {
                chunk_size: size,
                overlap,
                preserve_words,
                preserve_sentences,
            },
            output,
        ),
    }
}

#[allow(clippy::too_many_arguments)]
fn run_chunk(
    file: PathBuf,
    strategy: Strategy,
    config: ChunkerConfig,
    step: Option<usize>,
    group: usize,
    window: usize,
    method: &str,
    json: bool,
) -> Result<()> {
    let text = fs::read_to_string(&file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let chunks = match strategy {
        Strategy::Characters => chunk_by_characters(&text, &config)?,
        Strategy::Words => chunk_by_words(&text, &config)?,
        Strategy::Sliding => chunk_sliding_window(&text, &config, step)?,
        Strategy::Fixed => {
            let method: ChunkMethod = method.parse()?;
            chunk_fixed_overlap(&text, &config, method)?
        }
        Strategy::Sentences => chunk_by_sentences(&text, group)?,
        Strategy::Paragraphs => chunk_by_paragraphs(&text),
        Strategy::Statistical => chunk_by_statistical_boundaries(&text, window)?,
    };

    let stats = chunk_info(&chunks);

    if json {
        let output = ChunkOutput { chunks, stats };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for (i, chunk) in chunks.iter().enumerate() {
        println!("--- chunk {} ({} chars) ---", i, chunk.chars().count());
        println!("{chunk}\n");
    }

    println!("=== Chunk Statistics ===");
    println!("Chunks:          {}", stats.count);
    println!(
        "Characters:      {} total, {}..{}, avg {:.1}",
        stats.total_chars, stats.min_chars, stats.max_chars, stats.avg_chars
    );
    println!(
        "Words:           {} total, {}..{}, avg {:.1}",
        stats.total_words, stats.min_words, stats.max_words, stats.avg_words
    );

    Ok(())
}

fn run_ingest(dir: PathBuf, config: ChunkerConfig, output: Option<PathBuf>) -> Result<()> {
    let (report, records) = ingest_directory(&dir, &config)?;

    if let Some(path) = output {
        let mut file = fs::File::create(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        for record in &records {
            writeln!(file, "{}", serde_json::to_string(record)?)?;
        }
        println!("Wrote {} chunk records to {}", records.len(), path.display());
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
