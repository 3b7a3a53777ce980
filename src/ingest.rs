//! Filesystem ingestion: walk a directory of text documents, chunk each
//! one, and build records ready for an embedding/indexing pipeline.
//!
//! The chunking engine itself knows nothing about files or metadata; this
//! module is the glue that feeds it and decorates its output.

use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};
use uuid::Uuid;
use walkdir::WalkDir;

use crate::chunker::{chunk_by_characters, chunk_info, ChunkStats, ChunkerConfig};

/// A source document discovered during a directory scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentInfo {
    pub path: String,
    pub hash: String,
    pub size: u64,
    pub kind: String,
}

/// One chunk of a source document, ready for embedding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentChunk {
    pub id: String,
    pub source: String,
    pub index: usize,
    pub content: String,
    pub char_count: usize,
    pub word_count: usize,
}

/// Summary of an ingestion run
#[derive(Debug, Serialize, Deserialize)]
pub struct IngestReport {
    pub generated_at: String,
    pub root: String,
    pub document_count: usize,
    pub chunk_count: usize,
    pub config: ChunkerConfig,
    pub stats: ChunkStats,
}

/// Detect a supported document kind from the file extension
pub fn detect_kind(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(|ext| {
            Some(match ext.to_lowercase().as_str() {
                "txt" | "text" => "plain",
                "md" | "markdown" => "markdown",
                "rst" => "restructuredtext",
                "log" => "log",
                _ => return None,
            }
            .to_string())
        })
}

/// Check if a path should be skipped during directory walks
pub fn should_ignore(path: &Path) -> bool {
    let path_str = path.to_string_lossy();

    let ignore_patterns = [
        ".git/",
        ".svn/",
        ".hg/",
        "node_modules/",
        "target/",
        "__pycache__/",
        ".venv/",
        "venv/",
    ];

    ignore_patterns.iter().any(|p| path_str.contains(p))
}

/// Compute the SHA-256 hash of a file's contents
pub fn hash_file(path: &Path) -> Result<String> {
    let contents =
        fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    let mut hasher = Sha256::new();
    hasher.update(&contents);
    Ok(hex::encode(hasher.finalize()))
}

/// Build chunk records for a single document's text
pub fn chunk_document(
    source: &str,
    text: &str,
    config: &ChunkerConfig,
) -> Result<Vec<DocumentChunk>> {
    let chunks = chunk_by_characters(text, config)
        .with_context(|| format!("Failed to chunk document: {source}"))?;

    Ok(chunks
        .into_iter()
        .enumerate()
        .map(|(index, content)| DocumentChunk {
            id: Uuid::new_v4().to_string(),
            source: source.to_string(),
            index,
            char_count: content.chars().count(),
            word_count: content.split_whitespace().count(),
            content,
        })
        .collect())
}

/// Walk `root` and collect supported documents with their contents.
///
/// Unreadable files are skipped with a warning rather than failing the
/// whole scan; unsupported extensions are ignored silently.
pub fn collect_documents(root: &Path) -> Result<Vec<(DocumentInfo, String)>> {
    info!(root = %root.display(), "scanning for documents");

    let mut docs = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| !should_ignore(e.path()))
    {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let kind = match detect_kind(path) {
            Some(kind) => kind,
            None => continue,
        };

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping unreadable file");
                continue;
            }
        };

        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to stat {}", path.display()))?;
        let hash = hash_file(path)?;

        let relative = path
            .strip_prefix(root)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string();

        docs.push((
            DocumentInfo {
                path: relative,
                hash,
                size: metadata.len(),
                kind,
            },
            content,
        ));
    }

    info!(documents = docs.len(), "scan complete");
    Ok(docs)
}

/// Ingest every supported document under `root`: collect, chunk, report.
///
/// Uses the character-window strategy, whose lossless-tail policy means no
/// document content is silently dropped.
pub fn ingest_directory(
    root: &Path,
    config: &ChunkerConfig,
) -> Result<(IngestReport, Vec<DocumentChunk>)> {
    // Fail fast on bad configuration before touching the filesystem.
    config.validate()?;

    let documents = collect_documents(root)?;

    let mut all_chunks = Vec::new();
    for (doc, content) in &documents {
        let mut records = chunk_document(&doc.path, content, config)?;
        debug!(source = %doc.path, chunks = records.len(), "chunked document");
        all_chunks.append(&mut records);
    }

    let texts: Vec<String> = all_chunks.iter().map(|c| c.content.clone()).collect();
    let report = IngestReport {
        generated_at: Utc::now().to_rfc3339(),
        root: root.display().to_string(),
        document_count: documents.len(),
        chunk_count: all_chunks.len(),
        config: config.clone(),
        stats: chunk_info(&texts),
    };

    Ok((report, all_chunks))
}
