//! Window-based chunking strategies: character, word, sliding, and
//! fixed-overlap.

use tracing::debug;

use super::boundary::{ends_sentence, snap_to_sentence_end, snap_to_word_boundary};
use super::error::ChunkError;
use super::types::{ChunkMethod, ChunkerConfig};
use super::{MIN_TAIL_DIVISOR, SENTENCE_LOOKAHEAD_WORDS};

/// Split `text` into fixed-size character windows with configurable overlap.
///
/// - Windows are `chunk_size` characters; the final window takes all
///   remaining text, so no trailing content is lost.
/// - With `preserve_sentences` or `preserve_words`, a window end snaps
///   backward to the nearest sentence terminator or whitespace within a
///   bounded look-back; sentence snapping wins when both are enabled.
/// - The cursor advance is clamped to at least one character, so the loop
///   makes progress even when a window snapped far back.
pub fn chunk_by_characters(text: &str, config: &ChunkerConfig) -> Result<Vec<String>, ChunkError> {
    config.validate()?;

    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let chars: Vec<char> = text.chars().collect();
    let mut chunks = Vec::new();
    let mut start = 0;

    while start < chars.len() {
        let mut end = start + config.chunk_size;

        // Final window: take everything that remains.
        if end >= chars.len() {
            push_trimmed(&mut chunks, &chars[start..]);
            break;
        }

        end = adjust_end(&chars, start, end, config);
        push_trimmed(&mut chunks, &chars[start..end]);

        // Overlap the next window, but never stall the cursor.
        start = (start + 1).max(end.saturating_sub(config.overlap));
    }

    debug!(chunks = chunks.len(), "character chunking complete");
    Ok(chunks)
}

/// Move a window end backward onto a boundary, if the config asks for it.
fn adjust_end(chars: &[char], start: usize, end: usize, config: &ChunkerConfig) -> usize {
    if config.preserve_sentences {
        if let Some(snapped) = snap_to_sentence_end(chars, start, end) {
            return snapped;
        }
    }
    if config.preserve_words {
        if let Some(snapped) = snap_to_word_boundary(chars, start, end) {
            return snapped;
        }
    }
    end
}

/// Split `text` into fixed-size word windows with configurable overlap.
///
/// With `preserve_sentences`, a window that does not already end on a
/// sentence terminator is extended by up to [`SENTENCE_LOOKAHEAD_WORDS`]
/// words to reach one. Note the asymmetry with [`chunk_by_characters`]:
/// the word strategy looks AHEAD for a boundary while the character
/// strategy looks BACK.
pub fn chunk_by_words(text: &str, config: &ChunkerConfig) -> Result<Vec<String>, ChunkError> {
    config.validate()?;

    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return Ok(Vec::new());
    }

    let mut chunks = Vec::new();
    let mut start = 0;

    while start < words.len() {
        let mut end = start + config.chunk_size;

        if end >= words.len() {
            chunks.push(words[start..].join(" "));
            break;
        }

        if config.preserve_sentences && !ends_sentence(words[end - 1]) {
            let horizon = (end + SENTENCE_LOOKAHEAD_WORDS).min(words.len());
            if let Some(offset) = words[end..horizon].iter().position(|w| ends_sentence(w)) {
                end += offset + 1;
            }
        }

        chunks.push(words[start..end].join(" "));
        start = (start + 1).max(end.saturating_sub(config.overlap));
    }

    debug!(chunks = chunks.len(), "word chunking complete");
    Ok(chunks)
}

/// Slide a fixed-size character window across `text` by a constant step.
///
/// Unlike [`chunk_by_characters`], the cursor ignores content: it advances
/// by `step_size` every iteration (default `max(1, chunk_size - overlap)`).
///
/// The trailing fragment is kept only when its trimmed length exceeds
/// `chunk_size / 4`; smaller tails are DROPPED. This is a deliberate
/// lossy-tail policy to avoid emitting tiny fragments; callers that need
/// full coverage of the input should use [`chunk_by_characters`] instead.
pub fn chunk_sliding_window(
    text: &str,
    config: &ChunkerConfig,
    step_size: Option<usize>,
) -> Result<Vec<String>, ChunkError> {
    config.validate()?;
    if step_size == Some(0) {
        return Err(ChunkError::ZeroStep);
    }
    let step = step_size.unwrap_or_else(|| (config.chunk_size - config.overlap).max(1));

    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let chars: Vec<char> = text.chars().collect();
    let mut chunks = Vec::new();
    let mut start = 0;

    while start < chars.len() {
        if start + config.chunk_size > chars.len() {
            // Minimum-viable-tail rule: fragments at or below a quarter of
            // the window size are not worth emitting.
            let tail: String = chars[start..].iter().collect();
            let tail = tail.trim();
            if tail.chars().count() > config.chunk_size / MIN_TAIL_DIVISOR {
                chunks.push(tail.to_string());
            } else if !tail.is_empty() {
                debug!(tail_chars = tail.chars().count(), "dropping sub-minimum tail");
            }
            break;
        }

        let mut end = start + config.chunk_size;
        if config.preserve_words {
            if let Some(snapped) = snap_to_word_boundary(&chars, start, end) {
                end = snapped;
            }
        }

        push_trimmed(&mut chunks, &chars[start..end]);
        start += step;
    }

    Ok(chunks)
}

/// Chunk with exact, predictable overlap and no boundary adjustment.
///
/// The cursor advances by exactly `chunk_size - overlap` characters or
/// words, so the tail of each chunk and the head of the next are identical
/// for `overlap` units. The final chunk takes whatever remains, with no
/// minimum-size filter. Windows are emitted verbatim (untrimmed); only
/// whitespace-only windows are skipped.
pub fn chunk_fixed_overlap(
    text: &str,
    config: &ChunkerConfig,
    method: ChunkMethod,
) -> Result<Vec<String>, ChunkError> {
    config.validate()?;

    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let step = config.chunk_size - config.overlap;
    let mut chunks = Vec::new();

    match method {
        ChunkMethod::Character => {
            let chars: Vec<char> = text.chars().collect();
            let mut start = 0;
            while start < chars.len() {
                let end = start + config.chunk_size;
                if end >= chars.len() {
                    push_verbatim(&mut chunks, chars[start..].iter().collect());
                    break;
                }
                push_verbatim(&mut chunks, chars[start..end].iter().collect());
                start += step;
            }
        }
        ChunkMethod::Word => {
            let words: Vec<&str> = text.split_whitespace().collect();
            let mut start = 0;
            while start < words.len() {
                let end = start + config.chunk_size;
                if end >= words.len() {
                    chunks.push(words[start..].join(" "));
                    break;
                }
                chunks.push(words[start..end].join(" "));
                start += step;
            }
        }
    }

    Ok(chunks)
}

/// Push a trimmed window, dropping windows that trim to nothing.
fn push_trimmed(chunks: &mut Vec<String>, window: &[char]) {
    let text: String = window.iter().collect();
    let trimmed = text.trim();
    if !trimmed.is_empty() {
        chunks.push(trimmed.to_string());
    }
}

/// Push a window verbatim, skipping whitespace-only windows.
fn push_verbatim(chunks: &mut Vec<String>, window: String) {
    if !window.trim().is_empty() {
        chunks.push(window);
    }
}
