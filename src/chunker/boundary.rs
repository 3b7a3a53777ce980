//! Boundary detection shared by the chunking strategies: compiled split
//! patterns, sentence fragment handling, and window-end snapping.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{SENTENCE_LOOKBACK, WORD_LOOKBACK};

/// Sentence terminators recognized throughout the engine
pub(crate) const SENTENCE_TERMINATORS: &[char] = &['.', '!', '?'];

/// One or more sentence terminators followed by whitespace
static SENTENCE_SPLIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+\s+").expect("sentence pattern compiles"));

/// A blank line: newline, optional intervening whitespace, newline
static PARAGRAPH_SPLIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n").expect("paragraph pattern compiles"));

/// Split `text` into sentence fragments.
///
/// Fragments are trimmed and stripped of trailing terminators. The final
/// fragment keeps its terminator after the regex split, and stripping it
/// keeps rejoined output from doubling periods. Empty fragments are dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
    SENTENCE_SPLIT
        .split(text)
        .map(|frag| frag.trim().trim_end_matches(SENTENCE_TERMINATORS).trim_end())
        .filter(|frag| !frag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split `text` into trimmed, non-empty paragraphs at blank-line boundaries.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    PARAGRAPH_SPLIT
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Rejoin a group of sentence fragments into a single chunk.
pub(crate) fn join_sentences(group: &[String]) -> String {
    format!("{}.", group.join(". "))
}

/// Does this word close a sentence?
pub(crate) fn ends_sentence(word: &str) -> bool {
    word.ends_with(SENTENCE_TERMINATORS)
}

/// Snap a window end back to just after a sentence terminator.
///
/// Scans at most [`SENTENCE_LOOKBACK`] characters back from `end` for a
/// terminator immediately followed by whitespace. Callers must guarantee
/// `end < chars.len()`, which keeps the follow-up index in bounds.
pub(crate) fn snap_to_sentence_end(chars: &[char], start: usize, end: usize) -> Option<usize> {
    let floor = start.max(end.saturating_sub(SENTENCE_LOOKBACK));
    for i in (floor..end).rev() {
        if SENTENCE_TERMINATORS.contains(&chars[i]) && chars[i + 1].is_whitespace() {
            return Some(i + 1);
        }
    }
    None
}

/// Snap a window end back to just after the nearest whitespace, so the
/// window does not cut a word in half. Scans at most [`WORD_LOOKBACK`]
/// characters back from `end`.
pub(crate) fn snap_to_word_boundary(chars: &[char], start: usize, end: usize) -> Option<usize> {
    let floor = start.max(end.saturating_sub(WORD_LOOKBACK));
    for i in (floor..end).rev() {
        if chars[i].is_whitespace() {
            return Some(i + 1);
        }
    }
    None
}
