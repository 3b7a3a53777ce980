use super::*;

fn config(chunk_size: usize, overlap: usize) -> ChunkerConfig {
    ChunkerConfig {
        chunk_size,
        overlap,
        preserve_words: false,
        preserve_sentences: false,
    }
}

// ── Coverage ────────────────────────────────────────────────────────────

#[test]
fn character_windows_cover_the_whole_input() {
    let text = "a".repeat(250);
    let chunks = chunk_by_characters(&text, &config(100, 20)).unwrap();

    // Starts land at 0, 80, 160; the final window takes indices 160..250.
    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks[0].len(), 100);
    assert_eq!(chunks[1].len(), 100);
    assert_eq!(chunks[2].len(), 90);
    let covered: usize = chunks.iter().map(String::len).sum::<usize>()
        - 20 * (chunks.len() - 1);
    assert_eq!(covered, 250);
}

#[test]
fn word_windows_keep_the_tail() {
    let chunks = chunk_by_words("one two three four five", &config(2, 0)).unwrap();
    assert_eq!(chunks, vec!["one two", "three four", "five"]);
}

#[test]
fn fixed_overlap_reaches_the_end_of_text() {
    let chunks =
        chunk_fixed_overlap("abcdefghij", &config(4, 2), ChunkMethod::Character).unwrap();
    assert_eq!(chunks, vec!["abcd", "cdef", "efgh", "ghij"]);
}

#[test]
fn sliding_window_is_the_only_lossy_strategy() {
    // 17 chars, window 8: character chunking keeps the 1-char tail, the
    // sliding window drops it.
    let text = "abcdefghijklmnopq";
    let full = chunk_by_characters(text, &config(8, 0)).unwrap();
    assert_eq!(full.last().unwrap(), "q");

    let lossy = chunk_sliding_window(text, &config(8, 0), None).unwrap();
    assert_eq!(lossy, vec!["abcdefgh", "ijklmnop"]);
}

// ── Empty input ─────────────────────────────────────────────────────────

#[test]
fn empty_and_whitespace_input_yield_no_chunks() {
    for text in ["", "   ", "\n\t  \n"] {
        assert!(chunk_by_characters(text, &config(50, 10)).unwrap().is_empty());
        assert!(chunk_by_words(text, &config(50, 10)).unwrap().is_empty());
        assert!(chunk_sliding_window(text, &config(50, 10), None).unwrap().is_empty());
        assert!(chunk_fixed_overlap(text, &config(50, 10), ChunkMethod::Character)
            .unwrap()
            .is_empty());
        assert!(chunk_fixed_overlap(text, &config(50, 10), ChunkMethod::Word)
            .unwrap()
            .is_empty());
        assert!(chunk_by_sentences(text, 2).unwrap().is_empty());
        assert!(chunk_by_paragraphs(text).is_empty());
        assert!(chunk_by_statistical_boundaries(text, 5).unwrap().is_empty());
    }
}

// ── Configuration errors ────────────────────────────────────────────────

#[test]
fn oversized_overlap_is_rejected_before_processing() {
    let bad = config(50, 100);
    assert!(matches!(
        chunk_by_characters("some text", &bad),
        Err(ChunkError::OverlapExceedsChunkSize { overlap: 100, chunk_size: 50 })
    ));
    assert!(chunk_by_words("some text", &bad).is_err());
    assert!(chunk_sliding_window("some text", &bad, None).is_err());
    assert!(chunk_fixed_overlap("some text", &bad, ChunkMethod::Word).is_err());
}

#[test]
fn zero_chunk_size_is_rejected_everywhere() {
    let bad = config(0, 0);
    assert!(matches!(
        chunk_by_characters("text", &bad),
        Err(ChunkError::ZeroChunkSize)
    ));
    assert!(chunk_by_words("text", &bad).is_err());
    assert!(chunk_sliding_window("text", &bad, None).is_err());
    assert!(chunk_fixed_overlap("text", &bad, ChunkMethod::Character).is_err());
}

// ── Progress ────────────────────────────────────────────────────────────

#[test]
fn maximum_overlap_still_terminates() {
    // overlap = chunk_size - 1 forces the +1 advance clamp every step.
    let text = "abcdefghijklmnopqrst";
    let chunks = chunk_by_characters(text, &config(5, 4)).unwrap();
    assert_eq!(chunks.len(), text.len() - 4);
    assert_eq!(chunks.first().unwrap(), "abcde");
    assert_eq!(chunks.last().unwrap(), "pqrst");

    let words = chunk_by_words("a b c d e f g h", &config(3, 2)).unwrap();
    assert_eq!(words.len(), 6);
    assert_eq!(words.first().unwrap(), "a b c");
    assert_eq!(words.last().unwrap(), "f g h");
}

#[test]
fn chunk_order_follows_source_order() {
    let text = "alpha bravo charlie delta echo foxtrot golf hotel india juliet";
    let chunks = chunk_by_words(text, &config(3, 1)).unwrap();

    // Each chunk's first word must appear no earlier than the previous
    // chunk's first word in the source.
    let mut last_pos = 0;
    for chunk in &chunks {
        let first_word = chunk.split_whitespace().next().unwrap();
        let pos = text.find(first_word).unwrap();
        assert!(pos >= last_pos, "chunk out of order: {chunk}");
        last_pos = pos;
    }
}

// ── Overlap guarantees ──────────────────────────────────────────────────

#[test]
fn fixed_overlap_tail_equals_next_head() {
    let text = "abcdefghijklmnopqrstuvwxyz0123456789";
    let overlap = 4;
    let chunks =
        chunk_fixed_overlap(text, &config(10, overlap), ChunkMethod::Character).unwrap();

    assert!(chunks.len() >= 2);
    for pair in chunks.windows(2) {
        let tail: String = pair[0].chars().rev().take(overlap).collect::<Vec<_>>()
            .into_iter().rev().collect();
        let head: String = pair[1].chars().take(overlap).collect();
        assert_eq!(tail, head, "overlap mismatch between {:?} and {:?}", pair[0], pair[1]);
    }
}

// ── Boundary preservation quirk ─────────────────────────────────────────

#[test]
fn sentence_preservation_directions_differ_by_strategy() {
    // Character windows snap BACK to a terminator already inside the
    // window; word windows extend FORWARD to one just past it. Both
    // behaviors are intentional and must not be unified.
    let text = "Short one. A somewhat longer second sentence follows here.";

    let char_cfg = ChunkerConfig {
        chunk_size: 25,
        overlap: 0,
        preserve_words: false,
        preserve_sentences: true,
    };
    let char_chunks = chunk_by_characters(text, &char_cfg).unwrap();
    assert_eq!(char_chunks[0], "Short one.");

    let word_cfg = ChunkerConfig {
        chunk_size: 4,
        overlap: 0,
        preserve_words: false,
        preserve_sentences: true,
    };
    let word_chunks = chunk_by_words(text, &word_cfg).unwrap();
    // The 4-word window ends mid-sentence at "somewhat"; "here." sits
    // exactly at the 5-word horizon, so the window grows to swallow the
    // whole second sentence.
    assert_eq!(word_chunks.len(), 1);
    assert_eq!(word_chunks[0], text);
}

// ── Non-emptiness ───────────────────────────────────────────────────────

#[test]
fn no_strategy_emits_blank_chunks() {
    let text = "word   \n\n   another    \n\n\n  third  ";
    let all = [
        chunk_by_characters(text, &config(6, 2)).unwrap(),
        chunk_by_words(text, &config(2, 1)).unwrap(),
        chunk_sliding_window(text, &config(6, 2), None).unwrap(),
        chunk_fixed_overlap(text, &config(6, 2), ChunkMethod::Character).unwrap(),
        chunk_by_sentences(text, 2).unwrap(),
        chunk_by_paragraphs(text),
        chunk_by_statistical_boundaries(text, 2).unwrap(),
    ];
    for chunks in &all {
        for chunk in chunks {
            assert!(!chunk.trim().is_empty());
        }
    }
}

// ── Statistics over real output ─────────────────────────────────────────

#[test]
fn stats_describe_a_chunk_run() {
    let text = "The quick brown fox jumps over the lazy dog and keeps on running far away.";
    let chunks = chunk_by_words(text, &config(5, 0)).unwrap();
    let info = chunk_info(&chunks);

    assert_eq!(info.count, chunks.len());
    assert_eq!(info.total_words, 15);
    assert_eq!(info.max_words, 5);
    assert!(info.avg_chars > 0.0);

    // Same input, same answer.
    assert_eq!(info, chunk_info(&chunks));
}
