//! Word-bounded document chunking.
//!
//! Oversized documents are split into fixed-size word windows before
//! summarization. The boundaries matter: the synthesis step presents the
//! per-chunk summaries as "Part 1", "Part 2", and so on, so chunk order must
//! be deterministic and boundaries must never fall mid-word.

use super::types::ChunkingError;

/// Default word budget per chunk for documents that exceed a single prompt.
pub const DEFAULT_CHUNK_MAX_WORDS: usize = 8000;

/// Split text into ordered chunks of at most `max_words` whitespace-delimited
/// words each.
///
/// Every chunk except possibly the last holds exactly `max_words` words, so
/// the chunk count is `ceil(word_count / max_words)`. Joining the chunks'
/// words back together reproduces the original word sequence with whitespace
/// normalized to single spaces. Whitespace-only input yields an empty vector.
pub fn chunk_words(text: &str, max_words: usize) -> Result<Vec<String>, ChunkingError> {
    if max_words == 0 {
        return Err(ChunkingError::InvalidChunkSize);
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return Ok(Vec::new());
    }

    let chunks = words
        .chunks(max_words)
        .map(|window| window.join(" "))
        .collect();
    Ok(chunks)
}

/// Count the whitespace-delimited words in a document.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_words_respects_budget() {
        let chunks = chunk_words("one two three four five", 2).expect("chunking succeeded");
        assert_eq!(chunks, vec!["one two", "three four", "five"]);
    }

    #[test]
    fn chunk_words_handles_empty_and_whitespace_input() {
        assert!(chunk_words("", 4).expect("chunking succeeded").is_empty());
        assert!(
            chunk_words("  \n\t ", 4)
                .expect("chunking succeeded")
                .is_empty()
        );
    }

    #[test]
    fn chunk_words_rejects_zero_budget() {
        let error = chunk_words("hello", 0).unwrap_err();
        assert!(matches!(error, ChunkingError::InvalidChunkSize));
    }

    #[test]
    fn chunk_count_is_ceiling_of_word_count() {
        let text: Vec<String> = (0..16001).map(|i| format!("w{i}")).collect();
        let text = text.join(" ");
        let chunks = chunk_words(&text, 8000).expect("chunking succeeded");
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].split_whitespace().count(), 8000);
        assert_eq!(chunks[1].split_whitespace().count(), 8000);
        assert_eq!(chunks[2].split_whitespace().count(), 1);
    }

    #[test]
    fn chunk_words_preserves_word_sequence() {
        let text = "alpha\tbeta  gamma\ndelta epsilon";
        let chunks = chunk_words(text, 2).expect("chunking succeeded");
        let rejoined: Vec<&str> = chunks
            .iter()
            .flat_map(|chunk| chunk.split_whitespace())
            .collect();
        let original: Vec<&str> = text.split_whitespace().collect();
        assert_eq!(rejoined, original);
    }

    #[test]
    fn chunk_boundaries_are_deterministic() {
        let text: Vec<String> = (0..500).map(|i| format!("word{i}")).collect();
        let text = text.join(" ");
        let first = chunk_words(&text, 64).expect("chunking succeeded");
        let second = chunk_words(&text, 64).expect("chunking succeeded");
        assert_eq!(first, second);
    }

    #[test]
    fn single_chunk_when_under_budget() {
        let chunks = chunk_words("hello world", 30).expect("chunking succeeded");
        assert_eq!(chunks, vec!["hello world"]);
    }
}
