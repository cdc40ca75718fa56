//! Splits source content into bounded-length chunks on sentence boundaries.

use crate::text::{sentences, truncate_chars};

/// Default maximum chunk length, in characters.
pub const DEFAULT_CHUNK_SIZE: usize = 800;

/// Partition `content` into chunks of whole sentences.
///
/// Sentences are accumulated greedily; a chunk is closed when appending the
/// next sentence would make it reach `max_length` characters. A single
/// sentence longer than `max_length` becomes its own oversized chunk.
/// Always returns at least one chunk.
pub fn split(content: &str, max_length: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for sentence in sentences(content) {
        let sentence_len = sentence.chars().count();

        if current.is_empty() {
            current.push_str(sentence);
            current_len = sentence_len;
            continue;
        }

        let joined_len = current_len + 1 + sentence_len;
        if joined_len < max_length {
            current.push(' ');
            current.push_str(sentence);
            current_len = joined_len;
        } else {
            chunks.push(std::mem::take(&mut current));
            current.push_str(sentence);
            current_len = sentence_len;
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    if chunks.is_empty() {
        chunks.push(truncate_chars(content, max_length).to_string());
    }

    chunks
}
