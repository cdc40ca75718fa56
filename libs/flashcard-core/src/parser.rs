//! Parser for model-generated question/answer text.
//!
//! # Format
//! ```text
//! Question: What is osmosis? Answer: Diffusion of water across a membrane.
//! ```
//! Text without both markers becomes the answer to a generic question.

use crate::text::truncate_chars;
use crate::types::{Difficulty, Flashcard};

const QUESTION_MARKER: &str = "Question:";
const ANSWER_MARKER: &str = "Answer:";

/// Question used when the model leaves the question empty.
pub const DEFAULT_QUESTION: &str = "What is the main concept discussed?";

/// Question used when the model output has no markers.
pub const GENERIC_QUESTION: &str = "What information is provided about this topic?";

/// Characters of the source chunk used when an answer is missing.
pub const EXCERPT_CHARS: usize = 200;

/// Parse generated text into a card, using `source_chunk` to fill a
/// missing answer. Returns `None` when no answer can be produced.
pub fn parse_card(generated: &str, source_chunk: &str) -> Option<Flashcard> {
    if generated.contains(QUESTION_MARKER) && generated.contains(ANSWER_MARKER) {
        if let Some((question, answer)) = split_marked(generated) {
            let question = match question {
                "" => DEFAULT_QUESTION.to_string(),
                q => q.to_string(),
            };
            let answer = match answer {
                "" => excerpt(source_chunk)?,
                a => a.to_string(),
            };
            return Some(Flashcard::new(question, answer, Difficulty::default()));
        }
    }

    let answer = match generated.trim() {
        "" => excerpt(source_chunk)?,
        text => text.to_string(),
    };

    Some(Flashcard::new(GENERIC_QUESTION, answer, Difficulty::default()))
}

/// Trimmed question and answer following the last question marker.
fn split_marked(generated: &str) -> Option<(&str, &str)> {
    let (_, tail) = generated.rsplit_once(QUESTION_MARKER)?;
    let mut parts = tail.split(ANSWER_MARKER);
    let question = parts.next()?.trim();
    let answer = parts.next()?.trim();
    Some((question, answer))
}

fn excerpt(source_chunk: &str) -> Option<String> {
    if source_chunk.trim().is_empty() {
        return None;
    }
    Some(format!("{}...", truncate_chars(source_chunk, EXCERPT_CHARS)))
}
