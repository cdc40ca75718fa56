//! Test fixtures and factory functions for creating test data.

use serde_json::{json, Value};

use flashcard_core::{Difficulty, Flashcard};

/// Photosynthesis lecture notes.
pub const PHOTOSYNTHESIS: &str = "Photosynthesis: the process by which plants convert light energy into chemical energy. \
The chloroplast contains chlorophyll that absorbs light energy. \
Water molecules are split during the light reactions (releasing oxygen). \
ATP and NADPH are produced and then used by the Calvin cycle. \
The Calvin cycle converts carbon dioxide into glucose in the stroma.";

/// Content with a single qualifying sentence.
pub const ONE_SENTENCE: &str =
    "The French Revolution began in 1789 and reshaped politics across Europe.";

/// Build a generation request body.
pub fn generate_body(content: &str, subject: &str, count: usize, mode: &str) -> Value {
    json!({
        "content": content,
        "subject": subject,
        "count": count,
        "mode": mode,
    })
}

/// Cards used by export tests.
pub fn export_cards() -> Vec<Flashcard> {
    vec![
        Flashcard::new(
            "What is photosynthesis?",
            "Conversion of light, water and CO2 into glucose",
            Difficulty::Medium,
        ),
        Flashcard::new("Where is chlorophyll?", "In the chloroplast", Difficulty::Easy),
    ]
}
