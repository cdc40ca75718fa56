//! Subject-keyed generic cards used to pad heuristic shortfalls.

use std::collections::HashMap;

use crate::error::{FlashcardError, Result};
use crate::types::{Difficulty, Flashcard};

/// Key of the table entry used for subjects without their own entry.
pub const GENERAL_KEY: &str = "general";

/// Mapping from lowercase subject key to an ordered list of filler cards.
#[derive(Debug, Clone, PartialEq)]
pub struct FillerTable {
    entries: HashMap<String, Vec<Flashcard>>,
}

impl Default for FillerTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl FillerTable {
    /// The built-in table.
    pub fn builtin() -> Self {
        let mut entries = HashMap::new();
        entries.insert(
            "biology".to_string(),
            vec![
                Flashcard::new(
                    "What biological process is described in the content?",
                    "Refer to the main processes mentioned in the material.",
                    Difficulty::Hard,
                ),
                Flashcard::new(
                    "What are the key biological components discussed?",
                    "Based on the content provided.",
                    Difficulty::Medium,
                ),
            ],
        );
        entries.insert(
            "history".to_string(),
            vec![
                Flashcard::new(
                    "What historical period or event is discussed?",
                    "As described in the content.",
                    Difficulty::Medium,
                ),
                Flashcard::new(
                    "What were the key causes or effects mentioned?",
                    "According to the material provided.",
                    Difficulty::Hard,
                ),
            ],
        );
        entries.insert(
            GENERAL_KEY.to_string(),
            vec![
                Flashcard::new(
                    "What is the main topic discussed?",
                    "Based on the overall content.",
                    Difficulty::Easy,
                ),
                Flashcard::new(
                    "What are the key points mentioned?",
                    "As outlined in the material.",
                    Difficulty::Medium,
                ),
            ],
        );
        Self { entries }
    }

    /// Load a table from JSON of the form `{"subject": [card, ...], ...}`.
    ///
    /// Keys are lowercased. The table must contain a `general` entry.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: HashMap<String, Vec<Flashcard>> = serde_json::from_str(json)?;
        let entries: HashMap<String, Vec<Flashcard>> = raw
            .into_iter()
            .map(|(key, cards)| (key.trim().to_lowercase(), cards))
            .collect();

        if !entries.contains_key(GENERAL_KEY) {
            return Err(FlashcardError::MissingGeneralEntry);
        }

        Ok(Self { entries })
    }

    /// Filler cards for a subject key, falling back to the general entry.
    pub fn for_subject(&self, key: &str) -> &[Flashcard] {
        self.entries
            .get(&key.to_lowercase())
            .or_else(|| self.entries.get(GENERAL_KEY))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
