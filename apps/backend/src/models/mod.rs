//! API request and response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use flashcard_core::text::truncate_chars;

// Re-export shared types from flashcard-core
pub use flashcard_core::types::{Difficulty, Flashcard, GenerationRequest, Subject};

pub use crate::services::generation::Strategy;

/// Characters of extracted content shown as a preview.
pub const PREVIEW_CHARS: usize = 1000;

fn default_count() -> usize {
    10
}

/// Which builder handles a generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationMode {
    Remote,
    Offline,
}

impl Default for GenerationMode {
    fn default() -> Self {
        Self::Remote
    }
}

// === Generation ===

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub content: String,
    #[serde(default)]
    pub subject: Subject,
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default)]
    pub mode: GenerationMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub cards: Vec<Flashcard>,
    pub strategy: Strategy,
    pub warnings: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

// === Export ===

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportRequest {
    #[serde(default)]
    pub subject: Subject,
    pub cards: Vec<Flashcard>,
}

// === Extraction ===

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractResponse {
    pub content: String,
    pub char_count: usize,
    pub word_count: usize,
    pub preview: String,
}

impl ExtractResponse {
    /// Build the response with content stats and a preview.
    pub fn from_content(content: String) -> Self {
        let char_count = content.chars().count();
        let word_count = content.split_whitespace().count();
        let preview = if char_count > PREVIEW_CHARS {
            format!("{}...", truncate_chars(&content, PREVIEW_CHARS))
        } else {
            content.clone()
        };

        Self {
            content,
            char_count,
            word_count,
            preview,
        }
    }
}

// === Subjects ===

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectListResponse {
    pub subjects: Vec<Subject>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleDeckResponse {
    pub subject: Subject,
    pub cards: Vec<Flashcard>,
}
