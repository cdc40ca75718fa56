//! Core flashcard generation library shared by the backend.
//!
//! Provides:
//! - Sentence tokenization and chunking of source content
//! - Rule-based card synthesis with subject filler tables
//! - Prompt templates and parsing of model-generated cards
//! - CSV, JSON and Anki exporters
//! - Shared types (Flashcard, Difficulty, Subject, GenerationRequest)

pub mod chunker;
pub mod error;
pub mod export;
pub mod filler;
pub mod heuristic;
pub mod parser;
pub mod prompt;
pub mod samples;
pub mod text;
pub mod types;

pub use error::{FlashcardError, Result};
pub use export::{to_anki, to_csv, to_json, ExportFormat};
pub use filler::FillerTable;
pub use heuristic::HeuristicCardBuilder;
pub use parser::parse_card;
pub use prompt::{prompts_for_chunk, QuestionKind};
pub use types::{Difficulty, Flashcard, GenerationRequest, Subject};
