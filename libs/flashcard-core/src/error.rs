//! Error types for flashcard-core.

use thiserror::Error;

/// Result type alias using FlashcardError.
pub type Result<T> = std::result::Result<T, FlashcardError>;

/// Errors raised while loading configuration tables or encoding exports.
#[derive(Debug, Error)]
pub enum FlashcardError {
    #[error("invalid filler table: {0}")]
    InvalidFillerTable(#[from] serde_json::Error),

    #[error("filler table has no \"general\" entry")]
    MissingGeneralEntry,

    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("export encoding failed: {0}")]
    Encoding(String),
}
