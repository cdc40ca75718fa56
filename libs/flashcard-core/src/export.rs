//! Serializers for CSV, JSON and Anki-style plain text.

use crate::error::{FlashcardError, Result};
use crate::types::{Flashcard, Subject};

const CSV_HEADER: [&str; 3] = ["Question", "Answer", "Difficulty"];

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Anki,
}

impl ExportFormat {
    /// Get the format name as used in URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Anki => "anki",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            "anki" | "txt" => Some(Self::Anki),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Anki => "txt",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Csv => "text/csv",
            Self::Json => "application/json",
            Self::Anki => "text/plain",
        }
    }

    /// Download file name, e.g. `flashcards_computer science.csv`.
    pub fn file_name(&self, subject: Subject) -> String {
        format!("flashcards_{}.{}", subject.key(), self.extension())
    }

    /// Serialize cards in this format.
    pub fn render(&self, cards: &[Flashcard]) -> Result<String> {
        match self {
            Self::Csv => to_csv(cards),
            Self::Json => to_json(cards),
            Self::Anki => Ok(to_anki(cards)),
        }
    }
}

/// CSV with a `Question,Answer,Difficulty` header and CRLF record endings.
pub fn to_csv(cards: &[Flashcard]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for card in cards {
        writer.write_record([
            card.question.as_str(),
            card.answer.as_str(),
            card.difficulty.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| FlashcardError::Encoding(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| FlashcardError::Encoding(e.to_string()))
}

/// Pretty-printed JSON array with 2-space indentation.
pub fn to_json(cards: &[Flashcard]) -> Result<String> {
    serde_json::to_string_pretty(cards).map_err(|e| FlashcardError::Encoding(e.to_string()))
}

/// One `question;answer;difficulty` line per card.
///
/// Semicolons inside fields are not escaped.
pub fn to_anki(cards: &[Flashcard]) -> String {
    cards
        .iter()
        .map(|card| format!("{};{};{}", card.question, card.answer, card.difficulty))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Difficulty;
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<Flashcard> {
        vec![
            Flashcard::new("What is DNA?", "A molecule, double-stranded", Difficulty::Easy),
            Flashcard::new("Quote \"this\"?", "Line one\nline two", Difficulty::Hard),
        ]
    }

    #[test]
    fn empty_exports() {
        assert_eq!(to_csv(&[]).unwrap(), "Question,Answer,Difficulty\r\n");
        assert_eq!(to_json(&[]).unwrap(), "[]");
        assert_eq!(to_anki(&[]), "");
    }

    #[test]
    fn csv_quotes_special_fields() {
        let csv = to_csv(&sample()[..1]).unwrap();
        assert_eq!(
            csv,
            "Question,Answer,Difficulty\r\nWhat is DNA?,\"A molecule, double-stranded\",Easy\r\n"
        );
    }

    #[test]
    fn csv_round_trips_through_reader() {
        let cards = sample();
        let csv = to_csv(&cards).unwrap();

        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();

        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][1], "A molecule, double-stranded");
        assert_eq!(&rows[1][0], "Quote \"this\"?");
        assert_eq!(&rows[1][1], "Line one\nline two");
        assert_eq!(&rows[1][2], "Hard");
    }

    #[test]
    fn json_round_trips() {
        let cards = sample();
        let json = to_json(&cards).unwrap();
        let parsed: Vec<Flashcard> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, cards);
    }

    #[test]
    fn json_uses_two_space_indent() {
        let json = to_json(&sample()[..1]).unwrap();
        assert_eq!(
            json,
            "[\n  {\n    \"question\": \"What is DNA?\",\n    \"answer\": \"A molecule, double-stranded\",\n    \"difficulty\": \"Easy\"\n  }\n]"
        );
    }

    #[test]
    fn anki_joins_fields_with_semicolons() {
        let cards = vec![
            Flashcard::new("Q1", "A1", Difficulty::Easy),
            Flashcard::new("Q2", "A; with semicolon", Difficulty::Medium),
        ];
        assert_eq!(to_anki(&cards), "Q1;A1;Easy\nQ2;A; with semicolon;Medium");
    }

    #[test]
    fn format_metadata() {
        assert_eq!(ExportFormat::from_str("CSV"), Some(ExportFormat::Csv));
        assert_eq!(ExportFormat::from_str("xml"), None);
        assert_eq!(
            ExportFormat::Anki.file_name(Subject::Biology),
            "flashcards_biology.txt"
        );
        assert_eq!(ExportFormat::Json.content_type(), "application/json");
    }
}
