//! Core types for flashcard generation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Estimated difficulty of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Medium
    }
}

impl Difficulty {
    /// Get the difficulty label as written in exports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single question/answer card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub difficulty: Difficulty,
}

impl Flashcard {
    pub fn new(question: impl Into<String>, answer: impl Into<String>, difficulty: Difficulty) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            difficulty,
        }
    }
}

/// Subject area of the source material.
///
/// Parsed case-insensitively, serialized by display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Subject {
    General,
    Biology,
    History,
    ComputerScience,
    Mathematics,
    Physics,
    Chemistry,
    Literature,
    Psychology,
    Economics,
}

impl Default for Subject {
    fn default() -> Self {
        Self::General
    }
}

impl Subject {
    /// Every subject, in menu order.
    pub const ALL: [Subject; 10] = [
        Self::General,
        Self::Biology,
        Self::History,
        Self::ComputerScience,
        Self::Mathematics,
        Self::Physics,
        Self::Chemistry,
        Self::Literature,
        Self::Psychology,
        Self::Economics,
    ];

    /// Display name, e.g. "Computer Science".
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Biology => "Biology",
            Self::History => "History",
            Self::ComputerScience => "Computer Science",
            Self::Mathematics => "Mathematics",
            Self::Physics => "Physics",
            Self::Chemistry => "Chemistry",
            Self::Literature => "Literature",
            Self::Psychology => "Psychology",
            Self::Economics => "Economics",
        }
    }

    /// Lowercase lookup key, e.g. "computer science".
    pub fn key(&self) -> String {
        self.as_str().to_lowercase()
    }

    /// Parse from a display name or key, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.as_str().eq_ignore_ascii_case(wanted))
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Subject {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        Self::from_name(&value).ok_or_else(|| format!("unknown subject: {}", value))
    }
}

impl From<Subject> for String {
    fn from(subject: Subject) -> Self {
        subject.as_str().to_string()
    }
}

/// Input to the synthesis pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub content: String,
    pub subject: Subject,
    pub count: usize,
}

impl GenerationRequest {
    pub fn new(content: impl Into<String>, subject: Subject, count: usize) -> Self {
        Self {
            content: content.into(),
            subject,
            count,
        }
    }
}
