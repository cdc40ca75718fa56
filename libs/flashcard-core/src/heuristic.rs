//! Rule-based card synthesis from sentence structure.
//!
//! Each sentence is classified by the first matching rule:
//! 1. `term: definition` -> "What is {term}?"
//! 2. `base (info)` -> "What additional information is provided about {base}?"
//! 3. Starts with an article -> "What is mentioned about {words 2-4}?"
//! 4. Anything else -> "What key point is made about {subject}?"
//!
//! Shortfalls are padded from the [`FillerTable`].

use crate::filler::FillerTable;
use crate::text::sentences;
use crate::types::{Difficulty, Flashcard, Subject};

/// Sentences shorter than this (in characters, after trimming) are skipped.
pub const MIN_SENTENCE_CHARS: usize = 21;

const ARTICLES: [&str; 3] = ["the", "a", "an"];

/// Deterministic card builder that needs no external calls.
#[derive(Debug, Clone, Default)]
pub struct HeuristicCardBuilder {
    filler: FillerTable,
}

impl HeuristicCardBuilder {
    pub fn new(filler: FillerTable) -> Self {
        Self { filler }
    }

    /// Build at most `count` cards from `content`.
    pub fn build(&self, content: &str, subject: Subject, count: usize) -> Vec<Flashcard> {
        let mut cards: Vec<Flashcard> = sentences(content)
            .into_iter()
            .filter(|s| s.chars().count() >= MIN_SENTENCE_CHARS)
            .take(count)
            .map(|s| classify(s, subject))
            .collect();

        if cards.len() < count {
            let shortfall = count - cards.len();
            let filler = self.filler.for_subject(&subject.key());
            cards.extend(filler.iter().take(shortfall).cloned());
        }

        cards.truncate(count);
        cards
    }
}

fn classify(sentence: &str, subject: Subject) -> Flashcard {
    if let Some((term, definition)) = sentence.split_once(':') {
        return Flashcard::new(
            format!("What is {}?", term.trim()),
            definition.trim(),
            Difficulty::Medium,
        );
    }

    let body = sentence.trim_end_matches('.').trim_end();
    if body.ends_with(')') {
        if let Some((base, rest)) = body.split_once('(') {
            // Nested groups keep only the outermost lead-in: `X (a (b))` -> `a`.
            let info = rest.split('(').next().unwrap_or(rest).replace(')', "");
            return Flashcard::new(
                format!("What additional information is provided about {}?", base.trim()),
                info.trim(),
                Difficulty::Easy,
            );
        }
    }

    // Whole-word match, so "Theories ..." is not read as starting with "the".
    let words: Vec<&str> = sentence.split_whitespace().collect();
    let starts_with_article = words
        .first()
        .is_some_and(|first| ARTICLES.iter().any(|a| first.eq_ignore_ascii_case(a)));
    if starts_with_article && words.len() > 2 {
        let concept = words[1..words.len().min(4)].join(" ").to_lowercase();
        return Flashcard::new(
            format!("What is mentioned about {}?", concept),
            sentence,
            Difficulty::Medium,
        );
    }

    Flashcard::new(
        format!("What key point is made about {}?", subject.key()),
        sentence,
        Difficulty::Medium,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn build(content: &str, subject: Subject, count: usize) -> Vec<Flashcard> {
        HeuristicCardBuilder::default().build(content, subject, count)
    }

    #[test]
    fn definition_sentence() {
        let cards = build("Mitosis: the process of cell division.", Subject::Biology, 1);
        assert_eq!(
            cards,
            vec![Flashcard::new(
                "What is Mitosis?",
                "the process of cell division.",
                Difficulty::Medium
            )]
        );
    }

    #[test]
    fn parenthetical_sentence() {
        let cards = build("Water boils at 100C (at sea level).", Subject::Physics, 1);
        assert_eq!(
            cards,
            vec![Flashcard::new(
                "What additional information is provided about Water boils at 100C?",
                "at sea level",
                Difficulty::Easy
            )]
        );
    }

    #[test]
    fn nested_parenthesis_keeps_first_group() {
        let cards = build(
            "The pH scale runs from 0 to 14 (acidic (below 7)).",
            Subject::Chemistry,
            1,
        );
        assert_eq!(
            cards[0].question,
            "What additional information is provided about The pH scale runs from 0 to 14?"
        );
        assert_eq!(cards[0].answer, "acidic");
        assert_eq!(cards[0].difficulty, Difficulty::Easy);
    }

    #[test]
    fn colon_takes_priority_over_parenthesis() {
        let cards = build("Osmosis: diffusion of water (across membranes).", Subject::Biology, 1);
        assert_eq!(cards[0].question, "What is Osmosis?");
        assert_eq!(cards[0].answer, "diffusion of water (across membranes).");
    }

    #[test]
    fn article_sentence_uses_following_words() {
        let cards = build("The Roman Empire Fell in the fifth century.", Subject::History, 1);
        assert_eq!(cards[0].question, "What is mentioned about roman empire fell?");
        assert_eq!(cards[0].answer, "The Roman Empire Fell in the fifth century.");
        assert_eq!(cards[0].difficulty, Difficulty::Medium);
    }

    #[test]
    fn article_must_be_a_whole_word() {
        let cards = build("Theories explain observations in science.", Subject::Physics, 1);
        assert_eq!(cards[0].question, "What key point is made about physics?");
    }

    #[test]
    fn plain_sentence_uses_subject() {
        let cards = build(
            "Supply and demand set market prices.",
            Subject::Economics,
            1,
        );
        assert_eq!(cards[0].question, "What key point is made about economics?");
        assert_eq!(cards[0].answer, "Supply and demand set market prices.");
    }

    #[test]
    fn short_sentences_are_skipped() {
        let content = "Too short. Also short here. This sentence is long enough to count.";
        let cards = build(content, Subject::General, 1);
        assert_eq!(cards[0].answer, "This sentence is long enough to count.");
    }

    #[test]
    fn shortfall_is_padded_from_subject_table() {
        let content = "The French Revolution began in 1789 in Paris.";
        let cards = build(content, Subject::History, 3);
        assert_eq!(cards.len(), 3);
        let table = FillerTable::builtin();
        assert_eq!(&cards[1..], table.for_subject("history"));
    }

    #[test]
    fn unknown_subject_pads_from_general() {
        let cards = build("", Subject::Chemistry, 2);
        assert_eq!(cards, FillerTable::builtin().for_subject("general"));
    }

    #[test]
    fn never_exceeds_count() {
        let content = "This is sentence number one here. This is sentence number two here. \
                       This is sentence number three here.";
        assert_eq!(build(content, Subject::General, 2).len(), 2);
        assert_eq!(build(content, Subject::General, 10).len(), 5);
        assert!(build(content, Subject::General, 0).is_empty());
    }

    #[test]
    fn output_is_deterministic() {
        let content = "Photosynthesis: light to chemical energy. The chloroplast hosts the process.";
        assert_eq!(
            build(content, Subject::Biology, 4),
            build(content, Subject::Biology, 4)
        );
    }
}
