//! Built-in demo decks for previewing output without any source content.

use crate::types::{Difficulty, Flashcard, Subject};

/// Sample deck for a subject, if one exists.
pub fn sample_deck(subject: Subject) -> Option<Vec<Flashcard>> {
    let entries: &[(&str, &str, Difficulty)] = match subject {
        Subject::Biology => &[
            (
                "What is photosynthesis?",
                "The process by which plants convert light energy into chemical energy, producing glucose and oxygen from carbon dioxide and water.",
                Difficulty::Medium,
            ),
            (
                "Where does photosynthesis occur in plant cells?",
                "In the chloroplasts, specifically in the thylakoids where chlorophyll captures light energy.",
                Difficulty::Easy,
            ),
            (
                "What are the two main stages of photosynthesis?",
                "The light-dependent reactions (occur in thylakoids) and the Calvin cycle (occurs in stroma).",
                Difficulty::Medium,
            ),
            (
                "What is the chemical equation for photosynthesis?",
                "6CO2 + 6H2O + light energy → C6H12O6 + 6O2",
                Difficulty::Hard,
            ),
            (
                "What factors affect the rate of photosynthesis?",
                "Light intensity, carbon dioxide concentration, temperature, and water availability.",
                Difficulty::Medium,
            ),
        ],
        Subject::History => &[
            (
                "When did World War II begin?",
                "September 1, 1939, when Germany invaded Poland.",
                Difficulty::Easy,
            ),
            (
                "What was D-Day?",
                "The Allied invasion of Normandy, France on June 6, 1944, opening a second front in Western Europe.",
                Difficulty::Medium,
            ),
            (
                "What were the main causes of World War II?",
                "The Treaty of Versailles, rise of totalitarian regimes, economic instability from the Great Depression, and failure of the League of Nations.",
                Difficulty::Hard,
            ),
            (
                "When did the United States enter World War II?",
                "December 8, 1941, the day after the Pearl Harbor attack by Japan.",
                Difficulty::Medium,
            ),
            (
                "What were the two main theaters of World War II?",
                "The European Theater (Germany vs. Allies in Europe) and the Pacific Theater (Japan vs. Allies in the Pacific).",
                Difficulty::Medium,
            ),
        ],
        Subject::ComputerScience => &[
            (
                "What is the time complexity of accessing an element in an array?",
                "O(1) - constant time, as elements can be accessed directly using their index.",
                Difficulty::Easy,
            ),
            (
                "What is a linked list?",
                "A linear data structure where elements are stored in nodes, each containing data and a pointer to the next node.",
                Difficulty::Medium,
            ),
            (
                "What are the advantages of arrays over linked lists?",
                "Fast random access, memory efficiency, cache-friendly layout, and simplicity of implementation.",
                Difficulty::Medium,
            ),
            (
                "What is the time complexity of insertion in a linked list?",
                "O(1) if the position is known, O(n) if the position must be found by traversing the list.",
                Difficulty::Hard,
            ),
            (
                "When should you use a linked list instead of an array?",
                "When you need frequent insertions/deletions, when size varies significantly, or when the order of elements changes often.",
                Difficulty::Hard,
            ),
        ],
        _ => return None,
    };

    Some(
        entries
            .iter()
            .map(|(q, a, d)| Flashcard::new(*q, *a, *d))
            .collect(),
    )
}
