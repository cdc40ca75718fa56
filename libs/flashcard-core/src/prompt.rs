//! Prompt templates for remote question generation.

use crate::types::Subject;

/// Kind of question a prompt asks the model to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    Definition,
    Process,
    Factual,
}

impl QuestionKind {
    /// Every kind, in the order prompts are issued.
    pub const ALL: [QuestionKind; 3] = [Self::Definition, Self::Process, Self::Factual];

    /// Render the prompt for a chunk of source text.
    pub fn prompt(&self, chunk: &str, subject: Subject) -> String {
        let ask = match self {
            Self::Definition => "a definition question about the key concepts",
            Self::Process => "a 'how' or 'why' question about the processes described",
            Self::Factual => "a factual question about important details",
        };
        format!(
            "Create {} in this {} text: {}. Format: Question: [question] Answer: [answer]",
            ask, subject, chunk
        )
    }
}

/// Up to `limit` distinct prompts for one chunk.
pub fn prompts_for_chunk(chunk: &str, subject: Subject, limit: usize) -> Vec<String> {
    QuestionKind::ALL
        .iter()
        .take(limit)
        .map(|kind| kind.prompt(chunk, subject))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn prompt_embeds_chunk_and_subject() {
        let prompt = QuestionKind::Definition.prompt("Cells divide.", Subject::Biology);
        assert_eq!(
            prompt,
            "Create a definition question about the key concepts in this Biology text: \
             Cells divide.. Format: Question: [question] Answer: [answer]"
        );
    }

    #[test]
    fn prompts_are_capped_by_kind_count() {
        assert_eq!(prompts_for_chunk("x", Subject::General, 1).len(), 1);
        assert_eq!(prompts_for_chunk("x", Subject::General, 10).len(), 3);
    }

    #[test]
    fn prompts_are_distinct() {
        let prompts = prompts_for_chunk("x", Subject::History, 3);
        assert_ne!(prompts[0], prompts[1]);
        assert_ne!(prompts[1], prompts[2]);
    }
}
