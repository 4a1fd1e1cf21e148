use log::debug;

use crate::quiz::{seed, Difficulty, Question, ValidationError};

/// Append-only, in-memory question bank.
#[derive(Debug, Clone, Default)]
pub struct QuestionStore {
    questions: Vec<Question>,
}

impl QuestionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the built-in questions.
    pub fn seeded() -> Self {
        Self {
            questions: seed::built_in_questions(),
        }
    }

    /// Validates the question again before appending it.
    pub fn append(&mut self, question: Question) -> Result<(), ValidationError> {
        question.validate()?;
        debug!(
            "Appending question {:?} (difficulty {})",
            question.text, question.difficulty
        );
        self.questions.push(question);
        Ok(())
    }

    /// Questions at or below `max_difficulty`, in insertion order.
    pub fn filter(&self, max_difficulty: Difficulty) -> Vec<Question> {
        filter_by_difficulty(&self.questions, max_difficulty)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

pub fn filter_by_difficulty(questions: &[Question], max_difficulty: Difficulty) -> Vec<Question> {
    questions
        .iter()
        .filter(|q| q.difficulty <= max_difficulty)
        .cloned()
        .collect()
}
