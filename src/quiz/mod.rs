pub mod collector;
pub mod scoring;
pub mod seed;
pub mod session;
pub mod store;

use std::fmt;

use thiserror::Error;

/// Every question offers exactly this many choices.
pub const CHOICES_PER_QUESTION: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("Texte de question invalide.")]
    EmptyText,
    #[error("Choix invalide.")]
    EmptyChoice { position: usize },
    #[error("Une question doit avoir {expected} choix, {found} fournis.")]
    ChoiceCount { expected: usize, found: usize },
    #[error("Index de réponse invalide.")]
    CorrectIndexOutOfRange { index: i64 },
    #[error("Niveau de difficulté invalide.")]
    DifficultyOutOfRange { level: i64 },
    #[error("Nom invalide.")]
    EmptyPlayerName,
}

/// Difficulty level, 1 (easy) to 3 (hard).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "i64", into = "u8")]
pub struct Difficulty(u8);

impl Difficulty {
    pub const EASY: Difficulty = Difficulty(1);
    pub const MEDIUM: Difficulty = Difficulty(2);
    pub const HARD: Difficulty = Difficulty(3);

    pub fn new(level: i64) -> Result<Self, ValidationError> {
        match level {
            1..=3 => Ok(Self(level as u8)),
            _ => Err(ValidationError::DifficultyOutOfRange { level }),
        }
    }

    /// Parses a line typed by the user. Anything that is not 1, 2 or 3 is rejected.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let level = input
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::DifficultyOutOfRange { level: 0 })?;
        Self::new(level)
    }

    pub fn level(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Difficulty {
    type Error = ValidationError;

    fn try_from(level: i64) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl From<Difficulty> for u8 {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.0
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A multiple-choice question. Only constructed through [`Question::new`],
/// so every instance holds a valid answer index.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Question {
    text: String,
    choices: Vec<String>,
    /// Zero-based index into `choices`.
    correct_answer_index: usize,
    difficulty: Difficulty,
}

impl Question {
    pub fn new(
        text: impl Into<String>,
        choices: Vec<String>,
        correct_answer_index: usize,
        difficulty: Difficulty,
    ) -> Result<Self, ValidationError> {
        let question = Self {
            text: text.into(),
            choices,
            correct_answer_index,
            difficulty,
        };
        question.validate()?;
        Ok(question)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.text.trim().is_empty() {
            return Err(ValidationError::EmptyText);
        }
        if self.choices.len() != CHOICES_PER_QUESTION {
            return Err(ValidationError::ChoiceCount {
                expected: CHOICES_PER_QUESTION,
                found: self.choices.len(),
            });
        }
        if let Some(position) = self.choices.iter().position(|c| c.trim().is_empty()) {
            return Err(ValidationError::EmptyChoice {
                position: position + 1,
            });
        }
        if self.correct_answer_index >= self.choices.len() {
            return Err(ValidationError::CorrectIndexOutOfRange {
                index: self.correct_answer_index as i64 + 1,
            });
        }
        Ok(())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Choices in display order.
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    pub fn correct_answer_index(&self) -> usize {
        self.correct_answer_index
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn correct_choice(&self) -> &str {
        self.choices
            .get(self.correct_answer_index)
            .map(String::as_str)
            .unwrap_or_default()
    }
}

/// A question as typed into the editor, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionDraft {
    pub text: String,
    pub choices: Vec<String>,
    /// One-based, as the user types it.
    pub correct_choice: i64,
    pub difficulty: i64,
}

impl QuestionDraft {
    pub fn into_question(self) -> Result<Question, ValidationError> {
        let correct_choice = self.correct_choice;
        if correct_choice < 1 || correct_choice > self.choices.len() as i64 {
            return Err(ValidationError::CorrectIndexOutOfRange {
                index: correct_choice,
            });
        }
        let difficulty = Difficulty::new(self.difficulty)?;
        Question::new(
            self.text,
            self.choices,
            (correct_choice - 1) as usize,
            difficulty,
        )
    }
}

/// Final tally of one quiz run.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SessionResult {
    pub player_name: String,
    pub score: u32,
    pub total_questions: usize,
}
