pub mod config;
pub mod console;
pub mod editor;
pub mod menu;
pub mod quiz;

pub use config::{ConfigError, QuizConfig};
pub use quiz::collector::{AnswerOutcome, AnswerSource, TimedAnswerCollector};
pub use quiz::scoring::{BonusPolicy, Verdict};
pub use quiz::session::{QuestionOutcome, QuestionReport, QuizSession, SessionPresenter};
pub use quiz::store::QuestionStore;
pub use quiz::{Difficulty, Question, QuestionDraft, SessionResult, ValidationError};
