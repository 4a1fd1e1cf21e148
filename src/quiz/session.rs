use std::sync::Arc;
use std::time::Duration;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tokio::time::Instant;

use crate::config::QuizConfig;
use crate::quiz::collector::{AnswerOutcome, AnswerSource, TimedAnswerCollector};
use crate::quiz::scoring::{self, Verdict};
use crate::quiz::store::filter_by_difficulty;
use crate::quiz::{Difficulty, Question, SessionResult};

/// What happened to one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionOutcome {
    TimedOut,
    InvalidInput,
    Answered {
        submitted: i64,
        elapsed: Duration,
        verdict: Verdict,
        points: u32,
    },
}

impl QuestionOutcome {
    pub fn points(&self) -> u32 {
        match self {
            QuestionOutcome::Answered { points, .. } => *points,
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionReport {
    /// 1-based position in the run.
    pub position: usize,
    pub total: usize,
    pub outcome: QuestionOutcome,
    pub correct_choice: String,
}

/// Receives everything a player should see during a run.
#[allow(unused_variables)]
pub trait SessionPresenter {
    fn session_started(&mut self, player_name: &str, difficulty: Difficulty, total: usize) {}
    fn question_asked(&mut self, position: usize, total: usize, question: &Question) {}
    fn question_finished(&mut self, report: &QuestionReport) {}
    fn session_finished(&mut self, result: &SessionResult) {}
}

/// Presenter that shows nothing.
pub struct Silent;

impl SessionPresenter for Silent {}

/// State of a single run. The sequence is fixed once built.
#[derive(Debug, Clone, Default)]
struct Quiz {
    questions: Vec<Question>,
    current_question: usize,
    score: u32,
}

impl Quiz {
    fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            current_question: 0,
            score: 0,
        }
    }
}

/// Uniformly random permutation of `questions`.
pub fn shuffled<R: Rng + ?Sized>(mut questions: Vec<Question>, rng: &mut R) -> Vec<Question> {
    questions.shuffle(rng);
    questions
}

/// Runs quizzes against one answer source, one question at a time.
pub struct QuizSession<S> {
    collector: TimedAnswerCollector<S>,
    config: QuizConfig,
    rng: StdRng,
}

impl<S: AnswerSource> QuizSession<S> {
    pub fn new(source: Arc<S>, config: QuizConfig) -> Self {
        Self {
            collector: TimedAnswerCollector::new(source),
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Fixes the shuffle order, for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub async fn run<P: SessionPresenter + ?Sized>(
        &mut self,
        questions: &[Question],
        player_name: &str,
        difficulty: Difficulty,
        presenter: &mut P,
    ) -> SessionResult {
        let sequence = shuffled(filter_by_difficulty(questions, difficulty), &mut self.rng);
        let mut quiz = Quiz::new(sequence);
        let total = quiz.questions.len();

        info!(
            "Starting quiz for {:?} at difficulty {} with {} questions",
            player_name, difficulty, total
        );
        presenter.session_started(player_name, difficulty, total);

        while quiz.current_question < total {
            let question = &quiz.questions[quiz.current_question];
            let position = quiz.current_question + 1;

            presenter.question_asked(position, total, question);
            let asked_at = Instant::now();
            let outcome = match self
                .collector
                .collect(asked_at, self.config.answer_timeout)
                .await
            {
                AnswerOutcome::TimedOut => QuestionOutcome::TimedOut,
                AnswerOutcome::InvalidInput => QuestionOutcome::InvalidInput,
                AnswerOutcome::Answered { value, captured_at } => {
                    let elapsed = captured_at.saturating_duration_since(asked_at);
                    let verdict =
                        scoring::score(value, question, elapsed, self.config.bonus_window);
                    QuestionOutcome::Answered {
                        submitted: value,
                        elapsed,
                        verdict,
                        points: self.config.bonus_policy.points(verdict),
                    }
                }
            };
            debug!("Question {}/{}: {:?}", position, total, outcome);

            quiz.score += outcome.points();
            presenter.question_finished(&QuestionReport {
                position,
                total,
                outcome,
                correct_choice: question.correct_choice().to_string(),
            });
            quiz.current_question += 1;
        }

        let result = SessionResult {
            player_name: player_name.to_string(),
            score: quiz.score,
            total_questions: total,
        };
        info!(
            "Quiz finished for {:?}: {}/{}",
            result.player_name, result.score, result.total_questions
        );
        presenter.session_finished(&result);
        result
    }
}
