use std::time::Duration;

use crate::quiz::Question;

/// Answers faster than this are bonus-eligible.
pub const DEFAULT_BONUS_WINDOW: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub is_correct: bool,
    pub bonus_eligible: bool,
}

/// How a bonus-eligible answer is rewarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BonusPolicy {
    /// One point per correct answer; the bonus is announced but not awarded.
    #[default]
    BaseOnly,
    /// One extra point for a bonus-eligible answer.
    ExtraPoint,
}

impl BonusPolicy {
    pub fn points(self, verdict: Verdict) -> u32 {
        match (verdict.is_correct, verdict.bonus_eligible, self) {
            (false, _, _) => 0,
            (true, true, BonusPolicy::ExtraPoint) => 2,
            (true, _, _) => 1,
        }
    }
}

/// Judges a 1-based answer. Out-of-range answers are simply wrong.
pub fn score(
    submitted: i64,
    question: &Question,
    elapsed: Duration,
    bonus_window: Duration,
) -> Verdict {
    let is_correct = submitted == question.correct_answer_index as i64 + 1;
    Verdict {
        is_correct,
        bonus_eligible: is_correct && elapsed < bonus_window,
    }
}
