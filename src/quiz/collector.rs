use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use tokio::sync::oneshot;
use tokio::time::{timeout_at, Instant};

pub const DEFAULT_ANSWER_TIMEOUT: Duration = Duration::from_secs(30);

/// Where player answers come from.
pub trait AnswerSource: Send + Sync + 'static {
    /// Resolves with the first line entered at or after `asked_at`, or `None`
    /// once the input is closed.
    fn read_answer(&self, asked_at: Instant) -> impl Future<Output = Option<String>> + Send;

    /// Called when a question timed out at `deadline` with its read still pending.
    fn answer_abandoned(&self, _deadline: Instant) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Answered { value: i64, captured_at: Instant },
    /// Empty, non-numeric or unreadable input.
    InvalidInput,
    TimedOut,
}

/// Races one read from an [`AnswerSource`] against a deadline.
///
/// Each call gets its own result slot. When the deadline wins, the slot is
/// dropped and the reader task aborted, so a late answer can never land in a
/// later question.
pub struct TimedAnswerCollector<S> {
    source: Arc<S>,
}

impl<S: AnswerSource> TimedAnswerCollector<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    pub async fn collect(&self, asked_at: Instant, timeout: Duration) -> AnswerOutcome {
        let (slot, answer) = oneshot::channel();
        let source = Arc::clone(&self.source);
        let reader = tokio::spawn(async move {
            let line = source.read_answer(asked_at).await;
            if slot.send((line, Instant::now())).is_err() {
                debug!("Answer arrived after the question was closed, discarding it");
            }
        });

        // A deadline past what the clock can represent means no deadline.
        let deadline = asked_at.checked_add(timeout);
        let answer = match deadline {
            Some(deadline) => timeout_at(deadline, answer).await,
            None => Ok(answer.await),
        };

        match answer {
            Ok(Ok((Some(line), captured_at))) => parse_answer(&line, captured_at),
            Ok(Ok((None, _))) => {
                debug!("Input closed while waiting for an answer");
                AnswerOutcome::InvalidInput
            }
            Ok(Err(_)) => {
                warn!("Answer reader stopped without producing a line");
                AnswerOutcome::InvalidInput
            }
            Err(_) => {
                reader.abort();
                if let Some(deadline) = deadline {
                    self.source.answer_abandoned(deadline);
                }
                info!("No answer within {:?}", timeout);
                AnswerOutcome::TimedOut
            }
        }
    }
}

fn parse_answer(line: &str, captured_at: Instant) -> AnswerOutcome {
    match line.trim().parse::<i64>() {
        Ok(value) => AnswerOutcome::Answered { value, captured_at },
        Err(_) => {
            debug!("Unparseable answer {:?}", line);
            AnswerOutcome::InvalidInput
        }
    }
}
