//! Terminal side of the quiz: a stdin reader thread feeding timestamped lines,
//! and a presenter that prints the session in French.

use std::future::Future;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use tokio::sync::{mpsc, Mutex};
use tokio::time::Instant;

use crate::quiz::collector::AnswerSource;
use crate::quiz::session::{QuestionOutcome, QuestionReport, SessionPresenter};
use crate::quiz::{Difficulty, Question, SessionResult};

pub const ANSWER_PROMPT: &str = "Votre réponse (entrez le numéro) : ";

/// Line-oriented input for menus and the editor.
pub trait LineInput: Send + Sync {
    /// Next line without its line ending, `None` once input is closed.
    fn next_line(&self) -> impl Future<Output = Option<String>> + Send;
}

/// Prints `label` without a newline and waits for the reply.
pub async fn prompt<I: LineInput>(input: &I, label: &str) -> Option<String> {
    print!("{}", label);
    flush_stdout();
    input.next_line().await
}

fn flush_stdout() {
    if let Err(err) = io::stdout().flush() {
        debug!("Failed to flush stdout: {}", err);
    }
}

pub struct Console {
    lines: Mutex<mpsc::UnboundedReceiver<(Instant, String)>>,
    /// Deadline of the last question that timed out, until the next read picks it up.
    abandoned_at: std::sync::Mutex<Option<Instant>>,
}

impl Console {
    /// Starts the stdin reader thread. Blocking reads stay on that thread, so
    /// a read still pending after a timeout never holds up the runtime.
    pub fn spawn() -> io::Result<Arc<Self>> {
        let (tx, rx) = mpsc::unbounded_channel();
        std::thread::Builder::new()
            .name("stdin-reader".to_string())
            .spawn(move || {
                for line in io::stdin().lock().lines() {
                    match line {
                        Ok(line) => {
                            if tx.send((Instant::now(), line)).is_err() {
                                break;
                            }
                        }
                        Err(err) => {
                            warn!("Failed to read from stdin: {}", err);
                            break;
                        }
                    }
                }
                debug!("stdin closed");
            })?;

        Ok(Arc::new(Self::from_receiver(rx)))
    }

    fn from_receiver(rx: mpsc::UnboundedReceiver<(Instant, String)>) -> Self {
        Self {
            lines: Mutex::new(rx),
            abandoned_at: std::sync::Mutex::new(None),
        }
    }

    fn take_abandoned(&self) -> Option<Instant> {
        match self.abandoned_at.lock() {
            Ok(mut abandoned_at) => abandoned_at.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        }
    }
}

impl LineInput for Console {
    fn next_line(&self) -> impl Future<Output = Option<String>> + Send {
        async move {
            let (_, line) = self.lines.lock().await.recv().await?;
            Some(line)
        }
    }
}

impl AnswerSource for Console {
    fn read_answer(&self, asked_at: Instant) -> impl Future<Output = Option<String>> + Send {
        async move {
            let abandoned_at = self.take_abandoned();
            let mut lines = self.lines.lock().await;
            loop {
                let (received_at, line) = lines.recv().await?;
                match abandoned_at {
                    // Typed after the previous question had already timed out.
                    Some(deadline) if received_at >= deadline && received_at < asked_at => {
                        debug!("Dropping late answer {:?}", line);
                    }
                    _ => return Some(line),
                }
            }
        }
    }

    fn answer_abandoned(&self, deadline: Instant) {
        match self.abandoned_at.lock() {
            Ok(mut abandoned_at) => *abandoned_at = Some(deadline),
            Err(poisoned) => *poisoned.into_inner() = Some(deadline),
        }
    }
}

pub struct ConsolePresenter {
    bonus_window: Duration,
}

impl ConsolePresenter {
    pub fn new(bonus_window: Duration) -> Self {
        Self { bonus_window }
    }
}

impl SessionPresenter for ConsolePresenter {
    fn session_started(&mut self, _player_name: &str, difficulty: Difficulty, total: usize) {
        println!("Bienvenue dans le Quiz !");
        println!("Niveau de difficulté sélectionné : {}", difficulty);
        if total == 0 {
            println!("Aucune question disponible pour ce niveau.");
        }
    }

    fn question_asked(&mut self, position: usize, total: usize, question: &Question) {
        println!("\nQuestion {}/{}:", position, total);
        println!("{}", question.text());
        for (index, choice) in question.choices().iter().enumerate() {
            println!("{}. {}", index + 1, choice);
        }
        print!("{}", ANSWER_PROMPT);
        flush_stdout();
    }

    fn question_finished(&mut self, report: &QuestionReport) {
        match report.outcome {
            QuestionOutcome::TimedOut => {
                println!("\nTemps écoulé. La question sera marquée comme incorrecte.");
            }
            QuestionOutcome::InvalidInput => println!("Réponse invalide."),
            QuestionOutcome::Answered {
                verdict, points, ..
            } if verdict.is_correct => {
                println!("Bonne réponse !");
                if verdict.bonus_eligible {
                    let secs = self.bonus_window.as_secs_f64();
                    if points > 1 {
                        println!(
                            "Vous avez répondu en moins de {} secondes ! Bonus d'un point !",
                            secs
                        );
                    } else {
                        println!("Vous avez répondu en moins de {} secondes !", secs);
                    }
                }
            }
            QuestionOutcome::Answered { .. } => {
                println!(
                    "Mauvaise réponse. La bonne réponse était : {}",
                    report.correct_choice
                );
            }
        }
    }

    fn session_finished(&mut self, result: &SessionResult) {
        println!("\nFin du quiz !");
        println!(
            "Score final pour {} : {}/{}",
            result.player_name, result.score, result.total_questions
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::QuizConfig;
    use crate::quiz::session::{QuizSession, Silent};

    fn console() -> (mpsc::UnboundedSender<(Instant, String)>, Arc<Console>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (tx, Arc::new(Console::from_receiver(rx)))
    }

    fn water_question() -> Question {
        Question::new(
            "Quel est le symbole chimique de l'eau ?",
            vec!["O".into(), "H2O".into(), "H".into(), "O2".into()],
            1,
            Difficulty::EASY,
        )
        .unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn typed_ahead_answer_counts() {
        let (tx, console) = console();
        tx.send((Instant::now(), "2".to_string())).unwrap();
        tokio::time::advance(Duration::from_secs(1)).await;

        let mut session = QuizSession::new(console, QuizConfig::default());
        let result = session
            .run(&[water_question()], "Alice", Difficulty::EASY, &mut Silent)
            .await;

        assert_eq!(result.score, 1);
        assert_eq!(result.total_questions, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn input_after_a_timeout_is_dropped_once() {
        let (tx, console) = console();
        let deadline = Instant::now();
        let asked_at = deadline + Duration::from_secs(2);
        console.answer_abandoned(deadline);

        tx.send((deadline - Duration::from_secs(1), "4".to_string()))
            .unwrap();
        tx.send((deadline + Duration::from_secs(1), "1".to_string()))
            .unwrap();
        tx.send((asked_at + Duration::from_secs(1), "3".to_string()))
            .unwrap();

        // Typed before the timeout: still pending, so it is kept.
        assert_eq!(console.read_answer(asked_at).await.as_deref(), Some("4"));

        console.answer_abandoned(deadline);
        assert_eq!(console.read_answer(asked_at).await.as_deref(), Some("3"));

        // The window only applies to the read right after the timeout.
        tx.send((deadline + Duration::from_secs(1), "2".to_string()))
            .unwrap();
        assert_eq!(console.read_answer(asked_at).await.as_deref(), Some("2"));
    }

    #[tokio::test]
    async fn menu_lines_are_read_in_order() {
        let (tx, console) = console();
        tx.send((Instant::now(), "1".to_string())).unwrap();
        tx.send((Instant::now(), "Alice".to_string())).unwrap();
        drop(tx);

        assert_eq!(console.next_line().await.as_deref(), Some("1"));
        assert_eq!(console.next_line().await.as_deref(), Some("Alice"));
        assert_eq!(console.next_line().await, None);
    }
}
