use std::sync::Arc;

use crate::config::QuizConfig;
use crate::console::{prompt, LineInput};
use crate::editor::{run_editor, EditorExit};
use crate::quiz::collector::AnswerSource;
use crate::quiz::session::{QuizSession, SessionPresenter};
use crate::quiz::store::QuestionStore;
use crate::quiz::{Difficulty, SessionResult, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    StartGame,
    Editor,
}

impl MainChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MainChoice::StartGame),
            "2" => Some(MainChoice::Editor),
            _ => None,
        }
    }
}

pub async fn ask_main_choice<I: LineInput>(input: &I) -> Option<MainChoice> {
    println!("Choisissez l'option :");
    println!("1. Démarrer le jeu");
    println!("2. Éditeur de banque de questions");
    let line = prompt(input, "Votre choix : ").await?;
    MainChoice::parse(&line)
}

/// Asks for the player's name and difficulty, then runs one quiz over the whole bank.
pub async fn start_game<I, P>(
    input: &Arc<I>,
    store: &QuestionStore,
    config: QuizConfig,
    presenter: &mut P,
) -> Result<SessionResult, ValidationError>
where
    I: LineInput + AnswerSource,
    P: SessionPresenter,
{
    let player_name = prompt(input.as_ref(), "Entrez votre nom : ")
        .await
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .ok_or(ValidationError::EmptyPlayerName)?;

    let difficulty_line = prompt(
        input.as_ref(),
        "Sélectionnez un niveau de difficulté (1-3) : ",
    )
    .await
    .unwrap_or_default();
    let difficulty = Difficulty::parse(&difficulty_line)?;

    let mut session = QuizSession::new(Arc::clone(input), config);
    Ok(session
        .run(store.questions(), &player_name, difficulty, presenter)
        .await)
}

/// Editor mode. A game started from the editor menu returns to it afterwards,
/// and only the editor's quit action (or closed input) leaves.
pub async fn run_editor_mode<I, P>(
    input: &Arc<I>,
    store: &mut QuestionStore,
    config: QuizConfig,
    presenter: &mut P,
) where
    I: LineInput + AnswerSource,
    P: SessionPresenter,
{
    while run_editor(input.as_ref(), store).await == EditorExit::StartGame {
        if let Err(err) = start_game(input, store, config, presenter).await {
            println!("{}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_and_two_are_menu_options() {
        assert_eq!(MainChoice::parse("1"), Some(MainChoice::StartGame));
        assert_eq!(MainChoice::parse(" 2\n"), Some(MainChoice::Editor));
        assert_eq!(MainChoice::parse("3"), None);
        assert_eq!(MainChoice::parse("jouer"), None);
    }
}
