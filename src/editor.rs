use log::info;

use crate::console::{prompt, LineInput};
use crate::quiz::store::QuestionStore;
use crate::quiz::{Difficulty, QuestionDraft, ValidationError, CHOICES_PER_QUESTION};

/// How the editor loop was left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorExit {
    StartGame,
    Quit,
}

/// Collects a question field by field, stopping at the first invalid one.
pub async fn collect_draft<I: LineInput>(input: &I) -> Result<QuestionDraft, ValidationError> {
    let text = prompt(input, "Entrez le texte de la question : ")
        .await
        .filter(|t| !t.trim().is_empty())
        .ok_or(ValidationError::EmptyText)?;

    let mut choices = Vec::with_capacity(CHOICES_PER_QUESTION);
    for position in 1..=CHOICES_PER_QUESTION {
        let choice = prompt(input, &format!("Entrez le choix {} : ", position))
            .await
            .filter(|c| !c.trim().is_empty())
            .ok_or(ValidationError::EmptyChoice { position })?;
        choices.push(choice);
    }

    let correct_line = prompt(input, "Entrez l'index du choix correct (1-4) : ")
        .await
        .unwrap_or_default();
    let correct_choice = match correct_line.trim().parse::<i64>() {
        Ok(index) if (1..=CHOICES_PER_QUESTION as i64).contains(&index) => index,
        Ok(index) => return Err(ValidationError::CorrectIndexOutOfRange { index }),
        Err(_) => return Err(ValidationError::CorrectIndexOutOfRange { index: 0 }),
    };

    let difficulty_line = prompt(
        input,
        "Entrez le niveau de difficulté de la question (1-3) : ",
    )
    .await
    .unwrap_or_default();
    let difficulty = Difficulty::parse(&difficulty_line)?;

    Ok(QuestionDraft {
        text,
        choices,
        correct_choice,
        difficulty: difficulty.level().into(),
    })
}

/// Collects, validates and appends one question. On error the store is untouched.
pub async fn add_question<I: LineInput>(
    input: &I,
    store: &mut QuestionStore,
) -> Result<(), ValidationError> {
    let question = collect_draft(input).await?.into_question()?;
    store.append(question)?;
    info!("Question bank now holds {} questions", store.len());
    Ok(())
}

/// Editor menu loop. Returns when the user starts a game, quits, or input closes.
pub async fn run_editor<I: LineInput>(input: &I, store: &mut QuestionStore) -> EditorExit {
    loop {
        println!("\nQue souhaitez-vous faire ?");
        println!("1. Ajouter une nouvelle question");
        println!("2. Démarrer le jeu");
        println!("3. Quitter");

        let Some(choice) = prompt(input, "Votre choix : ").await else {
            return EditorExit::Quit;
        };
        match choice.trim() {
            "1" => match add_question(input, store).await {
                Ok(()) => println!("Question ajoutée avec succès !"),
                Err(err) => println!("{}", err),
            },
            "2" => return EditorExit::StartGame,
            "3" => return EditorExit::Quit,
            _ => println!("Option invalide."),
        }
    }
}
