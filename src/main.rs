use dotenv::dotenv;
use log::{error, info};

use trivia_quiz::console::{Console, ConsolePresenter};
use trivia_quiz::menu::{ask_main_choice, run_editor_mode, start_game, MainChoice};
use trivia_quiz::{QuestionStore, QuizConfig};

#[tokio::main]
async fn main() {
    // The .env file is optional, everything has a default.
    dotenv().ok();
    pretty_env_logger::init();

    let config = match QuizConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("Invalid configuration: {}", err);
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };

    let console = Console::spawn().expect("Failed to start the stdin reader");
    let mut store = QuestionStore::seeded();
    info!("Question bank loaded with {} questions", store.len());

    let Some(choice) = ask_main_choice(console.as_ref()).await else {
        println!("Option invalide.");
        return;
    };
    info!("Selected mode: {:?}", choice);

    let mut presenter = ConsolePresenter::new(config.bonus_window);
    match choice {
        MainChoice::StartGame => {
            if let Err(err) = start_game(&console, &store, config, &mut presenter).await {
                println!("{}", err);
            }
        }
        MainChoice::Editor => {
            run_editor_mode(&console, &mut store, config, &mut presenter).await;
        }
    }
}
