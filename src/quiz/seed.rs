use crate::quiz::{Difficulty, Question};

// (text, choices, correct index, difficulty)
const BUILT_IN: [(&str, [&str; 4], usize, Difficulty); 10] = [
    (
        "Quel est le symbole chimique de l'eau ?",
        ["O", "H2O", "H", "O2"],
        1,
        Difficulty::EASY,
    ),
    (
        "Combien de continents y a-t-il sur Terre ?",
        ["4", "5", "6", "7"],
        3,
        Difficulty::EASY,
    ),
    (
        "Qui a écrit 'Roméo et Juliette' ?",
        [
            "William Shakespeare",
            "Charles Dickens",
            "Jane Austen",
            "F. Scott Fitzgerald",
        ],
        0,
        Difficulty::EASY,
    ),
    (
        "Quelle est la capitale de la France ?",
        ["Paris", "Londres", "Berlin", "Rome"],
        0,
        Difficulty::EASY,
    ),
    (
        "Quel est l'organe principal du système respiratoire chez les humains ?",
        ["Poumon", "Coeur", "Estomac", "Foie"],
        0,
        Difficulty::MEDIUM,
    ),
    (
        "Qui a peint 'La Joconde' ?",
        [
            "Leonardo da Vinci",
            "Vincent van Gogh",
            "Pablo Picasso",
            "Michelangelo",
        ],
        0,
        Difficulty::MEDIUM,
    ),
    (
        "Quel est le noyau de l'atome ?",
        ["Electron", "Proton", "Neutron", "Positron"],
        2,
        Difficulty::MEDIUM,
    ),
    (
        "Qui a inventé l'ampoule électrique ?",
        [
            "Thomas Edison",
            "Alexander Graham Bell",
            "Nikola Tesla",
            "Albert Einstein",
        ],
        0,
        Difficulty::MEDIUM,
    ),
    (
        "Qui a écrit 'Le Petit Prince' ?",
        [
            "Antoine de Saint-Exupéry",
            "Jules Verne",
            "Marcel Proust",
            "Victor Hugo",
        ],
        0,
        Difficulty::HARD,
    ),
    (
        "Quelle est la formule chimique du dioxyde de carbone ?",
        ["CO", "CO2", "C2H6O", "O2"],
        1,
        Difficulty::HARD,
    ),
];

/// The questions every bank starts with.
pub fn built_in_questions() -> Vec<Question> {
    BUILT_IN
        .iter()
        .map(|(text, choices, correct, difficulty)| Question {
            text: text.to_string(),
            choices: choices.iter().map(|c| c.to_string()).collect(),
            correct_answer_index: *correct,
            difficulty: *difficulty,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_ten_valid_questions_split_by_difficulty() {
        let questions = built_in_questions();
        assert_eq!(questions.len(), 10);
        assert!(questions.iter().all(|q| q.validate().is_ok()));

        let count = |d: Difficulty| questions.iter().filter(|q| q.difficulty == d).count();
        assert_eq!(count(Difficulty::EASY), 4);
        assert_eq!(count(Difficulty::MEDIUM), 4);
        assert_eq!(count(Difficulty::HARD), 2);
    }
}
