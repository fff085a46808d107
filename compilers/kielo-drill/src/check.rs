use kielo_morph::{case_description, tense_description, Inflector};
use kielo_parser::analysis::{analyze, identify};
use kielo_parser::{answers_match, normalize_answer};
use kielo_protocol::{Cell, Voice};

use crate::exercise::{AnswerCheck, Exercise};

/// Case- and whitespace-insensitive comparison against the recorded answer.
pub fn check_answer(exercise: &Exercise, user_answer: &str) -> AnswerCheck {
    let correct = answers_match(&exercise.correct_answer, user_answer);
    AnswerCheck {
        exercise_id: exercise.id,
        user_answer: user_answer.to_string(),
        correct,
        correct_answer: exercise.correct_answer.clone(),
        explanation: (!correct).then(|| explain(exercise)),
        points: if correct { exercise.points() } else { 0 },
    }
}

/// Like [`check_answer`], and for a wrong answer that is a real form of some word, says which.
pub fn check_answer_with(
    inflector: &Inflector,
    exercise: &Exercise,
    user_answer: &str,
) -> AnswerCheck {
    let mut check = check_answer(exercise, user_answer);
    if check.correct {
        return check;
    }
    let note = identify_answer(inflector, exercise, user_answer);
    if let (Some(explanation), Some(note)) = (check.explanation.as_mut(), note) {
        explanation.push(' ');
        explanation.push_str(&note);
    }
    check
}

fn identify_answer(
    inflector: &Inflector,
    exercise: &Exercise,
    user_answer: &str,
) -> Option<String> {
    let answer = normalize_answer(user_answer);
    if answer.is_empty() {
        return None;
    }
    let own = identify(inflector, exercise.pos(), &exercise.lexeme.citation, &answer);
    if let Some(cell) = own.first() {
        return Some(format!(
            "\"{}\" is the {} of \"{}\".",
            answer, cell, exercise.lexeme.citation
        ));
    }
    analyze(inflector, &answer)
        .first()
        .map(|analysis| format!("{}.", analysis.describe(&answer)))
}

/// Names the grammatical category the exercise asked for.
pub fn explain(exercise: &Exercise) -> String {
    let word = &exercise.lexeme.citation;
    let answer = &exercise.correct_answer;
    match exercise.cell {
        Cell::Verb {
            tense,
            voice: Voice::Passive,
            ..
        } => format!(
            "The correct passive form of \"{}\" in the {} is \"{}\".",
            word,
            tense_description(tense).phrase,
            answer
        ),
        Cell::Verb { tense, person, .. } => format!(
            "The correct conjugation of \"{}\" for {} in the {} (active voice) is \"{}\".",
            word,
            person.map_or("", |person| person.pronoun()),
            tense_description(tense).phrase,
            answer
        ),
        Cell::Noun { case } => {
            let description = case_description(case);
            format!(
                "The {} case ({}) is used for: {}. For \"{}\", the correct form is \"{}\".",
                description.english, description.finnish, description.description, word, answer
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kielo_morph::LexiconIndex;
    use kielo_protocol::{Case, Difficulty, PartOfSpeech, ProficiencyTier};

    fn genitive_of_talo() -> Exercise {
        let index = LexiconIndex::builtin().unwrap();
        Exercise {
            id: uuid::Uuid::nil(),
            lexeme: index.lexeme(PartOfSpeech::Noun, "talo").unwrap().clone(),
            cell: Cell::Noun { case: Case::Genitive },
            correct_answer: "talon".to_string(),
            options: None,
            difficulty: Difficulty::Medium,
            tier: ProficiencyTier::A1,
        }
    }

    #[test]
    fn only_case_and_spacing_are_forgiven() {
        let exercise = genitive_of_talo();
        assert!(check_answer(&exercise, "Talon").correct);
        assert!(check_answer(&exercise, "\t talon  ").correct);

        for wrong in ["talon!", "1talon", "talon 42", "$talon%"] {
            let check = check_answer(&exercise, wrong);
            assert!(!check.correct, "{wrong:?} accepted");
            assert_eq!(check.points, 0);
            assert!(check.explanation.is_some());
        }
    }

    #[test]
    fn compound_answers_compare_word_by_word() {
        let mut exercise = genitive_of_talo();
        exercise.correct_answer = "on sanottu".to_string();
        assert!(check_answer(&exercise, "ON   sanottu").correct);
        assert!(!check_answer(&exercise, "on, sanottu").correct);
        assert!(!check_answer(&exercise, "onsanottu").correct);
    }
}
