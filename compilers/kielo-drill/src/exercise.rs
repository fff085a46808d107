use kielo_morph::{case_description, tense_description};
use kielo_protocol::{Cell, Difficulty, Lexeme, PartOfSpeech, ProficiencyTier, Voice};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One drill question. Created by the generator, never mutated, consumed by an answer check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: Uuid,
    pub lexeme: Lexeme,
    pub cell: Cell,
    pub correct_answer: String,
    /// Present for multiple-choice exercises; the correct answer is one of them.
    pub options: Option<Vec<String>>,
    pub difficulty: Difficulty,
    pub tier: ProficiencyTier,
}

impl Exercise {
    pub fn pos(&self) -> PartOfSpeech {
        self.cell.pos()
    }

    pub fn is_multiple_choice(&self) -> bool {
        self.options.is_some()
    }

    pub fn points(&self) -> u32 {
        self.difficulty.points()
    }

    /// The instruction shown to the learner.
    pub fn prompt(&self) -> String {
        let word = &self.lexeme.citation;
        match self.cell {
            Cell::Verb {
                tense,
                voice: Voice::Passive,
                ..
            } => format!(
                "Give the passive form of the verb \"{}\" in the {}.",
                word,
                tense_description(tense).phrase
            ),
            Cell::Verb { tense, person, .. } => {
                let pronoun = person.map_or("", |person| person.pronoun());
                format!(
                    "Conjugate the verb \"{}\" for \"{}\" in the {}.",
                    word,
                    pronoun,
                    tense_description(tense).phrase
                )
            }
            Cell::Noun { case } => format!(
                "Decline the noun \"{}\" in the {} case ({}).",
                word,
                case,
                case_description(case).finnish
            ),
        }
    }
}

/// Outcome of checking a learner's answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerCheck {
    pub exercise_id: Uuid,
    pub user_answer: String,
    pub correct: bool,
    pub correct_answer: String,
    /// Set only for wrong answers.
    pub explanation: Option<String>,
    pub points: u32,
}
