use kielo_protocol::{Mood, PartOfSpeech, Person, Tense, Voice};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MorphError {
    #[error(
        "conjugation of \"{verb}\" in the {voice} {tense} is not available; supported verbs: {}",
        .supported.join(", ")
    )]
    UnsupportedConjugation {
        verb: String,
        tense: Tense,
        voice: Voice,
        supported: Vec<String>,
    },

    #[error(
        "declension of \"{noun}\" is not available; supported nouns: {}",
        .supported.join(", ")
    )]
    UnsupportedDeclension { noun: String, supported: Vec<String> },

    #[error("the {mood} mood has no {person} form")]
    InvalidPersonForMood { mood: Mood, person: Person },

    #[error("invalid {field}: \"{value}\"")]
    InvalidParameter { field: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to parse lexicon seed: {0}")]
    Seed(#[from] serde_json::Error),

    #[error("invalid lexicon archive: {0}")]
    Archive(String),

    #[error("duplicate {pos} \"{citation}\" in lexicon")]
    Duplicate { pos: PartOfSpeech, citation: String },
}
