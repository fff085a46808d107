use rkyv::{Archive, Deserialize, Serialize};
use crate::ids::{LexemeId, LexiconVersion};
use crate::morphology::{MorphFlags, PartOfSpeech, ProficiencyTier, WordClass};
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Lexeme {
    pub id: LexemeId,
    /// Dictionary form: first infinitive for verbs, nominative singular for nouns.
    pub citation: String,
    pub pos: PartOfSpeech,
    pub gloss: String,
    pub examples: Vec<String>,
    /// Frequency rank, 1 is the most common word.
    pub frequency: u32,
    pub tier: ProficiencyTier,
}

/// Precomputed surface forms keyed by [`MorphFlags`] bits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Paradigm {
    pub cells: Vec<(u32, String)>,
}

impl Paradigm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `form` under `key`, replacing any previous form.
    pub fn insert(&mut self, key: MorphFlags, form: impl Into<String>) {
        let form = form.into();
        match self.cells.iter_mut().find(|(bits, _)| *bits == key.bits()) {
            Some((_, existing)) => *existing = form,
            None => self.cells.push((key.bits(), form)),
        }
    }

    pub fn get(&self, key: MorphFlags) -> Option<&str> {
        self.cells
            .iter()
            .find(|(bits, _)| *bits == key.bits())
            .map(|(_, form)| form.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (MorphFlags, &str)> {
        self.cells
            .iter()
            .map(|(bits, form)| (MorphFlags::from_bits_truncate(*bits), form.as_str()))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Irregular-word data that overrides the rules.
///
/// Any field may be empty: a stem-only exception still runs the rules for every
/// cell, and a partial paradigm falls back to the rules for the missing cells.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Exception {
    pub pos: PartOfSpeech,
    pub citation: String,
    pub class: Option<WordClass>,
    pub stem: Option<String>,
    pub paradigm: Paradigm,
}

#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Lexicon {
    pub version: LexiconVersion,
    pub lexemes: Vec<Lexeme>,
    pub exceptions: Vec<Exception>,
}

impl Lexicon {
    pub fn lexemes_of(&self, pos: PartOfSpeech) -> impl Iterator<Item = &Lexeme> {
        self.lexemes.iter().filter(move |lexeme| lexeme.pos == pos)
    }

    pub fn exceptions_of(&self, pos: PartOfSpeech) -> impl Iterator<Item = &Exception> {
        self.exceptions.iter().filter(move |exception| exception.pos == pos)
    }
}
