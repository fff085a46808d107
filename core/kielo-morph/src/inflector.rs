use kielo_protocol::{Case, Cell, NounClass, PartOfSpeech, Tense, VerbClass, Voice, WordClass};

use crate::classify::{classify_noun, classify_verb};
use crate::config::{CoveragePolicy, EngineConfig};
use crate::endings::EndingTable;
use crate::error::{LexiconError, MorphError};
use crate::harmony;
use crate::lexicon::LexiconIndex;
use crate::stem::{noun_stem, verb_stem};
use crate::text::normalize;

/// Entry point for every morphological query.
///
/// Holds an immutable lexicon snapshot and the ending table. All methods take `&self`, so one
/// instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct Inflector {
    pub(crate) lexicon: LexiconIndex,
    pub(crate) endings: EndingTable,
    pub(crate) config: EngineConfig,
}

impl Inflector {
    pub fn new(lexicon: LexiconIndex, config: EngineConfig) -> Self {
        Self {
            lexicon,
            endings: EndingTable::standard(),
            config,
        }
    }

    /// Builtin lexicon, curated coverage.
    pub fn builtin() -> Result<Self, LexiconError> {
        Ok(Self::new(LexiconIndex::builtin()?, EngineConfig::default()))
    }

    pub fn lexicon(&self) -> &LexiconIndex {
        &self.lexicon
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn classify(&self, citation: &str, pos: PartOfSpeech) -> WordClass {
        match pos {
            PartOfSpeech::Verb => WordClass::Verb(self.classify_verb(citation)),
            PartOfSpeech::Noun => WordClass::Noun(self.classify_noun(citation)),
        }
    }

    pub fn classify_verb(&self, citation: &str) -> VerbClass {
        let verb = normalize(citation);
        match self.lexicon.exception(PartOfSpeech::Verb, &verb).and_then(|e| e.class) {
            Some(WordClass::Verb(class)) => class,
            _ => classify_verb(&verb),
        }
    }

    pub fn classify_noun(&self, citation: &str) -> NounClass {
        let noun = normalize(citation);
        match self.lexicon.exception(PartOfSpeech::Noun, &noun).and_then(|e| e.class) {
            Some(WordClass::Noun(class)) => class,
            _ => classify_noun(&noun),
        }
    }

    /// A recorded stem override always wins over the rules.
    pub fn extract_stem(&self, citation: &str, class: WordClass) -> String {
        let word = normalize(citation);
        if let Some(stem) = self
            .lexicon
            .exception(class.pos(), &word)
            .and_then(|exception| exception.stem.as_ref())
        {
            return stem.clone();
        }
        match class {
            WordClass::Verb(class) => verb_stem(&word, class),
            WordClass::Noun(class) => noun_stem(&word, class),
        }
    }

    /// Resolves one paradigm cell.
    pub fn inflect(&self, citation: &str, cell: Cell) -> Result<String, MorphError> {
        match cell {
            Cell::Verb {
                tense,
                voice,
                person,
            } => self.conjugate_cell(citation, tense, voice, person),
            Cell::Noun { case } => self.decline(citation, case),
        }
    }

    pub fn harmonize(&self, template: &str, word: &str) -> String {
        harmony::harmonize(template, &normalize(word))
    }

    pub fn supported_verbs(&self) -> Vec<&str> {
        self.lexicon.supported(PartOfSpeech::Verb)
    }

    pub fn supported_nouns(&self) -> Vec<&str> {
        self.lexicon.supported(PartOfSpeech::Noun)
    }

    /// Whether a query for this word may go past the curated table.
    pub(crate) fn admits(&self, pos: PartOfSpeech, word: &str) -> bool {
        self.config.coverage == CoveragePolicy::Open || self.lexicon.is_supported(pos, word)
    }

    pub(crate) fn unsupported_conjugation(
        &self,
        verb: &str,
        tense: Tense,
        voice: Voice,
    ) -> MorphError {
        MorphError::UnsupportedConjugation {
            verb: verb.to_string(),
            tense,
            voice,
            supported: self.supported_verbs().into_iter().map(String::from).collect(),
        }
    }

    pub(crate) fn unsupported_declension(&self, noun: &str) -> MorphError {
        MorphError::UnsupportedDeclension {
            noun: noun.to_string(),
            supported: self.supported_nouns().into_iter().map(String::from).collect(),
        }
    }
}

/// Every cell of a paradigm, in tag order: active persons of each tense, then its passive.
pub fn paradigm_cells(pos: PartOfSpeech) -> Vec<Cell> {
    match pos {
        PartOfSpeech::Verb => Tense::ALL
            .iter()
            .flat_map(|tense| {
                let active = tense.persons().iter().map(move |person| Cell::Verb {
                    tense: *tense,
                    voice: Voice::Active,
                    person: Some(*person),
                });
                let passive = (*tense != Tense::Imperative).then_some(Cell::Verb {
                    tense: *tense,
                    voice: Voice::Passive,
                    person: None,
                });
                active.chain(passive)
            })
            .collect(),
        PartOfSpeech::Noun => Case::ALL.iter().map(|case| Cell::Noun { case: *case }).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paradigm_sizes() {
        // 6 finite tenses × (6 persons + passive) + 2 imperative persons
        assert_eq!(paradigm_cells(PartOfSpeech::Verb).len(), 6 * 7 + 2);
        assert_eq!(paradigm_cells(PartOfSpeech::Noun).len(), 10);
    }

    #[test]
    fn every_cell_of_a_curated_word_resolves() {
        let inflector = Inflector::builtin().unwrap();
        for cell in paradigm_cells(PartOfSpeech::Verb) {
            assert!(!inflector.inflect("tehdä", cell).unwrap().is_empty(), "{}", cell);
        }
        assert_eq!(
            inflector.inflect("mies", Cell::Noun { case: Case::Partitive }).unwrap(),
            "miestä"
        );
    }
}
