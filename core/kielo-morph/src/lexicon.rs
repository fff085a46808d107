use std::collections::HashMap;

use kielo_protocol::seed::SeedLexicon;
use kielo_protocol::{Exception, Lexeme, Lexicon, PartOfSpeech};
use rkyv::ser::serializers::AllocSerializer;
use rkyv::ser::Serializer;
use rkyv::AlignedVec;
use tracing::info;

use crate::error::LexiconError;

const BUILTIN_SEED: &str = include_str!("../data/lexicon.json");

#[derive(Debug, Clone, Default)]
struct Entries {
    lexemes: HashMap<String, usize>,
    exceptions: HashMap<String, usize>,
    /// Lexeme indices, most frequent first.
    by_frequency: Vec<usize>,
}

/// Read-only lookup structure over a loaded [`Lexicon`].
///
/// Built once and shared by reference; nothing mutates it after construction.
#[derive(Debug, Clone)]
pub struct LexiconIndex {
    lexicon: Lexicon,
    verbs: Entries,
    nouns: Entries,
}

impl LexiconIndex {
    pub fn new(lexicon: Lexicon) -> Result<Self, LexiconError> {
        let mut verbs = Entries::default();
        let mut nouns = Entries::default();

        for (idx, lexeme) in lexicon.lexemes.iter().enumerate() {
            let entries = match lexeme.pos {
                PartOfSpeech::Verb => &mut verbs,
                PartOfSpeech::Noun => &mut nouns,
            };
            if entries.lexemes.insert(lexeme.citation.clone(), idx).is_some() {
                return Err(LexiconError::Duplicate {
                    pos: lexeme.pos,
                    citation: lexeme.citation.clone(),
                });
            }
            entries.by_frequency.push(idx);
        }

        for (idx, exception) in lexicon.exceptions.iter().enumerate() {
            let entries = match exception.pos {
                PartOfSpeech::Verb => &mut verbs,
                PartOfSpeech::Noun => &mut nouns,
            };
            if entries.exceptions.insert(exception.citation.clone(), idx).is_some() {
                return Err(LexiconError::Duplicate {
                    pos: exception.pos,
                    citation: exception.citation.clone(),
                });
            }
        }

        for entries in [&mut verbs, &mut nouns] {
            entries
                .by_frequency
                .sort_by_key(|idx| (lexicon.lexemes[*idx].frequency, *idx));
        }

        info!(
            version = lexicon.version.0,
            verbs = verbs.lexemes.len(),
            nouns = nouns.lexemes.len(),
            exceptions = lexicon.exceptions.len(),
            "lexicon loaded"
        );

        Ok(Self { lexicon, verbs, nouns })
    }

    /// The lexicon embedded in the crate.
    pub fn builtin() -> Result<Self, LexiconError> {
        Self::from_seed_json(BUILTIN_SEED)
    }

    pub fn from_seed_json(json: &str) -> Result<Self, LexiconError> {
        let seed: SeedLexicon = serde_json::from_str(json)?;
        Self::new(seed.into_lexicon())
    }

    /// Loads a lexicon produced by `lexicon-compiler compile`. The bytes are validated first.
    pub fn from_archive(bytes: &[u8]) -> Result<Self, LexiconError> {
        // rkyv needs aligned input; a plain file read gives no such guarantee
        let mut aligned = AlignedVec::with_capacity(bytes.len());
        aligned.extend_from_slice(bytes);
        let lexicon = rkyv::from_bytes::<Lexicon>(&aligned)
            .map_err(|e| LexiconError::Archive(e.to_string()))?;
        Self::new(lexicon)
    }

    pub fn to_archive(&self) -> Result<AlignedVec, LexiconError> {
        let mut serializer = AllocSerializer::<4096>::default();
        serializer
            .serialize_value(&self.lexicon)
            .map_err(|e| LexiconError::Archive(e.to_string()))?;
        Ok(serializer.into_serializer().into_inner())
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    fn entries(&self, pos: PartOfSpeech) -> &Entries {
        match pos {
            PartOfSpeech::Verb => &self.verbs,
            PartOfSpeech::Noun => &self.nouns,
        }
    }

    pub fn lexeme(&self, pos: PartOfSpeech, citation: &str) -> Option<&Lexeme> {
        self.entries(pos)
            .lexemes
            .get(citation)
            .map(|idx| &self.lexicon.lexemes[*idx])
    }

    pub fn exception(&self, pos: PartOfSpeech, citation: &str) -> Option<&Exception> {
        self.entries(pos)
            .exceptions
            .get(citation)
            .map(|idx| &self.lexicon.exceptions[*idx])
    }

    /// Lexemes of one part of speech, most frequent first.
    pub fn lexemes(&self, pos: PartOfSpeech) -> impl Iterator<Item = &Lexeme> {
        self.entries(pos)
            .by_frequency
            .iter()
            .map(|idx| &self.lexicon.lexemes[*idx])
    }

    /// A word is supported when the lexicon carries a curated paradigm for it.
    pub fn is_supported(&self, pos: PartOfSpeech, citation: &str) -> bool {
        self.exception(pos, citation)
            .map_or(false, |exception| !exception.paradigm.is_empty())
    }

    /// Supported citation forms, most frequent first. Curated words without a lexeme come last.
    pub fn supported(&self, pos: PartOfSpeech) -> Vec<&str> {
        let mut supported: Vec<&str> = self
            .lexemes(pos)
            .map(|lexeme| lexeme.citation.as_str())
            .filter(|citation| self.is_supported(pos, citation))
            .collect();
        for exception in self.lexicon.exceptions_of(pos) {
            if !exception.paradigm.is_empty() && self.lexeme(pos, &exception.citation).is_none() {
                supported.push(exception.citation.as_str());
            }
        }
        supported
    }
}
