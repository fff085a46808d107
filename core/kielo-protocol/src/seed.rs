//! Human-editable JSON seed that compiles into a [`Lexicon`].

use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::ids::{LexemeId, LexiconVersion};
use crate::model::{Exception, Lexeme, Lexicon, Paradigm};
use crate::morphology::{
    Case, MorphFlags, NounClass, Number, PartOfSpeech, Person, ProficiencyTier, Tense, VerbClass,
    Voice, WordClass,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedLexicon {
    pub version: u32,
    #[serde(default)]
    pub verbs: Vec<SeedVerb>,
    #[serde(default)]
    pub nouns: Vec<SeedNoun>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedVerb {
    pub citation: String,
    pub gloss: String,
    #[serde(default)]
    pub examples: Vec<String>,
    pub frequency: u32,
    pub tier: ProficiencyTier,
    #[serde(default)]
    pub class: Option<VerbClass>,
    #[serde(default)]
    pub stem: Option<String>,
    #[serde(default)]
    pub forms: Option<SeedVerbForms>,
}

/// Person rows are ordered `1s 2s 3s 1p 2p 3p`; the imperative row is `2s 2p`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedVerbForms {
    #[serde(default)]
    pub present: Option<[String; 6]>,
    #[serde(default)]
    pub imperfect: Option<[String; 6]>,
    #[serde(default)]
    pub conditional: Option<[String; 6]>,
    #[serde(default)]
    pub imperative: Option<[String; 2]>,
    #[serde(default)]
    pub passive: Option<SeedPassive>,
    #[serde(default)]
    pub participle: Option<SeedParticiple>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedPassive {
    #[serde(default)]
    pub present: Option<String>,
    #[serde(default)]
    pub imperfect: Option<String>,
    #[serde(default)]
    pub conditional: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedParticiple {
    /// Singular, plural.
    #[serde(default)]
    pub active: Option<[String; 2]>,
    #[serde(default)]
    pub passive: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedNoun {
    pub citation: String,
    pub gloss: String,
    #[serde(default)]
    pub examples: Vec<String>,
    pub frequency: u32,
    pub tier: ProficiencyTier,
    #[serde(default)]
    pub class: Option<NounClass>,
    #[serde(default)]
    pub stem: Option<String>,
    /// One form per case, in [`Case::ALL`] order.
    #[serde(default)]
    pub cases: Option<[String; 10]>,
}

impl SeedLexicon {
    /// Flattens the seed into lexemes and exceptions. Lexeme ids follow seed order, starting at 1.
    pub fn into_lexicon(self) -> Lexicon {
        let mut lexemes = Vec::with_capacity(self.verbs.len() + self.nouns.len());
        let mut exceptions = Vec::new();
        let mut next_id = 1u32;

        for verb in self.verbs {
            let paradigm = verb.forms.as_ref().map(verb_paradigm).unwrap_or_default();
            if verb.class.is_some() || verb.stem.is_some() || !paradigm.is_empty() {
                exceptions.push(Exception {
                    pos: PartOfSpeech::Verb,
                    citation: verb.citation.clone(),
                    class: verb.class.map(WordClass::Verb),
                    stem: verb.stem,
                    paradigm,
                });
            }
            lexemes.push(Lexeme {
                id: LexemeId::new(next_id),
                citation: verb.citation,
                pos: PartOfSpeech::Verb,
                gloss: verb.gloss,
                examples: verb.examples,
                frequency: verb.frequency,
                tier: verb.tier,
            });
            next_id += 1;
        }

        for noun in self.nouns {
            let mut paradigm = Paradigm::new();
            if let Some(cases) = &noun.cases {
                for (case, form) in Case::ALL.iter().zip(cases) {
                    paradigm.insert(MorphFlags::noun(*case), form.as_str());
                }
            }
            if noun.class.is_some() || noun.stem.is_some() || !paradigm.is_empty() {
                exceptions.push(Exception {
                    pos: PartOfSpeech::Noun,
                    citation: noun.citation.clone(),
                    class: noun.class.map(WordClass::Noun),
                    stem: noun.stem,
                    paradigm,
                });
            }
            lexemes.push(Lexeme {
                id: LexemeId::new(next_id),
                citation: noun.citation,
                pos: PartOfSpeech::Noun,
                gloss: noun.gloss,
                examples: noun.examples,
                frequency: noun.frequency,
                tier: noun.tier,
            });
            next_id += 1;
        }

        Lexicon {
            version: LexiconVersion::new(self.version),
            lexemes,
            exceptions,
        }
    }
}

fn verb_paradigm(forms: &SeedVerbForms) -> Paradigm {
    let mut paradigm = Paradigm::new();

    let rows = [
        (Tense::Present, &forms.present),
        (Tense::Imperfect, &forms.imperfect),
        (Tense::Conditional, &forms.conditional),
    ];
    for (tense, row) in rows {
        if let Some(row) = row {
            for (person, form) in Person::ALL.iter().zip(row) {
                let flags = MorphFlags::verb(tense, Voice::Active, Some(*person));
                paradigm.insert(flags, form.as_str());
            }
        }
    }

    if let Some(row) = &forms.imperative {
        for (person, form) in Person::IMPERATIVE.iter().zip(row) {
            let flags = MorphFlags::verb(Tense::Imperative, Voice::Active, Some(*person));
            paradigm.insert(flags, form.as_str());
        }
    }

    if let Some(passive) = &forms.passive {
        let cells = [
            (Tense::Present, &passive.present),
            (Tense::Imperfect, &passive.imperfect),
            (Tense::Conditional, &passive.conditional),
        ];
        for (tense, form) in cells {
            if let Some(form) = form {
                paradigm.insert(MorphFlags::verb(tense, Voice::Passive, None), form.as_str());
            }
        }
    }

    if let Some(participle) = &forms.participle {
        if let Some([singular, plural]) = &participle.active {
            let active = |number| MorphFlags::participle(Voice::Active, Some(number));
            paradigm.insert(active(Number::Singular), singular.as_str());
            paradigm.insert(active(Number::Plural), plural.as_str());
        }
        if let Some(form) = &participle.passive {
            paradigm.insert(MorphFlags::participle(Voice::Passive, None), form.as_str());
        }
    }

    paradigm
}
