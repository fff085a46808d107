use std::collections::BTreeMap;

use kielo_protocol::{
    MorphFlags, Paradigm, PartOfSpeech, Person, Tense, VerbClass, Voice, WordClass,
};
use serde::Serialize;
use tracing::debug;

use crate::endings::{ParticipleSlot, Slot, VerbShape};
use crate::error::MorphError;
use crate::inflector::Inflector;
use crate::text::normalize;

/// Where a form came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormSource {
    /// Every form was read from the curated paradigm.
    Table,
    /// At least one form was generated by rule.
    Rules,
}

impl FormSource {
    fn merge(self, other: FormSource) -> FormSource {
        match (self, other) {
            (FormSource::Table, FormSource::Table) => FormSource::Table,
            _ => FormSource::Rules,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum VerbForms {
    Personal(BTreeMap<Person, String>),
    Passive(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conjugation {
    pub verb: String,
    pub class: VerbClass,
    pub stem: String,
    pub tense: Tense,
    pub voice: Voice,
    pub forms: VerbForms,
    pub source: FormSource,
}

impl Conjugation {
    /// The form for `person`; passive conjugations answer only to `None`.
    pub fn form(&self, person: Option<Person>) -> Option<&str> {
        match (&self.forms, person) {
            (VerbForms::Personal(forms), Some(person)) => forms.get(&person).map(String::as_str),
            (VerbForms::Passive(form), None) => Some(form.as_str()),
            _ => None,
        }
    }

    pub fn cells(&self) -> Vec<(Option<Person>, &str)> {
        match &self.forms {
            VerbForms::Personal(forms) => {
                forms.iter().map(|(p, f)| (Some(*p), f.as_str())).collect()
            }
            VerbForms::Passive(form) => vec![(None, form.as_str())],
        }
    }
}

const OLLA_PRESENT: [&str; 6] = ["olen", "olet", "on", "olemme", "olette", "ovat"];
const OLLA_IMPERFECT: [&str; 6] = ["olin", "olit", "oli", "olimme", "olitte", "olivat"];
const OLLA_CONDITIONAL: [&str; 6] =
    ["olisin", "olisit", "olisi", "olisimme", "olisitte", "olisivat"];

fn auxiliary(tense: Tense, person: Person) -> &'static str {
    let row = match tense {
        Tense::Imperfect => &OLLA_IMPERFECT,
        Tense::Conditional => &OLLA_CONDITIONAL,
        _ => &OLLA_PRESENT,
    };
    row[person as usize - 1]
}

struct VerbContext<'a> {
    shape: VerbShape<'a>,
    paradigm: Option<&'a Paradigm>,
}

impl VerbContext<'_> {
    fn curated(&self, key: MorphFlags) -> Option<String> {
        self.paradigm.and_then(|p| p.get(key)).map(str::to_string)
    }
}

impl Inflector {
    /// Conjugates `citation` for every person of `tense` (or the single passive form).
    pub fn conjugate(
        &self,
        citation: &str,
        tense: Tense,
        voice: Voice,
    ) -> Result<Conjugation, MorphError> {
        let verb = normalize(citation);
        if verb.is_empty() {
            return Err(MorphError::InvalidParameter {
                field: "verb",
                value: citation.to_string(),
            });
        }
        let imperative_passive = tense == Tense::Imperative && voice == Voice::Passive;
        if !self.admits(PartOfSpeech::Verb, &verb) || imperative_passive {
            return Err(self.unsupported_conjugation(&verb, tense, voice));
        }

        let class = self.classify_verb(&verb);
        let stem = self.extract_stem(&verb, WordClass::Verb(class));
        let ctx = VerbContext {
            shape: VerbShape {
                citation: &verb,
                class,
                stem: &stem,
            },
            paradigm: self
                .lexicon
                .exception(PartOfSpeech::Verb, &verb)
                .map(|exception| &exception.paradigm),
        };

        let (forms, source) = match voice {
            Voice::Active => {
                let mut forms = BTreeMap::new();
                let mut source = FormSource::Table;
                for person in tense.persons() {
                    let (form, from) = self.verb_cell(&ctx, tense, Slot::Person(*person))?;
                    source = source.merge(from);
                    forms.insert(*person, form);
                }
                (VerbForms::Personal(forms), source)
            }
            Voice::Passive => {
                let (form, source) = self.verb_cell(&ctx, tense, Slot::Passive)?;
                (VerbForms::Passive(form), source)
            }
        };

        debug!(verb = %verb, %tense, %voice, ?source, "conjugated");
        Ok(Conjugation {
            verb: verb.clone(),
            class,
            stem: stem.clone(),
            tense,
            voice,
            forms,
            source,
        })
    }

    /// A single cell. Active cells need a person, passive cells must not have one.
    pub fn conjugate_cell(
        &self,
        citation: &str,
        tense: Tense,
        voice: Voice,
        person: Option<Person>,
    ) -> Result<String, MorphError> {
        match (voice, person) {
            (Voice::Active, None) => {
                return Err(MorphError::InvalidParameter {
                    field: "person",
                    value: "none".to_string(),
                })
            }
            (Voice::Passive, Some(person)) => {
                return Err(MorphError::InvalidParameter {
                    field: "person",
                    value: person.key().to_string(),
                })
            }
            (Voice::Active, Some(person)) if !tense.persons().contains(&person) => {
                return Err(MorphError::InvalidPersonForMood {
                    mood: tense.mood(),
                    person,
                })
            }
            _ => {}
        }

        let conjugation = self.conjugate(citation, tense, voice)?;
        conjugation
            .form(person)
            .map(str::to_string)
            .ok_or_else(|| self.unsupported_conjugation(&conjugation.verb, tense, voice))
    }

    fn verb_cell(
        &self,
        ctx: &VerbContext<'_>,
        tense: Tense,
        slot: Slot,
    ) -> Result<(String, FormSource), MorphError> {
        let (voice, person) = match slot {
            Slot::Person(person) => (Voice::Active, Some(person)),
            Slot::Passive => (Voice::Passive, None),
        };
        if let Some(form) = ctx.curated(MorphFlags::verb(tense, voice, person)) {
            return Ok((form, FormSource::Table));
        }
        if let Some(auxiliary_tense) = tense.auxiliary() {
            return self.compound_cell(ctx, auxiliary_tense, slot);
        }

        let ending = self
            .endings
            .finite(ctx.shape.class, tense, slot)
            .ok_or_else(|| self.unsupported_conjugation(ctx.shape.citation, tense, voice))?;
        debug!(verb = ctx.shape.citation, %tense, ?slot, "generating by rule");
        Ok((ctx.shape.realize(ending), FormSource::Rules))
    }

    /// olla in the auxiliary tense + past participle.
    fn compound_cell(
        &self,
        ctx: &VerbContext<'_>,
        auxiliary_tense: Tense,
        slot: Slot,
    ) -> Result<(String, FormSource), MorphError> {
        let (person, participle_slot) = match slot {
            Slot::Person(person) => (person, ParticipleSlot::Active(person.number())),
            Slot::Passive => (Person::ThirdSingular, ParticipleSlot::Passive),
        };
        let (participle, source) = self.participle(ctx, participle_slot)?;
        Ok((format!("{} {}", auxiliary(auxiliary_tense, person), participle), source))
    }

    fn participle(
        &self,
        ctx: &VerbContext<'_>,
        slot: ParticipleSlot,
    ) -> Result<(String, FormSource), MorphError> {
        let key = match slot {
            ParticipleSlot::Active(number) => MorphFlags::participle(Voice::Active, Some(number)),
            ParticipleSlot::Passive => MorphFlags::participle(Voice::Passive, None),
        };
        if let Some(form) = ctx.curated(key) {
            return Ok((form, FormSource::Table));
        }
        let voice = match slot {
            ParticipleSlot::Active(_) => Voice::Active,
            ParticipleSlot::Passive => Voice::Passive,
        };
        let citation = ctx.shape.citation;
        let ending = self
            .endings
            .participle(ctx.shape.class, slot)
            .ok_or_else(|| self.unsupported_conjugation(citation, Tense::Perfect, voice))?;
        Ok((ctx.shape.realize(ending), FormSource::Rules))
    }
}
