//! Learner-facing descriptions of classes, cases, tenses and persons.

use kielo_protocol::{Case, NounClass, Person, Tense, VerbClass, WordClass};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassDescription {
    pub class: WordClass,
    pub label: &'static str,
    pub examples: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CaseDescription {
    pub case: Case,
    pub english: &'static str,
    pub finnish: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TenseDescription {
    pub tense: Tense,
    pub label: &'static str,
    /// How the tense is named inside a sentence ("past tense", "conditional mood").
    pub phrase: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PersonDescription {
    pub person: Person,
    pub key: &'static str,
    pub label: &'static str,
    pub pronoun: &'static str,
}

const CLASSES: [ClassDescription; 12] = [
    ClassDescription {
        class: WordClass::Verb(VerbClass::I),
        label: "Type I (-a/-ä verbs)",
        examples: &["sanoa", "puhua", "antaa"],
    },
    ClassDescription {
        class: WordClass::Verb(VerbClass::II),
        label: "Type II (-da/-dä verbs)",
        examples: &["juoda", "syödä", "voida"],
    },
    ClassDescription {
        class: WordClass::Verb(VerbClass::III),
        label: "Type III (-la/-lä, -na/-nä, -ra/-rä, -ta/-tä verbs)",
        examples: &["tulla", "mennä", "nousta"],
    },
    ClassDescription {
        class: WordClass::Verb(VerbClass::IV),
        label: "Type IV (-ata/-ätä verbs)",
        examples: &["tavata", "herätä"],
    },
    ClassDescription {
        class: WordClass::Verb(VerbClass::V),
        label: "Type V (-ita/-itä verbs)",
        examples: &["tarvita", "valita"],
    },
    ClassDescription {
        class: WordClass::Verb(VerbClass::VI),
        label: "Type VI (-eta/-etä verbs)",
        examples: &["vanheta", "kylmetä"],
    },
    ClassDescription {
        class: WordClass::Noun(NounClass::I),
        label: "Type I (vowel stems)",
        examples: &["talo", "katu", "kirja"],
    },
    ClassDescription {
        class: WordClass::Noun(NounClass::II),
        label: "Type II (-e nouns)",
        examples: &["huone", "perhe"],
    },
    ClassDescription {
        class: WordClass::Noun(NounClass::III),
        label: "Type III (consonant-final nouns)",
        examples: &["sydän", "puhelin", "vastaus"],
    },
    ClassDescription {
        class: WordClass::Noun(NounClass::IV),
        label: "Type IV (-nen nouns)",
        examples: &["nainen", "suomalainen"],
    },
    ClassDescription {
        class: WordClass::Noun(NounClass::V),
        label: "Type V (-si/-ti nouns)",
        examples: &["käsi", "vesi", "lapsi"],
    },
    ClassDescription {
        class: WordClass::Noun(NounClass::VI),
        label: "Type VI (irregular and long-vowel stems)",
        examples: &["mies", "yö", "työ"],
    },
];

const CASES: [CaseDescription; 10] = [
    CaseDescription {
        case: Case::Nominative,
        english: "Nominative",
        finnish: "Perusmuoto",
        description: "Subject of sentence",
    },
    CaseDescription {
        case: Case::Genitive,
        english: "Genitive",
        finnish: "Omanto",
        description: "Possession, \"of\"",
    },
    CaseDescription {
        case: Case::Partitive,
        english: "Partitive",
        finnish: "Osanto",
        description: "Partial object, after numbers",
    },
    CaseDescription {
        case: Case::Accusative,
        english: "Accusative",
        finnish: "Kohdanto",
        description: "Direct object",
    },
    CaseDescription {
        case: Case::Inessive,
        english: "Inessive",
        finnish: "Sisäolento",
        description: "Inside, \"in\"",
    },
    CaseDescription {
        case: Case::Elative,
        english: "Elative",
        finnish: "Sisäeronto",
        description: "From inside, \"out of\"",
    },
    CaseDescription {
        case: Case::Illative,
        english: "Illative",
        finnish: "Sisätulento",
        description: "Into, \"into\"",
    },
    CaseDescription {
        case: Case::Adessive,
        english: "Adessive",
        finnish: "Ulkoolento",
        description: "At/on, \"at\"",
    },
    CaseDescription {
        case: Case::Ablative,
        english: "Ablative",
        finnish: "Ulkoeronto",
        description: "From, \"from\"",
    },
    CaseDescription {
        case: Case::Allative,
        english: "Allative",
        finnish: "Ulkotulento",
        description: "To, \"to\"",
    },
];

const TENSES: [TenseDescription; 7] = [
    TenseDescription {
        tense: Tense::Present,
        label: "Present",
        phrase: "present tense",
    },
    TenseDescription {
        tense: Tense::Imperfect,
        label: "Imperfect",
        phrase: "past tense",
    },
    TenseDescription {
        tense: Tense::Perfect,
        label: "Perfect",
        phrase: "perfect tense",
    },
    TenseDescription {
        tense: Tense::Pluperfect,
        label: "Pluperfect",
        phrase: "pluperfect tense",
    },
    TenseDescription {
        tense: Tense::Conditional,
        label: "Conditional",
        phrase: "conditional mood",
    },
    TenseDescription {
        tense: Tense::ConditionalPerfect,
        label: "Conditional perfect",
        phrase: "conditional perfect",
    },
    TenseDescription {
        tense: Tense::Imperative,
        label: "Imperative",
        phrase: "imperative mood",
    },
];

const PERSONS: [PersonDescription; 6] = [
    PersonDescription {
        person: Person::FirstSingular,
        key: "1s",
        label: "1st person singular",
        pronoun: "minä",
    },
    PersonDescription {
        person: Person::SecondSingular,
        key: "2s",
        label: "2nd person singular",
        pronoun: "sinä",
    },
    PersonDescription {
        person: Person::ThirdSingular,
        key: "3s",
        label: "3rd person singular",
        pronoun: "hän",
    },
    PersonDescription {
        person: Person::FirstPlural,
        key: "1p",
        label: "1st person plural",
        pronoun: "me",
    },
    PersonDescription {
        person: Person::SecondPlural,
        key: "2p",
        label: "2nd person plural",
        pronoun: "te",
    },
    PersonDescription {
        person: Person::ThirdPlural,
        key: "3p",
        label: "3rd person plural",
        pronoun: "he",
    },
];

/// Verb classes first, then noun classes.
pub fn class_descriptions() -> &'static [ClassDescription] {
    &CLASSES
}

pub fn class_description(class: WordClass) -> Option<&'static ClassDescription> {
    CLASSES.iter().find(|description| description.class == class)
}

pub fn case_descriptions() -> &'static [CaseDescription] {
    &CASES
}

pub fn case_description(case: Case) -> &'static CaseDescription {
    &CASES[case as usize - 1]
}

pub fn tense_descriptions() -> &'static [TenseDescription] {
    &TENSES
}

pub fn tense_description(tense: Tense) -> &'static TenseDescription {
    &TENSES[tense as usize - 1]
}

pub fn person_descriptions() -> &'static [PersonDescription] {
    &PERSONS
}

pub fn person_description(person: Person) -> &'static PersonDescription {
    &PERSONS[person as usize - 1]
}
