//! Parsers for the plain-data tags callers send across the boundary.
//!
//! Every tag accepts its English name, its Finnish grammatical term and, where the enum has
//! one, its numeric code. Matching is case-insensitive and the whole input must be consumed.

use kielo_morph::MorphError;
use kielo_protocol::{
    Case, Difficulty, NounClass, PartOfSpeech, Person, ProficiencyTier, Tense, VerbClass, Voice,
};
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::digit1,
    combinator::{all_consuming, map_opt, opt},
    error::{Error, ErrorKind},
    sequence::preceded,
    IResult,
};

type Table<T> = &'static [(&'static str, T)];

const TENSES: Table<Tense> = &[
    ("present", Tense::Present),
    ("preesens", Tense::Present),
    ("imperfect", Tense::Imperfect),
    ("past", Tense::Imperfect),
    ("imperfekti", Tense::Imperfect),
    ("perfect", Tense::Perfect),
    ("perfekti", Tense::Perfect),
    ("pluperfect", Tense::Pluperfect),
    ("pluskvamperfekti", Tense::Pluperfect),
    ("conditional", Tense::Conditional),
    ("konditionaali", Tense::Conditional),
    ("conditional perfect", Tense::ConditionalPerfect),
    ("konditionaalin perfekti", Tense::ConditionalPerfect),
    ("imperative", Tense::Imperative),
    ("imperatiivi", Tense::Imperative),
];

const VOICES: Table<Voice> = &[
    ("active", Voice::Active),
    ("aktiivi", Voice::Active),
    ("passive", Voice::Passive),
    ("passiivi", Voice::Passive),
];

const PERSONS: Table<Person> = &[
    ("1s", Person::FirstSingular),
    ("2s", Person::SecondSingular),
    ("3s", Person::ThirdSingular),
    ("1p", Person::FirstPlural),
    ("2p", Person::SecondPlural),
    ("3p", Person::ThirdPlural),
    ("minä", Person::FirstSingular),
    ("sinä", Person::SecondSingular),
    ("hän", Person::ThirdSingular),
    ("me", Person::FirstPlural),
    ("te", Person::SecondPlural),
    ("he", Person::ThirdPlural),
    ("first person singular", Person::FirstSingular),
    ("second person singular", Person::SecondSingular),
    ("third person singular", Person::ThirdSingular),
    ("first person plural", Person::FirstPlural),
    ("second person plural", Person::SecondPlural),
    ("third person plural", Person::ThirdPlural),
];

const CASES: Table<Case> = &[
    ("nominative", Case::Nominative),
    ("nominatiivi", Case::Nominative),
    ("perusmuoto", Case::Nominative),
    ("genitive", Case::Genitive),
    ("genetiivi", Case::Genitive),
    ("omanto", Case::Genitive),
    ("partitive", Case::Partitive),
    ("partitiivi", Case::Partitive),
    ("osanto", Case::Partitive),
    ("accusative", Case::Accusative),
    ("akkusatiivi", Case::Accusative),
    ("kohdanto", Case::Accusative),
    ("inessive", Case::Inessive),
    ("inessiivi", Case::Inessive),
    ("sisäolento", Case::Inessive),
    ("elative", Case::Elative),
    ("elatiivi", Case::Elative),
    ("sisäeronto", Case::Elative),
    ("illative", Case::Illative),
    ("illatiivi", Case::Illative),
    ("sisätulento", Case::Illative),
    ("adessive", Case::Adessive),
    ("adessiivi", Case::Adessive),
    ("ulkoolento", Case::Adessive),
    ("ablative", Case::Ablative),
    ("ablatiivi", Case::Ablative),
    ("ulkoeronto", Case::Ablative),
    ("allative", Case::Allative),
    ("allatiivi", Case::Allative),
    ("ulkotulento", Case::Allative),
];

const TIERS: Table<ProficiencyTier> = &[
    ("a1", ProficiencyTier::A1),
    ("a2", ProficiencyTier::A2),
    ("b1", ProficiencyTier::B1),
    ("b2", ProficiencyTier::B2),
    ("c1", ProficiencyTier::C1),
    ("c2", ProficiencyTier::C2),
];

const DIFFICULTIES: Table<Difficulty> = &[
    ("easy", Difficulty::Easy),
    ("helppo", Difficulty::Easy),
    ("medium", Difficulty::Medium),
    ("keskitaso", Difficulty::Medium),
    ("hard", Difficulty::Hard),
    ("vaikea", Difficulty::Hard),
];

const PARTS_OF_SPEECH: Table<PartOfSpeech> = &[
    ("verb", PartOfSpeech::Verb),
    ("verbi", PartOfSpeech::Verb),
    ("noun", PartOfSpeech::Noun),
    ("substantiivi", PartOfSpeech::Noun),
];

const ROMAN: Table<u8> = &[("i", 1), ("ii", 2), ("iii", 3), ("iv", 4), ("v", 5), ("vi", 6)];

/// Matches the longest key of `table` at the start of the input.
fn keyword<T: Copy>(table: Table<T>) -> impl Fn(&str) -> IResult<&str, T> {
    move |input: &str| {
        table
            .iter()
            .filter(|(key, _)| input.starts_with(key))
            .max_by_key(|(key, _)| key.len())
            .map(|(key, value)| (&input[key.len()..], *value))
            .ok_or_else(|| nom::Err::Error(Error::new(input, ErrorKind::Tag)))
    }
}

fn code(input: &str) -> IResult<&str, u8> {
    map_opt(digit1, |digits: &str| digits.parse::<u8>().ok())(input)
}

/// Lowercases, trims and collapses `_`, `-` and whitespace runs into single spaces.
fn canonical(input: &str) -> String {
    input
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn run<T>(
    field: &'static str,
    input: &str,
    parser: impl FnMut(&str) -> IResult<&str, T>,
) -> Result<T, MorphError> {
    let normalized = canonical(input);
    let result = all_consuming(parser)(normalized.as_str())
        .map(|(_, value)| value)
        .map_err(|_| MorphError::InvalidParameter {
            field,
            value: input.to_string(),
        });
    result
}

pub fn parse_tense(input: &str) -> Result<Tense, MorphError> {
    run("tense", input, |s| alt((keyword(TENSES), map_opt(code, Tense::from_code)))(s))
}

pub fn parse_voice(input: &str) -> Result<Voice, MorphError> {
    run("voice", input, |s| alt((keyword(VOICES), map_opt(code, Voice::from_code)))(s))
}

pub fn parse_person(input: &str) -> Result<Person, MorphError> {
    run("person", input, |s| alt((keyword(PERSONS), map_opt(code, Person::from_code)))(s))
}

pub fn parse_case(input: &str) -> Result<Case, MorphError> {
    run("case", input, |s| alt((keyword(CASES), map_opt(code, Case::from_code)))(s))
}

pub fn parse_tier(input: &str) -> Result<ProficiencyTier, MorphError> {
    run("tier", input, keyword(TIERS))
}

pub fn parse_difficulty(input: &str) -> Result<Difficulty, MorphError> {
    run("difficulty", input, keyword(DIFFICULTIES))
}

pub fn parse_pos(input: &str) -> Result<PartOfSpeech, MorphError> {
    run("part of speech", input, keyword(PARTS_OF_SPEECH))
}

fn class_number(input: &str) -> IResult<&str, u8> {
    preceded(opt(tag("type ")), alt((keyword(ROMAN), code)))(input)
}

/// `"III"`, `"type iii"` or `"3"`.
pub fn parse_verb_class(input: &str) -> Result<VerbClass, MorphError> {
    run("verb class", input, |s| map_opt(class_number, VerbClass::from_code)(s))
}

pub fn parse_noun_class(input: &str) -> Result<NounClass, MorphError> {
    run("noun class", input, |s| map_opt(class_number, NounClass::from_code)(s))
}
