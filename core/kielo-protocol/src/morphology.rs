use core::fmt;

use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use bitflags::bitflags;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum PartOfSpeech {
    Verb = 0,
    Noun = 1,
}

impl PartOfSpeech {
    pub const ALL: [PartOfSpeech; 2] = [PartOfSpeech::Verb, PartOfSpeech::Noun];

    pub const fn name(self) -> &'static str {
        match self {
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Noun => "noun",
        }
    }
}

/// Verb conjugation class (verbityyppi 1-6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum VerbClass {
    I = 1,
    II = 2,
    III = 3,
    IV = 4,
    V = 5,
    VI = 6,
}

/// Noun declension class. Numbered the same way as [`VerbClass`] but unrelated to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum NounClass {
    I = 1,
    II = 2,
    III = 3,
    IV = 4,
    V = 5,
    VI = 6,
}

macro_rules! roman_class {
    ($name:ident) => {
        impl $name {
            pub const ALL: [$name; 6] =
                [$name::I, $name::II, $name::III, $name::IV, $name::V, $name::VI];

            pub const fn number(self) -> u8 {
                self as u8
            }

            pub const fn roman(self) -> &'static str {
                match self {
                    $name::I => "I",
                    $name::II => "II",
                    $name::III => "III",
                    $name::IV => "IV",
                    $name::V => "V",
                    $name::VI => "VI",
                }
            }

            pub fn from_code(code: u8) -> Option<Self> {
                Self::ALL.into_iter().find(|class| class.number() == code)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "Type {}", self.roman())
            }
        }
    };
}

roman_class!(VerbClass);
roman_class!(NounClass);

/// A class tagged with the part of speech it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(tag = "pos", content = "class", rename_all = "snake_case"))]
#[archive(check_bytes)]
pub enum WordClass {
    Verb(VerbClass),
    Noun(NounClass),
}

impl WordClass {
    pub const fn pos(self) -> PartOfSpeech {
        match self {
            WordClass::Verb(_) => PartOfSpeech::Verb,
            WordClass::Noun(_) => PartOfSpeech::Noun,
        }
    }

    pub const fn number(self) -> u8 {
        match self {
            WordClass::Verb(class) => class.number(),
            WordClass::Noun(class) => class.number(),
        }
    }
}

impl fmt::Display for WordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordClass::Verb(class) => write!(f, "{} verb", class),
            WordClass::Noun(class) => write!(f, "{} noun", class),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Tense {
    Present = 1,
    Imperfect = 2,
    Perfect = 3,
    Pluperfect = 4,
    Conditional = 5,
    ConditionalPerfect = 6,
    Imperative = 7,
}

impl Tense {
    pub const ALL: [Tense; 7] = [
        Tense::Present,
        Tense::Imperfect,
        Tense::Perfect,
        Tense::Pluperfect,
        Tense::Conditional,
        Tense::ConditionalPerfect,
        Tense::Imperative,
    ];

    pub const fn mood(self) -> Mood {
        match self {
            Tense::Conditional | Tense::ConditionalPerfect => Mood::Conditional,
            Tense::Imperative => Mood::Imperative,
            _ => Mood::Indicative,
        }
    }

    /// Compound tenses are built from an inflected `olla` plus a participle.
    pub const fn is_compound(self) -> bool {
        matches!(self, Tense::Perfect | Tense::Pluperfect | Tense::ConditionalPerfect)
    }

    /// The simple tense `olla` takes inside a compound tense.
    pub const fn auxiliary(self) -> Option<Tense> {
        match self {
            Tense::Perfect => Some(Tense::Present),
            Tense::Pluperfect => Some(Tense::Imperfect),
            Tense::ConditionalPerfect => Some(Tense::Conditional),
            _ => None,
        }
    }

    /// Persons that have a form in this tense's active voice.
    pub fn persons(self) -> &'static [Person] {
        match self {
            Tense::Imperative => &Person::IMPERATIVE,
            _ => &Person::ALL,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Tense::Present => "present",
            Tense::Imperfect => "imperfect",
            Tense::Perfect => "perfect",
            Tense::Pluperfect => "pluperfect",
            Tense::Conditional => "conditional",
            Tense::ConditionalPerfect => "conditional perfect",
            Tense::Imperative => "imperative",
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|tense| *tense as u8 == code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Mood {
    Indicative = 0,
    Conditional = 1,
    Imperative = 2,
}

impl Mood {
    pub const fn name(self) -> &'static str {
        match self {
            Mood::Indicative => "indicative",
            Mood::Conditional => "conditional",
            Mood::Imperative => "imperative",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Voice {
    Active = 1,
    Passive = 2,
}

impl Voice {
    pub const ALL: [Voice; 2] = [Voice::Active, Voice::Passive];

    pub const fn name(self) -> &'static str {
        match self {
            Voice::Active => "active",
            Voice::Passive => "passive",
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|voice| *voice as u8 == code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Number {
    Singular = 0,
    Plural = 1,
}

/// Grammatical person. Serialized with the short keys `1s` .. `3p`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Person {
    #[cfg_attr(feature = "serde", serde(rename = "1s"))]
    FirstSingular = 1,
    #[cfg_attr(feature = "serde", serde(rename = "2s"))]
    SecondSingular = 2,
    #[cfg_attr(feature = "serde", serde(rename = "3s"))]
    ThirdSingular = 3,
    #[cfg_attr(feature = "serde", serde(rename = "1p"))]
    FirstPlural = 4,
    #[cfg_attr(feature = "serde", serde(rename = "2p"))]
    SecondPlural = 5,
    #[cfg_attr(feature = "serde", serde(rename = "3p"))]
    ThirdPlural = 6,
}

impl Person {
    pub const ALL: [Person; 6] = [
        Person::FirstSingular,
        Person::SecondSingular,
        Person::ThirdSingular,
        Person::FirstPlural,
        Person::SecondPlural,
        Person::ThirdPlural,
    ];

    pub const IMPERATIVE: [Person; 2] = [Person::SecondSingular, Person::SecondPlural];

    pub const fn key(self) -> &'static str {
        match self {
            Person::FirstSingular => "1s",
            Person::SecondSingular => "2s",
            Person::ThirdSingular => "3s",
            Person::FirstPlural => "1p",
            Person::SecondPlural => "2p",
            Person::ThirdPlural => "3p",
        }
    }

    pub const fn pronoun(self) -> &'static str {
        match self {
            Person::FirstSingular => "minä",
            Person::SecondSingular => "sinä",
            Person::ThirdSingular => "hän",
            Person::FirstPlural => "me",
            Person::SecondPlural => "te",
            Person::ThirdPlural => "he",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Person::FirstSingular => "first person singular",
            Person::SecondSingular => "second person singular",
            Person::ThirdSingular => "third person singular",
            Person::FirstPlural => "first person plural",
            Person::SecondPlural => "second person plural",
            Person::ThirdPlural => "third person plural",
        }
    }

    pub const fn number(self) -> Number {
        match self {
            Person::FirstSingular | Person::SecondSingular | Person::ThirdSingular => {
                Number::Singular
            }
            _ => Number::Plural,
        }
    }

    pub const fn is_second(self) -> bool {
        matches!(self, Person::SecondSingular | Person::SecondPlural)
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|person| *person as u8 == code)
    }
}

/// The ten productive singular cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Case {
    Nominative = 1,
    Genitive = 2,
    Partitive = 3,
    Accusative = 4,
    Inessive = 5,
    Elative = 6,
    Illative = 7,
    Adessive = 8,
    Ablative = 9,
    Allative = 10,
}

impl Case {
    pub const ALL: [Case; 10] = [
        Case::Nominative,
        Case::Genitive,
        Case::Partitive,
        Case::Accusative,
        Case::Inessive,
        Case::Elative,
        Case::Illative,
        Case::Adessive,
        Case::Ablative,
        Case::Allative,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Case::Nominative => "nominative",
            Case::Genitive => "genitive",
            Case::Partitive => "partitive",
            Case::Accusative => "accusative",
            Case::Inessive => "inessive",
            Case::Elative => "elative",
            Case::Illative => "illative",
            Case::Adessive => "adessive",
            Case::Ablative => "ablative",
            Case::Allative => "allative",
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|case| *case as u8 == code)
    }
}

/// CEFR proficiency tier. Ordered from beginner to mastery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum ProficiencyTier {
    A1 = 0,
    A2 = 1,
    B1 = 2,
    B2 = 3,
    C1 = 4,
    C2 = 5,
}

impl ProficiencyTier {
    pub const ALL: [ProficiencyTier; 6] = [
        ProficiencyTier::A1,
        ProficiencyTier::A2,
        ProficiencyTier::B1,
        ProficiencyTier::B2,
        ProficiencyTier::C1,
        ProficiencyTier::C2,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ProficiencyTier::A1 => "A1",
            ProficiencyTier::A2 => "A2",
            ProficiencyTier::B1 => "B1",
            ProficiencyTier::B2 => "B2",
            ProficiencyTier::C1 => "C1",
            ProficiencyTier::C2 => "C2",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Difficulty {
    Easy = 1,
    Medium = 2,
    Hard = 3,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Score awarded for a correct answer.
    pub const fn points(self) -> u32 {
        self as u32
    }

    /// Easy and medium exercises are multiple choice, hard ones are free text.
    pub const fn is_multiple_choice(self) -> bool {
        !matches!(self, Difficulty::Hard)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

macro_rules! display_by_name {
    ($($name:ident),*) => {
        $(
            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.name())
                }
            }
        )*
    };
}

display_by_name!(PartOfSpeech, Tense, Mood, Voice, Person, Case, ProficiencyTier, Difficulty);

/// One addressable cell of a paradigm.
///
/// Active finite verb cells carry a person; passive cells do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(tag = "pos", rename_all = "snake_case"))]
#[archive(check_bytes)]
pub enum Cell {
    Verb {
        tense: Tense,
        voice: Voice,
        person: Option<Person>,
    },
    Noun {
        case: Case,
    },
}

impl Cell {
    pub const fn pos(&self) -> PartOfSpeech {
        match self {
            Cell::Verb { .. } => PartOfSpeech::Verb,
            Cell::Noun { .. } => PartOfSpeech::Noun,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Verb {
                tense,
                voice: Voice::Passive,
                ..
            } => write!(f, "passive {}", tense),
            Cell::Verb {
                tense,
                person: Some(person),
                ..
            } => write!(f, "{} {} ({})", tense, person.key(), person.pronoun()),
            Cell::Verb { tense, .. } => write!(f, "{}", tense),
            Cell::Noun { case } => write!(f, "{}", case),
        }
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    pub struct MorphFlags: u32 {
        // Tense (Bits 0-6)
        const PRESENT = 1 << 0;
        const IMPERFECT = 1 << 1;
        const PERFECT = 1 << 2;
        const PLUPERFECT = 1 << 3;
        const CONDITIONAL = 1 << 4;
        const CONDITIONAL_PERFECT = 1 << 5;
        const IMPERATIVE = 1 << 6;

        // Voice (Bits 7-8)
        const ACTIVE = 1 << 7;
        const PASSIVE = 1 << 8;

        // Person (Bits 9-14)
        const FIRST_SINGULAR = 1 << 9;
        const SECOND_SINGULAR = 1 << 10;
        const THIRD_SINGULAR = 1 << 11;
        const FIRST_PLURAL = 1 << 12;
        const SECOND_PLURAL = 1 << 13;
        const THIRD_PLURAL = 1 << 14;

        // Participle (Bits 15-17)
        const PARTICIPLE = 1 << 15;
        const SINGULAR = 1 << 16;
        const PLURAL = 1 << 17;

        // Case (Bits 18-27)
        const NOMINATIVE = 1 << 18;
        const GENITIVE = 1 << 19;
        const PARTITIVE = 1 << 20;
        const ACCUSATIVE = 1 << 21;
        const INESSIVE = 1 << 22;
        const ELATIVE = 1 << 23;
        const ILLATIVE = 1 << 24;
        const ADESSIVE = 1 << 25;
        const ABLATIVE = 1 << 26;
        const ALLATIVE = 1 << 27;
    }
}

impl From<Tense> for MorphFlags {
    fn from(tense: Tense) -> Self {
        MorphFlags::from_bits_truncate(1 << (tense as u32 - 1))
    }
}

impl From<Voice> for MorphFlags {
    fn from(voice: Voice) -> Self {
        match voice {
            Voice::Active => MorphFlags::ACTIVE,
            Voice::Passive => MorphFlags::PASSIVE,
        }
    }
}

impl From<Person> for MorphFlags {
    fn from(person: Person) -> Self {
        MorphFlags::from_bits_truncate(1 << (person as u32 + 8))
    }
}

impl From<Number> for MorphFlags {
    fn from(number: Number) -> Self {
        match number {
            Number::Singular => MorphFlags::SINGULAR,
            Number::Plural => MorphFlags::PLURAL,
        }
    }
}

impl From<Case> for MorphFlags {
    fn from(case: Case) -> Self {
        MorphFlags::from_bits_truncate(1 << (case as u32 + 17))
    }
}

impl MorphFlags {
    /// Key of a finite verb cell.
    pub fn verb(tense: Tense, voice: Voice, person: Option<Person>) -> Self {
        let key = MorphFlags::from(tense) | MorphFlags::from(voice);
        match person {
            Some(person) => key | MorphFlags::from(person),
            None => key,
        }
    }

    /// Key of a past participle. Passive participles carry no number.
    pub fn participle(voice: Voice, number: Option<Number>) -> Self {
        let key = MorphFlags::PARTICIPLE | MorphFlags::from(voice);
        match number {
            Some(number) => key | MorphFlags::from(number),
            None => key,
        }
    }

    pub fn noun(case: Case) -> Self {
        MorphFlags::from(case)
    }
}

impl From<Cell> for MorphFlags {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Verb { tense, voice, person } => MorphFlags::verb(tense, voice, person),
            Cell::Noun { case } => MorphFlags::noun(case),
        }
    }
}
