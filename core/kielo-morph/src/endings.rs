//! Verb ending table.
//!
//! Every regular finite cell is a lookup `(class, tense, slot) -> Ending`, where an ending names
//! which base of the verb it attaches to and a back-vowel suffix template. Adding a class or a
//! tense is a change to [`CLASS_RULES`], not to the conjugator.

use std::collections::HashMap;

use kielo_protocol::{Number, Person, Tense, VerbClass};

use crate::harmony::harmonize;
use crate::text::{
    drop_last, ends_with_any, first_vowel, is_vowel, last_char, lengthen_final_vowel,
    penultimate_char, syllables,
};

/// Which form of the verb an ending attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base {
    /// The extracted stem as is.
    Stem,
    /// Stem with a linking `e` after a final consonant (`pur` → `pure`).
    VowelStem,
    /// Vowel stem with its final vowel doubled, used by the present 3rd singular.
    Lengthened,
    /// Stem prepared for the `-i-` past marker.
    Past,
    /// Stem prepared for the `-isi-` conditional marker.
    Conditional,
    /// Infinitive minus its final vowel, with a geminate reduced (`tulla` → `tul`).
    Consonant,
    /// Consonant base with its last consonant doubled, `t` becoming `nn` (`halut` → `halunn`).
    Geminate,
    /// The citation form itself.
    Infinitive,
    /// Stem without its derivational `se`/`ne` fragment (`tarvitse` → `tarvit`).
    Fragmentless,
    /// Stem with a final `a`/`ä` raised to `e` (`laula` → `laule`).
    PassiveStem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    Person(Person),
    Passive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParticipleSlot {
    Active(Number),
    Passive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ending {
    pub base: Base,
    pub suffix: &'static str,
}

const fn ending(base: Base, suffix: &'static str) -> Ending {
    Ending { base, suffix }
}

struct Row {
    base: Base,
    suffixes: [&'static str; 6],
}

const fn row(base: Base, suffixes: [&'static str; 6]) -> Row {
    Row { base, suffixes }
}

const PERSONAL: [&str; 6] = ["n", "t", "", "mme", "tte", "vat"];
const PAST: [&str; 6] = ["in", "it", "i", "imme", "itte", "ivat"];
const CONDITIONAL: [&str; 6] = ["isin", "isit", "isi", "isimme", "isitte", "isivat"];
const LONG_A_PRESENT: [&str; 6] = ["aan", "aat", "aa", "aamme", "aatte", "aavat"];
const A_PAST: [&str; 6] = ["asin", "asit", "asi", "asimme", "asitte", "asivat"];
const A_CONDITIONAL: [&str; 6] = ["aisin", "aisit", "aisi", "aisimme", "aisitte", "aisivat"];
const S_PAST: [&str; 6] = ["sin", "sit", "si", "simme", "sitte", "sivat"];
const S_CONDITIONAL: [&str; 6] = ["sisin", "sisit", "sisi", "sisimme", "sisitte", "sisivat"];

struct ClassRules {
    class: VerbClass,
    present: Row,
    /// Overrides the present row for the 3rd singular.
    present_third_singular: Option<Ending>,
    imperfect: Row,
    conditional: Row,
    /// 2nd singular, 2nd plural.
    imperative: [Ending; 2],
    /// Present, imperfect, conditional.
    passive: [Ending; 3],
    /// Singular, plural.
    active_participle: [Ending; 2],
    passive_participle: Ending,
}

const CLASS_RULES: [ClassRules; 6] = [
    // puhua, sanoa, laulaa
    ClassRules {
        class: VerbClass::I,
        present: row(Base::Stem, PERSONAL),
        present_third_singular: Some(ending(Base::Lengthened, "")),
        imperfect: row(Base::Past, PAST),
        conditional: row(Base::Conditional, CONDITIONAL),
        imperative: [ending(Base::Stem, ""), ending(Base::Stem, "kaa")],
        passive: [
            ending(Base::PassiveStem, "taan"),
            ending(Base::PassiveStem, "ttiin"),
            ending(Base::PassiveStem, "ttaisiin"),
        ],
        active_participle: [ending(Base::Stem, "nut"), ending(Base::Stem, "neet")],
        passive_participle: ending(Base::PassiveStem, "ttu"),
    },
    // juoda, syödä, saada
    ClassRules {
        class: VerbClass::II,
        present: row(Base::Stem, PERSONAL),
        present_third_singular: None,
        imperfect: row(Base::Past, PAST),
        conditional: row(Base::Conditional, CONDITIONAL),
        imperative: [ending(Base::Stem, ""), ending(Base::Stem, "kaa")],
        passive: [
            ending(Base::Infinitive, "an"),
            ending(Base::Stem, "tiin"),
            ending(Base::Stem, "taisiin"),
        ],
        active_participle: [ending(Base::Stem, "nut"), ending(Base::Stem, "neet")],
        passive_participle: ending(Base::Stem, "tu"),
    },
    // tulla, purra, nousta, haluta
    ClassRules {
        class: VerbClass::III,
        present: row(Base::VowelStem, PERSONAL),
        present_third_singular: Some(ending(Base::Lengthened, "")),
        imperfect: row(Base::Past, PAST),
        conditional: row(Base::Conditional, CONDITIONAL),
        imperative: [ending(Base::VowelStem, ""), ending(Base::Consonant, "kaa")],
        passive: [
            ending(Base::Infinitive, "an"),
            ending(Base::Consonant, "tiin"),
            ending(Base::Consonant, "taisiin"),
        ],
        active_participle: [ending(Base::Geminate, "ut"), ending(Base::Geminate, "eet")],
        passive_participle: ending(Base::Consonant, "tu"),
    },
    // herätä, pudota
    ClassRules {
        class: VerbClass::IV,
        present: row(Base::Stem, LONG_A_PRESENT),
        present_third_singular: None,
        imperfect: row(Base::Stem, A_PAST),
        conditional: row(Base::Stem, A_CONDITIONAL),
        imperative: [ending(Base::Stem, "aa"), ending(Base::Consonant, "kaa")],
        passive: [
            ending(Base::Infinitive, "an"),
            ending(Base::Consonant, "tiin"),
            ending(Base::Consonant, "taisiin"),
        ],
        active_participle: [ending(Base::Geminate, "ut"), ending(Base::Geminate, "eet")],
        passive_participle: ending(Base::Consonant, "tu"),
    },
    // tarvita, valita
    ClassRules {
        class: VerbClass::V,
        present: row(Base::Stem, PERSONAL),
        present_third_singular: Some(ending(Base::Lengthened, "")),
        imperfect: row(Base::Fragmentless, S_PAST),
        conditional: row(Base::Fragmentless, S_CONDITIONAL),
        imperative: [ending(Base::Stem, ""), ending(Base::Consonant, "kaa")],
        passive: [
            ending(Base::Fragmentless, "aan"),
            ending(Base::Fragmentless, "tiin"),
            ending(Base::Fragmentless, "taisiin"),
        ],
        active_participle: [ending(Base::Geminate, "ut"), ending(Base::Geminate, "eet")],
        passive_participle: ending(Base::Fragmentless, "tu"),
    },
    // vanheta, kylmetä
    ClassRules {
        class: VerbClass::VI,
        present: row(Base::Stem, PERSONAL),
        present_third_singular: Some(ending(Base::Lengthened, "")),
        imperfect: row(Base::Past, PAST),
        conditional: row(Base::Conditional, CONDITIONAL),
        imperative: [ending(Base::Stem, ""), ending(Base::Consonant, "kaa")],
        passive: [
            ending(Base::Fragmentless, "taan"),
            ending(Base::Fragmentless, "ttiin"),
            ending(Base::Fragmentless, "ttaisiin"),
        ],
        active_participle: [ending(Base::Geminate, "ut"), ending(Base::Geminate, "eet")],
        passive_participle: ending(Base::Fragmentless, "ttu"),
    },
];

/// Composite-key lookup built once from [`CLASS_RULES`].
#[derive(Debug, Clone)]
pub struct EndingTable {
    finite: HashMap<(VerbClass, Tense, Slot), Ending>,
    participles: HashMap<(VerbClass, ParticipleSlot), Ending>,
}

impl EndingTable {
    pub fn standard() -> Self {
        let mut finite = HashMap::new();
        let mut participles = HashMap::new();

        for rules in &CLASS_RULES {
            let class = rules.class;
            let simple = [
                (Tense::Present, &rules.present),
                (Tense::Imperfect, &rules.imperfect),
                (Tense::Conditional, &rules.conditional),
            ];
            for (tense, row) in simple {
                for (person, suffix) in Person::ALL.iter().zip(row.suffixes) {
                    finite.insert((class, tense, Slot::Person(*person)), ending(row.base, suffix));
                }
            }
            if let Some(third) = rules.present_third_singular {
                finite.insert((class, Tense::Present, Slot::Person(Person::ThirdSingular)), third);
            }
            for (person, imperative) in Person::IMPERATIVE.iter().zip(rules.imperative) {
                finite.insert((class, Tense::Imperative, Slot::Person(*person)), imperative);
            }
            let passive_tenses = [Tense::Present, Tense::Imperfect, Tense::Conditional];
            for (tense, passive) in passive_tenses.into_iter().zip(rules.passive) {
                finite.insert((class, tense, Slot::Passive), passive);
            }

            let [singular, plural] = rules.active_participle;
            participles.insert((class, ParticipleSlot::Active(Number::Singular)), singular);
            participles.insert((class, ParticipleSlot::Active(Number::Plural)), plural);
            participles.insert((class, ParticipleSlot::Passive), rules.passive_participle);
        }

        Self { finite, participles }
    }

    pub fn finite(&self, class: VerbClass, tense: Tense, slot: Slot) -> Option<Ending> {
        self.finite.get(&(class, tense, slot)).copied()
    }

    pub fn participle(&self, class: VerbClass, slot: ParticipleSlot) -> Option<Ending> {
        self.participles.get(&(class, slot)).copied()
    }

    pub fn len(&self) -> usize {
        self.finite.len() + self.participles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for EndingTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// The inputs every base is computed from.
#[derive(Debug, Clone, Copy)]
pub struct VerbShape<'a> {
    pub citation: &'a str,
    pub class: VerbClass,
    pub stem: &'a str,
}

impl VerbShape<'_> {
    /// Base + suffix, with the suffix harmonized against the citation form.
    pub fn realize(&self, ending: Ending) -> String {
        format!("{}{}", self.base(ending.base), harmonize(ending.suffix, self.citation))
    }

    pub fn base(&self, base: Base) -> String {
        match base {
            Base::Stem => self.stem.to_string(),
            Base::VowelStem => vowel_stem(self.stem),
            Base::Lengthened => lengthen_final_vowel(&vowel_stem(self.stem)),
            Base::Past => past_base(self.class, self.stem),
            Base::Conditional => conditional_base(self.class, self.stem),
            Base::Consonant => consonant_base(self.citation),
            Base::Geminate => geminate(&consonant_base(self.citation)),
            Base::Infinitive => self.citation.to_string(),
            Base::Fragmentless => strip_fragment(self.stem).to_string(),
            Base::PassiveStem => passive_stem(self.stem),
        }
    }
}

fn vowel_stem(stem: &str) -> String {
    match last_char(stem) {
        Some(c) if !is_vowel(c) => format!("{}e", stem),
        _ => stem.to_string(),
    }
}

fn past_base(class: VerbClass, stem: &str) -> String {
    match class {
        VerbClass::I => past_base_i(stem),
        VerbClass::II => past_base_ii(stem),
        VerbClass::III => match last_char(stem) {
            Some('a' | 'ä') => format!("{}s", drop_last(stem, 1)),
            Some('e') => drop_last(stem, 1).to_string(),
            _ => stem.to_string(),
        },
        VerbClass::VI => drop_final_e(stem),
        VerbClass::IV | VerbClass::V => stem.to_string(),
    }
}

/// sano → sano, laula → laulo, kysy → kysy, lentä → lent
fn past_base_i(stem: &str) -> String {
    match last_char(stem) {
        Some('o' | 'u' | 'y' | 'ö') => stem.to_string(),
        Some('e' | 'i' | 'ä') => drop_last(stem, 1).to_string(),
        Some('a') if syllables(stem) == 2 && matches!(first_vowel(stem), Some('a' | 'e' | 'i')) => {
            format!("{}o", drop_last(stem, 1))
        }
        Some('a') => drop_last(stem, 1).to_string(),
        _ => stem.to_string(),
    }
}

/// juo → jo, syö → sö, vie → ve, saa → sa, voi → vo
fn past_base_ii(stem: &str) -> String {
    if let Some(pair) = ends_with_any(stem, &["uo", "yö", "ie"]) {
        let kept: String = pair.chars().skip(1).collect();
        return format!("{}{}", drop_last(stem, 2), kept);
    }
    if let (Some(last), Some(prev)) = (last_char(stem), penultimate_char(stem)) {
        if last == prev && is_vowel(last) {
            return drop_last(stem, 1).to_string();
        }
    }
    if stem.ends_with('i') {
        return drop_last(stem, 1).to_string();
    }
    stem.to_string()
}

fn conditional_base(class: VerbClass, stem: &str) -> String {
    match class {
        VerbClass::I => match last_char(stem) {
            Some('e' | 'i') => drop_last(stem, 1).to_string(),
            _ => stem.to_string(),
        },
        VerbClass::II => past_base_ii(stem),
        VerbClass::III | VerbClass::VI => drop_final_e(stem),
        VerbClass::IV | VerbClass::V => stem.to_string(),
    }
}

fn drop_final_e(stem: &str) -> String {
    stem.strip_suffix('e').unwrap_or(stem).to_string()
}

/// tulla → tul, nousta → nous, haluta → halut, tarvita → tarvit
pub fn consonant_base(citation: &str) -> String {
    let base = match last_char(citation) {
        Some('a' | 'ä') => drop_last(citation, 1),
        _ => citation,
    };
    if let Some(head) = base.strip_suffix("st") {
        return format!("{}s", head);
    }
    for geminate in ["ll", "nn", "rr"] {
        if let Some(head) = base.strip_suffix(geminate) {
            return format!("{}{}", head, &geminate[1..]);
        }
    }
    base.to_string()
}

/// tul → tull, halut → halunn
fn geminate(base: &str) -> String {
    match last_char(base) {
        Some('t') => format!("{}nn", drop_last(base, 1)),
        Some(c) if !is_vowel(c) => format!("{}{}", base, c),
        _ => base.to_string(),
    }
}

fn strip_fragment(stem: &str) -> &str {
    match ends_with_any(stem, &["se", "ne"]) {
        Some(_) if stem.chars().count() > 2 => drop_last(stem, 2),
        _ => stem,
    }
}

fn passive_stem(stem: &str) -> String {
    match last_char(stem) {
        Some('a' | 'ä') => format!("{}e", drop_last(stem, 1)),
        _ => stem.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape<'a>(citation: &'a str, class: VerbClass, stem: &'a str) -> VerbShape<'a> {
        VerbShape { citation, class, stem }
    }

    #[test]
    fn table_covers_every_class() {
        let table = EndingTable::standard();
        for class in VerbClass::ALL {
            for tense in [Tense::Present, Tense::Imperfect, Tense::Conditional] {
                for person in Person::ALL {
                    assert!(table.finite(class, tense, Slot::Person(person)).is_some());
                }
                assert!(table.finite(class, tense, Slot::Passive).is_some());
            }
            let first_singular = Slot::Person(Person::FirstSingular);
            assert!(table.finite(class, Tense::Imperative, first_singular).is_none());
            assert!(table.finite(class, Tense::Imperative, Slot::Passive).is_none());
            assert!(table.participle(class, ParticipleSlot::Passive).is_some());
        }
        // 6 classes × (3 tenses × 7 slots + 2 imperative) + 6 × 3 participles
        assert_eq!(table.len(), 6 * 23 + 18);
    }

    #[test]
    fn bases() {
        assert_eq!(shape("laulaa", VerbClass::I, "laula").base(Base::Past), "laulo");
        assert_eq!(shape("ottaa", VerbClass::I, "otta").base(Base::Past), "ott");
        assert_eq!(shape("juoda", VerbClass::II, "juo").base(Base::Past), "jo");
        assert_eq!(shape("syödä", VerbClass::II, "syö").base(Base::Past), "sö");
        assert_eq!(shape("saada", VerbClass::II, "saa").base(Base::Past), "sa");
        assert_eq!(shape("haluta", VerbClass::III, "halua").base(Base::Past), "halus");
        assert_eq!(shape("purra", VerbClass::III, "pur").base(Base::VowelStem), "pure");
        assert_eq!(shape("nousta", VerbClass::III, "nouse").base(Base::Consonant), "nous");
        assert_eq!(shape("haluta", VerbClass::III, "halua").base(Base::Geminate), "halunn");
        assert_eq!(shape("tarvita", VerbClass::V, "tarvitse").base(Base::Fragmentless), "tarvit");
        assert_eq!(shape("vanheta", VerbClass::VI, "vanhene").base(Base::Fragmentless), "vanhe");
        assert_eq!(shape("laulaa", VerbClass::I, "laula").base(Base::PassiveStem), "laule");
    }

    #[test]
    fn realize_harmonizes_against_the_citation() {
        let table = EndingTable::standard();
        let verb = shape("herätä", VerbClass::IV, "her");
        let ending = table.finite(VerbClass::IV, Tense::Present, Slot::Person(Person::ThirdPlural));
        assert_eq!(ending.map(|e| verb.realize(e)).as_deref(), Some("heräävät"));
    }
}
