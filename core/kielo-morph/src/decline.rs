use std::collections::BTreeMap;

use kielo_protocol::{Case, MorphFlags, NounClass, Paradigm, PartOfSpeech, WordClass};
use serde::Serialize;
use tracing::debug;

use crate::conjugate::FormSource;
use crate::error::MorphError;
use crate::harmony::harmonize;
use crate::inflector::Inflector;
use crate::text::{ends_in_two_vowels, ends_in_vowel, is_vowel, last_char, normalize, syllables};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declension {
    pub noun: String,
    pub class: NounClass,
    pub stem: String,
    pub forms: BTreeMap<Case, String>,
    pub source: FormSource,
}

impl Declension {
    pub fn form(&self, case: Case) -> Option<&str> {
        self.forms.get(&case).map(String::as_str)
    }
}

struct NounShape<'a> {
    citation: &'a str,
    class: NounClass,
    stem: &'a str,
    paradigm: Option<&'a Paradigm>,
}

impl NounShape<'_> {
    fn resolve(&self, case: Case) -> (String, FormSource) {
        if let Some(form) = self.paradigm.and_then(|p| p.get(MorphFlags::noun(case))) {
            return (form.to_string(), FormSource::Table);
        }
        debug!(noun = self.citation, %case, "generating by rule");
        (self.rule(case), FormSource::Rules)
    }

    fn rule(&self, case: Case) -> String {
        let weak = self.weak_stem();
        let local = |suffix: &str| format!("{}{}", weak, harmonize(suffix, self.citation));
        match case {
            Case::Nominative => self.citation.to_string(),
            Case::Genitive | Case::Accusative => format!("{}n", weak),
            Case::Partitive => self.partitive(),
            Case::Inessive => local("ssa"),
            Case::Elative => local("sta"),
            Case::Illative => self.illative(),
            Case::Adessive => local("lla"),
            Case::Ablative => local("lta"),
            Case::Allative => local("lle"),
        }
    }

    /// Stem used before closed-syllable endings. Only the t/d alternation of `-si`/`-ti` nouns
    /// is modelled.
    fn weak_stem(&self) -> String {
        match (self.class, self.stem.strip_suffix("te")) {
            (NounClass::V, Some(head)) => format!("{}de", head),
            _ => self.stem.to_string(),
        }
    }

    fn partitive(&self) -> String {
        let citation = self.citation;
        let ending = |suffix: &str| harmonize(suffix, citation);
        match self.class {
            NounClass::I if ends_in_two_vowels(citation) => format!("{}{}", citation, ending("ta")),
            NounClass::I => format!("{}{}", citation, ending("a")),
            NounClass::II => format!("{}{}", citation, ending("tta")),
            NounClass::III | NounClass::VI => format!("{}{}", citation, ending("ta")),
            NounClass::IV => match citation.strip_suffix("nen") {
                Some(head) => format!("{}s{}", head, ending("ta")),
                None => format!("{}{}", citation, ending("ta")),
            },
            NounClass::V => match citation.strip_suffix("si") {
                Some(head) if last_char(head).map_or(false, is_vowel) => {
                    format!("{}{}", head, ending("tta"))
                }
                _ => format!("{}{}", self.stem, ending("a")),
            },
        }
    }

    /// talo → taloon, maa → maahan, huone → huoneeseen
    fn illative(&self) -> String {
        let stem = self.stem;
        if self.class == NounClass::II {
            return format!("{}seen", stem);
        }
        match last_char(stem) {
            Some(vowel) if syllables(stem) == 1 && ends_in_two_vowels(stem) => {
                format!("{}h{}n", stem, vowel)
            }
            Some(vowel) if ends_in_vowel(stem) => format!("{}{}n", stem, vowel),
            _ => format!("{}iin", stem),
        }
    }
}

impl Inflector {
    /// All ten cases. Each case goes through the same resolution as [`Inflector::decline`].
    pub fn decline_all(&self, citation: &str) -> Result<Declension, MorphError> {
        let noun = self.admit_noun(citation)?;
        let class = self.classify_noun(&noun);
        let stem = self.extract_stem(&noun, WordClass::Noun(class));
        let shape = NounShape {
            citation: &noun,
            class,
            stem: &stem,
            paradigm: self.noun_paradigm(&noun),
        };

        let mut forms = BTreeMap::new();
        let mut source = FormSource::Table;
        for case in Case::ALL {
            let (form, from) = shape.resolve(case);
            if from == FormSource::Rules {
                source = FormSource::Rules;
            }
            forms.insert(case, form);
        }

        debug!(noun = %noun, ?source, "declined");
        Ok(Declension {
            noun: noun.clone(),
            class,
            stem: stem.clone(),
            forms,
            source,
        })
    }

    pub fn decline(&self, citation: &str, case: Case) -> Result<String, MorphError> {
        let noun = self.admit_noun(citation)?;
        let class = self.classify_noun(&noun);
        let stem = self.extract_stem(&noun, WordClass::Noun(class));
        let shape = NounShape {
            citation: &noun,
            class,
            stem: &stem,
            paradigm: self.noun_paradigm(&noun),
        };
        Ok(shape.resolve(case).0)
    }

    fn admit_noun(&self, citation: &str) -> Result<String, MorphError> {
        let noun = normalize(citation);
        if noun.is_empty() {
            return Err(MorphError::InvalidParameter {
                field: "noun",
                value: citation.to_string(),
            });
        }
        if !self.admits(PartOfSpeech::Noun, &noun) {
            return Err(self.unsupported_declension(&noun));
        }
        Ok(noun)
    }

    fn noun_paradigm(&self, noun: &str) -> Option<&Paradigm> {
        self.lexicon
            .exception(PartOfSpeech::Noun, noun)
            .map(|exception| &exception.paradigm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::lexicon::LexiconIndex;

    fn open() -> Inflector {
        Inflector::new(LexiconIndex::builtin().unwrap(), EngineConfig::open())
    }

    fn forms(inflector: &Inflector, noun: &str) -> Vec<String> {
        inflector.decline_all(noun).unwrap().forms.into_values().collect()
    }

    #[test]
    fn class_i_by_rule() {
        let inflector = open();
        assert_eq!(
            forms(&inflector, "kala"),
            [
                "kala", "kalan", "kalaa", "kalan", "kalassa", "kalasta", "kalaan", "kalalla",
                "kalalta", "kalalle"
            ]
        );
        assert_eq!(inflector.decline("kynä", Case::Inessive).unwrap(), "kynässä");
        assert_eq!(inflector.decline("puu", Case::Partitive).unwrap(), "puuta");
        assert_eq!(inflector.decline("puu", Case::Illative).unwrap(), "puuhun");
    }

    #[test]
    fn other_classes_by_rule() {
        let inflector = open();
        assert_eq!(
            forms(&inflector, "huone"),
            [
                "huone",
                "huoneen",
                "huonetta",
                "huoneen",
                "huoneessa",
                "huoneesta",
                "huoneeseen",
                "huoneella",
                "huoneelta",
                "huoneelle"
            ]
        );
        assert_eq!(inflector.decline("puhelin", Case::Genitive).unwrap(), "puhelimen");
        assert_eq!(inflector.decline("puhelin", Case::Partitive).unwrap(), "puhelinta");
        assert_eq!(inflector.decline("puhelin", Case::Illative).unwrap(), "puhelimeen");
        assert_eq!(inflector.decline("vastaus", Case::Elative).unwrap(), "vastauksesta");
        assert_eq!(inflector.decline("suomalainen", Case::Partitive).unwrap(), "suomalaista");
        assert_eq!(inflector.decline("suomalainen", Case::Adessive).unwrap(), "suomalaisella");
        assert_eq!(inflector.decline("vuosi", Case::Genitive).unwrap(), "vuoden");
        assert_eq!(inflector.decline("vuosi", Case::Partitive).unwrap(), "vuotta");
        assert_eq!(inflector.decline("vuosi", Case::Illative).unwrap(), "vuoteen");
        assert_eq!(inflector.decline("lahti", Case::Inessive).unwrap(), "lahdessa");
        assert_eq!(inflector.decline("suo", Case::Partitive).unwrap(), "suota");
        assert_eq!(inflector.decline("suo", Case::Illative).unwrap(), "suohon");
    }

    #[test]
    fn mies_type_stem_by_rule() {
        let empty = LexiconIndex::from_seed_json(r#"{ "version": 1 }"#).unwrap();
        let inflector = Inflector::new(empty, EngineConfig::open());
        let mies = inflector.decline_all("mies").unwrap();
        assert_eq!(mies.class, NounClass::VI);
        assert_eq!(mies.stem, "miehe");
        assert_eq!(mies.source, FormSource::Rules);
        assert_eq!(mies.form(Case::Genitive), Some("miehen"));
        assert_eq!(mies.form(Case::Illative), Some("mieheen"));
    }

    #[test]
    fn curated_table_is_authoritative() {
        let inflector = open();
        let koti = inflector.decline_all("koti").unwrap();
        assert_eq!(koti.source, FormSource::Table);
        assert_eq!(koti.form(Case::Inessive), Some("kotona"));
        assert_eq!(koti.form(Case::Genitive), Some("kodin"));

        let kala = inflector.decline_all("kala").unwrap();
        assert_eq!(kala.source, FormSource::Rules);
    }

    #[test]
    fn curated_coverage_rejects_unlisted_nouns() {
        let inflector = Inflector::builtin().unwrap();
        match inflector.decline("kala", Case::Genitive) {
            Err(MorphError::UnsupportedDeclension { noun, supported }) => {
                assert_eq!(noun, "kala");
                assert!(supported.contains(&"talo".to_string()));
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(inflector.decline(" Talo ", Case::Genitive).unwrap(), "talon");
    }

    #[test]
    fn empty_noun_is_invalid() {
        let inflector = open();
        assert!(matches!(
            inflector.decline("", Case::Genitive),
            Err(MorphError::InvalidParameter { field: "noun", .. })
        ));
    }
}
