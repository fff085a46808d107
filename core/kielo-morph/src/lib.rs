//! Finnish morphology engine.
//!
//! [`Inflector`] answers every paradigm query: classification, stem extraction, vowel harmony,
//! verb conjugation and noun declension. Curated paradigms from the lexicon are authoritative;
//! the rule path in [`endings`] and [`stem`] covers the regular vocabulary.

pub mod classify;
pub mod config;
pub mod conjugate;
pub mod decline;
pub mod describe;
pub mod endings;
pub mod error;
pub mod harmony;
pub mod inflector;
pub mod lexicon;
pub mod stem;
pub mod text;

pub use config::{CoveragePolicy, EngineConfig};
pub use conjugate::{Conjugation, FormSource, VerbForms};
pub use decline::Declension;
pub use describe::{
    case_description, case_descriptions, class_description, class_descriptions, person_description,
    person_descriptions, tense_description, tense_descriptions, CaseDescription, ClassDescription,
    PersonDescription, TenseDescription,
};
pub use error::{LexiconError, MorphError};
pub use harmony::{harmony_of, Harmony};
pub use inflector::{paradigm_cells, Inflector};
pub use lexicon::LexiconIndex;

#[cfg(test)]
mod tests {
    use super::*;
    use kielo_protocol::{Case, Person, Tense, Voice};
    use proptest::prelude::*;

    const MODELED: [Tense; 7] = Tense::ALL;

    #[test]
    fn olla_present_matches_reference() {
        let inflector = Inflector::builtin().unwrap();
        let olla = inflector.conjugate("olla", Tense::Present, Voice::Active).unwrap();
        let expected = [
            (Person::FirstSingular, "olen"),
            (Person::SecondSingular, "olet"),
            (Person::ThirdSingular, "on"),
            (Person::FirstPlural, "olemme"),
            (Person::SecondPlural, "olette"),
            (Person::ThirdPlural, "ovat"),
        ];
        for (person, form) in expected {
            assert_eq!(olla.form(Some(person)), Some(form));
        }
    }

    #[test]
    fn curated_nouns_match_reference() {
        let inflector = Inflector::builtin().unwrap();
        assert_eq!(inflector.decline_all("talo").unwrap().form(Case::Genitive), Some("talon"));
        assert_eq!(inflector.decline_all("käsi").unwrap().form(Case::Partitive), Some("kättä"));
        assert_eq!(inflector.decline("yö", Case::Illative).unwrap(), "yöhön");
    }

    #[test]
    fn every_supported_verb_has_every_tense() {
        let inflector = Inflector::builtin().unwrap();
        for verb in inflector.supported_verbs() {
            for tense in MODELED {
                let active = inflector.conjugate(verb, tense, Voice::Active).unwrap();
                let cells = active.cells();
                assert_eq!(cells.len(), tense.persons().len(), "{} {}", verb, tense);
                assert!(cells.iter().all(|(_, form)| !form.is_empty()));

                if tense != Tense::Imperative {
                    let passive =
                        inflector.conjugate_cell(verb, tense, Voice::Passive, None).unwrap();
                    assert!(!passive.is_empty());
                }
            }
        }
    }

    #[test]
    fn every_supported_noun_has_ten_cases() {
        let inflector = Inflector::builtin().unwrap();
        for noun in inflector.supported_nouns() {
            let declension = inflector.decline_all(noun).unwrap();
            assert_eq!(declension.forms.len(), 10);
            assert_eq!(declension.source, FormSource::Table);
            assert!(declension.forms.values().all(|form| !form.is_empty()));
        }
    }

    #[test]
    fn unlisted_verbs_are_rejected_under_curated_coverage() {
        let inflector = Inflector::builtin().unwrap();
        for verb in ["puhua", "saada", "xyzzy"] {
            match inflector.conjugate(verb, Tense::Present, Voice::Active) {
                Err(MorphError::UnsupportedConjugation { verb: rejected, supported, .. }) => {
                    assert_eq!(rejected, verb);
                    assert_eq!(supported.len(), 14);
                    assert!(supported.contains(&"olla".to_string()));
                }
                other => panic!("expected rejection for {}, got {:?}", verb, other),
            }
        }
    }

    #[test]
    fn error_messages_list_the_alternatives() {
        let inflector = Inflector::builtin().unwrap();
        let err = inflector.decline("kala", Case::Genitive).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("declension of \"kala\" is not available"));
        assert!(message.contains("talo"));
    }

    #[test]
    fn classification_honours_exceptions() {
        let inflector = Inflector::builtin().unwrap();
        // olla would match class III by pattern too; tietää carries an irregular stem
        assert_eq!(inflector.classify_verb("olla"), kielo_protocol::VerbClass::III);
        let class_i = kielo_protocol::WordClass::Verb(kielo_protocol::VerbClass::I);
        assert_eq!(inflector.extract_stem("tietää", class_i), "tiedä");
        assert_eq!(inflector.harmonize("ssa", "Päivä"), "ssä");
    }

    proptest! {
        #[test]
        fn conjugation_is_deterministic(verb in 0usize..14, tense in 0usize..7) {
            let inflector = Inflector::builtin().unwrap();
            let verbs = inflector.supported_verbs();
            let tense = MODELED[tense];
            let first = inflector.conjugate(verbs[verb], tense, Voice::Active).unwrap();
            let second = inflector.conjugate(verbs[verb], tense, Voice::Active).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn decline_agrees_with_decline_all(noun in 0usize..20) {
            let inflector = Inflector::builtin().unwrap();
            let nouns = inflector.supported_nouns();
            let declension = inflector.decline_all(nouns[noun]).unwrap();
            for (case, form) in &declension.forms {
                prop_assert_eq!(&inflector.decline(nouns[noun], *case).unwrap(), form);
            }
        }

        #[test]
        fn open_rules_never_produce_empty_forms(word in "[a-zäö]{2,10}", tense in 0usize..7) {
            let inflector = Inflector::new(LexiconIndex::builtin().unwrap(), EngineConfig::open());
            let conjugation = inflector.conjugate(&word, MODELED[tense], Voice::Active).unwrap();
            prop_assert!(conjugation.cells().iter().all(|(_, form)| !form.is_empty()));
            let declension = inflector.decline_all(&word).unwrap();
            for (case, form) in &declension.forms {
                prop_assert!(!form.is_empty());
                prop_assert_eq!(&inflector.decline(&word, *case).unwrap(), form);
            }
        }
    }
}
