#![no_std] // Shared with the wasm build

extern crate alloc;

// Enable std if the feature is active (for tests/tools)
#[cfg(feature = "std")]
extern crate std;

pub mod ids;
pub mod morphology;

pub use ids::{LexemeId, LexiconVersion};
pub use morphology::*;

pub mod model;
pub use model::*;

#[cfg(feature = "serde")]
pub mod seed;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;
    use rkyv::{from_bytes, to_bytes};

    #[test]
    fn test_enum_serialization() {
        let original = Case::Illative;

        let bytes = to_bytes::<_, 256>(&original).expect("Failed to serialize Case");
        let deserialized: Case = from_bytes(&bytes).expect("Failed to deserialize Case");

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_id_layout() {
        // LexemeId(u32) must stay exactly 4 bytes
        assert_eq!(core::mem::size_of::<LexemeId>(), 4);
        assert_eq!(core::mem::size_of::<Option<LexemeId>>(), 8);
    }

    #[test]
    fn test_lexicon_archive_roundtrip() {
        let mut paradigm = Paradigm::new();
        paradigm.insert(MorphFlags::noun(Case::Genitive), "talon");
        paradigm.insert(MorphFlags::verb(Tense::Present, Voice::Passive, None), "ollaan");

        let original = Lexicon {
            version: LexiconVersion::new(3),
            lexemes: vec![Lexeme {
                id: LexemeId::new(1),
                citation: "talo".to_string(),
                pos: PartOfSpeech::Noun,
                gloss: "house".to_string(),
                examples: vec!["Talo on iso".to_string()],
                frequency: 1,
                tier: ProficiencyTier::A1,
            }],
            exceptions: vec![Exception {
                pos: PartOfSpeech::Noun,
                citation: "talo".to_string(),
                class: Some(WordClass::Noun(NounClass::I)),
                stem: None,
                paradigm,
            }],
        };

        let bytes = to_bytes::<_, 1024>(&original).expect("Failed to serialize Lexicon");
        let deserialized: Lexicon = from_bytes(&bytes).expect("Failed to deserialize Lexicon");

        assert_eq!(original, deserialized);
        let genitive = deserialized.exceptions[0].paradigm.get(MorphFlags::noun(Case::Genitive));
        assert_eq!(genitive, Some("talon"));
    }

    #[test]
    fn test_flags_are_disjoint_per_cell() {
        // Every finite verb cell and every case must map to a distinct key
        let mut keys = vec![];
        for tense in Tense::ALL {
            for person in Person::ALL {
                keys.push(MorphFlags::verb(tense, Voice::Active, Some(person)));
            }
            keys.push(MorphFlags::verb(tense, Voice::Passive, None));
        }
        for case in Case::ALL {
            keys.push(MorphFlags::noun(case));
        }
        keys.push(MorphFlags::participle(Voice::Active, Some(Number::Singular)));
        keys.push(MorphFlags::participle(Voice::Active, Some(Number::Plural)));
        keys.push(MorphFlags::participle(Voice::Passive, None));

        let total = keys.len();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), total);
    }

    #[test]
    fn test_paradigm_insert_replaces() {
        let key = MorphFlags::noun(Case::Nominative);
        let mut paradigm = Paradigm::new();
        paradigm.insert(key, "talo");
        paradigm.insert(key, "koti");

        assert_eq!(paradigm.len(), 1);
        assert_eq!(paradigm.get(key), Some("koti"));
        assert_eq!(paradigm.get(MorphFlags::noun(Case::Genitive)), None);
    }

    #[test]
    fn test_tier_and_difficulty_order() {
        assert!(ProficiencyTier::A1 < ProficiencyTier::B2);
        assert!(ProficiencyTier::C1 < ProficiencyTier::C2);
        assert_eq!(Difficulty::Easy.points(), 1);
        assert_eq!(Difficulty::Hard.points(), 3);
        assert!(!Difficulty::Hard.is_multiple_choice());
    }

    #[test]
    fn test_tense_metadata() {
        assert_eq!(Tense::Perfect.auxiliary(), Some(Tense::Present));
        assert_eq!(Tense::ConditionalPerfect.mood(), Mood::Conditional);
        assert_eq!(Tense::Imperative.persons(), &Person::IMPERATIVE);
        assert_eq!(Tense::from_code(7), Some(Tense::Imperative));
        assert_eq!(Case::from_code(11), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_seed_into_lexicon() {
        let json = r#"{
            "version": 2,
            "verbs": [
                { "citation": "saada", "gloss": "to get", "frequency": 12, "tier": "A2",
                  "class": "II", "stem": "saa" },
                { "citation": "puhua", "gloss": "to speak", "frequency": 30, "tier": "A1" }
            ],
            "nouns": [
                { "citation": "maa", "gloss": "land", "frequency": 20, "tier": "A1",
                  "cases": ["maa", "maan", "maata", "maan", "maassa", "maasta", "maahan",
                            "maalla", "maalta", "maalle"] }
            ]
        }"#;
        let seed: seed::SeedLexicon = serde_json::from_str(json).expect("seed parses");
        let lexicon = seed.into_lexicon();

        assert_eq!(lexicon.version, LexiconVersion::new(2));
        assert_eq!(lexicon.lexemes.len(), 3);
        assert_eq!(lexicon.lexemes[2].id, LexemeId::new(3));
        // puhua has no irregular data so it gets no exception
        assert_eq!(lexicon.exceptions.len(), 2);
        assert!(lexicon.exceptions[0].paradigm.is_empty());
        assert_eq!(lexicon.exceptions[0].stem.as_deref(), Some("saa"));
        assert_eq!(
            lexicon.exceptions[1].paradigm.get(MorphFlags::noun(Case::Illative)),
            Some("maahan")
        );
    }
}
