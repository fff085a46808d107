//! Suffix-pattern classification for words without an exception entry.

use kielo_protocol::{NounClass, VerbClass};

use crate::text::{
    char_count, drop_last, ends_in_consonant, ends_with_any, is_vowel, penultimate_char, syllables,
};

/// Ending patterns per verb class. The longest matching pattern wins; ties go to the earlier row.
const VERB_PATTERNS: &[(VerbClass, &[&str])] = &[
    (VerbClass::VI, &["eta", "etä"]),
    (VerbClass::V, &["ita", "itä"]),
    (VerbClass::IV, &["ata", "ätä", "ota", "ötä"]),
    (
        VerbClass::III,
        &[
            "lla", "llä", "nna", "nnä", "rra", "rrä", "sta", "stä", "uta", "ytä", "la", "lä", "na",
            "nä", "ra", "rä",
        ],
    ),
    (VerbClass::II, &["da", "dä"]),
    (VerbClass::I, &["a", "ä"]),
];

pub fn classify_verb(citation: &str) -> VerbClass {
    let mut best: Option<(VerbClass, usize)> = None;
    for (class, patterns) in VERB_PATTERNS {
        for pattern in patterns.iter().filter(|p| citation.ends_with(**p)) {
            let len = char_count(pattern);
            if best.map_or(true, |(_, best_len)| len > best_len) {
                best = Some((*class, len));
            }
        }
    }
    best.map_or(VerbClass::I, |(class, _)| class)
}

pub fn classify_noun(citation: &str) -> NounClass {
    if citation.ends_with("nen") && char_count(citation) > 3 {
        return NounClass::IV;
    }
    if citation.ends_with("si") {
        return NounClass::V;
    }
    let consonant_before_ti =
        penultimate_char(drop_last(citation, 1)).map_or(false, |c| !is_vowel(c));
    if citation.ends_with("ti") && consonant_before_ti {
        return NounClass::V;
    }
    // mies → miehe-. Longer -es nouns (kirves) follow the consonant-final rule.
    if citation.ends_with("es") && syllables(citation) == 1 {
        return NounClass::VI;
    }
    if ends_in_consonant(citation) {
        return NounClass::III;
    }
    if ends_with_any(citation, &["uo", "yö", "ie"]).is_some() {
        return NounClass::VI;
    }
    if citation.ends_with('e') {
        return NounClass::II;
    }
    NounClass::I
}
