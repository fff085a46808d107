//! Front/back vowel harmony.
//!
//! Suffix templates are written with back vowels (`ssa`, `vat`, `kaa`). A word in the front
//! domain realizes them with the paired front vowels (`ssä`, `vät`, `kää`).

use serde::Serialize;

const FRONT_MARKERS: &[char] = &['ä', 'ö', 'y'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Harmony {
    Back,
    Front,
}

/// A word is front-harmonic as soon as it contains ä, ö or y.
pub fn harmony_of(word: &str) -> Harmony {
    if word.chars().any(|c| FRONT_MARKERS.contains(&c)) {
        Harmony::Front
    } else {
        Harmony::Back
    }
}

/// Realizes a back-vowel suffix template in the harmony domain of `word`.
pub fn harmonize(template: &str, word: &str) -> String {
    match harmony_of(word) {
        Harmony::Back => template.to_string(),
        Harmony::Front => template.chars().map(front_pair).collect(),
    }
}

fn front_pair(c: char) -> char {
    match c {
        'a' => 'ä',
        'o' => 'ö',
        'u' => 'y',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn domain_follows_front_vowels() {
        assert_eq!(harmony_of("mennä"), Harmony::Front);
        assert_eq!(harmony_of("syödä"), Harmony::Front);
        assert_eq!(harmony_of("tulla"), Harmony::Back);
        // e and i are neutral
        assert_eq!(harmony_of("menen"), Harmony::Back);
    }

    #[test]
    fn templates_follow_the_word() {
        assert_eq!(harmonize("kaa", "mennä"), "kää");
        assert_eq!(harmonize("tte", "tulee"), "tte");
        assert_eq!(harmonize("mme", "menen"), "mme");
        assert_eq!(harmonize("nut", "nähdä"), "nyt");
        assert_eq!(harmonize("vat", "tietää"), "vät");
        assert_eq!(harmonize("ssa", "talo"), "ssa");
    }

    proptest! {
        #[test]
        fn back_words_leave_templates_alone(word in "[aeioul]{1,8}", template in "[aoustkn]{0,6}") {
            prop_assert_eq!(harmonize(&template, &word), template);
        }

        #[test]
        fn front_output_has_no_back_vowels(
            word in "[aeiouy]{0,4}y[aeiou]{0,4}",
            template in "[aoustkn]{0,6}",
        ) {
            let out = harmonize(&template, &word);
            prop_assert!(!out.contains(&['a', 'o', 'u'][..]));
            prop_assert_eq!(out.chars().count(), template.chars().count());
        }
    }
}
