//! Surface form → (lexeme, cell) lookup by regenerating paradigms and comparing.

use kielo_morph::{Inflector, MorphError};
use kielo_protocol::{Cell, PartOfSpeech, Tense, Voice};
use serde::Serialize;

use crate::parser::normalize_answer;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub citation: String,
    pub pos: PartOfSpeech,
    pub cell: Cell,
}

impl Analysis {
    /// `"talon" is the genitive of "talo"`
    pub fn describe(&self, surface: &str) -> String {
        format!("\"{}\" is the {} of \"{}\"", surface, self.cell, self.citation)
    }
}

/// Cells of `citation` whose form equals `surface`. Words outside the engine's coverage have none.
pub fn identify(
    inflector: &Inflector,
    pos: PartOfSpeech,
    citation: &str,
    surface: &str,
) -> Vec<Cell> {
    let surface = normalize_answer(surface);
    if surface.is_empty() {
        return Vec::new();
    }
    match pos {
        PartOfSpeech::Verb => verb_cells(inflector, citation, &surface).unwrap_or_default(),
        PartOfSpeech::Noun => noun_cells(inflector, citation, &surface).unwrap_or_default(),
    }
}

fn verb_cells(
    inflector: &Inflector,
    citation: &str,
    surface: &str,
) -> Result<Vec<Cell>, MorphError> {
    let mut cells = Vec::new();
    for tense in Tense::ALL {
        for voice in Voice::ALL {
            if tense == Tense::Imperative && voice == Voice::Passive {
                continue;
            }
            let conjugation = inflector.conjugate(citation, tense, voice)?;
            for (person, form) in conjugation.cells() {
                if form == surface {
                    cells.push(Cell::Verb { tense, voice, person });
                }
            }
        }
    }
    Ok(cells)
}

fn noun_cells(
    inflector: &Inflector,
    citation: &str,
    surface: &str,
) -> Result<Vec<Cell>, MorphError> {
    let declension = inflector.decline_all(citation)?;
    Ok(declension
        .forms
        .iter()
        .filter(|(_, form)| form.as_str() == surface)
        .map(|(case, _)| Cell::Noun { case: *case })
        .collect::<Vec<_>>())
}

/// Every supported lexeme and cell that produces `surface`, verbs first.
pub fn analyze(inflector: &Inflector, surface: &str) -> Vec<Analysis> {
    let mut found = Vec::new();
    for pos in PartOfSpeech::ALL {
        let citations = match pos {
            PartOfSpeech::Verb => inflector.supported_verbs(),
            PartOfSpeech::Noun => inflector.supported_nouns(),
        };
        for citation in citations {
            for cell in identify(inflector, pos, citation, surface) {
                found.push(Analysis {
                    citation: citation.to_string(),
                    pos,
                    cell,
                });
            }
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use kielo_protocol::{Case, Person};

    #[test]
    fn genitive_and_accusative_share_a_form() {
        let inflector = Inflector::builtin().unwrap();
        let cells = identify(&inflector, PartOfSpeech::Noun, "talo", "Talon");
        assert_eq!(
            cells,
            [Cell::Noun { case: Case::Genitive }, Cell::Noun { case: Case::Accusative }]
        );
    }

    #[test]
    fn analyze_finds_verbs_and_nouns() {
        let inflector = Inflector::builtin().unwrap();
        let found = analyze(&inflector, "olen");
        assert_eq!(
            found,
            [Analysis {
                citation: "olla".to_string(),
                pos: PartOfSpeech::Verb,
                cell: Cell::Verb {
                    tense: Tense::Present,
                    voice: Voice::Active,
                    person: Some(Person::FirstSingular),
                },
            }]
        );
        assert_eq!(found[0].describe("olen"), "\"olen\" is the present 1s (minä) of \"olla\"");

        let compound = analyze(&inflector, "olen sanonut");
        assert!(compound.iter().any(|a| a.citation == "sanoa"
            && a.cell
                == Cell::Verb {
                    tense: Tense::Perfect,
                    voice: Voice::Active,
                    person: Some(Person::FirstSingular)
                }));

        assert!(analyze(&inflector, "kädessä")
            .iter()
            .any(|a| a.citation == "käsi" && a.cell == Cell::Noun { case: Case::Inessive }));
        assert!(analyze(&inflector, "qwerty").is_empty());
    }

    #[test]
    fn unsupported_words_have_no_cells() {
        let inflector = Inflector::builtin().unwrap();
        assert!(identify(&inflector, PartOfSpeech::Verb, "puhua", "puhun").is_empty());
        assert!(identify(&inflector, PartOfSpeech::Noun, "talo", "  ").is_empty());
    }
}
