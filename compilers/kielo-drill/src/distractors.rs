//! Wrong-but-plausible options for multiple-choice exercises.

use kielo_morph::Inflector;
use kielo_parser::normalize_answer;
use kielo_protocol::{Case, Cell, Lexeme, Voice};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::DrillConfig;
use crate::store::LexiconStore;

/// Other cells of the same lexeme that a learner could confuse with `cell`.
fn sibling_cells(cell: Cell) -> Vec<Cell> {
    match cell {
        Cell::Verb { tense, voice, person } => {
            let mut cells: Vec<Cell> = tense
                .persons()
                .iter()
                .filter(|p| Some(**p) != person)
                .map(|p| Cell::Verb {
                    tense,
                    voice: Voice::Active,
                    person: Some(*p),
                })
                .collect();
            if voice == Voice::Active && tense.persons().len() > 2 {
                cells.push(Cell::Verb {
                    tense,
                    voice: Voice::Passive,
                    person: None,
                });
            }
            cells
        }
        Cell::Noun { case } => Case::ALL
            .iter()
            .filter(|c| **c != case)
            .map(|c| Cell::Noun { case: *c })
            .collect(),
    }
}

/// Forms to pick distractors from: sibling cells of the lexeme, then the same cell of lexemes
/// with a similar frequency. Words the engine rejects are skipped.
fn candidate_forms<S: LexiconStore>(
    inflector: &Inflector,
    store: &S,
    config: &DrillConfig,
    lexeme: &Lexeme,
    cell: Cell,
) -> Vec<String> {
    let own = sibling_cells(cell)
        .into_iter()
        .filter_map(|sibling| inflector.inflect(&lexeme.citation, sibling).ok());

    let similar = store
        .lexemes_by_tier(lexeme.pos, lexeme.tier, Some(config.similar_lexemes))
        .into_iter()
        .filter(|other| other.citation != lexeme.citation)
        .filter_map(|other| inflector.inflect(&other.citation, cell).ok())
        .collect::<Vec<_>>();

    own.chain(similar).collect()
}

/// Shuffled option list: the correct answer plus `distractor_count` distinct wrong forms. When the
/// paradigm cannot supply enough, obviously wrong sentinels fill the gap.
pub fn build_options<S: LexiconStore, R: Rng + ?Sized>(
    inflector: &Inflector,
    store: &S,
    config: &DrillConfig,
    rng: &mut R,
    lexeme: &Lexeme,
    cell: Cell,
    correct: &str,
) -> Vec<String> {
    let mut pool = candidate_forms(inflector, store, config, lexeme, cell);
    pool.shuffle(rng);

    let mut seen = vec![normalize_answer(correct)];
    let mut options = vec![correct.to_string()];
    for form in pool {
        if options.len() > config.distractor_count {
            break;
        }
        let key = normalize_answer(&form);
        if !seen.contains(&key) {
            seen.push(key);
            options.push(form);
        }
    }

    let mut padding = String::from(correct);
    while options.len() <= config.distractor_count {
        padding.push('x');
        if !seen.contains(&normalize_answer(&padding)) {
            options.push(padding.clone());
        }
    }

    options.shuffle(rng);
    options
}
