use std::fmt::Display;

use kielo_drill::{AnswerCheck, DrillConfig, Exercise, ExerciseGenerator};
use kielo_morph::{
    case_descriptions, class_descriptions, person_descriptions, tense_descriptions, EngineConfig,
    Inflector, LexiconIndex,
};
use kielo_parser::analysis::analyze;
use kielo_parser::tags::{
    parse_case, parse_difficulty, parse_person, parse_pos, parse_tense, parse_tier, parse_voice,
};
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(JsValue::from)
}

fn js_error(err: impl Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn engine_config(open_coverage: bool) -> EngineConfig {
    if open_coverage {
        EngineConfig::open()
    } else {
        EngineConfig::default()
    }
}

/// The engine instance running in the browser. Every tag argument is a plain string
/// (`"present"`, `"1s"`, `"inessive"`, `"A2"`, ...).
#[wasm_bindgen]
pub struct KieloEngine {
    inflector: Inflector,
    drill: DrillConfig,
}

impl KieloEngine {
    fn with_lexicon(lexicon: LexiconIndex, open_coverage: bool) -> Self {
        Self {
            inflector: Inflector::new(lexicon, engine_config(open_coverage)),
            drill: DrillConfig::default(),
        }
    }

    fn generator(&self) -> ExerciseGenerator<'_, LexiconIndex> {
        ExerciseGenerator::new(&self.inflector, self.inflector.lexicon(), self.drill.clone())
    }

    fn exercise(&self, tier: &str, difficulty: &str, seed: u64) -> Result<Exercise, String> {
        let tier = parse_tier(tier).map_err(|e| e.to_string())?;
        let difficulty = parse_difficulty(difficulty).map_err(|e| e.to_string())?;
        let generator = self.generator();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        generator
            .generate_exercise(&mut rng, tier, difficulty)
            .map_err(|e| e.to_string())
    }

    fn check(&self, exercise: &Exercise, answer: &str) -> AnswerCheck {
        self.generator().check_answer(exercise, answer)
    }

    fn cell_form(
        &self,
        verb: &str,
        tense: &str,
        voice: &str,
        person: Option<String>,
    ) -> Result<String, String> {
        let tense = parse_tense(tense).map_err(|e| e.to_string())?;
        let voice = parse_voice(voice).map_err(|e| e.to_string())?;
        let person = person
            .as_deref()
            .map(parse_person)
            .transpose()
            .map_err(|e| e.to_string())?;
        self.inflector
            .conjugate_cell(verb, tense, voice, person)
            .map_err(|e| e.to_string())
    }
}

#[wasm_bindgen]
impl KieloEngine {
    /// Engine over the built-in lexicon.
    #[wasm_bindgen(constructor)]
    pub fn new(open_coverage: bool) -> Result<KieloEngine, JsValue> {
        let lexicon = LexiconIndex::builtin().map_err(js_error)?;
        Ok(Self::with_lexicon(lexicon, open_coverage))
    }

    /// Engine over a compiled lexicon archive (loaded via fetch() in JS). The archive is validated.
    pub fn from_archive(data: Vec<u8>, open_coverage: bool) -> Result<KieloEngine, JsValue> {
        let lexicon = LexiconIndex::from_archive(&data).map_err(js_error)?;
        Ok(Self::with_lexicon(lexicon, open_coverage))
    }

    pub fn set_drill_config(&mut self, json: &str) -> Result<(), JsValue> {
        self.drill = DrillConfig::from_json(json).map_err(js_error)?;
        Ok(())
    }

    pub fn classify(&self, citation: &str, pos: &str) -> Result<JsValue, JsValue> {
        let pos = parse_pos(pos).map_err(js_error)?;
        to_js(&self.inflector.classify(citation, pos))
    }

    pub fn extract_stem(&self, citation: &str, pos: &str) -> Result<String, JsValue> {
        let pos = parse_pos(pos).map_err(js_error)?;
        let class = self.inflector.classify(citation, pos);
        Ok(self.inflector.extract_stem(citation, class))
    }

    pub fn harmonize(&self, template: &str, word: &str) -> String {
        self.inflector.harmonize(template, word)
    }

    pub fn conjugate(&self, verb: &str, tense: &str, voice: &str) -> Result<JsValue, JsValue> {
        let tense = parse_tense(tense).map_err(js_error)?;
        let voice = parse_voice(voice).map_err(js_error)?;
        to_js(&self.inflector.conjugate(verb, tense, voice).map_err(js_error)?)
    }

    pub fn conjugate_cell(
        &self,
        verb: &str,
        tense: &str,
        voice: &str,
        person: Option<String>,
    ) -> Result<String, JsValue> {
        self.cell_form(verb, tense, voice, person).map_err(js_error)
    }

    pub fn decline(&self, noun: &str, case: &str) -> Result<String, JsValue> {
        let case = parse_case(case).map_err(js_error)?;
        self.inflector.decline(noun, case).map_err(js_error)
    }

    pub fn decline_all(&self, noun: &str) -> Result<JsValue, JsValue> {
        to_js(&self.inflector.decline_all(noun).map_err(js_error)?)
    }

    /// Same seed, same exercise.
    pub fn generate_exercise(
        &self,
        tier: &str,
        difficulty: &str,
        seed: u64,
    ) -> Result<JsValue, JsValue> {
        let exercise = self.exercise(tier, difficulty, seed).map_err(js_error)?;
        to_js(&ExerciseView::new(&exercise))
    }

    pub fn check_answer(&self, exercise: JsValue, answer: &str) -> Result<JsValue, JsValue> {
        let exercise: Exercise = serde_wasm_bindgen::from_value(exercise).map_err(JsValue::from)?;
        to_js(&self.check(&exercise, answer))
    }

    pub fn analyze(&self, surface: &str) -> Result<JsValue, JsValue> {
        to_js(&analyze(&self.inflector, surface))
    }

    pub fn supported_verbs(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inflector.supported_verbs())
    }

    pub fn supported_nouns(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inflector.supported_nouns())
    }

    pub fn class_descriptions(&self) -> Result<JsValue, JsValue> {
        to_js(&class_descriptions())
    }

    pub fn case_descriptions(&self) -> Result<JsValue, JsValue> {
        to_js(&case_descriptions())
    }

    pub fn tense_descriptions(&self) -> Result<JsValue, JsValue> {
        to_js(&tense_descriptions())
    }

    pub fn person_descriptions(&self) -> Result<JsValue, JsValue> {
        to_js(&person_descriptions())
    }
}

/// The exercise as sent to JavaScript: the stored fields plus the rendered prompt and points.
#[derive(Serialize)]
struct ExerciseView<'a> {
    #[serde(flatten)]
    exercise: &'a Exercise,
    prompt: String,
    points: u32,
}

impl<'a> ExerciseView<'a> {
    fn new(exercise: &'a Exercise) -> Self {
        Self {
            exercise,
            prompt: exercise.prompt(),
            points: exercise.points(),
        }
    }
}
