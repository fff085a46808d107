//! Drill exercises over the morphology engine.
//!
//! [`ExerciseGenerator`] picks a lexeme at or below a proficiency tier, a paradigm cell for the
//! difficulty, and records the engine's answer. Multiple-choice exercises carry shuffled options.

pub mod check;
pub mod config;
pub mod distractors;
pub mod error;
pub mod exercise;
pub mod generator;
pub mod store;

pub use check::{check_answer, check_answer_with, explain};
pub use config::DrillConfig;
pub use error::DrillError;
pub use exercise::{AnswerCheck, Exercise};
pub use generator::{cases_for, tenses_for, ExerciseGenerator};
pub use store::LexiconStore;
