use kielo_morph::MorphError;
use kielo_protocol::{PartOfSpeech, ProficiencyTier};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrillError {
    #[error("no {pos} at or below tier {tier} can be drilled")]
    NoCandidates { pos: PartOfSpeech, tier: ProficiencyTier },

    #[error(transparent)]
    Morph(#[from] MorphError),
}
