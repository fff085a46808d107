use kielo_morph::LexiconIndex;
use kielo_protocol::{Lexeme, PartOfSpeech, ProficiencyTier};

/// Where the generator draws lexemes from.
pub trait LexiconStore {
    /// Lexemes tagged at or below `tier`, most frequent first.
    fn lexemes_by_tier(
        &self,
        pos: PartOfSpeech,
        tier: ProficiencyTier,
        limit: Option<usize>,
    ) -> Vec<&Lexeme>;

    fn lexeme_by_citation(&self, pos: PartOfSpeech, citation: &str) -> Option<&Lexeme>;
}

impl LexiconStore for LexiconIndex {
    fn lexemes_by_tier(
        &self,
        pos: PartOfSpeech,
        tier: ProficiencyTier,
        limit: Option<usize>,
    ) -> Vec<&Lexeme> {
        self.lexemes(pos)
            .filter(|lexeme| lexeme.tier <= tier)
            .take(limit.unwrap_or(usize::MAX))
            .collect()
    }

    fn lexeme_by_citation(&self, pos: PartOfSpeech, citation: &str) -> Option<&Lexeme> {
        self.lexeme(pos, citation)
    }
}
