use serde::{Deserialize, Serialize};

/// What to do with words the lexicon has no curated paradigm for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoveragePolicy {
    /// Reject them with `UnsupportedConjugation` / `UnsupportedDeclension`.
    #[default]
    Curated,
    /// Generate them by rule. Output for unlisted words is unverified.
    Open,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub coverage: CoveragePolicy,
}

impl EngineConfig {
    pub fn open() -> Self {
        Self {
            coverage: CoveragePolicy::Open,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
