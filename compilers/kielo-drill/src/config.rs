use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrillConfig {
    /// How many of the most frequent lexemes at the tier are drawn from.
    pub candidate_limit: usize,
    pub distractor_count: usize,
    /// Chance of a passive cell in hard verb exercises.
    pub passive_probability: f64,
    /// Size of the frequency neighbourhood distractors are borrowed from.
    pub similar_lexemes: usize,
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self {
            candidate_limit: 20,
            distractor_count: 3,
            passive_probability: 0.3,
            similar_lexemes: 10,
        }
    }
}

impl DrillConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Options shown for a multiple-choice exercise.
    pub fn option_count(&self) -> usize {
        self.distractor_count + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config = DrillConfig::from_json(r#"{ "candidate_limit": 5 }"#).unwrap();
        assert_eq!(config.candidate_limit, 5);
        assert_eq!(config.distractor_count, 3);
        assert_eq!(config.option_count(), 4);
    }
}
