use serde::{Deserialize, Serialize};

use crate::lottery_engine::{
    error::Result,
    models::{DegeneratePolicy, Entity},
};

/// Everything needed to run a lottery end to end.
///
/// ```json
/// {
///   "entities": [
///     { "id": "wolves", "weights": [140, 134], "metadata": { "record": "17-65" } },
///     { "id": "bears",  "weights": [140, 134] }
///   ],
///   "rng_seed": 7,
///   "degenerate_policy": "Uniform"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LotteryConfig {
    pub entities: Vec<Entity>,
    /// `None` seeds from OS entropy.
    #[serde(default)]
    pub rng_seed: Option<u64>,
    #[serde(default)]
    pub degenerate_policy: DegeneratePolicy,
}

impl LotteryConfig {
    /// Defaults: entropy seed, fail on degenerate picks.
    pub fn new(entities: Vec<Entity>) -> Self {
        LotteryConfig {
            entities,
            rng_seed: None,
            degenerate_policy: DegeneratePolicy::Fail,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn with_policy(mut self, policy: DegeneratePolicy) -> Self {
        self.degenerate_policy = policy;
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lottery_engine::error::LotteryError;

    #[test]
    fn parses_full_config() {
        let cfg = LotteryConfig::from_json_str(
            r#"{
                "entities": [
                    { "id": "wolves", "weights": [140, 134], "metadata": { "record": "17-65" } },
                    { "id": "bears",  "weights": [140, 134] }
                ],
                "rng_seed": 7,
                "degenerate_policy": "Uniform"
            }"#,
        )
        .unwrap();

        assert_eq!(cfg.entities.len(), 2);
        assert_eq!(cfg.entities[0].weights, vec![140.0, 134.0]);
        assert_eq!(cfg.entities[0].metadata["record"], "17-65");
        assert!(cfg.entities[1].metadata.is_empty());
        assert_eq!(cfg.rng_seed, Some(7));
        assert_eq!(cfg.degenerate_policy, DegeneratePolicy::Uniform);
    }

    #[test]
    fn optional_fields_default() {
        let cfg = LotteryConfig::from_json_str(r#"{ "entities": [] }"#).unwrap();
        assert_eq!(cfg.rng_seed, None);
        assert_eq!(cfg.degenerate_policy, DegeneratePolicy::Fail);
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = LotteryConfig::from_json_str("{ entities: ").unwrap_err();
        assert!(matches!(err, LotteryError::Config(_)));
    }
}
