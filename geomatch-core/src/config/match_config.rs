//! Matching engine configuration.

use serde::{Deserialize, Serialize};

use crate::errors::MatchError;

/// Configuration for one matching engine instance.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MatchConfig {
    /// Minimum pignistic-probability gap between the top two hypotheses
    /// required to accept a match. Default: 0.2.
    pub indecision_threshold: Option<f64>,
    /// Decimal digits probabilities and distances are rounded to before
    /// comparison or storage. Default: 5.
    pub rounding_digits: Option<u32>,
    /// Evaluate (criterion, candidate) pairs on the rayon pool. Default: true.
    pub parallel: Option<bool>,
    /// Run the per-candidate combination consistency check. The final
    /// decision only needs the global combination, so this can be switched
    /// off for throughput. Default: true.
    pub check_per_candidate: Option<bool>,
}

impl MatchConfig {
    /// Returns the effective indecision threshold, defaulting to 0.2.
    pub fn effective_indecision_threshold(&self) -> f64 {
        self.indecision_threshold.unwrap_or(0.2)
    }

    /// Returns the effective rounding precision, defaulting to 5 digits.
    pub fn effective_rounding_digits(&self) -> u32 {
        self.rounding_digits.unwrap_or(5)
    }

    /// Returns whether pair evaluation runs in parallel, defaulting to true.
    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(true)
    }

    /// Returns whether the per-candidate check runs, defaulting to true.
    pub fn effective_check_per_candidate(&self) -> bool {
        self.check_per_candidate.unwrap_or(true)
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, MatchError> {
        toml::from_str(text).map_err(|e| MatchError::Config {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MatchConfig::default();
        assert_eq!(config.effective_indecision_threshold(), 0.2);
        assert_eq!(config.effective_rounding_digits(), 5);
        assert!(config.effective_parallel());
        assert!(config.effective_check_per_candidate());
    }

    #[test]
    fn test_from_toml() {
        let config = MatchConfig::from_toml_str(
            "indecision_threshold = 0.3\nparallel = false\n",
        )
        .unwrap();
        assert_eq!(config.effective_indecision_threshold(), 0.3);
        assert!(!config.effective_parallel());
        // Unset fields keep their defaults.
        assert_eq!(config.effective_rounding_digits(), 5);
    }

    #[test]
    fn test_bad_toml_is_a_config_error() {
        let err = MatchConfig::from_toml_str("indecision_threshold = [");
        assert!(matches!(err, Err(MatchError::Config { .. })));
    }
}
