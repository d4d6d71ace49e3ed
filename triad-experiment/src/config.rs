use crate::error::SequenceError;
use crate::sequence::check_preconditions;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use triad_core::{StimulusError, StimulusSet, TrialCounts};

/// Per-session trial counts for one experiment version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceConfig {
    pub random_trials: usize,
    pub check_trials: usize,
    pub validation_trials: usize,
    /// Expected session length, announced to participants up front. When set
    /// it must equal the sum of the three counts.
    pub main_trials: Option<usize>,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            random_trials: 550,
            check_trials: 20,
            validation_trials: 50,
            main_trials: Some(620),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    #[error("main_trials is {expected} but the trial counts sum to {actual}")]
    TotalMismatch { expected: usize, actual: usize },

    #[error(transparent)]
    Sequence(#[from] SequenceError),

    #[error(transparent)]
    Stimuli(#[from] StimulusError),
}

impl SequenceConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn counts(&self) -> TrialCounts {
        TrialCounts::new(
            self.random_trials,
            self.check_trials,
            self.validation_trials,
        )
    }

    pub fn total(&self) -> usize {
        self.counts().total()
    }

    /// Checks the announced total and that `stimuli` can supply every
    /// requested trial.
    pub fn validate(&self, stimuli: &StimulusSet) -> Result<(), ConfigError> {
        if let Some(expected) = self.main_trials {
            if expected != self.total() {
                return Err(ConfigError::TotalMismatch {
                    expected,
                    actual: self.total(),
                });
            }
        }
        check_preconditions(
            self.counts(),
            stimuli.images.len(),
            stimuli.validation_trials.len(),
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use triad_core::image_pool;

    #[test]
    fn default_counts_sum_to_main_trials() {
        let config = SequenceConfig::default();
        assert_eq!(Some(config.total()), config.main_trials);
        assert_eq!(config.total(), 620);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config = SequenceConfig::from_json_str(r#"{ "random_trials": 10 }"#).unwrap();
        assert_eq!(config.random_trials, 10);
        assert_eq!(config.check_trials, 20);
        assert_eq!(config.validation_trials, 50);
    }

    #[test]
    fn mismatched_total_is_rejected() {
        let config = SequenceConfig {
            random_trials: 10,
            check_trials: 2,
            validation_trials: 0,
            main_trials: Some(20),
        };
        let stimuli = StimulusSet::new(image_pool(["a", "b", "c"]), Vec::new());
        assert!(matches!(
            config.validate(&stimuli),
            Err(ConfigError::TotalMismatch {
                expected: 20,
                actual: 12
            })
        ));
    }

    #[test]
    fn explicit_null_total_skips_the_sum_check() {
        let config = SequenceConfig::from_json_str(
            r#"{ "random_trials": 4, "check_trials": 1, "validation_trials": 0, "main_trials": null }"#,
        )
        .unwrap();
        let stimuli = StimulusSet::new(image_pool(["a", "b", "c"]), Vec::new());
        config.validate(&stimuli).unwrap();
    }

    #[test]
    fn pool_too_small_is_rejected() {
        let config = SequenceConfig {
            random_trials: 1,
            check_trials: 0,
            validation_trials: 0,
            main_trials: None,
        };
        let stimuli = StimulusSet::new(image_pool(["a", "b"]), Vec::new());
        assert!(matches!(
            config.validate(&stimuli),
            Err(ConfigError::Sequence(SequenceError::InsufficientImages { .. }))
        ));
    }

    #[test]
    fn io_error_message_does_not_repeat_its_source() {
        use std::error::Error as _;

        let err = SequenceConfig::from_path("/nonexistent/config.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
        assert_eq!(err.to_string(), "IO error");
        let source = err.source().map(ToString::to_string).unwrap_or_default();
        assert!(!source.is_empty());
        assert!(!err.to_string().contains(&source));

        let err = SequenceConfig::from_json_str("[1, 2").unwrap_err();
        assert_eq!(err.to_string(), "JSON error");
        assert!(err.source().is_some());
    }
}
