use crate::config::{ConfigError, SequenceConfig};
use crate::error::SequenceError;
use crate::sampler::Sampler;
use crate::shuffle::shuffle;
use crate::trial::{generate_check_trial, generate_random_trial};
use rand::Rng;
use tracing::debug;
use triad_core::{ImageId, StimulusSet, Trial, TrialCounts};

/// Minimum pool sizes for random and check trials.
const RANDOM_TRIAL_IMAGES: usize = 3;
const CHECK_TRIAL_IMAGES: usize = 2;

/// Fails fast when `counts` cannot be met from the given pool and
/// validation set.
pub fn check_preconditions(
    counts: TrialCounts,
    pool_len: usize,
    validation_len: usize,
) -> Result<(), SequenceError> {
    if counts.validation > validation_len {
        return Err(SequenceError::NotEnoughValidationTrials {
            requested: counts.validation,
            available: validation_len,
        });
    }
    if counts.random > 0 && pool_len < RANDOM_TRIAL_IMAGES {
        return Err(SequenceError::InsufficientImages {
            requested: RANDOM_TRIAL_IMAGES,
            available: pool_len,
        });
    }
    if counts.check > 0 && pool_len < CHECK_TRIAL_IMAGES {
        return Err(SequenceError::InsufficientImages {
            requested: CHECK_TRIAL_IMAGES,
            available: pool_len,
        });
    }
    Ok(())
}

/// Generates `counts.random` random trials, `counts.check` check trials and
/// draws `counts.validation` predefined trials, then shuffles them together.
///
/// Images may repeat across trials; only the three images inside one
/// random trial are guaranteed distinct.
pub fn create_trial_sequence<S: Sampler, R: Rng>(
    counts: TrialCounts,
    pool: &[ImageId],
    validation_trials: &[Trial],
    sampler: &mut S,
    rng: &mut R,
) -> Result<Vec<Trial>, SequenceError> {
    check_preconditions(counts, pool.len(), validation_trials.len())?;

    let mut trials = Vec::with_capacity(counts.total());
    for _ in 0..counts.random {
        trials.push(generate_random_trial(pool, sampler)?);
    }
    for _ in 0..counts.check {
        trials.push(generate_check_trial(pool, sampler)?);
    }
    trials.extend(sampler.sample(validation_trials, counts.validation));

    shuffle(&mut trials, rng);
    Ok(trials)
}

/// Owns one experiment version's stimuli and counts, and builds a fresh
/// sequence per session.
#[derive(Debug, Clone)]
pub struct SequenceBuilder {
    counts: TrialCounts,
    stimuli: StimulusSet,
}

impl SequenceBuilder {
    /// Validates `config` and `stimuli` together so a bad setup fails before
    /// any session starts.
    pub fn new(config: &SequenceConfig, stimuli: StimulusSet) -> Result<Self, ConfigError> {
        stimuli.validate()?;
        config.validate(&stimuli)?;
        Ok(Self {
            counts: config.counts(),
            stimuli,
        })
    }

    pub fn build<S: Sampler, R: Rng>(
        &self,
        sampler: &mut S,
        rng: &mut R,
    ) -> Result<Vec<Trial>, SequenceError> {
        let trials = create_trial_sequence(
            self.counts,
            &self.stimuli.images,
            &self.stimuli.validation_trials,
            sampler,
            rng,
        )?;
        debug!(
            total = trials.len(),
            composition = %TrialCounts::tally(&trials),
            "built trial sequence"
        );
        Ok(trials)
    }
}
