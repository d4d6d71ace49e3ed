use crate::error::SequenceError;
use crate::sampler::Sampler;
use crate::select::select_unique_images;
use triad_core::{ImageId, Trial};

/// Builds a random trial from three distinct images: the first drawn becomes
/// the stimulus, the next two the choices.
pub fn generate_random_trial<S: Sampler>(
    pool: &[ImageId],
    sampler: &mut S,
) -> Result<Trial, SequenceError> {
    let [stimulus, choice1, choice2]: [ImageId; 3] = select_unique_images(pool, 3, &[], sampler)
        .into_result()?
        .try_into()
        .map_err(|picked: Vec<ImageId>| SequenceError::InsufficientImages {
            requested: 3,
            available: picked.len(),
        })?;

    Ok(Trial::random(stimulus, choice1, choice2))
}

/// Builds an attention check: the target is one of the two choices, and the
/// other choice is a different image from the pool.
pub fn generate_check_trial<S: Sampler>(
    pool: &[ImageId],
    sampler: &mut S,
) -> Result<Trial, SequenceError> {
    let target = sampler
        .sample(pool, 1)
        .into_iter()
        .next()
        .ok_or(SequenceError::InsufficientImages {
            requested: 1,
            available: pool.len(),
        })?;

    let foil = select_unique_images(pool, 1, std::slice::from_ref(&target), sampler)
        .into_result()?
        .into_iter()
        .next()
        .ok_or(SequenceError::InsufficientImages {
            requested: 2,
            available: pool.len(),
        })?;

    let target_first = sampler.coin_flip();
    Ok(Trial::check(target, foil, target_first))
}
