use crate::error::SequenceError;
use crate::sampler::Sampler;
use triad_core::ImageId;

/// Outcome of asking the pool for distinct images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    Selected(Vec<T>),
    /// Fewer than `requested` items survived the exclusion filter.
    Insufficient { requested: usize, available: usize },
}

impl<T> Selection<T> {
    pub fn is_insufficient(&self) -> bool {
        matches!(self, Selection::Insufficient { .. })
    }

    pub fn into_option(self) -> Option<Vec<T>> {
        match self {
            Selection::Selected(items) => Some(items),
            Selection::Insufficient { .. } => None,
        }
    }

    pub fn into_result(self) -> Result<Vec<T>, SequenceError> {
        match self {
            Selection::Selected(items) => Ok(items),
            Selection::Insufficient {
                requested,
                available,
            } => Err(SequenceError::InsufficientImages {
                requested,
                available,
            }),
        }
    }
}

/// Picks `n` images from `pool`, skipping anything in `exclude`.
pub fn select_unique_images<S: Sampler>(
    pool: &[ImageId],
    n: usize,
    exclude: &[ImageId],
    sampler: &mut S,
) -> Selection<ImageId> {
    let available: Vec<ImageId> = pool
        .iter()
        .filter(|img| !exclude.contains(img))
        .cloned()
        .collect();

    if available.len() < n {
        return Selection::Insufficient {
            requested: n,
            available: available.len(),
        };
    }

    Selection::Selected(sampler.sample(&available, n))
}
