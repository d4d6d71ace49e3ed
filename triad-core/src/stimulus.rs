use crate::image::ImageId;
use crate::trial::{Trial, TrialInvariantError, TrialKind};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Image pool plus the predefined validation trials for one experiment version.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StimulusSet {
    pub images: Vec<ImageId>,
    #[serde(default)]
    pub validation_trials: Vec<Trial>,
}

#[derive(Debug, Error)]
pub enum StimulusError {
    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    #[error("image pool is empty")]
    EmptyPool,

    #[error("image {0} is listed more than once")]
    DuplicateImage(ImageId),

    #[error("validation trial {index} has type {kind}")]
    NotValidationKind { index: usize, kind: TrialKind },

    #[error("validation trial {index} is malformed")]
    InvalidTrial {
        index: usize,
        #[source]
        source: TrialInvariantError,
    },

    #[error("validation trial {index} references {image}, which is not in the pool")]
    UnknownImage { index: usize, image: ImageId },
}

impl StimulusSet {
    pub fn new(images: Vec<ImageId>, validation_trials: Vec<Trial>) -> Self {
        Self {
            images,
            validation_trials,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, StimulusError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StimulusError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Checks the pool is non-empty and duplicate-free, and that every
    /// validation trial is a well-formed triad drawn from the pool.
    pub fn validate(&self) -> Result<(), StimulusError> {
        if self.images.is_empty() {
            return Err(StimulusError::EmptyPool);
        }

        let mut pool = HashSet::with_capacity(self.images.len());
        for image in &self.images {
            if !pool.insert(image) {
                return Err(StimulusError::DuplicateImage(image.clone()));
            }
        }

        for (index, trial) in self.validation_trials.iter().enumerate() {
            if trial.kind != TrialKind::Validation {
                return Err(StimulusError::NotValidationKind {
                    index,
                    kind: trial.kind,
                });
            }
            trial
                .check_invariants()
                .map_err(|source| StimulusError::InvalidTrial { index, source })?;
            if let Some(image) = trial.images().into_iter().find(|img| !pool.contains(img)) {
                return Err(StimulusError::UnknownImage {
                    index,
                    image: image.clone(),
                });
            }
        }

        Ok(())
    }
}
