pub mod image;
pub mod stimulus;
pub mod trial;

pub use image::{ImageId, image_pool};
pub use stimulus::{StimulusError, StimulusSet};
pub use trial::{Trial, TrialCounts, TrialInvariantError, TrialKind};
