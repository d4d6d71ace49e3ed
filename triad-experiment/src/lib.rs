pub mod config;
pub mod error;
pub mod sampler;
pub mod select;
pub mod sequence;
pub mod shuffle;
pub mod trial;
pub use config::{ConfigError, SequenceConfig};
pub use error::SequenceError;
pub use sampler::{FirstK, Sampler, UniformSampler};
pub use select::{Selection, select_unique_images};
pub use sequence::{SequenceBuilder, check_preconditions, create_trial_sequence};
pub use shuffle::shuffle;
pub use trial::{generate_check_trial, generate_random_trial};
