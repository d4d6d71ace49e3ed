use thiserror::Error;

/// Contract violations surfaced while building trials.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    #[error("need {requested} distinct images but only {available} are available")]
    InsufficientImages { requested: usize, available: usize },

    #[error("requested {requested} validation trials but only {available} are predefined")]
    NotEnoughValidationTrials { requested: usize, available: usize },
}
