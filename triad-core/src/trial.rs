use crate::image::ImageId;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Kind of a trial within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrialKind {
    Random,
    Check,
    Validation,
}

impl fmt::Display for TrialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TrialKind::Random => "random",
            TrialKind::Check => "check",
            TrialKind::Validation => "validation",
        })
    }
}

/// One triad shown to the participant: a target on top and two choices below.
///
/// Field names follow the descriptor shape the presentation layer records
/// responses against, so the JSON form is `{"type", "stimulus", "choice1",
/// "choice2", "correct_choice"?}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trial {
    #[serde(rename = "type")]
    pub kind: TrialKind,
    pub stimulus: ImageId,
    pub choice1: ImageId,
    pub choice2: ImageId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_choice: Option<u8>,
}

impl Trial {
    pub fn random(stimulus: ImageId, choice1: ImageId, choice2: ImageId) -> Self {
        Self {
            kind: TrialKind::Random,
            stimulus,
            choice1,
            choice2,
            correct_choice: None,
        }
    }

    /// Attention check. The target takes `choice1` when `target_first`,
    /// otherwise `choice2`; the foil fills the other slot.
    pub fn check(target: ImageId, foil: ImageId, target_first: bool) -> Self {
        let (choice1, choice2, correct) = if target_first {
            (target.clone(), foil, 0)
        } else {
            (foil, target.clone(), 1)
        };
        Self {
            kind: TrialKind::Check,
            stimulus: target,
            choice1,
            choice2,
            correct_choice: Some(correct),
        }
    }

    pub fn validation(stimulus: ImageId, choice1: ImageId, choice2: ImageId) -> Self {
        Self {
            kind: TrialKind::Validation,
            stimulus,
            choice1,
            choice2,
            correct_choice: None,
        }
    }

    /// Stimulus, choice1 and choice2 in slot order.
    pub fn images(&self) -> [&ImageId; 3] {
        [&self.stimulus, &self.choice1, &self.choice2]
    }

    pub fn choices(&self) -> [&ImageId; 2] {
        [&self.choice1, &self.choice2]
    }

    /// The image sitting in the slot `correct_choice` points at, if any.
    pub fn correct_image(&self) -> Option<&ImageId> {
        match self.correct_choice? {
            0 => Some(&self.choice1),
            1 => Some(&self.choice2),
            _ => None,
        }
    }

    pub fn check_invariants(&self) -> Result<(), TrialInvariantError> {
        match self.kind {
            TrialKind::Random | TrialKind::Validation => {
                if let Some(slot) = self.correct_choice {
                    return Err(TrialInvariantError::UnexpectedCorrectChoice {
                        kind: self.kind,
                        slot,
                    });
                }
                let [s, c1, c2] = self.images();
                if s == c1 || s == c2 {
                    return Err(TrialInvariantError::RepeatedImage(s.clone()));
                }
                if c1 == c2 {
                    return Err(TrialInvariantError::RepeatedImage(c1.clone()));
                }
                Ok(())
            }
            TrialKind::Check => {
                let expected = match (self.choice1 == self.stimulus, self.choice2 == self.stimulus)
                {
                    (true, false) => 0,
                    (false, true) => 1,
                    (true, true) => return Err(TrialInvariantError::TargetInBothChoices),
                    (false, false) => return Err(TrialInvariantError::TargetNotAmongChoices),
                };
                if self.correct_choice != Some(expected) {
                    return Err(TrialInvariantError::WrongCorrectChoice {
                        expected,
                        found: self.correct_choice,
                    });
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrialInvariantError {
    #[error("image {0} appears more than once in the triad")]
    RepeatedImage(ImageId),
    #[error("check trial target is not among its choices")]
    TargetNotAmongChoices,
    #[error("check trial target occupies both choices")]
    TargetInBothChoices,
    #[error("correct_choice should be {expected}, found {found:?}")]
    WrongCorrectChoice { expected: u8, found: Option<u8> },
    #[error("{kind} trial carries correct_choice {slot}")]
    UnexpectedCorrectChoice { kind: TrialKind, slot: u8 },
}

/// Number of trials of each kind in a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialCounts {
    pub random: usize,
    pub check: usize,
    pub validation: usize,
}

impl TrialCounts {
    pub fn new(random: usize, check: usize, validation: usize) -> Self {
        Self {
            random,
            check,
            validation,
        }
    }

    pub fn total(&self) -> usize {
        self.random + self.check + self.validation
    }

    /// Counts the trials of each kind in `trials`.
    pub fn tally(trials: &[Trial]) -> Self {
        trials.iter().fold(Self::default(), |mut acc, trial| {
            match trial.kind {
                TrialKind::Random => acc.random += 1,
                TrialKind::Check => acc.check += 1,
                TrialKind::Validation => acc.validation += 1,
            }
            acc
        })
    }
}

impl fmt::Display for TrialCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} random, {} check, {} validation",
            self.random, self.check, self.validation
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ImageId {
        ImageId::new(s)
    }

    #[test]
    fn check_trial_places_target_in_requested_slot() {
        let first = Trial::check(id("t"), id("f"), true);
        assert_eq!(first.choice1, id("t"));
        assert_eq!(first.choice2, id("f"));
        assert_eq!(first.correct_choice, Some(0));
        assert_eq!(first.correct_image(), Some(&id("t")));

        let second = Trial::check(id("t"), id("f"), false);
        assert_eq!(second.choice1, id("f"));
        assert_eq!(second.choice2, id("t"));
        assert_eq!(second.correct_choice, Some(1));
        assert_eq!(second.correct_image(), Some(&id("t")));

        assert!(first.check_invariants().is_ok());
        assert!(second.check_invariants().is_ok());
    }

    #[test]
    fn repeated_image_is_rejected() {
        let trial = Trial::random(id("a"), id("b"), id("a"));
        assert_eq!(
            trial.check_invariants(),
            Err(TrialInvariantError::RepeatedImage(id("a")))
        );

        let trial = Trial::validation(id("a"), id("b"), id("b"));
        assert_eq!(
            trial.check_invariants(),
            Err(TrialInvariantError::RepeatedImage(id("b")))
        );
    }

    #[test]
    fn check_trial_with_wrong_index_is_rejected() {
        let mut trial = Trial::check(id("t"), id("f"), true);
        trial.correct_choice = Some(1);
        assert_eq!(
            trial.check_invariants(),
            Err(TrialInvariantError::WrongCorrectChoice {
                expected: 0,
                found: Some(1)
            })
        );

        trial.choice1 = id("x");
        assert_eq!(
            trial.check_invariants(),
            Err(TrialInvariantError::TargetNotAmongChoices)
        );
    }

    #[test]
    fn correct_choice_only_belongs_on_check_trials() {
        let mut trial = Trial::random(id("a"), id("b"), id("c"));
        trial.correct_choice = Some(0);
        assert!(matches!(
            trial.check_invariants(),
            Err(TrialInvariantError::UnexpectedCorrectChoice { slot: 0, .. })
        ));
    }

    #[test]
    fn json_shape_matches_descriptor() {
        let check = Trial::check(id("t"), id("f"), false);
        let json = serde_json::to_value(&check).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "check",
                "stimulus": "t",
                "choice1": "f",
                "choice2": "t",
                "correct_choice": 1
            })
        );

        let random = Trial::random(id("a"), id("b"), id("c"));
        let json = serde_json::to_value(&random).unwrap();
        assert!(json.get("correct_choice").is_none());
        assert_eq!(json["type"], "random");
    }

    #[test]
    fn tally_counts_each_kind() {
        let trials = vec![
            Trial::random(id("a"), id("b"), id("c")),
            Trial::check(id("a"), id("b"), true),
            Trial::random(id("c"), id("b"), id("a")),
            Trial::validation(id("a"), id("c"), id("b")),
        ];
        let counts = TrialCounts::tally(&trials);
        assert_eq!(counts, TrialCounts::new(2, 1, 1));
        assert_eq!(counts.total(), trials.len());
    }
}
