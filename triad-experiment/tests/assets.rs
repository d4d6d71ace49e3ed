//! Checks the stimulus and config files shipped under `assets/`.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;
use std::path::PathBuf;

use triad_core::{StimulusSet, TrialCounts, TrialKind};
use triad_experiment::{SequenceBuilder, SequenceConfig, UniformSampler};

fn asset(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("assets")
        .join(name)
}

#[test]
fn stimulus_file_is_well_formed() {
    let stimuli = StimulusSet::from_path(asset("stimuli.json")).unwrap();
    stimuli.validate().unwrap();

    assert_eq!(stimuli.images.len(), 96);
    assert_eq!(stimuli.validation_trials.len(), 50);
    let unique: HashSet<_> = stimuli.images.iter().collect();
    assert_eq!(unique.len(), stimuli.images.len());

    for image in &stimuli.images {
        assert!(image.as_str().starts_with("assets/stimuli/"));
        assert!(image.as_str().ends_with(".png"));
    }
    for tag in ["urban_", "rural_", "_day_", "_eve_"] {
        assert!(stimuli.images.iter().any(|img| img.as_str().contains(tag)));
    }
    assert!(
        stimuli
            .validation_trials
            .iter()
            .all(|t| t.kind == TrialKind::Validation)
    );
}

#[test]
fn shipped_config_matches_defaults() {
    let config = SequenceConfig::from_path(asset("config.json")).unwrap();
    assert_eq!(config, SequenceConfig::default());
}

#[test]
fn shipped_setup_builds_a_full_session() {
    let config = SequenceConfig::from_path(asset("config.json")).unwrap();
    let stimuli = StimulusSet::from_path(asset("stimuli.json")).unwrap();
    let builder = SequenceBuilder::new(&config, stimuli).unwrap();

    let mut sampler = UniformSampler::new(StdRng::seed_from_u64(2024));
    let mut rng = StdRng::seed_from_u64(2025);
    let trials = builder.build(&mut sampler, &mut rng).unwrap();

    assert_eq!(Some(trials.len()), config.main_trials);
    assert_eq!(TrialCounts::tally(&trials), TrialCounts::new(550, 20, 50));
    for trial in &trials {
        trial.check_invariants().unwrap();
    }
}
