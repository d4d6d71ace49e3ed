use crate::cli::Cli;
use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use triad_core::{StimulusSet, Trial, TrialCounts};
use triad_experiment::{SequenceBuilder, SequenceConfig, UniformSampler};

/// Logs go to stderr so stdout carries only the sequence JSON.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();
}

pub struct App {
    builder: SequenceBuilder,
    output: Option<PathBuf>,
    seed: Option<u64>,
}

impl App {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let config = SequenceConfig::from_path(&cli.config)
            .with_context(|| format!("loading config from {}", cli.config.display()))?;
        let stimuli = StimulusSet::from_path(&cli.stimuli)
            .with_context(|| format!("loading stimuli from {}", cli.stimuli.display()))?;
        info!(
            images = stimuli.images.len(),
            validation_trials = stimuli.validation_trials.len(),
            "loaded stimuli"
        );

        let builder = SequenceBuilder::new(&config, stimuli)
            .context("experiment configuration does not fit the stimulus set")?;

        Ok(Self {
            builder,
            output: cli.output,
            seed: cli.seed,
        })
    }

    pub fn run(&self) -> Result<()> {
        let trials = self.generate()?;
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("creating {}", path.display()))?;
                write_sequence(BufWriter::new(file), &trials)?;
                info!(path = %path.display(), "sequence written");
            }
            None => write_sequence(std::io::stdout().lock(), &trials)?,
        }
        Ok(())
    }

    /// Builds one session's sequence. A seed makes the output reproducible.
    pub fn generate(&self) -> Result<Vec<Trial>> {
        let (sampler_rng, mut shuffle_rng) = match self.seed {
            Some(seed) => (
                StdRng::seed_from_u64(seed),
                StdRng::seed_from_u64(seed.wrapping_add(1)),
            ),
            None => (StdRng::from_os_rng(), StdRng::from_os_rng()),
        };
        let mut sampler = UniformSampler::new(sampler_rng);

        let trials = self.builder.build(&mut sampler, &mut shuffle_rng)?;
        info!(
            total = trials.len(),
            composition = %TrialCounts::tally(&trials),
            seed = ?self.seed,
            "trial sequence ready"
        );
        Ok(trials)
    }
}

fn write_sequence<W: Write>(mut writer: W, trials: &[Trial]) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, trials)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
