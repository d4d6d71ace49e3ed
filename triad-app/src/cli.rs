use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "triad-app")]
#[command(about = "Build one session's triad trial sequence as JSON")]
pub struct Cli {
    #[arg(help = "Sequence config file (JSON)")]
    pub config: PathBuf,
    #[arg(help = "Stimulus set file: image pool and validation trials (JSON)")]
    pub stimuli: PathBuf,
    #[arg(help = "Write the sequence here instead of stdout")]
    pub output: Option<PathBuf>,
    #[arg(long, env = "TRIAD_SEED", help = "Seed for a reproducible sequence")]
    pub seed: Option<u64>,
}
