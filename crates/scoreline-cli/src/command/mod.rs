use std::{fs::File, path::PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use scoreline_engine::{
    AnySource, CachedMatchSource, DEFAULT_MAX_ROUNDS, GameConfig, SourceSeed, SyntheticSource,
};

use self::{generate_cache::GenerateCacheArg, play::PlayArg, simulate::SimulateArg};

mod generate_cache;
mod play;
mod simulate;

#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Guess the final score from match statistics",
    long_about = None
)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play the quiz in the terminal
    Play(#[clap(flatten)] PlayArg),
    /// Play games headlessly with a fixed guess and report the scores
    Simulate(#[clap(flatten)] SimulateArg),
    /// Write synthetic match records into a match cache directory
    GenerateCache(#[clap(flatten)] GenerateCacheArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    let mode = args.mode.unwrap_or_else(|| Mode::Play(PlayArg::default()));
    logger_builder(&mode)?.init();
    match mode {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::Simulate(arg) => simulate::run(&arg)?,
        Mode::GenerateCache(arg) => generate_cache::run(&arg)?,
    }
    Ok(())
}

/// Logs go to stderr, except in play mode where stderr sits under the terminal UI.
fn logger_builder(mode: &Mode) -> anyhow::Result<env_logger::Builder> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Mode::Play(arg) = mode {
        match arg.log_file() {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create log file: {}", path.display()))?;
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            None => {
                builder.filter_level(log::LevelFilter::Off);
            }
        }
    }
    Ok(builder)
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SourceKind {
    /// Randomly generated matches
    #[default]
    Synthetic,
    /// Real matches from the match cache directory
    Cache,
}

/// Options shared by every command that plays games.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SourceArg {
    /// Where quiz samples come from
    #[arg(long, value_enum, default_value = "synthetic")]
    source: SourceKind,
    /// Match cache directory, used with `--source cache`
    #[arg(long, default_value = "./data/")]
    data_dir: PathBuf,
    /// Seed for reproducible samples (32 hex characters)
    #[arg(long)]
    seed: Option<SourceSeed>,
    /// Number of rounds per game
    #[arg(long, default_value_t = DEFAULT_MAX_ROUNDS)]
    rounds: usize,
}

impl Default for SourceArg {
    fn default() -> Self {
        Self {
            source: SourceKind::default(),
            data_dir: PathBuf::from("./data/"),
            seed: None,
            rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}

impl SourceArg {
    pub(crate) fn config(&self) -> GameConfig {
        GameConfig::new(self.rounds)
    }

    pub(crate) fn seed(&self) -> Option<SourceSeed> {
        self.seed
    }

    pub(crate) fn open_source(&self) -> anyhow::Result<AnySource> {
        let source = match self.source {
            SourceKind::Synthetic => {
                let source = self
                    .seed
                    .map_or_else(SyntheticSource::new, SyntheticSource::with_seed);
                AnySource::Synthetic(source)
            }
            SourceKind::Cache => {
                let source = match self.seed {
                    Some(seed) => CachedMatchSource::open_with_seed(&self.data_dir, seed),
                    None => CachedMatchSource::open(&self.data_dir),
                }
                .with_context(|| {
                    format!("Failed to open match cache: {}", self.data_dir.display())
                })?;
                AnySource::Cached(source)
            }
        };
        Ok(source)
    }
}
