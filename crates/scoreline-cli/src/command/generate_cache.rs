use std::path::PathBuf;

use anyhow::Context as _;
use scoreline_engine::{MatchCache, MatchRef, SourceSeed, SyntheticSource};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct GenerateCacheArg {
    /// Match cache directory to write into
    #[arg(long, default_value = "./data/")]
    data_dir: PathBuf,
    /// Number of matches to generate
    #[arg(long, default_value_t = 200)]
    count: u64,
    /// Match id of the first generated match
    #[arg(long, default_value_t = 1)]
    first_id: u64,
    /// Seed for reproducible matches (32 hex characters)
    #[arg(long)]
    seed: Option<SourceSeed>,
}

pub(crate) fn run(arg: &GenerateCacheArg) -> anyhow::Result<()> {
    let GenerateCacheArg {
        data_dir,
        count,
        first_id,
        seed,
    } = arg;

    let cache = MatchCache::new(data_dir);
    let mut source = seed.map_or_else(SyntheticSource::new, SyntheticSource::with_seed);
    let mut index = vec![];

    for match_id in *first_id..first_id.saturating_add(*count) {
        let record = source.generate_record();
        cache
            .write_record(match_id, &record)
            .with_context(|| format!("Failed to write match {match_id}"))?;
        index.push(MatchRef {
            match_id,
            competition_id: 0,
            season_id: 0,
        });
    }
    cache.write_index(&index).with_context(|| {
        format!(
            "Failed to write match index: {}",
            cache.index_path().display()
        )
    })?;

    eprintln!("Wrote {} matches to {}", index.len(), cache.dir().display());
    Ok(())
}
