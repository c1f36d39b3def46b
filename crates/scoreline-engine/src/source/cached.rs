use std::{
    fs::{self, File},
    io::{self, BufReader, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use rand::Rng as _;

use crate::{Sample, SampleError};

use super::{MatchRecord, MatchRef, SampleSource, ShuffledIndexPool, SourceSeed};

/// File name of the match index inside a cache directory.
pub const INDEX_FILE: &str = "index.json";

/// Directory of cached match statistics.
///
/// ```text
/// <dir>/index.json        [MatchRef, ...]
/// <dir>/<match_id>.json   MatchRecord
/// ```
#[derive(Debug, Clone)]
pub struct MatchCache {
    dir: PathBuf,
}

impl MatchCache {
    pub fn new<P>(dir: P) -> Self
    where
        P: Into<PathBuf>,
    {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn index_path(&self) -> PathBuf {
        self.dir.join(INDEX_FILE)
    }

    #[must_use]
    pub fn record_path(&self, match_id: u64) -> PathBuf {
        self.dir.join(format!("{match_id}.json"))
    }

    pub fn read_index(&self) -> Result<Vec<MatchRef>, SampleError> {
        read_json(&self.index_path())
    }

    pub fn read_record(&self, match_id: u64) -> Result<MatchRecord, SampleError> {
        read_json(&self.record_path(match_id))
    }

    /// Writes the index, creating the cache directory if needed.
    pub fn write_index(&self, refs: &[MatchRef]) -> Result<(), SampleError> {
        self.create_dir()?;
        write_json(&self.index_path(), refs)
    }

    /// Writes a match record, creating the cache directory if needed.
    pub fn write_record(&self, match_id: u64, record: &MatchRecord) -> Result<(), SampleError> {
        self.create_dir()?;
        write_json(&self.record_path(match_id), record)
    }

    fn create_dir(&self) -> Result<(), SampleError> {
        fs::create_dir_all(&self.dir).map_err(|source| SampleError::Io {
            path: self.dir.clone(),
            source,
        })
    }
}

fn read_json<T>(path: &Path) -> Result<T, SampleError>
where
    T: serde::de::DeserializeOwned,
{
    let io_error = |source| SampleError::Io {
        path: path.to_owned(),
        source,
    };
    let file = File::open(path).map_err(io_error)?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| SampleError::Parse {
        path: path.to_owned(),
        source,
    })
}

fn write_json<T>(path: &Path, value: &T) -> Result<(), SampleError>
where
    T: serde::Serialize + ?Sized,
{
    let io_error = |source| SampleError::Io {
        path: path.to_owned(),
        source,
    };
    let mut writer = BufWriter::new(File::create(path).map_err(io_error)?);
    serde_json::to_writer_pretty(&mut writer, value)
        .map_err(io::Error::from)
        .map_err(io_error)?;
    writeln!(writer).map_err(io_error)?;
    writer.flush().map_err(io_error)
}

/// Reads real match statistics from a [`MatchCache`] in shuffled order.
///
/// The index is loaded once when the source is opened; match records are read
/// lazily, one per sample. After every match has been served the order is
/// reshuffled and the cache is replayed.
#[derive(Debug, Clone)]
pub struct CachedMatchSource {
    cache: MatchCache,
    index: Vec<MatchRef>,
    pool: ShuffledIndexPool,
}

impl CachedMatchSource {
    /// Opens the cache in `dir` with a random shuffle seed.
    pub fn open<P>(dir: P) -> Result<Self, SampleError>
    where
        P: Into<PathBuf>,
    {
        Self::open_with_seed(dir, rand::rng().random())
    }

    /// Like [`Self::open`], but with a specific seed for a reproducible order.
    pub fn open_with_seed<P>(dir: P, seed: SourceSeed) -> Result<Self, SampleError>
    where
        P: Into<PathBuf>,
    {
        let cache = MatchCache::new(dir);
        let index = cache.read_index()?;
        if index.is_empty() {
            return Err(SampleError::EmptyIndex);
        }
        log::info!(
            "opened match cache {} ({} matches)",
            cache.dir().display(),
            index.len()
        );
        let pool = ShuffledIndexPool::with_seed(index.len(), seed);
        Ok(Self { cache, index, pool })
    }

    #[must_use]
    pub fn cache(&self) -> &MatchCache {
        &self.cache
    }

    #[must_use]
    pub fn index(&self) -> &[MatchRef] {
        &self.index
    }
}

impl SampleSource for CachedMatchSource {
    fn next_sample(&mut self) -> Result<Sample, SampleError> {
        let position = self.pool.next_index().ok_or(SampleError::EmptyIndex)?;
        let match_ref = self.index[position];
        log::debug!(
            "loading match {} (competition {}, season {})",
            match_ref.match_id,
            match_ref.competition_id,
            match_ref.season_id
        );
        let record = self.cache.read_record(match_ref.match_id)?;
        Ok(record.to_sample())
    }
}
