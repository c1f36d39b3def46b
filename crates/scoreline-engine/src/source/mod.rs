//! Sample sources feeding quiz rounds.
//!
//! - [`SampleSource`] - The single capability the engine needs: produce the next sample
//! - [`SyntheticSource`] - Randomly generated matches
//! - [`CachedMatchSource`] - Real match statistics read from a local cache directory
//! - [`AnySource`] - Runtime choice between the two
//!
//! Every source is infinite: once its pool is exhausted it starts over in a new order.

pub use self::{cached::*, index_pool::*, match_record::*, seed::*, synthetic::*};

use crate::{Sample, SampleError};

mod cached;
mod index_pool;
mod match_record;
mod seed;
mod synthetic;

/// Produces an endless sequence of quiz samples.
pub trait SampleSource {
    /// Returns the sample for the next round.
    ///
    /// Never reports exhaustion; fails only when the underlying data cannot be produced.
    fn next_sample(&mut self) -> Result<Sample, SampleError>;
}

impl<S> SampleSource for &mut S
where
    S: SampleSource + ?Sized,
{
    fn next_sample(&mut self) -> Result<Sample, SampleError> {
        (**self).next_sample()
    }
}

/// Either source kind, selected at runtime.
#[derive(Debug, derive_more::IsVariant)]
pub enum AnySource {
    Synthetic(SyntheticSource),
    Cached(CachedMatchSource),
}

impl SampleSource for AnySource {
    fn next_sample(&mut self) -> Result<Sample, SampleError> {
        match self {
            AnySource::Synthetic(source) => source.next_sample(),
            AnySource::Cached(source) => source.next_sample(),
        }
    }
}
