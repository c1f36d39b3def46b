use rand::{SeedableRng as _, seq::SliceRandom};
use rand_pcg::Pcg32;

use super::SourceSeed;

/// Endless stream of indices into a fixed-size collection.
///
/// Each cycle visits every index exactly once in a shuffled order. When a cycle
/// is exhausted the pool is reshuffled and the next cycle begins, so the stream
/// never ends and cannot be rewound.
///
/// # Example
///
/// ```
/// use scoreline_engine::{ShuffledIndexPool, SourceSeed};
///
/// let mut pool = ShuffledIndexPool::with_seed(3, SourceSeed::from(1_u128));
/// let mut cycle: Vec<_> = (0..3).filter_map(|_| pool.next_index()).collect();
/// cycle.sort_unstable();
/// assert_eq!(cycle, [0, 1, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct ShuffledIndexPool {
    rng: Pcg32,
    order: Vec<usize>,
    cursor: usize,
    cycles: usize,
}

impl ShuffledIndexPool {
    #[must_use]
    pub fn with_seed(len: usize, seed: SourceSeed) -> Self {
        let mut this = Self {
            rng: Pcg32::from_seed(seed.to_bytes()),
            order: (0..len).collect(),
            cursor: 0,
            cycles: 0,
        };
        this.reshuffle();
        this
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns how many times the pool has been shuffled, including the initial shuffle.
    #[must_use]
    pub fn cycles(&self) -> usize {
        self.cycles
    }

    fn reshuffle(&mut self) {
        self.order.shuffle(&mut self.rng);
        self.cursor = 0;
        self.cycles += 1;
    }

    /// Draws the next index, reshuffling first if the current cycle is exhausted.
    ///
    /// Returns `None` only for an empty pool.
    pub fn next_index(&mut self) -> Option<usize> {
        if self.order.is_empty() {
            return None;
        }
        if self.cursor == self.order.len() {
            self.reshuffle();
            log::debug!("index pool reshuffled (cycle {})", self.cycles);
        }
        let index = self.order[self.cursor];
        self.cursor += 1;
        Some(index)
    }
}
