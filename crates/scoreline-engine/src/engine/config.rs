/// Largest goal count accepted for either side of a prediction.
pub const MAX_GOALS: u32 = 999;

/// Number of rounds in a game unless configured otherwise.
pub const DEFAULT_MAX_ROUNDS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    max_rounds: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ROUNDS)
    }
}

impl GameConfig {
    /// Creates a configuration with the given number of rounds per game.
    ///
    /// A round count of zero is raised to one.
    #[must_use]
    pub const fn new(max_rounds: usize) -> Self {
        let max_rounds = if max_rounds == 0 { 1 } else { max_rounds };
        Self { max_rounds }
    }

    #[must_use]
    pub const fn max_rounds(&self) -> usize {
        self.max_rounds
    }
}
