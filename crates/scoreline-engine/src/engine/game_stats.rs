use crate::RoundScore;

/// Round counter and scores of the game in progress.
///
/// - **Round index**: rounds completed so far
/// - **Current round score**: points of the most recently judged round
/// - **Total score**: sum of all round scores
/// - **Round scores**: history of every judged round, oldest first
///
/// # Example
///
/// ```
/// use scoreline_engine::{GameStats, Scoreline, compute_score};
///
/// let mut stats = GameStats::new();
/// stats.record_round(compute_score(Scoreline::new(2, 1), Scoreline::new(2, 1)));
/// stats.record_round(compute_score(Scoreline::new(0, 0), Scoreline::new(1, 1)));
///
/// assert_eq!(stats.round_index(), 2);
/// assert_eq!(stats.total_score(), 4);
/// assert_eq!(stats.current_round_score().points(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameStats {
    current_round_score: RoundScore,
    total_score: u32,
    round_scores: Vec<RoundScore>,
}

impl GameStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current_round_score: RoundScore::ZERO,
            total_score: 0,
            round_scores: Vec::new(),
        }
    }

    /// Returns the number of rounds judged in this game.
    #[must_use]
    pub fn round_index(&self) -> usize {
        self.round_scores.len()
    }

    #[must_use]
    pub const fn current_round_score(&self) -> RoundScore {
        self.current_round_score
    }

    #[must_use]
    pub const fn total_score(&self) -> u32 {
        self.total_score
    }

    #[must_use]
    pub fn round_scores(&self) -> &[RoundScore] {
        &self.round_scores
    }

    /// Appends a judged round and returns the new round index.
    pub fn record_round(&mut self, score: RoundScore) -> usize {
        self.round_scores.push(score);
        self.current_round_score = score;
        self.total_score += score.points();
        self.round_scores.len()
    }
}
