use crate::{
    GameError, Operation, RoundScore, Sample, SampleSource, Scoreline, compute_score,
};

use super::{GameConfig, GameStats, MAX_GOALS, Session};

/// Disposition of a [`GameSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum SessionState {
    #[display("no game has been started")]
    NotStarted,
    #[display("waiting for a prediction")]
    AwaitingPrediction,
    #[display("showing the round result")]
    AwaitingNext,
    #[display("the game is finished")]
    Finished,
}

/// A quiz game driven by one player, pulling samples from `S`.
///
/// ```text
/// NotStarted ──start_game──▶ AwaitingPrediction ──submit_prediction──▶ AwaitingNext
///                                  ▲                    │                   │
///                                  └──────advance───────┼───────────────────┘
///                                                       ▼ (last round)
///                                  start_game ◀──── Finished
/// ```
///
/// Operations either complete or leave the session untouched.
#[derive(Debug)]
pub struct GameSession<S> {
    config: GameConfig,
    session: Session,
    source: S,
}

impl<S> GameSession<S>
where
    S: SampleSource,
{
    #[must_use]
    pub fn new(config: GameConfig, source: S) -> Self {
        Self {
            config,
            session: Session::new(),
            source,
        }
    }

    /// Starts a new game, keeping the best score of earlier games.
    ///
    /// Valid in every state. If the first sample cannot be pulled the session is unchanged.
    pub fn start_game(&mut self) -> Result<(), GameError> {
        let sample = self
            .source
            .next_sample()
            .map_err(GameError::DataUnavailable)?;
        self.session.begin_game(sample);
        log::info!(
            "game started ({} rounds, best score {})",
            self.config.max_rounds(),
            self.session.best_score()
        );
        Ok(())
    }

    /// Scores a prediction for the current sample.
    ///
    /// Only valid while [`SessionState::AwaitingPrediction`].
    pub fn submit_prediction(&mut self, home: u32, away: u32) -> Result<RoundScore, GameError> {
        let truth = self.require(Operation::SubmitPrediction, SessionState::AwaitingPrediction)?;
        let prediction = Scoreline::new(home, away);
        if home > MAX_GOALS || away > MAX_GOALS {
            return Err(GameError::Validation { prediction });
        }

        let score = compute_score(truth, prediction);
        self.session
            .record_round(prediction, score, self.config.max_rounds());
        log::debug!(
            "round {}/{}: predicted {prediction}, actual {truth}, {score} points",
            self.round_index(),
            self.max_rounds()
        );
        if self.session.is_finished() {
            log::info!(
                "game finished with {} points (best {})",
                self.total_score(),
                self.best_score()
            );
        }
        Ok(score)
    }

    /// Pulls the sample for the next round.
    ///
    /// Only valid while [`SessionState::AwaitingNext`]. If the sample cannot be pulled the
    /// session stays on the current result.
    pub fn advance(&mut self) -> Result<(), GameError> {
        self.require(Operation::Advance, SessionState::AwaitingNext)?;
        let sample = self
            .source
            .next_sample()
            .map_err(GameError::DataUnavailable)?;
        self.session.next_round(sample);
        Ok(())
    }

    fn require(
        &self,
        operation: Operation,
        expected: SessionState,
    ) -> Result<Scoreline, GameError> {
        let state = self.state();
        let invalid = || GameError::InvalidState { operation, state };
        if state != expected {
            return Err(invalid());
        }
        self.session
            .current_sample()
            .map(Sample::ground_truth)
            .ok_or_else(invalid)
    }
}

impl<S> GameSession<S> {
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        self.session.stats()
    }

    /// Facts shown before the prediction (empty before the first game).
    #[must_use]
    pub fn visible_facts(&self) -> &[String] {
        self.session
            .current_sample()
            .map(Sample::visible_facts)
            .unwrap_or_default()
    }

    /// Facts revealed after the prediction (empty before the first game).
    #[must_use]
    pub fn hidden_facts(&self) -> &[String] {
        self.session
            .current_sample()
            .map(Sample::hidden_facts)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn ground_truth(&self) -> Option<Scoreline> {
        self.session.current_sample().map(Sample::ground_truth)
    }

    #[must_use]
    pub fn prediction(&self) -> Option<Scoreline> {
        self.session.prediction()
    }

    #[must_use]
    pub fn current_round_score(&self) -> RoundScore {
        self.stats().current_round_score()
    }

    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.stats().total_score()
    }

    #[must_use]
    pub fn best_score(&self) -> u32 {
        self.session.best_score()
    }

    #[must_use]
    pub fn round_index(&self) -> usize {
        self.stats().round_index()
    }

    #[must_use]
    pub fn round_scores(&self) -> &[RoundScore] {
        self.stats().round_scores()
    }

    #[must_use]
    pub fn max_rounds(&self) -> usize {
        self.config.max_rounds()
    }
}
