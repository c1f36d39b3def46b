use crate::{RoundScore, Sample, Scoreline};

use super::{GameStats, SessionState};

/// Field group of a [`Session`] that can survive [`Session::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionField {
    Started,
    Finished,
    AwaitingNext,
    CurrentSample,
    Prediction,
    Stats,
    BestScore,
}

/// All mutable state of one player's quiz session.
///
/// The session outlives individual games:
/// [`GameSession::start_game`](super::GameSession::start_game) resets it while carrying over
/// the best score.
#[derive(Debug, Clone, Default)]
pub struct Session {
    started: bool,
    finished: bool,
    awaiting_next: bool,
    current_sample: Option<Sample>,
    prediction: Option<Scoreline>,
    stats: GameStats,
    best_score: u32,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores every field to its default except those listed in `carry_over`.
    pub fn reset(&mut self, carry_over: &[SessionField]) {
        let defaults = Self::default();
        let keep = |field| carry_over.contains(&field);
        if !keep(SessionField::Started) {
            self.started = defaults.started;
        }
        if !keep(SessionField::Finished) {
            self.finished = defaults.finished;
        }
        if !keep(SessionField::AwaitingNext) {
            self.awaiting_next = defaults.awaiting_next;
        }
        if !keep(SessionField::CurrentSample) {
            self.current_sample = defaults.current_sample;
        }
        if !keep(SessionField::Prediction) {
            self.prediction = defaults.prediction;
        }
        if !keep(SessionField::Stats) {
            self.stats = defaults.stats;
        }
        if !keep(SessionField::BestScore) {
            self.best_score = defaults.best_score;
        }
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        if !self.started {
            SessionState::NotStarted
        } else if self.finished {
            SessionState::Finished
        } else if self.awaiting_next {
            SessionState::AwaitingNext
        } else {
            SessionState::AwaitingPrediction
        }
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub fn is_awaiting_next(&self) -> bool {
        self.awaiting_next
    }

    #[must_use]
    pub fn current_sample(&self) -> Option<&Sample> {
        self.current_sample.as_ref()
    }

    #[must_use]
    pub fn prediction(&self) -> Option<Scoreline> {
        self.prediction
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub(crate) fn begin_game(&mut self, sample: Sample) {
        self.reset(&[SessionField::BestScore]);
        self.started = true;
        self.current_sample = Some(sample);
    }

    pub(crate) fn next_round(&mut self, sample: Sample) {
        self.current_sample = Some(sample);
        self.prediction = None;
        self.awaiting_next = false;
    }

    /// Stores a judged prediction and moves to the result display or the end of the game.
    pub(crate) fn record_round(
        &mut self,
        prediction: Scoreline,
        score: RoundScore,
        max_rounds: usize,
    ) {
        self.prediction = Some(prediction);
        let round_index = self.stats.record_round(score);
        self.best_score = u32::max(self.best_score, self.stats.total_score());
        if round_index < max_rounds {
            self.awaiting_next = true;
        } else {
            self.finished = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(home: u32, away: u32) -> Sample {
        Sample::new(Scoreline::new(home, away), vec![], vec![])
    }

    fn played_session() -> Session {
        let mut session = Session::new();
        session.begin_game(sample(1, 0));
        session.record_round(Scoreline::new(1, 0), RoundScore::MAX, 2);
        session
    }

    #[test]
    fn test_reset_without_carry_over_restores_defaults() {
        let mut session = played_session();
        session.reset(&[]);
        assert_eq!(session.state(), SessionState::NotStarted);
        assert!(session.current_sample().is_none());
        assert!(session.prediction().is_none());
        assert_eq!(session.stats(), &GameStats::new());
        assert_eq!(session.best_score(), 0);
    }

    #[test]
    fn test_reset_keeps_listed_fields() {
        let mut session = played_session();
        session.reset(&[SessionField::BestScore, SessionField::Prediction]);
        assert_eq!(session.best_score(), 3);
        assert_eq!(session.prediction(), Some(Scoreline::new(1, 0)));
        assert_eq!(session.stats().total_score(), 0);
        assert!(!session.is_started());
    }

    #[test]
    fn test_state_follows_flags() {
        let mut session = Session::new();
        assert!(session.state().is_not_started());

        session.begin_game(sample(2, 2));
        assert!(session.state().is_awaiting_prediction());

        session.record_round(Scoreline::new(0, 0), RoundScore::ZERO, 2);
        assert!(session.state().is_awaiting_next());
        assert!(session.is_awaiting_next());

        session.next_round(sample(0, 1));
        assert!(session.state().is_awaiting_prediction());
        assert!(session.prediction().is_none());

        session.record_round(Scoreline::new(0, 1), RoundScore::MAX, 2);
        assert!(session.state().is_finished());
        assert!(!session.is_awaiting_next());
    }

    #[test]
    fn test_begin_game_carries_best_score() {
        let mut session = played_session();
        session.begin_game(sample(0, 0));
        assert_eq!(session.best_score(), 3);
        assert_eq!(session.stats().round_index(), 0);
        assert!(session.state().is_awaiting_prediction());
    }
}
