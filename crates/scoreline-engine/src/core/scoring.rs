use super::Scoreline;

/// Points awarded for a single round, always in `0..=3`.
///
/// # Scoring
///
/// - 0 points if the predicted outcome (home win, draw, away win) is wrong
/// - 1 point for the correct outcome
/// - +1 point if the home goals match exactly
/// - +1 point if the away goals match exactly
///
/// There is no partial credit for near misses.
///
/// # Example
///
/// ```
/// use scoreline_engine::{Scoreline, compute_score};
///
/// let truth = Scoreline::new(2, 1);
/// assert_eq!(compute_score(truth, Scoreline::new(2, 1)).points(), 3);
/// assert_eq!(compute_score(truth, Scoreline::new(1, 0)).points(), 1);
/// assert_eq!(compute_score(truth, Scoreline::new(1, 2)).points(), 0);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    serde::Serialize,
    derive_more::Display,
)]
#[display("{_0}")]
pub struct RoundScore(u8);

impl RoundScore {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(3);

    #[must_use]
    pub fn points(self) -> u32 {
        u32::from(self.0)
    }

    #[must_use]
    pub const fn grade(self) -> Grade {
        match self.0 {
            0 => Grade::Miss,
            1 => Grade::Outcome,
            2 => Grade::Close,
            _ => Grade::Exact,
        }
    }
}

/// Qualitative label for a [`RoundScore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum Grade {
    #[display("wrong outcome")]
    Miss,
    #[display("right outcome")]
    Outcome,
    #[display("one side exact")]
    Close,
    #[display("exact score")]
    Exact,
}

/// Scores a prediction against the real final score.
#[must_use]
pub fn compute_score(truth: Scoreline, prediction: Scoreline) -> RoundScore {
    if truth.outcome() != prediction.outcome() {
        return RoundScore::ZERO;
    }
    let mut points = 1;
    if truth.home == prediction.home {
        points += 1;
    }
    if truth.away == prediction.away {
        points += 1;
    }
    RoundScore(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(truth: (u32, u32), prediction: (u32, u32)) -> u32 {
        compute_score(truth.into(), prediction.into()).points()
    }

    #[test]
    fn test_exact_prediction_scores_max() {
        assert_eq!(score((2, 1), (2, 1)), 3);
        assert_eq!(score((0, 0), (0, 0)), 3);
    }

    #[test]
    fn test_right_outcome_without_exact_goals() {
        assert_eq!(score((2, 1), (1, 0)), 1);
        assert_eq!(score((1, 1), (0, 0)), 1);
        assert_eq!(score((0, 3), (1, 2)), 1);
    }

    #[test]
    fn test_one_side_exact() {
        assert_eq!(score((2, 1), (2, 0)), 2);
        assert_eq!(score((3, 1), (2, 1)), 2);
    }

    #[test]
    fn test_wrong_outcome_scores_zero_even_with_matching_side() {
        assert_eq!(score((2, 0), (0, 2)), 0);
        // home goals match but a draw was predicted
        assert_eq!(score((2, 1), (2, 2)), 0);
        assert_eq!(score((1, 1), (1, 0)), 0);
    }

    #[test]
    fn test_grade_labels() {
        assert!(compute_score((2, 0).into(), (0, 2).into()).grade().is_miss());
        assert!(compute_score((2, 0).into(), (1, 0).into()).grade().is_close());
        assert!(compute_score((2, 0).into(), (3, 1).into()).grade().is_outcome());
        assert!(compute_score((2, 0).into(), (2, 0).into()).grade().is_exact());
        assert_eq!(RoundScore::MAX.grade(), Grade::Exact);
    }
}
