use std::{cmp::Ordering, num::ParseIntError, str::FromStr};

use serde::{Deserialize, Serialize};

/// Final score of a match, or a prediction of it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
#[display("{home} - {away}")]
pub struct Scoreline {
    pub home: u32,
    pub away: u32,
}

/// Result of a match from the home side's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum Outcome {
    #[display("away win")]
    AwayWin,
    #[display("draw")]
    Draw,
    #[display("home win")]
    HomeWin,
}

impl Scoreline {
    #[must_use]
    pub const fn new(home: u32, away: u32) -> Self {
        Self { home, away }
    }

    /// Returns the sign of the goal difference as an [`Outcome`].
    #[must_use]
    pub fn outcome(self) -> Outcome {
        match self.home.cmp(&self.away) {
            Ordering::Less => Outcome::AwayWin,
            Ordering::Equal => Outcome::Draw,
            Ordering::Greater => Outcome::HomeWin,
        }
    }
}

impl From<(u32, u32)> for Scoreline {
    fn from((home, away): (u32, u32)) -> Self {
        Self::new(home, away)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseScorelineError {
    #[display("expected `HOME-AWAY`, got `{input}`")]
    MissingSeparator {
        #[error(not(source))]
        input: String,
    },
    #[display("invalid goal count")]
    InvalidGoals(ParseIntError),
}

/// Parses `2-1`, `2 - 1` or `2:1`.
impl FromStr for Scoreline {
    type Err = ParseScorelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((home, away)) = s.split_once(['-', ':']) else {
            return Err(ParseScorelineError::MissingSeparator {
                input: s.to_owned(),
            });
        };
        let home = home
            .trim()
            .parse()
            .map_err(ParseScorelineError::InvalidGoals)?;
        let away = away
            .trim()
            .parse()
            .map_err(ParseScorelineError::InvalidGoals)?;
        Ok(Self::new(home, away))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_follows_goal_difference() {
        assert_eq!(Scoreline::new(2, 1).outcome(), Outcome::HomeWin);
        assert_eq!(Scoreline::new(0, 0).outcome(), Outcome::Draw);
        assert_eq!(Scoreline::new(3, 3).outcome(), Outcome::Draw);
        assert_eq!(Scoreline::new(0, 4).outcome(), Outcome::AwayWin);
    }

    #[test]
    fn test_parse_accepts_common_separators() {
        assert_eq!("2-1".parse::<Scoreline>().unwrap(), Scoreline::new(2, 1));
        assert_eq!(" 0 - 3 ".parse::<Scoreline>().unwrap(), Scoreline::new(0, 3));
        assert_eq!("10:2".parse::<Scoreline>().unwrap(), Scoreline::new(10, 2));
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!(matches!(
            "21".parse::<Scoreline>(),
            Err(ParseScorelineError::MissingSeparator { .. })
        ));
        assert!(matches!(
            "a-1".parse::<Scoreline>(),
            Err(ParseScorelineError::InvalidGoals(_))
        ));
        assert!(matches!(
            "-1-0".parse::<Scoreline>(),
            Err(ParseScorelineError::InvalidGoals(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(Scoreline::new(4, 0).to_string(), "4 - 0");
    }
}
