use chrono::NaiveDate;
use rand::{Rng, SeedableRng as _};
use rand_pcg::Pcg32;

use crate::{Sample, SampleError};

use super::{MatchRecord, SampleSource, SourceSeed};

const TEAMS: [&str; 12] = [
    "Barcelona",
    "Liverpool",
    "Real Madrid",
    "Bayern Munich",
    "Juventus",
    "Paris Saint-Germain",
    "Manchester City",
    "Inter Milan",
    "Borussia Dortmund",
    "Atletico Madrid",
    "Ajax",
    "Benfica",
];

const COMPETITIONS: [&str; 4] = [
    "Champions League",
    "Europa League",
    "Club Friendly",
    "Super Cup",
];

const MAX_SHOTS: u32 = 19;
const MAX_XG_PER_SHOT: f64 = 0.4;

/// Generates random but internally consistent matches.
///
/// Goals never exceed shots on target, which never exceed total shots, so the
/// visible statistics always carry some signal about the final score.
#[derive(Debug, Clone)]
pub struct SyntheticSource {
    rng: Pcg32,
}

impl Default for SyntheticSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntheticSource {
    /// Creates a source seeded from the thread-local random generator.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed for a reproducible sequence.
    #[must_use]
    pub fn with_seed(seed: SourceSeed) -> Self {
        Self {
            rng: Pcg32::from_seed(seed.to_bytes()),
        }
    }

    /// Generates the statistics of one random match.
    pub fn generate_record(&mut self) -> MatchRecord {
        let rng = &mut self.rng;

        let total_shots = [
            rng.random_range(0..=MAX_SHOTS),
            rng.random_range(0..=MAX_SHOTS),
        ];
        let on_target_shots = total_shots.map(|total| rng.random_range(0..=total));
        let [home_goals, away_goals] =
            on_target_shots.map(|on_target| rng.random_range(0..=on_target));
        let shots_xg = total_shots.map(|total| {
            (0..total)
                .map(|_| rng.random_range(0.0..MAX_XG_PER_SHOT))
                .sum::<f64>()
        });
        let home_possession = rng.random_range(0.3..0.7);

        let home = rng.random_range(0..TEAMS.len());
        let mut away = rng.random_range(0..TEAMS.len() - 1);
        if away >= home {
            away += 1;
        }
        let date = NaiveDate::from_ymd_opt(
            rng.random_range(2000..=2023),
            rng.random_range(1..=12),
            rng.random_range(1..=28),
        );
        let competition = COMPETITIONS[rng.random_range(0..COMPETITIONS.len())];

        MatchRecord {
            home_team: TEAMS[home].to_owned(),
            away_team: TEAMS[away].to_owned(),
            home_goals,
            away_goals,
            total_shots: Some(total_shots),
            on_target_shots: Some(on_target_shots),
            shots_xg: Some(shots_xg),
            possession: Some([home_possession, 1.0 - home_possession]),
            date,
            competition: Some(competition.to_owned()),
        }
    }
}

impl SampleSource for SyntheticSource {
    fn next_sample(&mut self) -> Result<Sample, SampleError> {
        Ok(self.generate_record().to_sample())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_records_are_consistent() {
        let mut source = SyntheticSource::with_seed(SourceSeed::from(11_u128));
        for _ in 0..500 {
            let record = source.generate_record();
            let total = record.total_shots.unwrap();
            let on_target = record.on_target_shots.unwrap();
            let xg = record.shots_xg.unwrap();
            let [home_possession, away_possession] = record.possession.unwrap();

            for side in 0..2 {
                assert!(total[side] <= MAX_SHOTS);
                assert!(on_target[side] <= total[side]);
                assert!(xg[side] >= 0.0);
            }
            assert!(record.home_goals <= on_target[0]);
            assert!(record.away_goals <= on_target[1]);
            assert!((home_possession + away_possession - 1.0).abs() < 1e-9);
            assert_ne!(record.home_team, record.away_team);
            assert!(record.date.is_some());
        }
    }

    #[test]
    fn test_samples_expose_all_statistics() {
        let mut source = SyntheticSource::with_seed(SourceSeed::from(3_u128));
        let sample = source.next_sample().unwrap();
        assert_eq!(sample.visible_facts().len(), 4);
        assert_eq!(sample.hidden_facts().len(), 3);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let seed = SourceSeed::from(99_u128);
        let mut source1 = SyntheticSource::with_seed(seed);
        let mut source2 = SyntheticSource::with_seed(seed);
        for _ in 0..20 {
            assert_eq!(
                source1.next_sample().unwrap(),
                source2.next_sample().unwrap()
            );
        }
    }
}
