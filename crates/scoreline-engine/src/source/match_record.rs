use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Sample, Scoreline};

/// Identifies a match in the stats provider's catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchRef {
    pub match_id: u64,
    pub competition_id: u32,
    pub season_id: u32,
}

/// Statistics of one match, as stored in the match cache.
///
/// Every statistic is a `[home, away]` pair and may be missing. Expected goals
/// are summed per team; possession is a share in `0.0..=1.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub home_team: String,
    pub away_team: String,
    pub home_goals: u32,
    pub away_goals: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_shots: Option<[u32; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_target_shots: Option<[u32; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shots_xg: Option<[f64; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub possession: Option<[f64; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub competition: Option<String>,
}

impl MatchRecord {
    #[must_use]
    pub fn score(&self) -> Scoreline {
        Scoreline::new(self.home_goals, self.away_goals)
    }

    /// Formats the record into a quiz sample.
    ///
    /// Visible facts are listed in a fixed order (total shots, shots on target,
    /// expected goals, possession), skipping missing statistics. Hidden facts are
    /// the fixture, then the date and competition when known.
    #[must_use]
    pub fn to_sample(&self) -> Sample {
        let mut visible = vec![];
        if let Some([home, away]) = self.total_shots {
            visible.push(format!("Total shots: {home} - {away}"));
        }
        if let Some([home, away]) = self.on_target_shots {
            visible.push(format!("On target shots: {home} - {away}"));
        }
        if let Some([home, away]) = self.shots_xg {
            visible.push(format!("Shots xG: {home:.3} - {away:.3}"));
        }
        if let Some([home, away]) = self.possession {
            visible.push(format!(
                "Possession: {:.1}% - {:.1}%",
                home * 100.0,
                away * 100.0
            ));
        }

        let mut hidden = vec![format!("{} - {}", self.home_team, self.away_team)];
        if let Some(date) = self.date {
            hidden.push(date.format("%Y-%m-%d").to_string());
        }
        if let Some(competition) = &self.competition {
            hidden.push(competition.clone());
        }

        Sample::new(self.score(), visible, hidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_record() -> MatchRecord {
        MatchRecord {
            home_team: "Arsenal".to_owned(),
            away_team: "Chelsea".to_owned(),
            home_goals: 2,
            away_goals: 1,
            total_shots: Some([14, 9]),
            on_target_shots: Some([6, 3]),
            shots_xg: Some([1.8234, 0.9]),
            possession: Some([0.5731, 0.4269]),
            date: NaiveDate::from_ymd_opt(2019, 3, 9),
            competition: Some("Premier League".to_owned()),
        }
    }

    #[test]
    fn test_full_record_formatting() {
        let sample = full_record().to_sample();
        assert_eq!(sample.ground_truth(), Scoreline::new(2, 1));
        assert_eq!(
            sample.visible_facts(),
            [
                "Total shots: 14 - 9",
                "On target shots: 6 - 3",
                "Shots xG: 1.823 - 0.900",
                "Possession: 57.3% - 42.7%",
            ]
        );
        assert_eq!(
            sample.hidden_facts(),
            ["Arsenal - Chelsea", "2019-03-09", "Premier League"]
        );
    }

    #[test]
    fn test_missing_statistics_are_skipped() {
        let record = MatchRecord {
            total_shots: None,
            shots_xg: None,
            date: None,
            ..full_record()
        };
        let sample = record.to_sample();
        assert_eq!(
            sample.visible_facts(),
            ["On target shots: 6 - 3", "Possession: 57.3% - 42.7%"]
        );
        assert_eq!(sample.hidden_facts(), ["Arsenal - Chelsea", "Premier League"]);
    }

    #[test]
    fn test_deserialize_minimal_record() {
        let json = r#"{"home_team":"A","away_team":"B","home_goals":0,"away_goals":3}"#;
        let record: MatchRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.score(), Scoreline::new(0, 3));
        let sample = record.to_sample();
        assert!(sample.visible_facts().is_empty());
        assert_eq!(sample.hidden_facts(), ["A - B"]);
    }

    #[test]
    fn test_date_is_iso_formatted_in_json() {
        let json = serde_json::to_value(full_record()).unwrap();
        assert_eq!(json["date"], "2019-03-09");
        assert!(json.get("unknown").is_none());
    }
}
