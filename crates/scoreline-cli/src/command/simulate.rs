use std::path::PathBuf;

use scoreline_engine::{GameSession, Scoreline, SourceSeed};
use serde::Serialize;

use crate::{command::SourceArg, util::Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SimulateArg {
    #[clap(flatten)]
    source: SourceArg,
    /// Number of games to play
    #[arg(long, default_value_t = 100)]
    games: usize,
    /// Prediction submitted in every round, as HOME-AWAY
    #[arg(long, default_value = "1-1")]
    guess: Scoreline,
    /// Output file path (stdout if omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

impl SimulateArg {
    #[cfg(test)]
    pub(crate) fn source(&self) -> &SourceArg {
        &self.source
    }

    #[cfg(test)]
    pub(crate) fn guess(&self) -> Scoreline {
        self.guess
    }
}

#[derive(Debug, Clone, Serialize)]
struct SimulationSummary {
    games: usize,
    rounds_per_game: usize,
    guess: Scoreline,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<SourceSeed>,
    best_score: u32,
    mean_total: f64,
    /// Number of rounds that earned 0, 1, 2 and 3 points
    points_histogram: [usize; 4],
    totals: Vec<u32>,
}

pub(crate) fn run(arg: &SimulateArg) -> anyhow::Result<()> {
    let SimulateArg {
        source,
        games,
        guess,
        output,
    } = arg;

    let mut game = GameSession::new(source.config(), source.open_source()?);
    let mut totals = Vec::with_capacity(*games);
    let mut points_histogram = [0; 4];

    for i in 0..*games {
        game.start_game()?;
        loop {
            let score = game.submit_prediction(guess.home, guess.away)?;
            points_histogram[score.points() as usize] += 1;
            if game.state().is_finished() {
                break;
            }
            game.advance()?;
        }
        log::debug!("game {}/{games}: {} points", i + 1, game.total_score());
        totals.push(game.total_score());
    }

    #[expect(clippy::cast_precision_loss)]
    let mean_total = if totals.is_empty() {
        0.0
    } else {
        f64::from(totals.iter().sum::<u32>()) / totals.len() as f64
    };
    let summary = SimulationSummary {
        games: *games,
        rounds_per_game: game.max_rounds(),
        guess: *guess,
        seed: source.seed(),
        best_score: game.best_score(),
        mean_total,
        points_histogram,
        totals,
    };

    let mut output = Output::from_output_path(output.clone())?;
    output.write_json(&summary)?;
    log::info!("simulation summary written to {}", output.display_path());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts_every_game_and_round() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.json");
        let arg = SimulateArg {
            source: SourceArg {
                seed: Some(SourceSeed::from(42_u128)),
                rounds: 3,
                ..SourceArg::default()
            },
            games: 4,
            guess: Scoreline::new(1, 0),
            output: Some(path.clone()),
        };
        run(&arg).unwrap();

        let summary: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(summary["games"], 4);
        assert_eq!(summary["rounds_per_game"], 3);
        assert_eq!(summary["guess"]["home"], 1);
        assert_eq!(summary["totals"].as_array().unwrap().len(), 4);
        let rounds: u64 = summary["points_histogram"]
            .as_array()
            .unwrap()
            .iter()
            .map(|count| count.as_u64().unwrap())
            .sum();
        assert_eq!(rounds, 4 * 3);
        let best = summary["best_score"].as_u64().unwrap();
        assert!(best <= 3 * 3);
    }

    #[test]
    fn test_same_seed_gives_same_summary() {
        let dir = tempfile::tempdir().unwrap();
        let outputs = ["a.json", "b.json"].map(|name| {
            let path = dir.path().join(name);
            let arg = SimulateArg {
                source: SourceArg {
                    seed: Some(SourceSeed::from(9_u128)),
                    ..SourceArg::default()
                },
                games: 5,
                guess: Scoreline::new(2, 1),
                output: Some(path.clone()),
            };
            run(&arg).unwrap();
            std::fs::read_to_string(path).unwrap()
        });
        assert_eq!(outputs[0], outputs[1]);
    }
}
