use std::path::{Path, PathBuf};

use scoreline_engine::GameSession;

use crate::{
    command::{SourceArg, play::app::QuizApp},
    tui::Tui,
};

mod app;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    #[clap(flatten)]
    source: SourceArg,
    /// Show the per-round score list from the start
    #[clap(long)]
    show_rounds: bool,
    /// Write log output to this file (logging is off while playing otherwise)
    #[clap(long)]
    log_file: Option<PathBuf>,
}

impl PlayArg {
    pub(crate) fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    #[cfg(test)]
    pub(crate) fn source(&self) -> &SourceArg {
        &self.source
    }
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        source,
        show_rounds,
        log_file: _,
    } = arg;

    let game = GameSession::new(source.config(), source.open_source()?);
    let mut app = QuizApp::new(game, *show_rounds);
    Tui::new().run(&mut app)?;

    let game = app.into_game();
    if game.best_score() > 0 {
        eprintln!("Best score: {}", game.best_score());
    }
    Ok(())
}
